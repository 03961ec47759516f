use crate::client::SubmissionClient;
use crate::client::executor::SubmissionExecutor;
use crate::runtime::effect::Effect;
use crate::runtime::event::{AppEvent, SystemEvent};
use crate::runtime::intent::Intent;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::runtime::scheduler::Scheduler;
use crate::state::AppState;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(120);

pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    scheduler: Scheduler,
    key_bindings: KeyBindings,
    executor: SubmissionExecutor,
}

impl Runtime {
    pub fn new(state: AppState, terminal: Terminal, client: Arc<dyn SubmissionClient>) -> Self {
        Self {
            state,
            terminal,
            scheduler: Scheduler::new(),
            key_bindings: KeyBindings::new(),
            executor: SubmissionExecutor::new(client),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.state.should_exit() {
                self.process_completions()?;
                self.process_scheduled_events()?;

                let now = Instant::now();
                let timeout = self.scheduler.poll_timeout(now, POLL_INTERVAL);
                let event = self.terminal.poll_event(timeout)?;

                self.dispatch_app_event(AppEvent::Terminal(event))?;
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn process_completions(&mut self) -> io::Result<()> {
        for completion in self.executor.drain_ready() {
            self.dispatch_app_event(AppEvent::System(SystemEvent::SubmissionFinished {
                completion,
            }))?;
        }
        Ok(())
    }

    fn process_scheduled_events(&mut self) -> io::Result<()> {
        for event in self.scheduler.drain_ready(Instant::now()) {
            self.dispatch_app_event(event)?;
        }
        Ok(())
    }

    fn dispatch_app_event(&mut self, event: AppEvent) -> io::Result<()> {
        let effects = match event {
            AppEvent::Terminal(TerminalEvent::Resize(size)) => {
                self.terminal.set_size(size);
                vec![Effect::RequestRender]
            }
            AppEvent::Terminal(TerminalEvent::Key(key)) => {
                let intent = self
                    .key_bindings
                    .resolve(key)
                    .unwrap_or(Intent::InputKey(key));
                Reducer::reduce(&mut self.state, intent)
            }
            AppEvent::Terminal(TerminalEvent::Tick) => Reducer::reduce(&mut self.state, Intent::Tick),
            AppEvent::System(event) => Reducer::reduce_system(&mut self.state, event),
        };
        self.apply_effects(effects)
    }

    /// Resolves effects breadth-first until none remain, so an event is fully
    /// applied before the next one is read.
    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut queue: VecDeque<Effect> = effects.into();
        let mut render_requested = false;

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Action(action) => {
                    queue.extend(Reducer::reduce_action(&mut self.state, action));
                }
                Effect::Submit(request) => {
                    self.executor.spawn(request);
                }
                Effect::Schedule(cmd) => {
                    self.scheduler.schedule(cmd, Instant::now());
                }
                Effect::RequestRender => {
                    render_requested = true;
                }
            }
        }

        if render_requested {
            self.render()?;
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = Renderer::render(&self.state, self.terminal.size());
        self.terminal.render(&frame)
    }
}
