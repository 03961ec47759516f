use crate::runtime::effect::Effect;
use crate::runtime::event::{AppEvent, SystemEvent, WidgetAction};
use crate::runtime::intent::Intent;
use crate::runtime::scheduler::SchedulerCommand;
use crate::state::AppState;
use crate::widgets::traits::InteractionResult;

const BANNER_KEY: &str = "banner";

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Exit => {
                state.request_exit();
                vec![Effect::RequestRender]
            }
            Intent::Submit => submit(state),
            Intent::NextFocus => {
                state.focus_next();
                vec![Effect::RequestRender]
            }
            Intent::PrevFocus => {
                state.focus_prev();
                vec![Effect::RequestRender]
            }
            Intent::InputKey(key) => collect_effects(state.dispatch_key_to_focused(key)),
            Intent::TextAction(action) => {
                collect_effects(state.dispatch_text_action_to_focused(action))
            }
            Intent::Tick => vec![],
        }
    }

    pub fn reduce_action(state: &mut AppState, action: WidgetAction) -> Vec<Effect> {
        match action {
            WidgetAction::ValueChanged { change } => {
                if state.apply_value_change(change) {
                    vec![Effect::RequestRender]
                } else {
                    vec![]
                }
            }
            WidgetAction::InputDone => {
                state.focus_next();
                vec![Effect::RequestRender]
            }
            WidgetAction::SubmitRequested => submit(state),
        }
    }

    pub fn reduce_system(state: &mut AppState, event: SystemEvent) -> Vec<Effect> {
        match event {
            SystemEvent::SubmissionFinished { completion } => {
                if !state.submission_finished(completion) {
                    return vec![];
                }
                let mut effects = vec![Effect::RequestRender];
                if state.banner().is_some() {
                    effects.push(Effect::Schedule(SchedulerCommand::Debounce {
                        key: BANNER_KEY.to_string(),
                        delay: state.banner_ttl(),
                        event: AppEvent::System(SystemEvent::ClearBanner),
                    }));
                }
                effects
            }
            SystemEvent::ClearBanner => {
                if state.clear_banner() {
                    vec![Effect::RequestRender]
                } else {
                    vec![]
                }
            }
        }
    }
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    let Some(request) = state.submit() else {
        return vec![];
    };
    vec![
        Effect::Schedule(SchedulerCommand::Cancel {
            key: BANNER_KEY.to_string(),
        }),
        Effect::Submit(request),
        Effect::RequestRender,
    ]
}

fn collect_effects(result: InteractionResult) -> Vec<Effect> {
    let mut effects: Vec<Effect> = result.actions.into_iter().map(Effect::Action).collect();
    if result.request_render {
        effects.push(Effect::RequestRender);
    }
    effects
}
