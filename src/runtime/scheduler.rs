use crate::runtime::event::AppEvent;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum SchedulerCommand {
    /// Emits `event` after `delay`, replacing any pending emit under `key`.
    Debounce {
        key: String,
        delay: Duration,
        event: AppEvent,
    },
    Cancel {
        key: String,
    },
}

#[derive(Debug, Clone)]
struct DelayedTask {
    due_at: Instant,
    key: String,
    version: u64,
    event: AppEvent,
}

#[derive(Default)]
pub struct Scheduler {
    delayed: Vec<DelayedTask>,
    key_versions: HashMap<String, u64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::Debounce { key, delay, event } => {
                let version = self.bump_version(&key);
                self.delayed.push(DelayedTask {
                    due_at: now + delay,
                    key,
                    version,
                    event,
                });
            }
            SchedulerCommand::Cancel { key } => {
                self.bump_version(&key);
            }
        }
    }

    /// Removes due tasks and returns the events of those still current.
    pub fn drain_ready(&mut self, now: Instant) -> Vec<AppEvent> {
        let mut ready = Vec::new();
        let mut idx = 0usize;
        while idx < self.delayed.len() {
            if self.delayed[idx].due_at <= now {
                let task = self.delayed.swap_remove(idx);
                if self.task_is_current(&task) {
                    ready.push(task.event);
                }
            } else {
                idx += 1;
            }
        }
        ready
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.delayed
            .iter()
            .map(|task| task.due_at.saturating_duration_since(now))
            .fold(default_timeout, Duration::min)
    }

    fn task_is_current(&self, task: &DelayedTask) -> bool {
        self.key_versions.get(&task.key).copied().unwrap_or(0) == task.version
    }

    fn bump_version(&mut self, key: &str) -> u64 {
        let entry = self.key_versions.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }
}

#[cfg(test)]
mod tests {
    use super::{Scheduler, SchedulerCommand};
    use crate::runtime::event::{AppEvent, SystemEvent};
    use std::time::{Duration, Instant};

    fn clear_banner_after(delay: Duration) -> SchedulerCommand {
        SchedulerCommand::Debounce {
            key: "banner".into(),
            delay,
            event: AppEvent::System(SystemEvent::ClearBanner),
        }
    }

    #[test]
    fn debounced_event_fires_once_due() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        scheduler.schedule(clear_banner_after(Duration::from_secs(5)), now);

        assert!(scheduler.drain_ready(now).is_empty());
        assert_eq!(
            scheduler.poll_timeout(now, Duration::from_secs(60)),
            Duration::from_secs(5)
        );

        let fired = scheduler.drain_ready(now + Duration::from_secs(5));
        assert!(matches!(
            fired.as_slice(),
            [AppEvent::System(SystemEvent::ClearBanner)]
        ));
    }

    #[test]
    fn rescheduling_replaces_the_pending_event() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        scheduler.schedule(clear_banner_after(Duration::from_secs(1)), now);
        scheduler.schedule(clear_banner_after(Duration::from_secs(3)), now);

        assert!(scheduler.drain_ready(now + Duration::from_secs(2)).is_empty());
        assert_eq!(scheduler.drain_ready(now + Duration::from_secs(3)).len(), 1);
    }

    #[test]
    fn cancel_drops_pending_event() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        scheduler.schedule(clear_banner_after(Duration::from_secs(1)), now);
        scheduler.schedule(
            SchedulerCommand::Cancel {
                key: "banner".into(),
            },
            now,
        );

        assert!(scheduler.drain_ready(now + Duration::from_secs(10)).is_empty());
    }
}
