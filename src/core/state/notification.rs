use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, msg::notification::NotificationMsg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotificationLevel {
    #[default]
    Info,
    Error,
}

/// A transient message shown in the toast line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Toast state.
///
/// Every `Show` bumps `generation` and schedules a dismiss for that generation.
/// An expiry for an older generation is ignored, so showing a new toast
/// before the previous one hides restarts the timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationState {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn update(&mut self, msg: NotificationMsg, duration_ms: u64) -> Vec<Cmd> {
        match msg {
            NotificationMsg::Show(notification) => {
                self.generation += 1;
                self.current = Some(notification);
                vec![Cmd::ScheduleToastDismiss {
                    generation: self.generation,
                    after_ms: duration_ms,
                }]
            }
            NotificationMsg::Expired { generation } => {
                if generation == self.generation {
                    self.current = None;
                } else {
                    log::debug!(
                        "Ignoring expiry of toast generation {generation} (current {})",
                        self.generation
                    );
                }
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_show_schedules_dismiss() {
        let mut state = NotificationState::default();

        let cmds = state.update(NotificationMsg::Show(Notification::info("Saved")), 3000);

        assert_eq!(state.current(), Some(&Notification::info("Saved")));
        assert_eq!(
            cmds,
            vec![Cmd::ScheduleToastDismiss {
                generation: 1,
                after_ms: 3000
            }]
        );
    }

    #[test]
    fn test_expiry_hides_current_toast() {
        let mut state = NotificationState::default();
        state.update(NotificationMsg::Show(Notification::info("Saved")), 3000);

        let cmds = state.update(NotificationMsg::Expired { generation: 1 }, 3000);

        assert!(cmds.is_empty());
        assert!(state.current().is_none());
    }

    #[test]
    fn test_reshow_restarts_timer_and_replaces_message() {
        let mut state = NotificationState::default();
        state.update(NotificationMsg::Show(Notification::info("first")), 3000);
        let cmds = state.update(NotificationMsg::Show(Notification::error("second")), 3000);

        assert_eq!(
            cmds,
            vec![Cmd::ScheduleToastDismiss {
                generation: 2,
                after_ms: 3000
            }]
        );

        // the first timer fires but must not hide the second toast
        state.update(NotificationMsg::Expired { generation: 1 }, 3000);
        assert_eq!(state.current(), Some(&Notification::error("second")));

        state.update(NotificationMsg::Expired { generation: 2 }, 3000);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_repeated_expiry_is_harmless() {
        let mut state = NotificationState::default();
        state.update(NotificationMsg::Show(Notification::info("x")), 10);
        state.update(NotificationMsg::Expired { generation: 1 }, 10);
        state.update(NotificationMsg::Expired { generation: 1 }, 10);

        assert!(state.current().is_none());
        assert_eq!(state.generation(), 1);
    }
}
