use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            form::FormMsg, notification::NotificationMsg, profile::ProfileMsg, system::SystemMsg,
            Msg,
        },
        raw_msg::RawMsg,
        state::{
            editor::{Phase, ViewMode},
            AppState,
        },
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on phase and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(text, state),

        // Service completions
        RawMsg::ProfileFetched { request, result } => {
            vec![Msg::Profile(ProfileMsg::Loaded { request, result })]
        }
        RawMsg::ProfileSaved { request, result } => {
            vec![Msg::Profile(ProfileMsg::Saved { request, result })]
        }

        RawMsg::ToastExpired { generation } => {
            vec![Msg::Notification(NotificationMsg::Expired { generation })]
        }

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    match state.editor.phase {
        // The form is read-only while a save is in flight
        Phase::Saving => vec![],
        Phase::Editing => translate_editing_keys(key, state),
        Phase::Loading | Phase::Viewing => translate_bound_key(key, ViewMode::Viewing, state),
    }
}

fn translate_editing_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let msgs = translate_bound_key(key, ViewMode::Editing, state);
    if !msgs.is_empty() {
        return msgs;
    }

    if key.code == KeyCode::Enter && !state.editor.focus.is_multiline() {
        return vec![Msg::Form(FormMsg::FocusNext)];
    }

    // Everything else is typing in the focused field
    vec![Msg::Form(FormMsg::ProcessTextAreaInput(key))]
}

fn translate_bound_key(key: KeyEvent, mode: ViewMode, state: &AppState) -> Vec<Msg> {
    state
        .config
        .config
        .keybindings
        .get(&mode)
        .and_then(|bindings| bindings.get(&vec![key]))
        .map(|action| translate_action_to_msg(action, mode))
        .unwrap_or_default()
}

fn translate_action_to_msg(action: &Action, mode: ViewMode) -> Vec<Msg> {
    match (action, mode) {
        (Action::Quit, _) => vec![Msg::System(SystemMsg::Quit)],
        (Action::Suspend, _) => vec![Msg::System(SystemMsg::Suspend)],
        (Action::Edit, ViewMode::Viewing) => vec![Msg::Profile(ProfileMsg::EditRequested)],
        (Action::Reload, ViewMode::Viewing) => vec![Msg::Profile(ProfileMsg::LoadRequested)],
        (Action::Cancel, ViewMode::Editing) => vec![Msg::Profile(ProfileMsg::EditCancelled)],
        (Action::Submit, ViewMode::Editing) => vec![Msg::Profile(ProfileMsg::SubmitRequested)],
        (Action::NextField, ViewMode::Editing) => vec![Msg::Form(FormMsg::FocusNext)],
        (Action::PrevField, ViewMode::Editing) => vec![Msg::Form(FormMsg::FocusPrev)],
        (action, mode) => {
            log::debug!("Action {action} has no meaning in {mode:?} mode");
            vec![]
        }
    }
}

/// Pasted text goes in at the cursor of the focused field
fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    if !state.editor.is_editing() {
        return vec![];
    }
    vec![Msg::Form(FormMsg::InsertText(text))]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::cmd::RequestId,
        domain::{Profile, ProfileField, ServiceError},
        infrastructure::config::Config,
    };

    fn state_in(phase: Phase) -> AppState {
        let mut state = AppState::new_with_config(Config::default());
        if matches!(phase, Phase::Editing | Phase::Saving) {
            state.editor.begin_editing(&Profile {
                name: "Jane".into(),
                ..Default::default()
            });
        }
        state.editor.phase = phase;
        state
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> RawMsg {
        RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_ctrl_c_quits_in_every_phase() {
        for phase in [Phase::Loading, Phase::Viewing, Phase::Editing, Phase::Saving] {
            assert_eq!(
                translate_raw_to_domain(ctrl('c'), &state_in(phase)),
                vec![Msg::System(SystemMsg::Quit)],
                "{phase:?}"
            );
        }
    }

    #[test]
    fn test_viewing_keys() {
        let state = state_in(Phase::Viewing);
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('e')), &state),
            vec![Msg::Profile(ProfileMsg::EditRequested)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('r')), &state),
            vec![Msg::Profile(ProfileMsg::LoadRequested)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('q')), &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert!(translate_raw_to_domain(key(KeyCode::Char('x')), &state).is_empty());
    }

    #[test]
    fn test_editing_keys() {
        let state = state_in(Phase::Editing);
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Esc), &state),
            vec![Msg::Profile(ProfileMsg::EditCancelled)]
        );
        assert_eq!(
            translate_raw_to_domain(ctrl('s'), &state),
            vec![Msg::Profile(ProfileMsg::SubmitRequested)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Tab), &state),
            vec![Msg::Form(FormMsg::FocusNext)]
        );
        assert_eq!(
            translate_raw_to_domain(
                RawMsg::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
                &state
            ),
            vec![Msg::Form(FormMsg::FocusPrev)]
        );
        // letters bound in viewing mode are plain typing here
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('q')), &state),
            vec![Msg::Form(FormMsg::ProcessTextAreaInput(KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::NONE
            )))]
        );
    }

    #[test]
    fn test_enter_moves_focus_on_single_line_fields() {
        let mut state = state_in(Phase::Editing);
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::Form(FormMsg::FocusNext)]
        );

        state.editor.focus_field(ProfileField::Bio);
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::Form(FormMsg::ProcessTextAreaInput(KeyEvent::new(
                KeyCode::Enter,
                KeyModifiers::NONE
            )))]
        );
    }

    #[test]
    fn test_arrow_keys_reach_the_text_area() {
        let mut state = state_in(Phase::Editing);
        state.editor.focus_field(ProfileField::Bio);

        for code in [KeyCode::Up, KeyCode::Down] {
            assert_eq!(
                translate_raw_to_domain(key(code), &state),
                vec![Msg::Form(FormMsg::ProcessTextAreaInput(KeyEvent::new(
                    code,
                    KeyModifiers::NONE
                )))]
            );
        }
    }

    #[test]
    fn test_keys_ignored_while_saving() {
        let state = state_in(Phase::Saving);
        assert!(translate_raw_to_domain(key(KeyCode::Esc), &state).is_empty());
        assert!(translate_raw_to_domain(ctrl('s'), &state).is_empty());
        assert!(translate_raw_to_domain(key(KeyCode::Char('a')), &state).is_empty());
    }

    #[test]
    fn test_service_results_translate_to_profile_msgs() {
        let state = state_in(Phase::Loading);
        let result = Err(ServiceError::Network("down".into()));
        assert_eq!(
            translate_raw_to_domain(
                RawMsg::ProfileFetched {
                    request: RequestId(1),
                    result: result.clone(),
                },
                &state
            ),
            vec![Msg::Profile(ProfileMsg::Loaded {
                request: RequestId(1),
                result
            })]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::ToastExpired { generation: 4 }, &state),
            vec![Msg::Notification(NotificationMsg::Expired { generation: 4 })]
        );
    }

    #[test]
    fn test_paste_is_inserted_while_editing() {
        let state = state_in(Phase::Editing);
        assert_eq!(
            translate_raw_to_domain(RawMsg::Paste(" Doe".into()), &state),
            vec![Msg::Form(FormMsg::InsertText(" Doe".into()))]
        );
        assert!(translate_raw_to_domain(RawMsg::Paste("x".into()), &state_in(Phase::Viewing))
            .is_empty());
    }

    #[test]
    fn test_tick_and_render_are_ignored() {
        let state = state_in(Phase::Viewing);
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }
}
