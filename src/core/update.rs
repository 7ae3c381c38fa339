use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        cmd::{Cmd, RequestId},
        msg::{form::FormMsg, notification::NotificationMsg, profile::ProfileMsg, Msg},
        state::{editor::Phase, notification::Notification, AppState},
        textarea_engine::{TextAreaEngine, TextAreaState},
    },
    domain::{validate, Profile, ProfileField, ServiceError},
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
};

pub const LOAD_FAILED: &str = "Failed to load profile";
pub const SAVE_SUCCEEDED: &str = "Profile updated successfully!";

/// Dependencies the update function needs but does not own
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

static DEFAULT_ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;

impl Default for UpdateContext<'static> {
    fn default() -> Self {
        Self {
            text_area: &DEFAULT_ENGINE,
        }
    }
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(msg, state, &UpdateContext::default())
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    let commands = match msg {
        Msg::System(system_msg) => state.system.update(system_msg),
        Msg::Notification(notification_msg) => {
            let duration_ms = state.config.config.notification.duration_ms;
            state.notification.update(notification_msg, duration_ms)
        }
        Msg::Profile(profile_msg) => update_profile(profile_msg, &mut state),
        Msg::Form(form_msg) => {
            update_form(form_msg, &mut state, ctx);
            vec![]
        }
    };

    (state, commands)
}

fn notify(state: &mut AppState, notification: Notification) -> Vec<Cmd> {
    let duration_ms = state.config.config.notification.duration_ms;
    state
        .notification
        .update(NotificationMsg::Show(notification), duration_ms)
}

fn update_profile(msg: ProfileMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        ProfileMsg::LoadRequested => request_load(state),
        ProfileMsg::Loaded { request, result } => on_loaded(state, request, result),
        ProfileMsg::EditRequested => begin_edit(state),
        ProfileMsg::EditCancelled => {
            if state.editor.is_editing() {
                state.editor.finish_editing();
            } else {
                log::debug!("Cancel ignored in phase {:?}", state.editor.phase);
            }
            vec![]
        }
        ProfileMsg::SubmitRequested => submit(state),
        ProfileMsg::Saved { request, result } => on_saved(state, request, result),
    }
}

fn request_load(state: &mut AppState) -> Vec<Cmd> {
    let idle_start = state.editor.phase == Phase::Loading && state.editor.in_flight().is_none();
    if !(idle_start || state.editor.phase == Phase::Viewing) {
        log::debug!("Load ignored in phase {:?}", state.editor.phase);
        return vec![];
    }

    state.editor.phase = Phase::Loading;
    let request = state.editor.issue_request();
    vec![Cmd::FetchProfile { request }]
}

fn on_loaded(
    state: &mut AppState,
    request: RequestId,
    result: Result<Profile, ServiceError>,
) -> Vec<Cmd> {
    if !state.editor.settle(request) {
        log::debug!("Dropping stale fetch result #{}", request.0);
        return vec![];
    }

    state.editor.phase = Phase::Viewing;
    match result {
        Ok(profile) => {
            log::info!("Profile loaded");
            state.store.replace(profile);
            vec![]
        }
        Err(e) => {
            log::error!("Failed to load profile: {e}");
            notify(state, Notification::error(LOAD_FAILED))
        }
    }
}

fn begin_edit(state: &mut AppState) -> Vec<Cmd> {
    if state.editor.phase != Phase::Viewing {
        log::debug!("Edit ignored in phase {:?}", state.editor.phase);
        return vec![];
    }

    match state.store.get() {
        Ok(profile) => {
            let profile = profile.clone();
            state.editor.begin_editing(&profile);
        }
        Err(e) => {
            log::warn!("Edit requested without a profile: {e}");
        }
    }
    vec![]
}

fn submit(state: &mut AppState) -> Vec<Cmd> {
    if !state.editor.is_editing() {
        log::debug!("Submit ignored in phase {:?}", state.editor.phase);
        return vec![];
    }
    let Some(draft) = state.editor.draft.clone() else {
        log::error!("Editing without a draft");
        return vec![];
    };

    let result = validate(&draft);
    let valid = result.is_valid();
    state.editor.field_errors = result;
    if !valid {
        log::info!(
            "Validation failed for {:?}",
            state.editor.field_errors.field_errors.keys().collect::<Vec<_>>()
        );
        return vec![];
    }

    let candidate = match state.store.get() {
        Ok(current) => draft.merge_into(current),
        Err(e) => {
            log::error!("Submit without a committed profile: {e}");
            return vec![];
        }
    };

    state.editor.phase = Phase::Saving;
    let request = state.editor.issue_request();
    vec![Cmd::SaveProfile { request, candidate }]
}

fn on_saved(
    state: &mut AppState,
    request: RequestId,
    result: Result<Profile, ServiceError>,
) -> Vec<Cmd> {
    if !state.editor.settle(request) {
        log::debug!("Dropping stale save result #{}", request.0);
        return vec![];
    }

    match result {
        Ok(profile) => {
            log::info!("Profile saved");
            state.store.replace(profile);
            state.editor.finish_editing();
            notify(state, Notification::info(SAVE_SUCCEEDED))
        }
        Err(e) => {
            log::error!("Failed to save profile: {e}");
            // the draft stays so the user can retry without retyping
            state.editor.phase = Phase::Editing;
            notify(state, Notification::error(e.to_string()))
        }
    }
}

fn update_form(msg: FormMsg, state: &mut AppState, ctx: &UpdateContext<'_>) {
    if !state.editor.is_editing() {
        return;
    }

    match msg {
        FormMsg::FocusNext => {
            let next = state.editor.focus.next();
            state.editor.focus_field(next);
        }
        FormMsg::FocusPrev => {
            let prev = state.editor.focus.prev();
            state.editor.focus_field(prev);
        }
        FormMsg::Focus(field) => state.editor.focus_field(field),
        FormMsg::ProcessTextAreaInput(key) => apply_keys(state, ctx, &[key]),
        FormMsg::InsertText(text) => {
            let multiline = state.editor.focus.is_multiline();
            let keys = text_to_keys(&text, multiline);
            apply_keys(state, ctx, &keys);
        }
        FormMsg::SetField(field, value) => {
            let value = if field.is_multiline() {
                value
            } else {
                value.replace(['\r', '\n'], " ")
            };
            set_draft_field(state, field, value);
            if field == state.editor.focus {
                state.editor.focus_field(field);
            }
        }
    }
}

/// Runs `keys` through the text-area engine at the current cursor.
/// Single-line fields reject any edit that would introduce a line break.
fn apply_keys(state: &mut AppState, ctx: &UpdateContext<'_>, keys: &[KeyEvent]) {
    let field = state.editor.focus;
    let Some(content) = state.editor.focused_text() else {
        return;
    };
    let snapshot = TextAreaState::new(content, state.editor.cursor);
    let edited = ctx.text_area.apply_keys(&snapshot, keys);
    if !field.is_multiline() && edited.content.contains('\n') {
        return;
    }
    let changed = edited.content != snapshot.content;
    state.editor.cursor = edited.cursor_position;
    if changed {
        set_draft_field(state, field, edited.content);
    }
}

/// Typed-out form of pasted text. Line breaks become spaces in single-line fields.
fn text_to_keys(text: &str, multiline: bool) -> Vec<KeyEvent> {
    text.chars()
        .filter(|c| *c != '\r')
        .map(|c| match c {
            '\n' if multiline => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            '\n' | '\t' => KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            c => KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
        })
        .collect()
}

fn set_draft_field(state: &mut AppState, field: ProfileField, value: String) {
    if let Some(draft) = state.editor.draft.as_mut() {
        draft.set_field(field, value);
        // the message described the old value
        state.editor.field_errors.field_errors.remove(&field);
    }
}
