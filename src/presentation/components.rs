//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.
//! Nothing here mutates `AppState`.

use ratatui::prelude::*;

use crate::{
    core::state::{editor::Phase, AppState},
    presentation::widgets::BusyOverlayWidget,
};

pub mod profile_form;
pub mod profile_view;
pub mod status_bar;

pub use profile_form::ProfileFormComponent;
pub use profile_view::ProfileViewComponent;
pub use status_bar::StatusBarComponent;

pub const LOADING_MESSAGE: &str = "Loading profile...";
pub const SAVING_MESSAGE: &str = "Saving...";

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub profile_view: ProfileViewComponent,
    pub profile_form: ProfileFormComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main rendering entry point
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Profile card or form
                Constraint::Length(2), // Toast and help line
            ])
            .split(area);

        match state.editor.phase {
            Phase::Loading | Phase::Viewing => self.profile_view.view(state, frame, layout[0]),
            Phase::Editing | Phase::Saving => self.profile_form.view(state, frame, layout[0]),
        }

        if let Some(message) = Self::busy_message(state) {
            let style = state.config.config.styles.style("busy");
            frame.render_widget(BusyOverlayWidget::new(message, style), layout[0]);
        }

        self.status_bar.view(state, frame, layout[1]);
    }

    pub fn busy_message(state: &AppState) -> Option<&'static str> {
        match state.editor.phase {
            Phase::Loading => Some(LOADING_MESSAGE),
            Phase::Saving => Some(SAVING_MESSAGE),
            Phase::Viewing | Phase::Editing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{domain::Profile, infrastructure::config::Config};

    fn screen(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("terminal");
        terminal
            .draw(|f| Components::new().render(f, state))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_loading_shows_overlay() {
        let state = AppState::new_with_config(Config::default());
        assert!(screen(&state).contains(LOADING_MESSAGE));
    }

    #[test]
    fn test_saving_keeps_form_under_overlay() {
        let mut state = AppState::new_with_config(Config::default());
        let profile = Profile {
            name: "Janet".into(),
            ..Default::default()
        };
        state.store.replace(profile.clone());
        state.editor.begin_editing(&profile);
        state.editor.phase = Phase::Saving;

        let screen = screen(&state);
        assert!(screen.contains(SAVING_MESSAGE));
        assert!(screen.contains("Janet"));
        assert!(screen.contains("Edit profile"));
    }

    #[test]
    fn test_viewing_has_no_overlay() {
        let mut state = AppState::new_with_config(Config::default());
        state.store.replace(Profile::default());
        state.editor.phase = Phase::Viewing;

        assert_eq!(Components::busy_message(&state), None);
        assert!(!screen(&state).contains(LOADING_MESSAGE));
    }
}
