//! Status bar component
//!
//! Two bottom lines: the toast (or the last runtime error) and the
//! keys available in the current mode.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{editor::Phase, AppState},
    presentation::widgets::{HelpBarWidget, ToastWidget},
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Renders into the last two rows of `area`
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [_, toast_area, help_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let styles = &state.config.config.styles;

        frame.render_widget(Clear, toast_area);
        if let Some(notification) = state.notification.current() {
            let style = if notification.is_error() {
                styles.style("toast_error")
            } else {
                styles.style("toast_info")
            };
            frame.render_widget(ToastWidget::new(notification, style), toast_area);
        } else if let Some(message) = state.system.last_error() {
            frame.render_widget(
                Paragraph::new(Span::styled(message, styles.style("error"))),
                toast_area,
            );
        }

        frame.render_widget(Clear, help_area);
        // keys are ignored while saving
        if state.editor.phase != Phase::Saving {
            let bindings = state
                .config
                .config
                .keybindings
                .describe(state.view_mode());
            frame.render_widget(HelpBarWidget::new(bindings, styles.style("help")), help_area);
        }
    }
}
