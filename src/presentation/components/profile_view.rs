//! Read-only profile card
//!
//! Shows the committed profile. When no profile could be loaded it
//! explains how to retry instead.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{editor::ViewMode, AppState},
    domain::{Profile, ProfileField},
    presentation::config::{keybindings::Action, Styles},
};

const LABEL_WIDTH: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct ProfileViewComponent;

impl ProfileViewComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(" Profile ", styles.style("title")));

        let text = match state.store.get() {
            Ok(profile) => Self::profile_text(profile, styles),
            // the busy overlay covers the first load
            Err(_) if state.is_busy() => Text::default(),
            Err(_) => Self::empty_text(state, styles),
        };

        let paragraph = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, area);
    }

    pub fn profile_text<'a>(profile: &'a Profile, styles: &Styles) -> Text<'a> {
        let row = |label: &str, value: &'a str| {
            Line::from(vec![
                Span::styled(format!("{label:<LABEL_WIDTH$}"), styles.style("label")),
                Span::styled(value, styles.style("value")),
            ])
        };

        let mut lines = vec![
            row(ProfileField::Name.label(), &profile.name),
            row(ProfileField::Title.label(), &profile.title),
            row(ProfileField::Email.label(), &profile.email),
            row("Avatar", &profile.avatar),
            Line::default(),
            Line::from(Span::styled(
                ProfileField::Bio.label().to_string(),
                styles.style("label"),
            )),
        ];
        lines.extend(
            profile
                .bio
                .lines()
                .map(|line| Line::from(Span::styled(line, styles.style("value")))),
        );
        Text::from(lines)
    }

    fn empty_text<'a>(state: &AppState, styles: &Styles) -> Text<'a> {
        let reload_key = state
            .config
            .config
            .keybindings
            .describe(ViewMode::Viewing)
            .into_iter()
            .find(|(_, action)| *action == Action::Reload)
            .map(|(keys, _)| keys);

        let mut lines = vec![Line::from(Span::styled(
            "No profile loaded.",
            styles.style("placeholder"),
        ))];
        if let Some(keys) = reload_key {
            lines.push(Line::from(Span::styled(
                format!("Press {keys} to try again."),
                styles.style("placeholder"),
            )));
        }
        Text::from(lines)
    }
}
