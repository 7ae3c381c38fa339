use ratatui::{prelude::*, widgets::Paragraph};

use crate::presentation::{config::keybindings::Action, widgets::fit_width};

/// Bottom line listing the keys active in the current mode
pub struct HelpBarWidget {
    bindings: Vec<(String, Action)>,
    style: Style,
}

impl HelpBarWidget {
    pub fn new(bindings: Vec<(String, Action)>, style: Style) -> Self {
        Self { bindings, style }
    }

    /// Keys bound to the same action are grouped, e.g. `<q>/<Ctrl-c> quit`
    pub fn text(&self) -> String {
        let mut groups: Vec<(Vec<&str>, &Action)> = Vec::new();
        for (keys, action) in &self.bindings {
            match groups.last_mut() {
                Some((group_keys, group_action)) if *group_action == action => {
                    group_keys.push(keys.as_str())
                }
                _ => groups.push((vec![keys.as_str()], action)),
            }
        }
        groups
            .iter()
            .map(|(keys, action)| format!("{} {}", keys.join("/"), action.label()))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl Widget for HelpBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let text = fit_width(&self.text(), area.width as usize);
        Paragraph::new(Span::styled(text, self.style)).render(area, buf);
    }
}
