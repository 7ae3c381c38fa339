use ratatui::{prelude::*, widgets::Paragraph};

use crate::{core::state::notification::Notification, presentation::widgets::fit_width};

/// One-line notification banner
pub struct ToastWidget<'a> {
    notification: &'a Notification,
    style: Style,
}

impl<'a> ToastWidget<'a> {
    pub fn new(notification: &'a Notification, style: Style) -> Self {
        Self {
            notification,
            style,
        }
    }

    pub fn text(&self, width: usize) -> String {
        let marker = if self.notification.is_error() { "✗" } else { "✓" };
        fit_width(&format!(" {marker} {} ", self.notification.message), width)
    }
}

impl<'a> Widget for ToastWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let text = self.text(area.width as usize);
        Paragraph::new(Span::styled(text, self.style)).render(area, buf);
    }
}
