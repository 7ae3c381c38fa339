use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Centered box shown while a request is in flight
pub struct BusyOverlayWidget<'a> {
    message: &'a str,
    style: Style,
}

impl<'a> BusyOverlayWidget<'a> {
    pub fn new(message: &'a str, style: Style) -> Self {
        Self { message, style }
    }

    /// Area the box occupies inside `area`
    pub fn popup_area(&self, area: Rect) -> Rect {
        let width = u16::try_from(self.message.width() + 4)
            .unwrap_or(u16::MAX)
            .min(area.width);
        let height = 3.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl<'a> Widget for BusyOverlayWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let popup = self.popup_area(area);
        Clear.render(popup, buf);
        Paragraph::new(self.message)
            .style(self.style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .render(popup, buf);
    }
}
