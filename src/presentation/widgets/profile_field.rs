use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Styles a field is drawn with
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldStyles {
    pub label: Style,
    pub value: Style,
    pub focused: Style,
    pub error: Style,
}

/// One labelled input box of the edit form, with its error line underneath
pub struct ProfileFieldWidget<'a> {
    label: &'a str,
    value: &'a str,
    error: Option<&'a str>,
    focused: bool,
    read_only: bool,
    styles: FieldStyles,
}

impl<'a> ProfileFieldWidget<'a> {
    pub fn new(label: &'a str, value: &'a str, styles: FieldStyles) -> Self {
        Self {
            label,
            value,
            error: None,
            focused: false,
            read_only: false,
            styles,
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Box and error line, top to bottom
    pub fn split(area: Rect) -> (Rect, Rect) {
        let [input, error] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        (input, error)
    }

    fn border_style(&self) -> Style {
        if self.error.is_some() {
            self.styles.error
        } else if self.focused && !self.read_only {
            self.styles.focused
        } else {
            Style::default()
        }
    }
}

impl<'a> Widget for ProfileFieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (input_area, error_area) = Self::split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style())
            .title(Span::styled(format!(" {} ", self.label), self.styles.label));
        let value_style = if self.read_only {
            self.styles.value.add_modifier(Modifier::DIM)
        } else {
            self.styles.value
        };
        Paragraph::new(self.value)
            .style(value_style)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(input_area, buf);

        if let Some(error) = self.error {
            Paragraph::new(Span::styled(format!(" {error}"), self.styles.error))
                .render(error_area, buf);
        }
    }
}
