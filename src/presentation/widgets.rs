//! Reusable widgets
//!
//! Small `Widget` implementations shared by the components.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub mod busy_overlay;
pub mod help_bar;
pub mod profile_field;
pub mod toast;

pub use busy_overlay::BusyOverlayWidget;
pub use help_bar::HelpBarWidget;
pub use profile_field::ProfileFieldWidget;
pub use toast::ToastWidget;

/// Cuts `text` to at most `width` terminal columns, marking the cut with `…`
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        fitted.push(c);
        used += w;
    }
    fitted.push('…');
    fitted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("hello", 10, "hello")]
    #[case("hello", 5, "hello")]
    #[case("hello world", 6, "hello…")]
    #[case("こんにちは", 5, "こん…")]
    #[case("abc", 0, "")]
    fn test_fit_width(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(fit_width(text, width), expected);
    }
}
