use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"error": "red"` or `"toast_info": "black on green"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;
        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| (name, parse_style(&raw)))
            .collect();
        Ok(Styles(styles))
    }
}

impl Styles {
    /// Looks up a style by name, falling back to the terminal default
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

/// Parses `"<modifiers> <fg> on <bg>"`, every part optional
pub fn parse_style(line: &str) -> Style {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.split_once("on ") {
        Some((fg, bg)) if fg.is_empty() || fg.ends_with(' ') => (fg, bg),
        _ => (lower.as_str(), ""),
    };
    let (modifiers, foreground) = extract_modifiers(foreground.trim());

    let mut style = Style::default().add_modifier(modifiers);
    if let Some(fg) = parse_color(foreground.trim()) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(background.trim()) {
        style = style.bg(bg);
    }
    style
}

fn extract_modifiers(line: &str) -> (Modifier, &str) {
    let mut modifiers = Modifier::empty();
    let mut rest = line;
    loop {
        let (word, tail) = rest.split_once(' ').unwrap_or((rest, ""));
        let modifier = match word {
            "bold" => Modifier::BOLD,
            "italic" => Modifier::ITALIC,
            "underline" | "underlined" => Modifier::UNDERLINED,
            "dim" => Modifier::DIM,
            "reversed" | "inverse" => Modifier::REVERSED,
            _ => break,
        };
        modifiers |= modifier;
        rest = tail.trim_start();
    }
    (modifiers, rest)
}

fn parse_color(s: &str) -> Option<Color> {
    let color = match s {
        "" => return None,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark gray" | "dark grey" | "darkgray" => Color::DarkGray,
        "light red" => Color::LightRed,
        "light green" => Color::LightGreen,
        "light yellow" => Color::LightYellow,
        "light blue" => Color::LightBlue,
        "light magenta" => Color::LightMagenta,
        "light cyan" => Color::LightCyan,
        "white" => Color::White,
        other => match other.strip_prefix('#') {
            Some(hex) if hex.len() == 6 => {
                let rgb = u32::from_str_radix(hex, 16).ok()?;
                Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
            }
            _ => match other.parse::<u8>() {
                Ok(index) => Color::Indexed(index),
                Err(_) => {
                    log::warn!("Unknown color {other:?}");
                    return None;
                }
            },
        },
    };
    Some(color)
}
