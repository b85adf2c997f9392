//! Terminal rendering for events.
//!
//! Extension trait plus a backend-keyed theme: one card per event showing
//! id, name, date, location and description, with the accent color picked
//! by backend name.

use evently_core::Event;
use owo_colors::{AnsiColors, OwoColorize};

/// Accent color for one backend name.
///
/// Known backends get their color; anything unrecognized falls back to a
/// neutral gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    accent: AnsiColors,
}

impl Theme {
    pub fn for_backend(backend: &str) -> Self {
        let accent = match backend {
            "flask" => AnsiColors::Blue,
            _ => AnsiColors::BrightBlack,
        };
        Theme { accent }
    }
}

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self, theme: &Theme) -> String;
}

impl Render for Event {
    fn render(&self, theme: &Theme) -> String {
        let mut lines = vec![format!(
            "{} {}",
            format!("#{}", self.id).color(theme.accent),
            self.name.bold()
        )];
        for field in [&self.date, &self.location, &self.description] {
            if !field.is_empty() {
                lines.push(format!("  {field}"));
            }
        }
        lines.join("\n")
    }
}

/// Section title shown above the card list, e.g. "Flask backend".
pub fn backend_title(backend: &str, theme: &Theme) -> String {
    format!("{} backend", capitalize(backend))
        .color(theme.accent)
        .bold()
        .to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
