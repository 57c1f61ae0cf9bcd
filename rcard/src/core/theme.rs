// src/core/theme.rs
use colored::Color;

/// A palette of four semantic color roles. Every styled span in the rendered
/// document resolves through one of these roles, so switching themes recolors
/// the whole card consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub text: Color,
}

pub const DEFAULT: Theme = Theme {
    primary: Color::Cyan,
    secondary: Color::Yellow,
    accent: Color::Green,
    text: Color::White,
};

pub const DARK: Theme = Theme {
    primary: Color::Magenta,
    secondary: Color::Blue,
    accent: Color::BrightBlack,
    text: Color::White,
};

pub const MINIMAL: Theme = Theme {
    primary: Color::White,
    secondary: Color::BrightBlack,
    accent: Color::White,
    text: Color::White,
};

impl Theme {
    /// Resolves a theme name to its palette. Unknown names fall back to the
    /// default palette rather than erroring.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        match name {
            "dark" => DARK,
            "minimal" => MINIMAL,
            _ => DEFAULT,
        }
    }
}
