// src/core/layout.rs
use colored::{Color, Colorize as _};
use unicode_width::UnicodeWidthChar as _;

/// Border character set for a boxed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Single,
    Double,
}

impl Border {
    const fn pieces(
        self,
    ) -> (
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
    ) {
        match self {
            Self::Single => ("┌", "┐", "└", "┘", "─", "│"),
            Self::Double => ("╔", "╗", "╚", "╝", "═", "║"),
        }
    }
}

/// How a boxed block is drawn.
#[derive(Debug, Clone, Copy)]
pub struct BoxStyle {
    pub border: Border,
    pub color: Color,
    /// Inner padding and outer margin; dropped in compact mode.
    pub padded: bool,
    pub centered: bool,
}

/// Section separator line. Compact mode uses a shorter, lighter rule.
#[must_use]
pub fn separator(compact: bool) -> String {
    if compact {
        "─".repeat(30)
    } else {
        "═".repeat(50)
    }
}

/// Display width of a line as the terminal shows it, with ANSI escape
/// sequences skipped so styled spans measure like their plain text.
#[must_use]
pub fn visible_width(line: &str) -> usize {
    let mut width = 0;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequence: discard everything up to the final byte (@..~)
            for c in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&c) {
                    break;
                }
            }
        } else {
            width += c.width().unwrap_or(0);
        }
    }
    width
}

/// Draws `text` inside a Unicode box, sized to the widest visible line.
#[must_use]
pub fn boxed(text: &str, style: BoxStyle) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let inner = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let hpad = if style.padded { 2 } else { 0 };
    let width = inner + hpad * 2;

    let (tl, tr, bl, br, h, v) = style.border.pieces();
    let margin = if style.padded { "  " } else { "" };
    let side = v.color(style.color).to_string();

    let mut out = String::new();
    if style.padded {
        out.push('\n');
    }

    let top = format!("{tl}{}{tr}", h.repeat(width));
    out.push_str(margin);
    out.push_str(&top.color(style.color).to_string());
    out.push('\n');

    let blank_row = format!("{margin}{side}{}{side}\n", " ".repeat(width));
    if style.padded {
        out.push_str(&blank_row);
    }

    for line in &lines {
        let fill = inner.saturating_sub(visible_width(line));
        let (left, right) = if style.centered {
            (fill / 2, fill - fill / 2)
        } else {
            (0, fill)
        };
        out.push_str(margin);
        out.push_str(&side);
        out.push_str(&" ".repeat(hpad + left));
        out.push_str(line);
        out.push_str(&" ".repeat(right + hpad));
        out.push_str(&side);
        out.push('\n');
    }

    if style.padded {
        out.push_str(&blank_row);
    }

    let bottom = format!("{bl}{}{br}", h.repeat(width));
    out.push_str(margin);
    out.push_str(&bottom.color(style.color).to_string());
    if style.padded {
        out.push('\n');
    }

    out
}
