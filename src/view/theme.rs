//! Colors for highlight classes

use crate::primitives::highlighter::Highlight;
use crossterm::style::Color;

/// Foreground colors used when drawing rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub syntax_comment: Color,
    pub syntax_keyword: Color,
    pub syntax_type: Color,
    pub syntax_string: Color,
    pub syntax_number: Color,
    pub search_match: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            syntax_comment: Color::AnsiValue(6),
            syntax_keyword: Color::AnsiValue(13),
            syntax_type: Color::AnsiValue(9),
            syntax_string: Color::AnsiValue(11),
            syntax_number: Color::AnsiValue(5),
            search_match: Color::AnsiValue(4),
        }
    }
}

impl Theme {
    /// Color for a highlight class; `None` means the terminal default
    pub fn color(&self, class: Highlight) -> Option<Color> {
        match class {
            Highlight::Default => None,
            Highlight::Comment | Highlight::BlockComment => Some(self.syntax_comment),
            Highlight::Keyword1 => Some(self.syntax_keyword),
            Highlight::Keyword2 => Some(self.syntax_type),
            Highlight::String => Some(self.syntax_string),
            Highlight::Number => Some(self.syntax_number),
            Highlight::SearchMatch => Some(self.search_match),
        }
    }
}
