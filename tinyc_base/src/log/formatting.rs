//! Contains the ANSI escape codes used to style the console output.

use std::fmt::Display;

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Style {
    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> WithAnsi<T> {
        let code = match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
        };

        WithAnsi { code, display }
    }
}

/// Represents a foreground color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    /// Applies the color to the given displayable object.
    pub fn with<T>(self, display: T) -> WithAnsi<T> {
        let code = match self {
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        };

        WithAnsi { code, display }
    }
}

/// Is a struct implementing [`Display`] that wraps a displayable object between an ANSI escape
/// code and the reset code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WithAnsi<T> {
    /// The escape code written before the displayable object.
    pub code: &'static str,

    /// The displayable object.
    pub display: T,
}

impl<T: Display> Display for WithAnsi<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.code, self.display)
    }
}
