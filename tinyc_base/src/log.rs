//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::{Location, Span};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the particular span of the source code.
///
/// The lines covered by the span are printed along with the line before and after them; the
/// characters inside the span are underlined in red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    fn write_gutter(
        f: &mut std::fmt::Formatter<'_>,
        line_number: Option<usize>,
        width: usize,
    ) -> std::fmt::Result {
        match line_number {
            Some(line_number) => write!(
                f,
                "{}{:padding$} {} ",
                Style::Bold.with(Color::Cyan.with(line_number)),
                "",
                Style::Bold.with(Color::Cyan.with("┃")),
                padding = width - get_digit(line_number)
            ),
            None => write!(
                f,
                "{:width$} {} ",
                "",
                Style::Bold.with(Color::Cyan.with("┃")),
            ),
        }
    }

    fn write_line(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        line_number: usize,
        width: usize,
        highlight: bool,
    ) -> std::fmt::Result {
        let Some(line) = self.span.source_file().get_line(line_number) else {
            return Ok(());
        };

        Self::write_gutter(f, Some(line_number), width)?;

        let start = self.span.start_location();
        let end = self.span.end_location();

        for (index, char) in line.chars().enumerate() {
            let location = Location {
                line: line_number,
                column: index + 1,
            };

            match char {
                '\n' | '\r' => {}
                '\t' => write!(f, "    ")?,
                char if highlight && location >= start && location < end => write!(
                    f,
                    "{}",
                    Style::Underline.with(Style::Bold.with(Color::Red.with(char)))
                )?,
                char => write!(f, "{char}")?,
            }
        }

        writeln!(f)
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start_location = self.span.start_location();
        let end_location = self.span.end_location();

        let start_line = start_location.line;
        let end_line = end_location.line;

        // the gutter must fit the line after the span
        let width = get_digit(end_line + 1);

        // prints the source location
        writeln!(
            f,
            "{:width$}{} {}:{}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            self.span.source_file().full_path().display(),
            start_location,
        )?;

        Self::write_gutter(f, None, width)?;
        writeln!(f)?;

        if start_line > 1 {
            self.write_line(f, start_line - 1, width, false)?;
        }

        for line_number in start_line..=end_line {
            self.write_line(f, line_number, width, true)?;
        }

        // points at the start of the span
        if start_line == end_line {
            Self::write_gutter(f, None, width)?;

            for char in self
                .span
                .source_file()
                .get_line(start_line)
                .unwrap_or_default()
                .chars()
                .take(start_location.column - 1)
            {
                write!(f, "{}", if char == '\t' { "    " } else { " " })?;
            }

            let length = self.span.str().chars().count().max(1);
            write!(f, "{}", Style::Bold.with(Color::Red.with("^".repeat(length))))?;

            if let Some(help_display) = &self.help_display {
                write!(f, " {}: {help_display}", Style::Bold.with("help"))?;
            }

            writeln!(f)?;
        }

        self.write_line(f, end_line + 1, width, false)?;

        Self::write_gutter(f, None, width)?;
        writeln!(f)?;

        if start_line != end_line {
            if let Some(help_display) = &self.help_display {
                writeln!(
                    f,
                    "{:width$} {} {}: {help_display}",
                    "",
                    Style::Bold.with(Color::Cyan.with("=")),
                    Style::Bold.with("help"),
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
