//! Contains the [`Program`] syntax tree, the root of the whole syntax tree.

use std::fmt::Display;

use getset::Getters;
use tinyc_base::source_file::{SourceElement, Span};
use tinyc_lexical::token::EndOfInput;

use super::statement::Statement;
use crate::{error::Error, parser::Parser};

/// Syntax Synopsis:
///
/// ``` ebnf
/// Program:
///     Statement* EndOfInput
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct Program {
    #[get = "pub"]
    statements: Vec<Statement>,
    #[get = "pub"]
    end_of_input: EndOfInput,
}

impl Program {
    /// Dissolves the [`Program`] into a list of [`Statement`]s.
    #[must_use]
    pub fn dissolve(self) -> Vec<Statement> { self.statements }
}

impl SourceElement for Program {
    fn span(&self) -> Span {
        self.statements.first().map_or_else(
            || self.end_of_input.span(),
            |first| first.span().join(&self.end_of_input.span).unwrap(),
        )
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Program([")?;

        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            statement.fmt(f)?;
        }

        write!(f, "])")
    }
}

impl<'a> Parser<'a> {
    /// Parses a [`Program`]: every statement up to the end of input.
    ///
    /// The parse is all or nothing; the first syntax error aborts it.
    ///
    /// # Errors
    /// The first syntax error found in the token stream.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut statements = Vec::new();

        while !self.is_end() {
            statements.push(self.parse_statement()?);
        }

        let end_of_input = self.parse_end_of_input()?;

        Ok(Program {
            statements,
            end_of_input,
        })
    }
}
