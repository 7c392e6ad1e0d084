//! Contains all kinds of syntactic errors that can occur while parsing the token stream.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use tinyc_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Location,
};
use tinyc_lexical::token::{KeywordKind, OperatorKind, Token, TokenKind};

/// Enumeration containing all kinds of syntax that can be failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum SyntaxKind {
    Keyword(KeywordKind),
    Operator(OperatorKind),
    Sign(char),
    Identifier,
    Integer,
    TypeKeyword,
    Statement,
    Expression,
    EndOfInput,
}

impl Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(keyword) => write!(f, "keyword `{keyword}`"),
            Self::Operator(operator) => write!(f, "operator `{operator}`"),
            Self::Sign(sign) => write!(f, "sign `{sign}`"),
            Self::Identifier => write!(f, "an identifier"),
            Self::Integer => write!(f, "an integer"),
            Self::TypeKeyword => write!(f, "a type keyword (`int`, `float` or `double`)"),
            Self::Statement => write!(f, "a statement"),
            Self::Expression => write!(f, "an expression"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A syntax/token is expected but found an other invalid token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedSyntax {
    /// The kind of syntax that was expected.
    pub expected: SyntaxKind,

    /// The invalid token that was found.
    pub found: Token,
}

impl UnexpectedSyntax {
    /// Gets the kind of the offending token.
    #[must_use]
    pub fn kind(&self) -> TokenKind { self.found.kind() }

    /// Gets the lexeme of the offending token.
    #[must_use]
    pub fn text(&self) -> &str { self.found.text() }

    /// Gets the location of the offending token.
    #[must_use]
    pub fn location(&self) -> Location { self.found.location() }
}

impl Display for UnexpectedSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("expected {}, but found {}", self.expected, self.found);

        write!(f, "{}", Message::new(Severity::Error, message))?;

        write!(
            f,
            "\n{}",
            SourceCodeDisplay::new(
                self.found.span(),
                Some(format!("{} is expected here", self.expected))
            )
        )
    }
}

impl std::error::Error for UnexpectedSyntax {}

/// Is an enumeration containing all kinds of syntactic errors that can occur while parsing the
/// token stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnexpectedSyntax(UnexpectedSyntax),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedSyntax(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for Error {}
