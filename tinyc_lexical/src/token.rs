//! Is a module containing the [`Token`] type, all of its related types and the finite-state
//! scanner that produces them.

use std::{collections::HashMap, fmt::Display, iter::Iterator, str::FromStr};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;
use tinyc_base::source_file::{self, ByteIndex, Location, SourceElement, Span};

use crate::character::{is_alphanumeric, is_digit, is_letter, is_white_space};

/// Is an enumeration representing keywords of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Int,
    Float,
    Double,
    If,
    Else,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> = {
                let mut map = HashMap::new();

                for keyword in KeywordKind::iter() {
                    map.insert(keyword.as_str(), keyword);
                }

                map
            };
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::If => "if",
            Self::Else => "else",
        }
    }

    /// Returns `true` if the keyword names a type that can start a declaration.
    #[must_use]
    pub fn is_type(self) -> bool { matches!(self, Self::Int | Self::Float | Self::Double) }
}

/// The characters that start an operator token.
pub const OPERATOR_CHARACTERS: [char; 9] = ['+', '-', '*', '/', '%', '=', '<', '>', '!'];

/// The characters that make up a sign token.
pub const SIGN_CHARACTERS: [char; 5] = [';', '(', ')', '{', '}'];

/// Is an enumeration representing every operator recognized by the scanner.
///
/// The two-character operators are formed by merging an operator character with the character
/// that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Assign,
    LessThan,
    GreaterThan,
    Not,
    Equal,
    NotEqual,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl OperatorKind {
    /// Gets the string representation of the operator as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Assign => "=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Not => "!",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
        }
    }

    /// Gets the single-character operator of the given character.
    #[must_use]
    pub fn from_char(character: char) -> Option<Self> {
        match character {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            '=' => Some(Self::Assign),
            '<' => Some(Self::LessThan),
            '>' => Some(Self::GreaterThan),
            '!' => Some(Self::Not),
            _ => None,
        }
    }

    /// Gets the two-character operator formed by the given pair of characters.
    #[must_use]
    pub fn from_pair(first: char, second: char) -> Option<Self> {
        match (first, second) {
            ('=', '=') => Some(Self::Equal),
            ('!', '=') => Some(Self::NotEqual),
            ('<', '=') => Some(Self::LessThanOrEqual),
            ('>', '=') => Some(Self::GreaterThanOrEqual),
            _ => None,
        }
    }

    /// Returns `true` if the operator is made of two characters.
    #[must_use]
    pub fn is_double(self) -> bool { self.as_str().len() == 2 }
}

/// Is an enumeration of the closed set of token kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, strum_macros::Display,
)]
#[allow(missing_docs)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Operator,
    Sign,
    Unknown,
    EndOfInput,
}

/// Is an enumeration containing all kinds of tokens produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Token {
    Keyword(Keyword),
    Identifier(Identifier),
    Integer(Integer),
    Operator(Operator),
    Sign(Sign),
    Unknown(Unknown),
    EndOfInput(EndOfInput),
}

impl Token {
    /// Returns the span of the token.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Keyword(token) => &token.span,
            Self::Identifier(token) => &token.span,
            Self::Integer(token) => &token.span,
            Self::Operator(token) => &token.span,
            Self::Sign(token) => &token.span,
            Self::Unknown(token) => &token.span,
            Self::EndOfInput(token) => &token.span,
        }
    }

    /// Returns the location of the first character of the token.
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Self::Keyword(token) => token.location,
            Self::Identifier(token) => token.location,
            Self::Integer(token) => token.location,
            Self::Operator(token) => token.location,
            Self::Sign(token) => token.location,
            Self::Unknown(token) => token.location,
            Self::EndOfInput(token) => token.location,
        }
    }

    /// Returns the kind of the token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Keyword(..) => TokenKind::Keyword,
            Self::Identifier(..) => TokenKind::Identifier,
            Self::Integer(..) => TokenKind::Integer,
            Self::Operator(..) => TokenKind::Operator,
            Self::Sign(..) => TokenKind::Sign,
            Self::Unknown(..) => TokenKind::Unknown,
            Self::EndOfInput(..) => TokenKind::EndOfInput,
        }
    }

    /// Returns the lexeme of the token, verbatim from the source code.
    ///
    /// The lexeme of [`Token::EndOfInput`] is empty.
    #[must_use]
    pub fn text(&self) -> &str { self.span().str() }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfInput(..) => write!(f, "end of input"),
            token => write!(f, "{} `{}`", token.kind(), token.text()),
        }
    }
}

impl SourceElement for Token {
    fn span(&self) -> Span { self.span().clone() }
}

/// Represents a contiguous sequence of characters that are valid in an identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the location of the first character of the token.
    pub location: Location,
}

impl SourceElement for Identifier {
    fn span(&self) -> Span { self.span.clone() }
}

/// Represents a contiguous sequence of characters that are reserved for a keyword.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the location of the first character of the token.
    pub location: Location,

    /// Is the [`KeywordKind`] that the token represents.
    pub keyword: KeywordKind,
}

impl SourceElement for Keyword {
    fn span(&self) -> Span { self.span.clone() }
}

/// Represents a sequence of decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the location of the first character of the token.
    pub location: Location,
}

impl SourceElement for Integer {
    fn span(&self) -> Span { self.span.clone() }
}

/// Represents a one or two characters operator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operator {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the location of the first character of the token.
    pub location: Location,

    /// Is the [`OperatorKind`] that the token represents.
    pub operator: OperatorKind,
}

impl SourceElement for Operator {
    fn span(&self) -> Span { self.span.clone() }
}

/// Represents a single punctuation character from [`SIGN_CHARACTERS`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sign {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the location of the first character of the token.
    pub location: Location,

    /// Is the sign character that the token represents.
    pub sign: char,
}

impl SourceElement for Sign {
    fn span(&self) -> Span { self.span.clone() }
}

/// Represents a single character that doesn't belong to any lexical class.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unknown {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the location of the first character of the token.
    pub location: Location,
}

impl SourceElement for Unknown {
    fn span(&self) -> Span { self.span.clone() }
}

/// Marks the end of the source code. Its span is empty and located at the end of the file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EndOfInput {
    /// Is the empty span at the end of the source file.
    pub span: Span,

    /// Is the location right after the last character of the source file.
    pub location: Location,
}

impl SourceElement for EndOfInput {
    fn span(&self) -> Span { self.span.clone() }
}

/// Is an enumeration of the states of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Between tokens; white spaces and new lines are discarded in this state.
    Start,

    /// Reading an identifier or a keyword.
    Identifier,

    /// Reading a sequence of digits.
    Integer,

    /// Read an operator character.
    Operator,

    /// Read a sign character.
    Sign,

    /// Read a character that doesn't start any token.
    Unknown,
}

impl State {
    /// Gets the state entered from [`State::Start`] when reading the given character.
    #[must_use]
    pub fn start(character: char) -> Self {
        if is_white_space(character) {
            Self::Start
        } else if is_letter(character) || character == '_' {
            Self::Identifier
        } else if is_digit(character) {
            Self::Integer
        } else if OPERATOR_CHARACTERS.contains(&character) {
            Self::Operator
        } else if SIGN_CHARACTERS.contains(&character) {
            Self::Sign
        } else {
            Self::Unknown
        }
    }

    /// Gets the state after reading the given character.
    ///
    /// Returns `None` if the character can't extend the token being read.
    #[must_use]
    pub fn transition(self, character: char) -> Option<Self> {
        match self {
            Self::Start => Some(Self::start(character)),
            Self::Identifier => {
                (is_alphanumeric(character) || character == '_')
                    .then_some(Self::Identifier)
            }
            Self::Integer => is_digit(character).then_some(Self::Integer),
            Self::Operator | Self::Sign | Self::Unknown => None,
        }
    }
}

/// Is an error that can occur when invoking the [`Token::lex`] method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("the iterator argument is at the end of the source code.")]
    EndOfSourceCodeIteratorArgument,
}

impl Token {
    /// Increments the iterator until the predicate returns false.
    fn walk_iter(iter: &mut source_file::Iterator, predicate: impl Fn(char) -> bool) {
        while let Some((_, character)) = iter.peek() {
            if !predicate(character) {
                break;
            }

            iter.next();
        }
    }

    /// Creates a span from the given start location to the current location of the iterator.
    fn create_span(start: ByteIndex, iter: &mut source_file::Iterator) -> Span {
        Span::new(iter.source_file().clone(), start, iter.byte_index()).unwrap()
    }

    fn handle_identifier_and_keyword(
        iter: &mut source_file::Iterator,
        start: ByteIndex,
        location: Location,
    ) -> Self {
        let span = Self::create_span(start, iter);

        // the whole word must match, prefixes of keywords are identifiers
        KeywordKind::from_str(span.str()).ok().map_or_else(
            || Identifier {
                span: span.clone(),
                location,
            }
            .into(),
            |keyword| {
                Keyword {
                    span: span.clone(),
                    location,
                    keyword,
                }
                .into()
            },
        )
    }

    fn handle_operator(
        iter: &mut source_file::Iterator,
        start: ByteIndex,
        location: Location,
        character: char,
    ) -> Self {
        let single = OperatorKind::from_char(character).unwrap();

        // one character lookahead for the two-character operators
        let operator = match iter
            .peek()
            .and_then(|(_, next)| OperatorKind::from_pair(character, next))
        {
            Some(double) => {
                iter.next();
                double
            }
            None => single,
        };

        Operator {
            span: Self::create_span(start, iter),
            location,
            operator,
        }
        .into()
    }

    /// Lexes the source code from the given iterator.
    ///
    /// White spaces and new lines in front of the token are discarded. The function then reads
    /// the longest sequence of characters forming a token and leaves the iterator at the next
    /// character that is not part of the token.
    ///
    /// # Errors
    /// - [`Error::EndOfSourceCodeIteratorArgument`] - There is no token left in the source code.
    pub fn lex(iter: &mut source_file::Iterator) -> Result<Self, Error> {
        Self::walk_iter(iter, |character| State::start(character) == State::Start);

        // the location must be captured before the first character is consumed
        let location = iter.location();
        let (start, character) = iter.next().ok_or(Error::EndOfSourceCodeIteratorArgument)?;

        let mut state = State::start(character);

        // maximal munch
        while let Some((_, next)) = iter.peek() {
            let Some(next_state) = state.transition(next) else {
                break;
            };

            state = next_state;
            iter.next();
        }

        Ok(match state {
            State::Identifier => Self::handle_identifier_and_keyword(iter, start, location),
            State::Integer => Integer {
                span: Self::create_span(start, iter),
                location,
            }
            .into(),
            State::Operator => Self::handle_operator(iter, start, location, character),
            State::Sign => Sign {
                span: Self::create_span(start, iter),
                location,
                sign: character,
            }
            .into(),
            State::Unknown => Unknown {
                span: Self::create_span(start, iter),
                location,
            }
            .into(),
            State::Start => unreachable!("white spaces should've been discarded"),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests;
