//! Contains the [`Parser`] logic.

use tinyc_lexical::{
    token::{
        EndOfInput, Identifier, Integer, Keyword, KeywordKind, Operator, OperatorKind, Sign, Token,
    },
    token_stream::TokenStream,
};

use crate::error::{Error, SyntaxKind, UnexpectedSyntax};

/// The cursor of the recursive descent parser.
///
/// Reads the token stream strictly from left to right with one token of lookahead. The cursor
/// never moves past the [`Token::EndOfInput`] marker; peeking at the end keeps returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Parser<'a> {
    token_stream: &'a TokenStream,
    current_index: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser from the given token stream.
    #[must_use]
    pub fn new(token_stream: &'a TokenStream) -> Self {
        Self {
            token_stream,
            current_index: 0,
        }
    }

    /// Returns the [`Token`] pointed by the `current_index` of the [`Parser`].
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        let token_stream = self.token_stream;
        &token_stream[self.current_index]
    }

    /// Checks if the parser has reached the [`Token::EndOfInput`] marker.
    #[must_use]
    pub fn is_end(&self) -> bool { matches!(self.peek(), Token::EndOfInput(..)) }

    /// Forwards the `current_index` by 1 if the [`Parser`] is not at the end of input.
    pub fn forward(&mut self) {
        if !self.is_end() {
            self.current_index += 1;
        }
    }

    /// Returns the [`Token`] pointed by the `current_index` of the [`Parser`] and forwards the
    /// `current_index` afterward.
    pub fn next_token(&mut self) -> &'a Token {
        let token = self.peek();

        self.forward();

        token
    }

    /// Creates the error reporting that the current token is not the expected syntax.
    #[must_use]
    pub fn unexpected(&self, expected: SyntaxKind) -> Error {
        UnexpectedSyntax {
            expected,
            found: self.peek().clone(),
        }
        .into()
    }

    /// Consumes the current token if `extract` accepts it, otherwise fails with the `expected`
    /// syntax kind.
    fn expect<T>(
        &mut self,
        expected: SyntaxKind,
        extract: impl FnOnce(&'a Token) -> Option<T>,
    ) -> Result<T, Error> {
        let Some(output) = extract(self.peek()) else {
            return Err(self.unexpected(expected));
        };

        self.forward();

        Ok(output)
    }

    /// Expects the next [`Token`] to be an [`Identifier`], and returns it.
    ///
    /// # Errors
    /// If the next [`Token`] is not an [`Identifier`].
    pub fn parse_identifier(&mut self) -> Result<Identifier, Error> {
        self.expect(SyntaxKind::Identifier, |token| token.as_identifier().cloned())
    }

    /// Expects the next [`Token`] to be an [`Integer`], and returns it.
    ///
    /// # Errors
    /// If the next [`Token`] is not an [`Integer`].
    pub fn parse_integer(&mut self) -> Result<Integer, Error> {
        self.expect(SyntaxKind::Integer, |token| token.as_integer().cloned())
    }

    /// Expects the next [`Token`] to be a [`Keyword`] of specific kind, and returns it.
    ///
    /// # Errors
    /// If the next [`Token`] is not a [`Keyword`] of specific kind.
    pub fn parse_keyword(&mut self, expected: KeywordKind) -> Result<Keyword, Error> {
        self.expect(SyntaxKind::Keyword(expected), |token| {
            token
                .as_keyword()
                .filter(|keyword| keyword.keyword == expected)
                .cloned()
        })
    }

    /// Expects the next [`Token`] to be an [`Operator`] of specific kind, and returns it.
    ///
    /// # Errors
    /// If the next [`Token`] is not an [`Operator`] of specific kind.
    pub fn parse_operator(&mut self, expected: OperatorKind) -> Result<Operator, Error> {
        self.expect(SyntaxKind::Operator(expected), |token| {
            token
                .as_operator()
                .filter(|operator| operator.operator == expected)
                .cloned()
        })
    }

    /// Expects the next [`Token`] to be a [`Sign`] of specific character, and returns it.
    ///
    /// # Errors
    /// If the next [`Token`] is not a [`Sign`] of specific character.
    pub fn parse_sign(&mut self, expected: char) -> Result<Sign, Error> {
        self.expect(SyntaxKind::Sign(expected), |token| {
            token.as_sign().filter(|sign| sign.sign == expected).cloned()
        })
    }

    /// Expects the parser to be at the [`EndOfInput`] marker, and returns it.
    ///
    /// # Errors
    /// If there are still tokens left before the end of input.
    pub fn parse_end_of_input(&mut self) -> Result<EndOfInput, Error> {
        self.expect(SyntaxKind::EndOfInput, |token| token.as_end_of_input().cloned())
    }
}
