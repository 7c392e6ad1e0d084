//! Contains the [`TokenStream`] struct, the output of the lexical analysis phase.

use std::{ops::Index, sync::Arc};

use derive_more::Deref;
use tinyc_base::source_file::{SourceFile, Span};

use crate::token::{self, EndOfInput, Token};

/// Is a list of [`Token`]s in source order, terminated by exactly one [`Token::EndOfInput`].
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the compilation process.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// This function calls [`Token::lex()`] repeatedly until the source code is exhausted and then
    /// appends the [`Token::EndOfInput`] marker. Tokenization never fails: characters that don't
    /// belong to any lexical class become [`Token::Unknown`] tokens.
    #[must_use]
    pub fn tokenize(source_file: &Arc<SourceFile>) -> Self {
        let mut tokens = Vec::new();
        let mut source_file_iterator = source_file.iter();

        loop {
            match Token::lex(&mut source_file_iterator) {
                Ok(token) => tokens.push(token),
                Err(token::Error::EndOfSourceCodeIteratorArgument) => break,
            }
        }

        tokens.push(
            EndOfInput {
                span: Span::to_end(source_file.clone(), source_file.content().len()).unwrap(),
                location: source_file_iterator.location(),
            }
            .into(),
        );

        Self { tokens }
    }

    /// Gets the [`EndOfInput`] token terminating the stream.
    #[must_use]
    pub fn end_of_input(&self) -> &EndOfInput {
        self.tokens
            .last()
            .and_then(Token::as_end_of_input)
            .expect("token stream must end with the end of input")
    }

    /// Dissolves this struct into the list of its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}
