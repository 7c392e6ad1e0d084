//! Contains the syntax trees related to expressions and their parsing logic.

use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use getset::Getters;
use tinyc_base::source_file::{SourceElement, Span};
use tinyc_lexical::token::{Identifier, Integer, Operator, OperatorKind, Token};

use crate::{
    error::{Error, SyntaxKind},
    parser::Parser,
};

/// Syntax Synopsis:
///
/// ``` ebnf
/// BinaryOperator:
///     '+'
///     | '-'
///     | '<'
///     | '>'
///     | '=='
///     | '*'
///     | '/'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum BinaryOperator {
    Add(Operator),
    Subtract(Operator),
    LessThan(Operator),
    GreaterThan(Operator),
    Equal(Operator),
    Multiply(Operator),
    Divide(Operator),
}

impl BinaryOperator {
    /// Gets the precedence of the operator (the higher the number, the first it will be evaluated)
    ///
    /// The least operator has precedence 1.
    #[must_use]
    pub fn get_precedence(&self) -> u32 {
        match self {
            Self::Add(..)
            | Self::Subtract(..)
            | Self::LessThan(..)
            | Self::GreaterThan(..)
            | Self::Equal(..) => 1,
            Self::Multiply(..) | Self::Divide(..) => 2,
        }
    }

    /// Gets the operator token of the binary operator.
    #[must_use]
    pub fn operator(&self) -> &Operator {
        match self {
            Self::Add(token)
            | Self::Subtract(token)
            | Self::LessThan(token)
            | Self::GreaterThan(token)
            | Self::Equal(token)
            | Self::Multiply(token)
            | Self::Divide(token) => token,
        }
    }

    /// Gets the string representation of the binary operator.
    #[must_use]
    pub fn as_str(&self) -> &'static str { self.operator().operator.as_str() }

    fn from_operator(operator: Operator) -> Option<Self> {
        match operator.operator {
            OperatorKind::Add => Some(Self::Add(operator)),
            OperatorKind::Subtract => Some(Self::Subtract(operator)),
            OperatorKind::LessThan => Some(Self::LessThan(operator)),
            OperatorKind::GreaterThan => Some(Self::GreaterThan(operator)),
            OperatorKind::Equal => Some(Self::Equal(operator)),
            OperatorKind::Multiply => Some(Self::Multiply(operator)),
            OperatorKind::Divide => Some(Self::Divide(operator)),
            _ => None,
        }
    }
}

impl SourceElement for BinaryOperator {
    fn span(&self) -> Span { self.operator().span.clone() }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Binary:
///     Expression BinaryOperator Expression
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct Binary {
    #[get = "pub"]
    left_operand: Box<Expression>,
    #[get = "pub"]
    operator: BinaryOperator,
    #[get = "pub"]
    right_operand: Box<Expression>,
}

impl Binary {
    /// Dissolves the [`Binary`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (Expression, BinaryOperator, Expression) {
        (*self.left_operand, self.operator, *self.right_operand)
    }
}

impl SourceElement for Binary {
    fn span(&self) -> Span {
        self.left_operand
            .span()
            .join(&self.right_operand.span())
            .unwrap()
    }
}

impl Display for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BinaryOp({:?}, {}, {})",
            self.operator.as_str(),
            self.left_operand,
            self.right_operand
        )
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Expression:
///     Binary
///     | Integer
///     | Identifier
///     ;
/// ```
///
/// A parenthesized expression doesn't have a node of its own, it yields the expression inside
/// the parentheses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum Expression {
    Binary(Binary),
    Number(Integer),
    Identifier(Identifier),
}

impl SourceElement for Expression {
    fn span(&self) -> Span {
        match self {
            Self::Binary(binary) => binary.span(),
            Self::Number(number) => number.span(),
            Self::Identifier(identifier) => identifier.span(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(binary) => binary.fmt(f),
            Self::Number(number) => write!(f, "Number({:?})", number.span.str()),
            Self::Identifier(identifier) => write!(f, "Identifier({:?})", identifier.span.str()),
        }
    }
}

impl<'a> Parser<'a> {
    /// Parses an [`Expression`].
    ///
    /// ``` ebnf
    /// Expression:
    ///     Term (('+' | '-' | '<' | '>' | '==') Term)*
    ///     ;
    /// ```
    ///
    /// # Errors
    /// If the tokens don't form an expression.
    pub fn parse_expression(&mut self) -> Result<Expression, Error> {
        self.parse_binary(1, Self::parse_term)
    }

    /// Parses a term: the operands of the additive and comparison operators.
    ///
    /// ``` ebnf
    /// Term:
    ///     Factor (('*' | '/') Factor)*
    ///     ;
    /// ```
    ///
    /// # Errors
    /// If the tokens don't form a term.
    pub fn parse_term(&mut self) -> Result<Expression, Error> {
        self.parse_binary(2, Self::parse_factor)
    }

    /// Parses a factor: an integer, an identifier or a parenthesized expression.
    ///
    /// # Errors
    /// If the current token can't start an expression.
    pub fn parse_factor(&mut self) -> Result<Expression, Error> {
        match self.peek() {
            Token::Integer(integer) => {
                self.forward();
                Ok(Expression::Number(integer.clone()))
            }

            Token::Identifier(identifier) => {
                self.forward();
                Ok(Expression::Identifier(identifier.clone()))
            }

            Token::Sign(sign) if sign.sign == '(' => {
                self.forward();

                let expression = self.parse_expression()?;
                self.parse_sign(')')?;

                Ok(expression)
            }

            _ => Err(self.unexpected(SyntaxKind::Expression)),
        }
    }

    /// Parses a left associative chain of operands joined by the binary operators of the given
    /// precedence.
    fn parse_binary(
        &mut self,
        precedence: u32,
        parse_operand: impl Fn(&mut Self) -> Result<Expression, Error>,
    ) -> Result<Expression, Error> {
        let mut expression = parse_operand(self)?;

        while let Some(operator) = self.try_parse_binary_operator(precedence) {
            let right_operand = parse_operand(self)?;

            expression = Expression::Binary(Binary {
                left_operand: Box::new(expression),
                operator,
                right_operand: Box::new(right_operand),
            });
        }

        Ok(expression)
    }

    fn try_parse_binary_operator(&mut self, precedence: u32) -> Option<BinaryOperator> {
        let binary_operator = self
            .peek()
            .as_operator()
            .cloned()
            .and_then(BinaryOperator::from_operator)
            .filter(|operator| operator.get_precedence() == precedence)?;

        self.forward();

        Some(binary_operator)
    }
}
