//! Contains the syntax trees related to statements and their parsing logic.

use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use getset::Getters;
use tinyc_base::source_file::{SourceElement, Span};
use tinyc_lexical::token::{Identifier, Keyword, KeywordKind, Operator, OperatorKind, Sign, Token};

use super::expression::Expression;
use crate::{
    error::{Error, SyntaxKind},
    parser::Parser,
};

/// Syntax Synopsis:
///
/// ``` ebnf
/// Statement:
///     Declaration
///     | If
///     | Assignment
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum Statement {
    Declaration(Declaration),
    If(If),
    Assignment(Assignment),
}

impl SourceElement for Statement {
    fn span(&self) -> Span {
        match self {
            Self::Declaration(declaration) => declaration.span(),
            Self::If(r#if) => r#if.span(),
            Self::Assignment(assignment) => assignment.span(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Declaration(declaration) => declaration.fmt(f),
            Self::If(r#if) => r#if.fmt(f),
            Self::Assignment(assignment) => assignment.fmt(f),
        }
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Initializer:
///     '=' Expression
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct Initializer {
    #[get = "pub"]
    equals: Operator,
    #[get = "pub"]
    expression: Expression,
}

impl Initializer {
    /// Dissolves the [`Initializer`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (Operator, Expression) { (self.equals, self.expression) }
}

impl SourceElement for Initializer {
    fn span(&self) -> Span { self.equals.span().join(&self.expression.span()).unwrap() }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Declaration:
///     ('int' | 'float' | 'double') Identifier Initializer? ';'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct Declaration {
    #[get = "pub"]
    type_keyword: Keyword,
    #[get = "pub"]
    identifier: Identifier,
    #[get = "pub"]
    initializer: Option<Initializer>,
    #[get = "pub"]
    semicolon: Sign,
}

impl Declaration {
    /// Dissolves the [`Declaration`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (Keyword, Identifier, Option<Initializer>, Sign) {
        (
            self.type_keyword,
            self.identifier,
            self.initializer,
            self.semicolon,
        )
    }
}

impl SourceElement for Declaration {
    fn span(&self) -> Span {
        self.type_keyword
            .span()
            .join(&self.semicolon.span())
            .unwrap()
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Declaration({:?}, {:?}, ",
            self.type_keyword.span.str(),
            self.identifier.span.str()
        )?;

        match &self.initializer {
            Some(initializer) => write!(f, "{})", initializer.expression),
            None => write!(f, "None)"),
        }
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Assignment:
///     Identifier '=' Expression ';'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct Assignment {
    #[get = "pub"]
    identifier: Identifier,
    #[get = "pub"]
    equals: Operator,
    #[get = "pub"]
    expression: Expression,
    #[get = "pub"]
    semicolon: Sign,
}

impl Assignment {
    /// Dissolves the [`Assignment`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (Identifier, Operator, Expression, Sign) {
        (
            self.identifier,
            self.equals,
            self.expression,
            self.semicolon,
        )
    }
}

impl SourceElement for Assignment {
    fn span(&self) -> Span {
        self.identifier
            .span()
            .join(&self.semicolon.span())
            .unwrap()
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment({:?}, {})",
            self.identifier.span.str(),
            self.expression
        )
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// If:
///     'if' '(' Expression ')' Statement
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct If {
    #[get = "pub"]
    if_keyword: Keyword,
    #[get = "pub"]
    open_parenthesis: Sign,
    #[get = "pub"]
    condition: Expression,
    #[get = "pub"]
    close_parenthesis: Sign,
    #[get = "pub"]
    body: Box<Statement>,
}

impl If {
    /// Dissolves the [`If`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (Keyword, Sign, Expression, Sign, Statement) {
        (
            self.if_keyword,
            self.open_parenthesis,
            self.condition,
            self.close_parenthesis,
            *self.body,
        )
    }
}

impl SourceElement for If {
    fn span(&self) -> Span { self.if_keyword.span().join(&self.body.span()).unwrap() }
}

impl Display for If {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "If({}, {})", self.condition, self.body)
    }
}

impl<'a> Parser<'a> {
    /// Parses a [`Statement`], dispatching on the current token.
    ///
    /// # Errors
    /// If the current token can't start a statement or the statement is malformed.
    pub fn parse_statement(&mut self) -> Result<Statement, Error> {
        match self.peek() {
            Token::Keyword(keyword) if keyword.keyword.is_type() => {
                self.parse_declaration().map(Statement::Declaration)
            }
            Token::Keyword(keyword) if keyword.keyword == KeywordKind::If => {
                self.parse_if().map(Statement::If)
            }
            Token::Identifier(..) => self.parse_assignment().map(Statement::Assignment),
            _ => Err(self.unexpected(SyntaxKind::Statement)),
        }
    }

    /// Expects the next [`Token`] to be a type keyword (`int`, `float` or `double`), and returns
    /// it.
    ///
    /// # Errors
    /// If the next [`Token`] is not a type keyword.
    pub fn parse_type_keyword(&mut self) -> Result<Keyword, Error> {
        match self.peek() {
            Token::Keyword(keyword) if keyword.keyword.is_type() => {
                self.forward();
                Ok(keyword.clone())
            }
            _ => Err(self.unexpected(SyntaxKind::TypeKeyword)),
        }
    }

    /// Parses a [`Declaration`].
    ///
    /// # Errors
    /// If the tokens don't form a declaration.
    pub fn parse_declaration(&mut self) -> Result<Declaration, Error> {
        let type_keyword = self.parse_type_keyword()?;
        let identifier = self.parse_identifier()?;

        let initializer = match self.peek() {
            Token::Operator(operator) if operator.operator == OperatorKind::Assign => {
                self.forward();

                Some(Initializer {
                    equals: operator.clone(),
                    expression: self.parse_expression()?,
                })
            }
            _ => None,
        };

        let semicolon = self.parse_sign(';')?;

        Ok(Declaration {
            type_keyword,
            identifier,
            initializer,
            semicolon,
        })
    }

    /// Parses an [`Assignment`].
    ///
    /// # Errors
    /// If the tokens don't form an assignment.
    pub fn parse_assignment(&mut self) -> Result<Assignment, Error> {
        let identifier = self.parse_identifier()?;
        let equals = self.parse_operator(OperatorKind::Assign)?;
        let expression = self.parse_expression()?;
        let semicolon = self.parse_sign(';')?;

        Ok(Assignment {
            identifier,
            equals,
            expression,
            semicolon,
        })
    }

    /// Parses an [`If`] statement.
    ///
    /// # Errors
    /// If the tokens don't form an if statement.
    pub fn parse_if(&mut self) -> Result<If, Error> {
        let if_keyword = self.parse_keyword(KeywordKind::If)?;
        let open_parenthesis = self.parse_sign('(')?;
        let condition = self.parse_expression()?;
        let close_parenthesis = self.parse_sign(')')?;
        let body = Box::new(self.parse_statement()?);

        Ok(If {
            if_keyword,
            open_parenthesis,
            condition,
            close_parenthesis,
            body,
        })
    }
}
