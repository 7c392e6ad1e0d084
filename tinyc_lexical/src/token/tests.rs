use std::{
    fmt::{Display, Write},
    path::PathBuf,
    str::FromStr,
};

use lazy_static::lazy_static;
use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, prop_oneof, proptest,
    strategy::{BoxedStrategy, Just, Strategy},
    test_runner::{TestCaseError, TestCaseResult},
};
use strum::IntoEnumIterator;
use tinyc_base::source_file::{Location, SourceFile};
use tinyc_test::input::Input;

use super::{KeywordKind, OperatorKind, State, TokenKind, SIGN_CHARACTERS};

/// Represents an input for the [`super::Identifier`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    /// The valid identifier string.
    pub string: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.string) }
}

impl Arbitrary for Identifier {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[A-Za-z_][A-Za-z0-9_]{0,15}"
            .prop_filter_map(
                "filter out identifiers that can be used as a keyword",
                |x| {
                    if KeywordKind::from_str(x.as_ref()).is_ok() {
                        None
                    } else {
                        Some(Self { string: x })
                    }
                },
            )
            .boxed()
    }
}

impl Input<&super::Identifier> for &Identifier {
    fn assert(self, output: &super::Identifier) -> TestCaseResult {
        prop_assert_eq!(self.string.as_str(), output.span.str());
        Ok(())
    }
}

/// Represents a valid keyword input for the [`super::Keyword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword {
    /// The kind of keyword.
    pub keyword: KeywordKind,
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword.as_str())
    }
}

impl Arbitrary for Keyword {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        lazy_static! {
            static ref KEYWORDS: Vec<KeywordKind> = KeywordKind::iter().collect();
        }

        proptest::sample::select(KEYWORDS.as_slice())
            .prop_map(|kind| Self { keyword: kind })
            .boxed()
    }
}

impl Input<&super::Keyword> for &Keyword {
    fn assert(self, output: &super::Keyword) -> TestCaseResult {
        prop_assert_eq!(self.keyword, output.keyword);
        prop_assert_eq!(self.keyword.as_str(), output.span.str());
        Ok(())
    }
}

/// Represents an input for the [`super::Integer`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer {
    /// The digits of the integer.
    pub value: String,
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.value) }
}

impl Arbitrary for Integer {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[0-9]{1,24}".prop_map(|value| Self { value }).boxed()
    }
}

impl Input<&super::Integer> for &Integer {
    fn assert(self, output: &super::Integer) -> TestCaseResult {
        prop_assert_eq!(self.value.as_str(), output.span.str());
        Ok(())
    }
}

/// Represents an input for the [`super::Operator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operator {
    /// The kind of operator.
    pub operator: OperatorKind,
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.operator.as_str())
    }
}

impl Arbitrary for Operator {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        lazy_static! {
            static ref OPERATORS: Vec<OperatorKind> = OperatorKind::iter().collect();
        }

        proptest::sample::select(OPERATORS.as_slice())
            .prop_map(|operator| Self { operator })
            .boxed()
    }
}

impl Input<&super::Operator> for &Operator {
    fn assert(self, output: &super::Operator) -> TestCaseResult {
        prop_assert_eq!(self.operator, output.operator);
        prop_assert_eq!(self.operator.as_str(), output.span.str());
        Ok(())
    }
}

/// Represents an input for the [`super::Sign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sign {
    /// The sign character.
    pub sign: char,
}

impl Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_char(self.sign) }
}

impl Arbitrary for Sign {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(SIGN_CHARACTERS.to_vec())
            .prop_map(|sign| Self { sign })
            .boxed()
    }
}

impl Input<&super::Sign> for &Sign {
    fn assert(self, output: &super::Sign) -> TestCaseResult {
        prop_assert_eq!(self.sign, output.sign);
        Ok(())
    }
}

/// Represents an input for the [`super::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unknown {
    /// A character that doesn't start any other token.
    pub character: char,
}

impl Display for Unknown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.character)
    }
}

impl Arbitrary for Unknown {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::char::any()
            .prop_filter_map("allows only unclassified characters", |character| {
                (State::start(character) == State::Unknown).then_some(Self { character })
            })
            .boxed()
    }
}

impl Input<&super::Unknown> for &Unknown {
    fn assert(self, output: &super::Unknown) -> TestCaseResult {
        let mut expected = String::new();
        expected.push(self.character);

        prop_assert_eq!(expected.as_str(), output.span.str());
        Ok(())
    }
}

/// Represents a run of discarded white spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum WhiteSpaces {
    Spaces(u8),
    Tabs(u8),
    NewLines(u8),
}

impl Arbitrary for WhiteSpaces {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0u8..4)
            .prop_flat_map(|x| {
                prop_oneof![
                    Just(Self::Spaces(x)),
                    Just(Self::Tabs(x)),
                    Just(Self::NewLines(x))
                ]
            })
            .boxed()
    }
}

impl Display for WhiteSpaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (character, count) = match self {
            Self::Spaces(x) => (' ', x),
            Self::Tabs(x) => ('\t', x),
            Self::NewLines(x) => ('\n', x),
        };

        for _ in 0..*count {
            f.write_char(character)?;
        }

        Ok(())
    }
}

impl WhiteSpaces {
    /// Gets the location right after the white spaces when they start a source file.
    pub fn end_location(self) -> Location {
        match self {
            Self::Spaces(x) | Self::Tabs(x) => Location {
                line: 1,
                column: x as usize + 1,
            },
            Self::NewLines(x) => Location {
                line: x as usize + 1,
                column: 1,
            },
        }
    }
}

/// Represents an input for the [`super::Token`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Token {
    Identifier(Identifier),
    Keyword(Keyword),
    Integer(Integer),
    Operator(Operator),
    Sign(Sign),
    Unknown(Unknown),
}

impl Arbitrary for Token {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Identifier::arbitrary().prop_map(Self::Identifier),
            Keyword::arbitrary().prop_map(Self::Keyword),
            Integer::arbitrary().prop_map(Self::Integer),
            Operator::arbitrary().prop_map(Self::Operator),
            Sign::arbitrary().prop_map(Self::Sign),
            Unknown::arbitrary().prop_map(Self::Unknown),
        ]
        .boxed()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(x) => Display::fmt(x, f),
            Self::Keyword(x) => Display::fmt(x, f),
            Self::Integer(x) => Display::fmt(x, f),
            Self::Operator(x) => Display::fmt(x, f),
            Self::Sign(x) => Display::fmt(x, f),
            Self::Unknown(x) => Display::fmt(x, f),
        }
    }
}

impl Input<&super::Token> for &Token {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        match (self, output) {
            (Token::Identifier(i), super::Token::Identifier(o)) => i.assert(o),
            (Token::Keyword(i), super::Token::Keyword(o)) => i.assert(o),
            (Token::Integer(i), super::Token::Integer(o)) => i.assert(o),
            (Token::Operator(i), super::Token::Operator(o)) => i.assert(o),
            (Token::Sign(i), super::Token::Sign(o)) => i.assert(o),
            (Token::Unknown(i), super::Token::Unknown(o)) => i.assert(o),
            _ => Err(TestCaseError::fail(format!(
                "expected {self:?} got {output:?}",
            ))),
        }
    }
}

fn lex(source: String) -> Result<super::Token, TestCaseError> {
    let source_file = SourceFile::temp(source)?;
    let mut iterator = source_file.iter();

    let token = super::Token::lex(&mut iterator)?;

    // the whole source is consumed by a single token
    prop_assert!(iterator.peek().is_none());

    Ok(token)
}

proptest! {
    #[test]
    fn token_test(
        white_spaces in WhiteSpaces::arbitrary(),
        input in Token::arbitrary()
    ) {
        let source = format!("{white_spaces}{input}");
        let token = lex(source)?;

        input.assert(&token)?;
        prop_assert_eq!(token.location(), white_spaces.end_location());
    }
}

fn lex_first(source: &str) -> super::Token {
    let source_file = SourceFile::from_string(PathBuf::from("<test>"), source.to_string());
    let mut iterator = source_file.iter();

    super::Token::lex(&mut iterator).unwrap()
}

#[test]
fn double_operator_is_a_single_token() {
    let token = lex_first("==");

    assert_eq!(token.kind(), TokenKind::Operator);
    assert_eq!(token.text(), "==");
    assert_eq!(
        token.as_operator().unwrap().operator,
        OperatorKind::Equal
    );
}

#[test]
fn operator_without_double_form_stays_single() {
    let token = lex_first("=!");

    assert_eq!(token.text(), "=");
    assert_eq!(
        token.into_operator().unwrap().operator,
        OperatorKind::Assign
    );
}

#[test]
fn keyword_must_match_the_whole_word() {
    assert_eq!(lex_first("int").kind(), TokenKind::Keyword);
    assert_eq!(lex_first("integer").kind(), TokenKind::Identifier);
    assert_eq!(lex_first("_if").kind(), TokenKind::Identifier);
    assert_eq!(lex_first("If").kind(), TokenKind::Identifier);
}

#[test]
fn identifier_accepts_unicode_letters() {
    let token = lex_first("größe2 = 1");

    assert_eq!(token.kind(), TokenKind::Identifier);
    assert_eq!(token.text(), "größe2");
}

#[test]
fn identifier_starts_with_letters_only() {
    assert_eq!(lex_first("Ⅻ").kind(), TokenKind::Unknown);
    assert_eq!(lex_first("\u{301}x").kind(), TokenKind::Unknown);

    // numbers of any kind may continue an identifier
    let token = lex_first("xⅫ²");

    assert_eq!(token.kind(), TokenKind::Identifier);
    assert_eq!(token.text(), "xⅫ²");
}

#[test]
fn integer_accepts_unicode_digits() {
    for source in ["٣", "²", "١٢٣", "٣²7"] {
        let token = lex_first(source);

        assert_eq!(token.kind(), TokenKind::Integer);
        assert_eq!(token.text(), source);
    }

    let token = lex_first("12½");

    assert_eq!(token.kind(), TokenKind::Integer);
    assert_eq!(token.text(), "12");
}

#[test]
fn information_separators_are_discarded() {
    let token = lex_first("\u{1C}\u{1D}\u{1E}\u{1F}x");

    assert_eq!(token.kind(), TokenKind::Identifier);
    assert_eq!(token.location(), Location { line: 1, column: 5 });
}

#[test]
fn integer_stops_at_the_first_non_digit() {
    let token = lex_first("123abc");

    assert_eq!(token.kind(), TokenKind::Integer);
    assert_eq!(token.text(), "123");
}

#[test]
fn end_of_source_code() {
    let source_file = SourceFile::from_string(PathBuf::from("<test>"), " \n\t".to_string());
    let mut iterator = source_file.iter();

    assert_eq!(
        super::Token::lex(&mut iterator),
        Err(super::Error::EndOfSourceCodeIteratorArgument)
    );
    assert_eq!(iterator.location(), Location { line: 2, column: 2 });
}

#[test]
fn state_transitions() {
    assert_eq!(State::start(' '), State::Start);
    assert_eq!(State::start('x'), State::Identifier);
    assert_eq!(State::start('_'), State::Identifier);
    assert_eq!(State::start('7'), State::Integer);
    assert_eq!(State::start('!'), State::Operator);
    assert_eq!(State::start('{'), State::Sign);
    assert_eq!(State::start('$'), State::Unknown);
    assert_eq!(State::start('٣'), State::Integer);
    assert_eq!(State::start('\u{1F}'), State::Start);
    assert_eq!(State::start('Ⅻ'), State::Unknown);

    assert_eq!(State::Identifier.transition('9'), Some(State::Identifier));
    assert_eq!(State::Identifier.transition('+'), None);
    assert_eq!(State::Integer.transition('a'), None);
    assert_eq!(State::Integer.transition('²'), Some(State::Integer));
    assert_eq!(State::Operator.transition('='), None);
    assert_eq!(State::Sign.transition(';'), None);
    assert_eq!(State::Unknown.transition('$'), None);
}
