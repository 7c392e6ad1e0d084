//! Provides the [`Input`] trait: a generated piece of source code that knows how to check the
//! tokens or the syntax tree produced from it.
//!
//! Test inputs are plain values (an identifier string, an expression tree without spans, ...)
//! that are printed to source code, tokenized and parsed back. The impls in this module lift
//! the check through the containers the syntax tree is built from: boxed operands and `if`
//! bodies, optional initializers, and statement or token lists.

use proptest::{
    prop_assert_eq,
    test_runner::{TestCaseError, TestCaseResult},
};

/// Represents an input generated for testing purposes.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

/// Binary operands and `if` bodies are boxed on both sides.
impl<T, U> Input<&Box<T>> for &Box<U>
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &Box<T>) -> TestCaseResult { self.as_ref().assert(output.as_ref()) }
}

/// An optional part of a node, such as the initializer of a declaration, must be present in the
/// output exactly when it is present in the input.
impl<T, U> Input<Option<&T>> for Option<&U>
where
    U: std::fmt::Debug,
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: Option<&T>) -> TestCaseResult {
        match (self, output) {
            (Some(input), Some(output)) => input.assert(output),
            (None, None) => Ok(()),
            (Some(input), None) => Err(TestCaseError::fail(format!(
                "expected {input:?} to be parsed, found nothing"
            ))),
            (None, Some(_)) => Err(TestCaseError::fail("expected nothing, found a parsed node")),
        }
    }
}

/// Lists are compared element by element; a mismatch reports the position of the element.
impl<T, U> Input<&[T]> for &[U]
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &[T]) -> TestCaseResult {
        prop_assert_eq!(self.len(), output.len(), "lengths of the lists differ");

        for (index, (input, output)) in self.iter().zip(output).enumerate() {
            input.assert(output).map_err(|error| {
                TestCaseError::fail(format!("element {index} doesn't match: {error}"))
            })?;
        }

        Ok(())
    }
}
