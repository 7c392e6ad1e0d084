//! Contains all the definition of syntax trees for the language and their parsing logic.
//!
//! Every node keeps the tokens it was built from, so each of them implements
//! [`tinyc_base::source_file::SourceElement`]. The [`std::fmt::Display`] implementation of the
//! nodes renders the canonical textual form of the tree, e.g.
//! `Program([Declaration("int", "x", Number("1"))])`.

pub mod expression;
pub mod program;
pub mod statement;
