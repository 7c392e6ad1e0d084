//! Contains the utilities shared by the property based tests of the workspace.

pub mod input;
