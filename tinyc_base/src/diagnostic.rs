//! A module for handling diagnostics reported by the compiler phases.

use std::sync::{RwLock, RwLockReadGuard};

use derive_more::{Deref, DerefMut};

/// Represents a trait responsible for handling diagnostics reported by the compiler.
pub trait Handler<T> {
    /// Receives a diagnostic and handles it.
    fn receive(&self, diagnostic: T);
}

/// Is a struct that implements [`Handler`] trait by storing all diagnostics in a vector.
#[derive(Debug, Deref, DerefMut)]
pub struct Storage<T: Send + Sync> {
    diagnostics: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            diagnostics: RwLock::new(Vec::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the underlying vector of diagnostics.
    pub fn into_vec(self) -> Vec<T> { self.diagnostics.into_inner().unwrap() }

    /// Returns a reference to the underlying vector of diagnostics.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> { self.diagnostics.read().unwrap() }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, diagnostic: U) { self.diagnostics.write().unwrap().push(diagnostic.into()); }
}

/// Is a struct that implements [`Handler`] trait by counting the number of diagnostics received.
#[derive(Debug, Default)]
pub struct Counter {
    counter: RwLock<usize>,
}

impl Counter {
    /// Returns the number of diagnostics received.
    #[must_use]
    pub fn count(&self) -> usize { *self.counter.read().unwrap() }
}

impl<T> Handler<T> for Counter {
    fn receive(&self, _diagnostic: T) { *self.counter.write().unwrap() += 1; }
}
