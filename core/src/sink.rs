//! Streaming consumers for identified changes.

use crate::diff::{DiffError, IdentifiedChange};

/// Trait for streaming diff changes to a consumer.
pub trait DiffSink {
    /// Called once before any changes are emitted.
    ///
    /// Default is a no-op so sinks that don't need setup can ignore it.
    fn begin(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn emit(&mut self, change: IdentifiedChange) -> Result<(), DiffError>;

    fn finish(&mut self) -> Result<(), DiffError> {
        Ok(())
    }
}

/// A sink that collects changes into a `Vec`.
#[derive(Default)]
pub struct VecSink {
    changes: Vec<IdentifiedChange>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    pub fn into_changes(self) -> Vec<IdentifiedChange> {
        self.changes
    }
}

impl DiffSink for VecSink {
    fn emit(&mut self, change: IdentifiedChange) -> Result<(), DiffError> {
        self.changes.push(change);
        Ok(())
    }
}

/// A sink that forwards changes to a callback.
pub struct CallbackSink<F: FnMut(IdentifiedChange)> {
    f: F,
}

impl<F: FnMut(IdentifiedChange)> CallbackSink<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(IdentifiedChange)> DiffSink for CallbackSink<F> {
    fn emit(&mut self, change: IdentifiedChange) -> Result<(), DiffError> {
        (self.f)(change);
        Ok(())
    }
}
