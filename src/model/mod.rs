//! Classifier loading.
//!
//! The classifier is loaded once at startup. A failed load does not abort
//! the process: the outcome is cached in a [`ClassifierSlot`] and every
//! prediction then fails fast with `ClassifierUnavailable`.

pub mod slot;
pub mod source;

pub use slot::ClassifierSlot;
pub use source::ModelSource;
