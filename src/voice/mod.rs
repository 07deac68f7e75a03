//! Voice catalog and voice selection.
//!
//! The set of voices is fixed at compile time; the operator picks one by
//! its position in the listing or accepts the default.

mod catalog;

pub use catalog::{SelectionError, Voice, VoiceCatalog};
