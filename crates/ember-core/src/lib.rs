//! # ember-core
//! Foundation types and constants for the Ember protocol.

pub mod constants;
pub mod error;
pub mod index;
pub mod types;
