//! Shared utility functions.

pub mod safe_cast;
