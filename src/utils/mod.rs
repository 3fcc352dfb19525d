//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `pattern` - Glob matching and user path expansion
//! - `validation` - Input validation helpers

pub mod io;
pub mod pattern;
pub mod validation;
