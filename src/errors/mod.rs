//! Error types and error handling for the lexer.
//!
//! This module defines the errors a scan can produce. It includes:
//!
//! - Error structures carrying the offending span and any partial token
//! - The recovery offset that guarantees forward progress
//! - Error names and suggestions used by the diagnostic renderer

pub mod errors;

#[cfg(test)]
mod tests;
