//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts giblang source
//! into a flat, lossless stream of tokens. It handles:
//!
//! - Single-token scanning from any offset (`lexer::next_token`)
//! - Maximal-munch identifier runs classified against a keyword trie
//! - Integer numbers, strings, line comments and whitespace
//! - Single-character punctuation and operators
//! - Error recovery for unterminated strings and unknown characters

pub mod escapes;
pub mod keywords;
pub mod lexer;
pub mod tokens;
