//! Block language parser
//!
//! This module transforms source text into resolved scope information:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser struct, error types, and the analysis entry point
//! - `statements`: the grammar rules, as methods on [`parse::Parser`]
//!
//! # Supported Language
//!
//! A minimal C-like block language:
//! - Typed declarations: `int x;`, `char c;`, `bool b;`
//! - Nested blocks: `{ ... }`
//! - Identifier-reference statements: `x;`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent over an LL(1) grammar, one token of
//! lookahead. No external parser generator dependencies. There is no AST:
//! the parse validates the input, resolves every identifier use against
//! the active scope, and reports the results directly.

pub mod lexer;
pub mod parse;
mod statements;
