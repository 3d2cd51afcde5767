//! # Introduction
//!
//! blockscope recognizes a minimal C-like block language (typed
//! declarations, nested blocks, identifier-reference statements) and
//! resolves every identifier use against a lexically scoped symbol table.
//!
//! ## Analysis pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Scope bindings + use facts
//! ```
//!
//! 1. [`parser::lexer`] — maximal-munch tokenizer; characters outside the
//!    token patterns are silently skipped, so tokenizing never fails.
//! 2. [`parser`] — recursive descent over the LL(1) block grammar,
//!    threading a [`scope::Scope`] through every rule.
//! 3. [`scope`] — copy-on-entry symbol table: each block gets a value-copy
//!    of the enclosing bindings, so lookups never walk a parent chain and
//!    inner declarations never leak out.
//!
//! A successful analysis yields the outermost block's final bindings plus
//! one `name:type` fact per identifier use, in source order. The first
//! syntax error or undeclared-variable reference aborts the whole parse;
//! there is no recovery and no partial result.
//!
//! ## Supported language subset
//!
//! Declarations with `int`, `char`, `bool`; blocks nested to any depth;
//! bare identifier statements. `if`, `while`, `for`, and `else` are
//! reserved but accepted nowhere by the grammar.

pub mod parser;
pub mod scope;
