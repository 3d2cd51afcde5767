//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: error types, cursor and expectation helpers, and the
//! [`Parser::analyze`] entry point.
//!
//! # Parser Architecture
//!
//! The parser uses a recursive descent approach with the following
//! organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: the grammar rules (blocks, declarations, uses)
//!
//! Grammar-rule methods are implemented in a separate `impl Parser` block,
//! extending the parser while sharing the cursor state defined here. Scopes
//! are not part of that state: every rule that needs one receives it as an
//! explicit parameter, so a parse owns all of its mutable state and any
//! number of parses can run independently in one process.

use crate::parser::lexer::{Lexer, SourceLocation, Token, TokenKind};
use crate::scope::{DeclaredType, Scope};
use std::fmt;

/// Errors that abort an analysis.
///
/// Every error is fatal: the parse stops at the first one, with no
/// resynchronization and no partial symbol table.
#[derive(Debug, Clone)]
pub enum ParseError {
    /// The next token does not match what the active grammar rule requires
    UnexpectedToken {
        expected: String,
        found: String,
        location: SourceLocation,
    },

    /// The token stream ran out while a rule still required input
    UnexpectedEnd {
        expected: String,
        location: SourceLocation,
    },

    /// An identifier-use statement referenced a name absent from the
    /// active scope
    UndeclaredVariable {
        name: String,
        location: SourceLocation,
    },
}

impl ParseError {
    /// Returns the source location the error points at.
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::UnexpectedEnd { location, .. }
            | ParseError::UndeclaredVariable { location, .. } => *location,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                expected,
                found,
                location,
            } => {
                write!(
                    f,
                    "Syntax error at line {}, column {}: expected {}, found {}",
                    location.line, location.column, expected, found
                )
            }
            ParseError::UnexpectedEnd { expected, location } => {
                write!(
                    f,
                    "Syntax error at line {}, column {}: expected {}, found end of input",
                    location.line, location.column, expected
                )
            }
            ParseError::UndeclaredVariable { name, location } => {
                write!(
                    f,
                    "Undeclared variable '{}' at line {}, column {}",
                    name, location.line, location.column
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// One resolved identifier use, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub name: String,
    pub declared_type: DeclaredType,
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.declared_type)
    }
}

/// Successful outcome of an analysis.
#[derive(Debug)]
pub struct Analysis {
    /// The outermost block's scope, as it stood at the closing brace
    pub scope: Scope,
    /// One [`Fact`] per identifier-use statement encountered
    pub facts: Vec<Fact>,
}

/// Recursive descent parser for the block language
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    end: SourceLocation,
    pub(crate) facts: Vec<Fact>,
}

impl Parser {
    /// Tokenize `source` and set up a parse over the resulting stream.
    ///
    /// Tokenizing cannot fail; characters outside the token patterns are
    /// skipped by the lexer.
    pub fn new(source: &str) -> Self {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize();
        let end = lexer.current_location();

        Self {
            tokens,
            position: 0,
            end,
            facts: Vec::new(),
        }
    }

    /// Analyze the input: parse exactly one top-level block against an
    /// empty root scope.
    ///
    /// On success the result carries the outermost block's final bindings
    /// and the ordered identifier-use facts. Tokens remaining after the
    /// block are accepted and ignored.
    pub fn analyze(&mut self) -> Result<Analysis, ParseError> {
        let root = Scope::new();
        let scope = self.parse_block(&root)?;

        Ok(Analysis {
            scope,
            facts: std::mem::take(&mut self.facts),
        })
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().map(|t| t.kind == kind).unwrap_or(false)
    }

    /// True if the next token is one of the type keywords `int`, `char`,
    /// `bool`.
    pub(crate) fn check_type_keyword(&self) -> bool {
        self.peek()
            .map(|t| {
                t.kind == TokenKind::Keyword
                    && DeclaredType::from_keyword(&t.lexeme).is_some()
            })
            .unwrap_or(false)
    }

    /// Consume one token of the given kind, or fail.
    pub(crate) fn expect_kind(
        &mut self,
        kind: TokenKind,
        ctx: &str,
    ) -> Result<Token, ParseError> {
        if let Some(token) = self.peek() {
            if token.kind == kind {
                let token = token.clone();
                self.advance();
                return Ok(token);
            }
        }

        Err(self.unexpected(format!("{} {}", kind, ctx)))
    }

    /// Consume a type keyword and map it to its [`DeclaredType`].
    pub(crate) fn expect_type_keyword(&mut self) -> Result<DeclaredType, ParseError> {
        if let Some(token) = self.peek() {
            if token.kind == TokenKind::Keyword {
                if let Some(declared_type) = DeclaredType::from_keyword(&token.lexeme) {
                    self.advance();
                    return Ok(declared_type);
                }
            }
        }

        Err(self.unexpected("a type keyword".to_string()))
    }

    /// Build the error for a failed expectation at the current cursor.
    pub(crate) fn unexpected(&self, expected: String) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.to_string(),
                location: token.location,
            },
            None => ParseError::UnexpectedEnd {
                expected,
                location: self.end,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty_block() {
        let mut parser = Parser::new("{ }");
        let analysis = parser.analyze().unwrap();

        assert!(analysis.scope.is_empty());
        assert!(analysis.facts.is_empty());
    }

    #[test]
    fn test_analyze_declarations() {
        let mut parser = Parser::new("{ int x; char y; }");
        let analysis = parser.analyze().unwrap();

        assert_eq!(analysis.scope.lookup("x"), Some(DeclaredType::Int));
        assert_eq!(analysis.scope.lookup("y"), Some(DeclaredType::Char));
        assert_eq!(analysis.scope.len(), 2);
    }

    #[test]
    fn test_facts_in_source_order() {
        let mut parser = Parser::new("{ int x; bool y; x; y; x; }");
        let analysis = parser.analyze().unwrap();

        let reported: Vec<String> =
            analysis.facts.iter().map(|f| f.to_string()).collect();
        assert_eq!(reported, vec!["x:int", "y:bool", "x:int"]);
    }

    #[test]
    fn test_undeclared_variable() {
        let mut parser = Parser::new("{ x; }");
        let err = parser.analyze().unwrap_err();

        assert!(matches!(
            err,
            ParseError::UndeclaredVariable { ref name, .. } if name == "x"
        ));
    }

    #[test]
    fn test_missing_closing_brace() {
        let mut parser = Parser::new("{ int x;");
        let err = parser.analyze().unwrap_err();

        assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_invalid_statement_token() {
        // A number can start neither a declaration nor a statement, so the
        // block fails at its expected closing brace
        let mut parser = Parser::new("{ 42; }");
        let err = parser.analyze().unwrap_err();

        match err {
            ParseError::UnexpectedToken { found, location, .. } => {
                assert_eq!(found, "number 42");
                assert_eq!(location.line, 1);
            }
            other => panic!("Expected UnexpectedToken, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_tokens_accepted() {
        let mut parser = Parser::new("{ int x; x; } leftover tokens ;");
        let analysis = parser.analyze().unwrap();

        assert_eq!(analysis.facts.len(), 1);
    }

    #[test]
    fn test_error_carries_location() {
        let mut parser = Parser::new("{\n  int x;\n  y;\n}");
        let err = parser.analyze().unwrap_err();

        assert_eq!(err.location().line, 3);
        assert_eq!(err.location().column, 3);
    }
}
