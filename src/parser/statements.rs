//! Grammar rule implementation
//!
//! The block language grammar, one method per rule:
//!
//! ```text
//! Block := '{' Decls Stmts '}'
//! Decls := Decl*
//! Decl  := ('int'|'char'|'bool') Identifier ';'
//! Stmts := Stmt*
//! Stmt  := Block | Decl | Identifier ';'
//! ```
//!
//! The grammar is LL(1): `{`, the three type keywords, and bare
//! identifiers are mutually exclusive leading symbols, so one token of
//! lookahead always picks the production. All rule methods are
//! `pub(crate)` methods on the [`Parser`] struct; the active scope is
//! passed explicitly into each rule.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Fact, ParseError, Parser};
use crate::scope::Scope;

impl Parser {
    /// Parse a block against a fresh copy of the enclosing scope.
    ///
    /// Entry snapshots `parent` into a child scope; the block's
    /// declarations land in the child and the parent is never touched.
    /// The finished child is returned so the caller decides its fate:
    /// statement-level blocks drop it, the top-level driver keeps it for
    /// reporting.
    pub(crate) fn parse_block(&mut self, parent: &Scope) -> Result<Scope, ParseError> {
        let mut scope = Scope::enter(parent);

        self.expect_kind(TokenKind::LBrace, "at start of block")?;
        self.parse_decls(&mut scope)?;
        self.parse_stmts(&mut scope)?;
        self.expect_kind(TokenKind::RBrace, "after block")?;

        Ok(scope)
    }

    /// Parse zero or more leading declarations.
    pub(crate) fn parse_decls(&mut self, scope: &mut Scope) -> Result<(), ParseError> {
        while self.check_type_keyword() {
            self.parse_decl(scope)?;
        }
        Ok(())
    }

    /// Parse one declaration and bind the name in the active scope.
    ///
    /// Redeclaring a name already bound in this scope silently replaces
    /// the earlier binding.
    pub(crate) fn parse_decl(&mut self, scope: &mut Scope) -> Result<(), ParseError> {
        let declared_type = self.expect_type_keyword()?;
        let name = self.expect_kind(TokenKind::Identifier, "after type keyword")?;
        self.expect_kind(TokenKind::Semicolon, "after declaration")?;

        scope.declare(&name.lexeme, declared_type);
        Ok(())
    }

    /// Parse zero or more statements.
    pub(crate) fn parse_stmts(&mut self, scope: &mut Scope) -> Result<(), ParseError> {
        while self.check_statement_start() {
            self.parse_stmt(scope)?;
        }
        Ok(())
    }

    /// Parse a single statement, dispatching on one token of lookahead.
    pub(crate) fn parse_stmt(&mut self, scope: &mut Scope) -> Result<(), ParseError> {
        if self.check_kind(TokenKind::LBrace) {
            // Nested block; its scope is dropped when it closes
            self.parse_block(scope)?;
            return Ok(());
        }

        if self.check_type_keyword() {
            return self.parse_decl(scope);
        }

        if self.check_kind(TokenKind::Identifier) {
            return self.parse_use(scope);
        }

        Err(self.unexpected("a statement".to_string()))
    }

    /// Parse an identifier-use statement and resolve it.
    ///
    /// The name must already be bound in the active scope; a miss is fatal.
    /// Each successful resolution is recorded as a [`Fact`].
    pub(crate) fn parse_use(&mut self, scope: &Scope) -> Result<(), ParseError> {
        let token = self.expect_kind(TokenKind::Identifier, "at start of statement")?;

        let declared_type = scope.lookup(&token.lexeme).ok_or_else(|| {
            ParseError::UndeclaredVariable {
                name: token.lexeme.to_string(),
                location: token.location,
            }
        })?;

        self.facts.push(Fact {
            name: token.lexeme.to_string(),
            declared_type,
        });

        self.expect_kind(TokenKind::Semicolon, "after variable reference")?;
        Ok(())
    }

    /// True if the next token can begin a statement.
    pub(crate) fn check_statement_start(&self) -> bool {
        self.check_kind(TokenKind::LBrace)
            || self.check_type_keyword()
            || self.check_kind(TokenKind::Identifier)
    }
}
