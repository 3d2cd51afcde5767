//! Lexically scoped symbol table
//!
//! A [`Scope`] maps declared identifier names to their [`DeclaredType`].
//! Block entry creates a full value-copy of the enclosing scope's bindings
//! rather than a link to a parent: lookups stay within one map, mutations
//! inside a block never leak out, and bindings added to the parent after
//! entry are never seen by the child.

use rustc_hash::FxHashMap;
use std::fmt;

/// Types that can appear in a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    Int,
    Char,
    Bool,
}

impl DeclaredType {
    /// Map a type keyword lexeme to its type, `None` for any other word.
    pub fn from_keyword(lexeme: &str) -> Option<Self> {
        match lexeme {
            "int" => Some(DeclaredType::Int),
            "char" => Some(DeclaredType::Char),
            "bool" => Some(DeclaredType::Bool),
            _ => None,
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Int => write!(f, "int"),
            DeclaredType::Char => write!(f, "char"),
            DeclaredType::Bool => write!(f, "bool"),
        }
    }
}

/// One block's namespace of declared identifiers.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: FxHashMap<String, DeclaredType>,
}

impl Scope {
    /// Create an empty root scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a block: snapshot the parent's bindings into a new scope.
    pub fn enter(parent: &Scope) -> Self {
        Self {
            bindings: parent.bindings.clone(),
        }
    }

    /// Declare `name` with `declared_type`; returns the previous binding if
    /// one existed. Redeclaring in the same scope silently replaces.
    pub fn declare(&mut self, name: &str, declared_type: DeclaredType) -> Option<DeclaredType> {
        self.bindings.insert(name.to_string(), declared_type)
    }

    /// Look up `name` within this scope only.
    ///
    /// No chain walk happens here; the copy-on-entry snapshot already holds
    /// everything visible at this point.
    pub fn lookup(&self, name: &str) -> Option<DeclaredType> {
        self.bindings.get(name).copied()
    }

    /// Iterate over the bindings for reporting.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, DeclaredType)> {
        self.bindings.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
