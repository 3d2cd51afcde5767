//! Lexer (tokenizer) for the block language
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Characters that match no token pattern (whitespace, commas,
//! quotes, ...) are silently skipped rather than rejected, so tokenizing
//! never fails.

use rustc_hash::FxHashMap;
use std::fmt;
use std::rc::Rc;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The keyword set. Any maximal alphabetic run not listed here is an
/// identifier. This table is the single source of truth for keyword
/// classification; the grammar additionally restricts declarations to the
/// type keywords `int`, `char`, and `bool`.
pub const KEYWORDS: [&str; 7] = ["if", "while", "for", "int", "else", "char", "bool"];

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Integer literal (one or more digits)
    Number,
    /// One of [`KEYWORDS`]
    Keyword,
    /// Alphabetic run that is not a keyword
    Identifier,
    /// `+`, `-`, `*`, or `/`
    Operator,
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Semicolon => write!(f, "';'"),
        }
    }
}

/// A single classified token.
///
/// Tokens are immutable once created. Identical lexemes share one `Rc<str>`
/// allocation through a pool local to the producing [`Lexer`]; nothing may
/// depend on that sharing, all matching is by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Rc<str>,
    pub location: SourceLocation,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "number {}", self.lexeme),
            TokenKind::Keyword => write!(f, "keyword '{}'", self.lexeme),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.lexeme),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

/// Lexer for block language source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    interned: FxHashMap<String, Rc<str>>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            interned: FxHashMap::default(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// A single left-to-right scan with maximal munch: at each position the
    /// longest digit or alphabetic run wins, single-character operators and
    /// punctuation consume themselves, and any other character contributes
    /// no token. Tokenizing never fails.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            let location = self.current_location();

            if ch.is_ascii_digit() {
                tokens.push(self.number(location));
            } else if ch.is_ascii_alphabetic() {
                tokens.push(self.word(location));
            } else if let Some(kind) = punctuation_kind(ch) {
                self.advance();
                tokens.push(self.token(kind, &ch.to_string(), location));
            } else {
                // Unsupported character: skipped, never a lexical error
                self.advance();
            }
        }

        tokens
    }

    /// Scan an integer literal (one or more digits).
    fn number(&mut self, location: SourceLocation) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        self.token(TokenKind::Number, &text, location)
    }

    /// Scan an alphabetic run and classify it as keyword or identifier.
    fn word(&mut self, location: SourceLocation) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphabetic() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if KEYWORDS.contains(&text.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        self.token(kind, &text, location)
    }

    /// Build a token, reusing an interned lexeme if one exists.
    fn token(&mut self, kind: TokenKind, text: &str, location: SourceLocation) -> Token {
        Token {
            kind,
            lexeme: self.intern(text),
            location,
        }
    }

    /// Return the pooled `Rc<str>` for `text`, allocating on first sight.
    fn intern(&mut self, text: &str) -> Rc<str> {
        if let Some(lexeme) = self.interned.get(text) {
            return Rc::clone(lexeme);
        }

        let lexeme: Rc<str> = Rc::from(text);
        self.interned.insert(text.to_string(), Rc::clone(&lexeme));
        lexeme
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    pub(crate) fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Map a single operator or punctuation character to its token kind.
fn punctuation_kind(ch: char) -> Option<TokenKind> {
    match ch {
        '+' | '-' | '*' | '/' => Some(TokenKind::Operator),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        ';' => Some(TokenKind::Semicolon),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokenize().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("{ int x; x; }");
        let tokens = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::LBrace);
        assert_eq!(tokens[1].kind, TokenKind::Keyword);
        assert_eq!(&*tokens[1].lexeme, "int");
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(&*tokens[2].lexeme, "x");
        assert_eq!(tokens[3].kind, TokenKind::Semicolon);
        assert_eq!(tokens[4].kind, TokenKind::Identifier);
        assert_eq!(tokens[5].kind, TokenKind::Semicolon);
        assert_eq!(tokens[6].kind, TokenKind::RBrace);
        assert_eq!(tokens.len(), 7);
    }

    #[test]
    fn test_keyword_classification() {
        for keyword in KEYWORDS {
            assert_eq!(kinds(keyword), vec![TokenKind::Keyword], "{keyword}");
        }
        assert_eq!(kinds("foo"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_maximal_munch_run() {
        // A keyword prefix inside a longer alphabetic run is not split out
        let tokens = Lexer::new("intx").tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(&*tokens[0].lexeme, "intx");
    }

    #[test]
    fn test_operators_and_numbers() {
        let tokens = Lexer::new("1 + 23 * (4)").tokenize();

        assert_eq!(&*tokens[0].lexeme, "1");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(&*tokens[2].lexeme, "23");
        assert_eq!(&*tokens[3].lexeme, "*");
        assert_eq!(tokens[4].kind, TokenKind::LParen);
        assert_eq!(tokens[5].kind, TokenKind::Number);
        assert_eq!(tokens[6].kind, TokenKind::RParen);
    }

    #[test]
    fn test_skips_unsupported_characters() {
        // Commas, quotes, and dots match no pattern and contribute no token
        assert_eq!(
            kinds("int x, y;"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Semicolon,
            ]
        );
        assert_eq!(kinds("\"3.14\""), vec![TokenKind::Number, TokenKind::Number]);
    }

    #[test]
    fn test_tokenize_idempotent() {
        let source = "{ int x; { bool y; x; } } ,.\"junk\"";
        let first = Lexer::new(source).tokenize();
        let second = Lexer::new(source).tokenize();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.lexeme, b.lexeme);
        }
    }

    #[test]
    fn test_interned_lexemes_shared() {
        let tokens = Lexer::new("x y x").tokenize();

        assert!(Rc::ptr_eq(&tokens[0].lexeme, &tokens[2].lexeme));
        assert!(!Rc::ptr_eq(&tokens[0].lexeme, &tokens[1].lexeme));
    }

    #[test]
    fn test_line_tracking() {
        let tokens = Lexer::new("int\n  x;").tokenize();

        assert_eq!(tokens[0].location, SourceLocation::new(1, 1));
        assert_eq!(tokens[1].location, SourceLocation::new(2, 3));
        assert_eq!(tokens[2].location, SourceLocation::new(2, 4));
    }
}
