//! Scanner for rill source code.
//!
//! Works over a decoded code-point buffer (see [`crate::unicode`]), not
//! raw bytes. Lexical problems never abort the scan: they come back as
//! ERROR tokens and the caller decides what to do with the stream.

use crate::lexer::token::{is_blank_char, is_punctuation_char, Token, TokenKind};
use crate::lexer::trie::{KeywordTrie, SYMBOLIC_PRIMITIVES};
use crate::span::Span;

/// The scanner transforms a code-point buffer into a stream of tokens.
pub struct Scanner<'a> {
    source: &'a [char],
    cursor: usize,
    start: usize,
    line: u32,
    column: u32,
    keywords: KeywordTrie,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a [char]) -> Self {
        Self {
            source,
            cursor: 0,
            start: 0,
            line: 0,
            column: 0,
            keywords: KeywordTrie::with_primitives(),
        }
    }

    /// Scan the whole source.
    ///
    /// The stream ends with the first EOF or ERROR token; on an error the
    /// rest of the input is not scanned.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let stop = matches!(token.kind, TokenKind::Eof | TokenKind::Error);
            tokens.push(token);
            if stop {
                break;
            }
        }
        tokens
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_blank();
        self.start = self.cursor;

        let Some(c) = self.peek() else {
            return Token::eof(self.cursor, self.line, self.column);
        };

        if c.is_ascii_digit() {
            return self.number();
        }
        if c == '"' {
            return self.string();
        }
        if let Some(kind) = TokenKind::from_char(c) {
            if kind.is_prefix() {
                return self.prefix(kind);
            }
            self.advance();
            return self.make_token(kind);
        }
        self.atom()
    }

    /// The lexeme a token covers, as an owned string.
    pub fn lexeme(&self, token: &Token) -> String {
        token.text(self.source).iter().collect()
    }

    /// The decoded source this scanner reads from.
    pub fn source(&self) -> &'a [char] {
        self.source
    }

    fn skip_blank(&mut self) {
        loop {
            match self.peek() {
                Some(c) if is_blank_char(c) => {
                    self.advance();
                }
                Some(';') => {
                    // Comment runs to the end of the line; the newline is
                    // left for the whitespace arm so line accounting stays
                    // in one place.
                    while let Some(c) = self.peek() {
                        if c == '\n' || (c == '\r' && self.peek_next() == Some('\n')) {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn number(&mut self) -> Token {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        self.make_token(TokenKind::Number)
    }

    /// Scan a string literal. The token's span covers the semantic
    /// content only: it is anchored after the opening quote and closed
    /// before the terminating one.
    fn string(&mut self) -> Token {
        self.advance();
        self.start = self.cursor;
        loop {
            match self.peek() {
                None => return self.make_token(TokenKind::Error),
                Some('"') => break,
                Some(_) => {
                    self.advance();
                }
            }
        }
        let token = self.make_token(TokenKind::String);
        self.advance();
        token
    }

    /// A prefix mark must attach to something: followed by whitespace or
    /// end of input it is ill-formed.
    fn prefix(&mut self, kind: TokenKind) -> Token {
        self.advance();
        match self.peek() {
            None => self.make_token(TokenKind::Error),
            Some(c) if is_blank_char(c) => self.make_token(TokenKind::Error),
            Some(_) => self.make_token(kind),
        }
    }

    fn atom(&mut self) -> Token {
        self.advance();
        while matches!(self.peek(), Some(c) if !is_atom_terminator(c)) {
            self.advance();
        }
        let text = &self.source[self.start..self.cursor];
        let kind = if self.is_primitive(text) {
            TokenKind::Primitive
        } else {
            TokenKind::Atom
        };
        self.make_token(kind)
    }

    fn is_primitive(&self, text: &[char]) -> bool {
        if SYMBOLIC_PRIMITIVES
            .iter()
            .any(|p| p.chars().eq(text.iter().copied()))
        {
            return true;
        }
        self.keywords.contains(text)
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.cursor).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.cursor + 1).copied()
    }

    /// Consume one code point, folding `\r\n` into a single line break.
    fn advance(&mut self) -> Option<char> {
        let c = *self.source.get(self.cursor)?;
        self.cursor += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else if c == '\r' && self.peek() == Some('\n') {
            self.cursor += 1;
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        let length = (self.cursor - self.start) as u32;
        // The column counter sits past the token; back up over its length.
        // A literal spanning a line break resets the counter, hence the
        // saturation.
        let column = self.column.saturating_sub(length);
        Token::new(kind, Span::new(self.start, self.cursor, self.line, column))
    }
}

/// Atom runs stop at whitespace, simple punctuation, a string quote, or
/// the start of a comment.
fn is_atom_terminator(c: char) -> bool {
    is_blank_char(c) || is_punctuation_char(c) || c == '"' || c == ';'
}
