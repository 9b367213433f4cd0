//! Base token parser providing the lexical primitives of the DDL grammar.
//!
//! The input is split into tokens by sqlparser's tokenizer using
//! `MySqlDialect`, so backtick-quoted identifiers arrive unquoted and SQL
//! comments arrive as whitespace. `TokenParser` is a cursor over that token
//! stream:
//!
//! - [`TokenParser::advance`] consumes one token and then every whitespace
//!   token after it, so callers never handle whitespace themselves.
//! - [`TokenParser::expect_word_ci`] and [`TokenParser::expect_phrase_ci`]
//!   match keywords case-insensitively and consume nothing on mismatch.
//! - [`TokenParser::pos`] / [`TokenParser::set_pos`] give side-effect-free
//!   backtracking.
//!
//! Every token maps back to a byte offset in the original input so errors can
//! point at the exact place the grammar stopped matching.

use sqlparser::dialect::MySqlDialect;
use sqlparser::tokenizer::{Location, Token, TokenWithSpan, Tokenizer};
use tracing::debug;

use crate::error::DdlError;

/// Maps sqlparser's 1-based line/column locations to byte offsets and back.
#[derive(Debug)]
struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    fn new(sql: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(sql.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    /// Columns count characters, so multi-byte text is walked char by char.
    fn offset(&self, sql: &str, location: Location) -> usize {
        let line = usize::try_from(location.line).unwrap_or(usize::MAX);
        let column = usize::try_from(location.column).unwrap_or(usize::MAX);
        let Some(&start) = self.line_starts.get(line.saturating_sub(1)) else {
            return sql.len();
        };
        sql[start..]
            .char_indices()
            .nth(column.saturating_sub(1))
            .map_or(sql.len(), |(i, _)| start + i)
    }

    fn line_column(&self, sql: &str, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line - 1];
        let column = sql[start..offset].chars().count() + 1;
        (line, column)
    }
}

/// A tokenizer failure that only matters if the grammar reads past it.
#[derive(Debug)]
struct DeferredTokenizerError {
    offset: usize,
    message: String,
}

/// Cursor over the token stream of one statement.
pub struct TokenParser<'a> {
    sql: &'a str,
    tokens: Vec<TokenWithSpan>,
    pos: usize,
    lines: LineIndex,
    deferred: Option<DeferredTokenizerError>,
}

impl<'a> TokenParser<'a> {
    /// Tokenize `sql` and position the cursor on the first significant token.
    ///
    /// String literals keep their raw text: escape sequences and doubled
    /// quotes are not rewritten. If tokenizing stops early, the tokens read
    /// before the failure are kept and the failure is reported only when the
    /// grammar runs out of tokens. Free-form trailing text after a complete
    /// statement therefore never fails the parse.
    pub fn new(sql: &'a str) -> Result<Self, DdlError> {
        let dialect = MySqlDialect {};
        let lines = LineIndex::new(sql);

        let mut tokens = Vec::new();
        let deferred = match Tokenizer::new(&dialect, sql)
            .with_unescape(false)
            .tokenize_with_location_into_buf(&mut tokens)
        {
            Ok(()) => None,
            Err(err) => {
                let offset = lines.offset(sql, err.location);
                debug!(
                    offset,
                    tokens = tokens.len(),
                    message = %err.message,
                    "tokenizer stopped early, parsing the tokens read so far"
                );
                Some(DeferredTokenizerError {
                    offset,
                    message: err.message,
                })
            }
        };

        let mut parser = Self {
            sql,
            tokens,
            pos: 0,
            lines,
            deferred,
        };
        parser.skip_whitespace();
        Ok(parser)
    }

    // ========================================================================
    // Position and state
    // ========================================================================

    /// The original input
    #[inline]
    pub fn sql(&self) -> &'a str {
        self.sql
    }

    /// Check if at end of tokens.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        match self.tokens.get(self.pos) {
            None => true,
            Some(t) => matches!(t.token, Token::EOF),
        }
    }

    /// Get current position in token stream.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Rewind (or advance) to a position previously returned by [`Self::pos`].
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len());
    }

    // ========================================================================
    // Token access
    // ========================================================================

    /// Get current token without consuming.
    #[inline]
    pub fn current_token(&self) -> Option<&TokenWithSpan> {
        if self.is_at_end() {
            None
        } else {
            self.tokens.get(self.pos)
        }
    }

    /// Peek at the `n`-th significant token after the current one.
    ///
    /// `peek(0)` is the current token.
    pub fn peek(&self, n: usize) -> Option<&Token> {
        self.tokens[self.pos..]
            .iter()
            .map(|t| &t.token)
            .filter(|t| !matches!(t, Token::Whitespace(_)))
            .take_while(|t| !matches!(t, Token::EOF))
            .nth(n)
    }

    /// Consume the current token and the whitespace that follows it.
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.skip_whitespace();
    }

    /// Skip whitespace tokens (including SQL comments).
    pub fn skip_whitespace(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            match &token.token {
                Token::Whitespace(_) => self.pos += 1,
                _ => break,
            }
        }
    }

    // ========================================================================
    // Token type checks
    // ========================================================================

    /// Check if the `n`-th significant token is an unquoted word equal to
    /// `word`, ignoring ASCII case.
    #[inline]
    pub fn check_word_ci_at(&self, n: usize, word: &str) -> bool {
        matches!(
            self.peek(n),
            Some(Token::Word(w)) if w.quote_style.is_none() && w.value.eq_ignore_ascii_case(word)
        )
    }

    /// Check if the current token is an unquoted word matching `word`
    /// (case-insensitive).
    #[inline]
    pub fn check_word_ci(&self, word: &str) -> bool {
        self.check_word_ci_at(0, word)
    }

    /// Check if the upcoming tokens spell out `phrase`, one word per token.
    pub fn check_phrase_ci(&self, phrase: &str) -> bool {
        phrase
            .split_whitespace()
            .enumerate()
            .all(|(i, word)| self.check_word_ci_at(i, word))
    }

    /// Check if current token matches a specific token type (by discriminant).
    #[inline]
    pub fn check_token(&self, expected: &Token) -> bool {
        self.peek(0)
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(expected))
    }

    /// The current unquoted word, if there is one.
    pub fn current_word(&self) -> Option<&str> {
        match self.peek(0) {
            Some(Token::Word(w)) if w.quote_style.is_none() => Some(&w.value),
            _ => None,
        }
    }

    // ========================================================================
    // Expect methods (check and advance)
    // ========================================================================

    /// Expect a specific word (case-insensitive), advancing if found.
    ///
    /// Returns `Some(())` if the word was found and position advanced,
    /// `None` otherwise (position unchanged).
    pub fn expect_word_ci(&mut self, word: &str) -> Option<()> {
        if self.check_word_ci(word) {
            self.advance();
            Some(())
        } else {
            None
        }
    }

    /// Expect a multi-word keyword such as `not null`, advancing past all of
    /// it if found. Nothing is consumed unless every word matches.
    pub fn expect_phrase_ci(&mut self, phrase: &str) -> Option<()> {
        if !self.check_phrase_ci(phrase) {
            return None;
        }
        for _ in phrase.split_whitespace() {
            self.advance();
        }
        Some(())
    }

    /// Expect a specific token type, advancing if found.
    pub fn expect_token(&mut self, expected: &Token) -> Option<()> {
        if self.check_token(expected) {
            self.advance();
            Some(())
        } else {
            None
        }
    }

    // ========================================================================
    // Literal and identifier parsing
    // ========================================================================

    /// Parse an identifier, plain or backtick-quoted.
    ///
    /// Returns the identifier without its quotes.
    pub fn parse_identifier(&mut self) -> Option<String> {
        match self.peek(0)? {
            Token::Word(w) => {
                let name = w.value.clone();
                self.advance();
                Some(name)
            }
            _ => None,
        }
    }

    /// Parse a run of decimal digits, returned as written.
    pub fn parse_digits(&mut self) -> Option<String> {
        match self.peek(0)? {
            Token::Number(n, _) if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => {
                let digits = n.clone();
                self.advance();
                Some(digits)
            }
            _ => None,
        }
    }

    /// Parse an optionally negative numeric literal such as `0`, `-1` or `1.5`.
    pub fn parse_numeric_literal(&mut self) -> Option<String> {
        let start = self.pos;
        let negative = self.expect_token(&Token::Minus).is_some();
        match self.peek(0) {
            Some(Token::Number(n, _)) => {
                let value = if negative {
                    format!("-{}", n)
                } else {
                    n.clone()
                };
                self.advance();
                Some(value)
            }
            _ => {
                self.set_pos(start);
                None
            }
        }
    }

    /// Parse a single-quoted string literal, returning its contents.
    pub fn parse_string_literal(&mut self) -> Option<String> {
        match self.peek(0)? {
            Token::SingleQuotedString(s) => {
                let text = s.clone();
                self.advance();
                Some(text)
            }
            _ => None,
        }
    }

    // ========================================================================
    // Offsets and errors
    // ========================================================================

    /// Byte offset of the current token, or the input length at the end.
    pub fn current_offset(&self) -> usize {
        match self.current_token() {
            Some(token) => self.lines.offset(self.sql, token.span.start),
            None => self.sql.len(),
        }
    }

    /// Text of the current token for error messages.
    pub fn current_text(&self) -> String {
        match self.peek(0) {
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        }
    }

    /// Build the error for a rule that expected `what` at the current token.
    ///
    /// At the end of a truncated token stream the deferred tokenizer error is
    /// reported instead, since that is what actually stopped the parse.
    pub fn expected(&self, what: &str) -> DdlError {
        if self.is_at_end() {
            if let Some(deferred) = &self.deferred {
                let (line, column) = self.lines.line_column(self.sql, deferred.offset);
                return DdlError::Tokenize {
                    offset: deferred.offset,
                    line,
                    column,
                    message: deferred.message.clone(),
                };
            }
        }

        let offset = self.current_offset();
        let (line, column) = self.lines.line_column(self.sql, offset);
        DdlError::Syntax {
            offset,
            line,
            column,
            expected: what.to_string(),
            found: self.current_text(),
        }
    }
}
