//! The `CREATE TABLE` grammar object.
//!
//! `DdlGrammar` owns a [`TokenParser`] and exposes each grammar rule as a
//! method, so any rule can be run on its own input:
//!
//! | rule               | defined in          |
//! |--------------------|---------------------|
//! | `data_type`        | `column_parser.rs`  |
//! | `attribute(s)`     | `column_parser.rs`  |
//! | `default_value`    | `column_parser.rs`  |
//! | `column_comment`   | `column_parser.rs`  |
//! | `column`           | `column_parser.rs`  |
//! | `key_definition`   | `table_parser.rs`   |
//! | `table`            | `table_parser.rs`   |
//!
//! Required rules return `Result` and fail with a positioned error.
//! Optional rules return `Option` and leave the cursor where it was when
//! they do not match.

use crate::error::DdlError;

use super::token_parser_base::TokenParser;
use super::ParseOptions;

/// Grammar rules for one MySQL `CREATE TABLE` statement
pub struct DdlGrammar<'a> {
    pub(super) base: TokenParser<'a>,
    pub(super) options: ParseOptions,
}

impl<'a> DdlGrammar<'a> {
    /// Create a grammar over `sql` with default options
    pub fn new(sql: &'a str) -> Result<Self, DdlError> {
        Self::with_options(sql, ParseOptions::default())
    }

    pub fn with_options(sql: &'a str, options: ParseOptions) -> Result<Self, DdlError> {
        Ok(Self {
            base: TokenParser::new(sql)?,
            options,
        })
    }

    /// True once every token has been consumed
    pub fn is_at_end(&self) -> bool {
        self.base.is_at_end()
    }

    /// Byte offset of the next unconsumed token
    pub fn offset(&self) -> usize {
        self.base.current_offset()
    }

    /// Run an optional sub-rule, rewinding to the starting token if it does
    /// not match.
    pub(super) fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.base.pos();
        let result = rule(self);
        if result.is_none() {
            self.base.set_pos(start);
        }
        result
    }
}
