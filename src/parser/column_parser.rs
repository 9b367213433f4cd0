//! Column definition rules of the `CREATE TABLE` grammar.
//!
//! ## Supported Syntax
//!
//! ```sql
//! name TYPE[(length[, scale])] [attribute ...]
//!     [DEFAULT NULL | DEFAULT 'text' | DEFAULT number
//!      | DEFAULT [CURRENT_TIMESTAMP] [ON] [UPDATE] [CURRENT_TIMESTAMP]]
//!     [COMMENT 'text']
//! ```
//!
//! Attributes are any of `NOT NULL`, `NULL`, `AUTO_INCREMENT`, `PRIMARY KEY`,
//! `UNIQUE`, `BINARY`, `UNSIGNED`, repeated freely and in any order.

use sqlparser::tokenizer::Token;

use crate::error::DdlError;
use crate::model::{Attribute, Column, ColumnType, DefaultValue, TypeSpec};

use super::grammar::DdlGrammar;

/// The optional words of the `CURRENT_TIMESTAMP` default chain, in order.
const TIMESTAMP_CHAIN: [&str; 4] = ["current_timestamp", "on", "update", "current_timestamp"];

impl DdlGrammar<'_> {
    /// Parse a data type (e.g. `int`, `varchar(255)`, `decimal(10,2)`).
    ///
    /// The keyword is looked up in [`ColumnType::ALL`] order. The parameter
    /// clause is tried as `(length)` first, then `(length, scale)`, and is
    /// left unconsumed if neither form matches.
    pub fn data_type(&mut self) -> Result<TypeSpec, DdlError> {
        let kind = self
            .base
            .current_word()
            .and_then(ColumnType::from_keyword)
            .ok_or_else(|| self.base.expected("column type"))?;
        self.base.advance();

        let (length, scale) = match self.type_parameters() {
            Some((length, scale)) => (Some(length), scale),
            None => (None, None),
        };

        Ok(TypeSpec {
            kind,
            length,
            scale,
        })
    }

    fn type_parameters(&mut self) -> Option<(String, Option<String>)> {
        let length_only = self.attempt(|g| {
            g.base.expect_token(&Token::LParen)?;
            let length = g.base.parse_digits()?;
            g.base.expect_token(&Token::RParen)?;
            Some((length, None))
        });
        length_only.or_else(|| {
            self.attempt(|g| {
                g.base.expect_token(&Token::LParen)?;
                let length = g.base.parse_digits()?;
                g.base.expect_token(&Token::Comma)?;
                let scale = g.base.parse_digits()?;
                g.base.expect_token(&Token::RParen)?;
                Some((length, Some(scale)))
            })
        })
    }

    /// Parse a single column attribute.
    pub fn attribute(&mut self) -> Option<Attribute> {
        let attribute = Attribute::ALL
            .into_iter()
            .find(|a| self.base.check_phrase_ci(a.keyword()))?;
        self.base.expect_phrase_ci(attribute.keyword())?;
        Some(attribute)
    }

    /// Parse zero or more attributes, preserving order and repeats.
    pub fn attributes(&mut self) -> Vec<Attribute> {
        let mut attributes = Vec::new();
        while let Some(attribute) = self.attribute() {
            attributes.push(attribute);
        }
        attributes
    }

    /// Parse an optional `DEFAULT` clause.
    ///
    /// A bare `DEFAULT` followed by none of the value forms is consumed and
    /// yields no default.
    pub fn default_value(&mut self) -> Option<DefaultValue> {
        self.keyed_value("default").flatten()
    }

    /// Parse an optional inline `COMMENT 'text'` clause, returning its text.
    ///
    /// Uses the same value forms as `DEFAULT`; `COMMENT` with no value gives
    /// an empty comment.
    pub fn column_comment(&mut self) -> Option<String> {
        self.keyed_value("comment").map(|value| {
            value
                .map(|v| v.as_text().to_string())
                .unwrap_or_default()
        })
    }

    /// Returns `None` when `keyword` is absent, `Some(None)` for a keyword
    /// with no recognizable value.
    fn keyed_value(&mut self, keyword: &str) -> Option<Option<DefaultValue>> {
        self.base.expect_word_ci(keyword)?;

        if self.base.expect_word_ci("null").is_some() {
            return Some(Some(DefaultValue::Null));
        }
        if let Some(text) = self.base.parse_string_literal() {
            return Some(Some(DefaultValue::Literal(text)));
        }
        if let Some(number) = self.base.parse_numeric_literal() {
            return Some(Some(DefaultValue::Numeric(number)));
        }
        Some(self.timestamp_chain().map(DefaultValue::Expression))
    }

    /// Each word of the chain is optional; the present ones are joined with
    /// single spaces as written.
    fn timestamp_chain(&mut self) -> Option<String> {
        let mut words: Vec<String> = Vec::new();
        for expected in TIMESTAMP_CHAIN {
            let Some(word) = self.base.current_word() else {
                continue;
            };
            if word.eq_ignore_ascii_case(expected) {
                words.push(word.to_string());
                self.base.advance();
            }
        }
        (!words.is_empty()).then(|| words.join(" "))
    }

    /// Parse one column definition.
    pub fn column(&mut self) -> Result<Column, DdlError> {
        let name = self
            .base
            .parse_identifier()
            .ok_or_else(|| self.base.expected("column name"))?;
        let TypeSpec {
            kind,
            length,
            scale,
        } = self.data_type()?;
        let attributes = self.attributes();
        let default = self.default_value();
        let comment = self.column_comment().unwrap_or_default();

        Ok(Column {
            name,
            data_type: kind,
            length,
            scale,
            attributes,
            default,
            comment,
        })
    }
}

/// Parse a standalone column definition such as `` `id` int(11) NOT NULL ``.
///
/// The whole input must be consumed.
pub fn parse_column_definition(col_def: &str) -> Result<Column, DdlError> {
    let mut grammar = DdlGrammar::new(col_def)?;
    let column = grammar.column()?;
    if !grammar.is_at_end() {
        return Err(grammar.base.expected("end of column definition"));
    }
    Ok(column)
}
