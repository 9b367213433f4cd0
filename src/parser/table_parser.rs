//! Table envelope and key clause rules of the `CREATE TABLE` grammar.
//!
//! ## Supported Syntax
//!
//! ```sql
//! CREATE TABLE [IF NOT EXISTS] [db.]name (
//!     column_definition | key_clause [, ...]
//! ) <free-form trailing clauses>
//! ```
//!
//! Key clauses:
//! ```sql
//! [CONSTRAINT [name]] PRIMARY KEY [USING type] (col [, ...])
//! [CONSTRAINT [name]] UNIQUE [KEY | INDEX] [name] (col [, ...])
//! {KEY | INDEX} [name] (col [, ...])
//! FULLTEXT [KEY | INDEX] [name] (col [, ...])
//! [CONSTRAINT [name]] FOREIGN KEY [name] (col [, ...])
//!     REFERENCES table (col [, ...]) [ON {DELETE | UPDATE} action ...]
//! ```
//!
//! Only the structural prefix up to the closing `)` is parsed. The trailing
//! clauses (`ENGINE=...`, `DEFAULT CHARSET=...`, `COMMENT='...'`) are handed
//! to [`extract_table_comment`] as raw text.

use sqlparser::tokenizer::Token;
use tracing::debug;

use crate::error::DdlError;
use crate::model::{ColumnType, ForeignReference, KeyDefinition, KeyKind, Table};

use super::grammar::DdlGrammar;
use super::table_comment::extract_table_comment;

/// Words that open a key clause instead of a column definition.
const KEY_CLAUSE_WORDS: [&str; 7] = [
    "constraint",
    "primary",
    "unique",
    "key",
    "index",
    "fulltext",
    "foreign",
];

const REFERENTIAL_ACTIONS: [&str; 5] = [
    "restrict",
    "cascade",
    "set null",
    "set default",
    "no action",
];

impl DdlGrammar<'_> {
    /// Parse a complete `CREATE TABLE` statement.
    ///
    /// Phase 1 parses `CREATE TABLE name ( items )` strictly. Phase 2 scans
    /// the raw text after the closing parenthesis for the table comment and
    /// never fails.
    pub fn table(&mut self) -> Result<Table, DdlError> {
        self.base
            .expect_phrase_ci("create table")
            .ok_or_else(|| self.base.expected("CREATE TABLE"))?;
        self.base.expect_phrase_ci("if not exists");

        let (schema, name) = self.qualified_name("table name")?;
        self.base
            .expect_token(&Token::LParen)
            .ok_or_else(|| self.base.expected("'('"))?;

        let mut table = Table {
            schema,
            name,
            ..Default::default()
        };
        self.table_items(&mut table)?;

        let close = self.base.current_offset();
        self.base
            .expect_token(&Token::RParen)
            .ok_or_else(|| self.base.expected("',' or ')'"))?;

        if self.options.table_comment {
            table.comment = extract_table_comment(&self.base.sql()[close + 1..]);
        }

        debug!(
            table = %table.qualified_name(),
            columns = table.columns.len(),
            keys = table.keys.len(),
            has_comment = !table.comment.is_empty(),
            "parsed CREATE TABLE"
        );
        Ok(table)
    }

    /// Comma-separated columns and key clauses; the list may be empty.
    fn table_items(&mut self, table: &mut Table) -> Result<(), DdlError> {
        if self.base.check_token(&Token::RParen) {
            return Ok(());
        }
        loop {
            if self.at_key_clause() {
                table.keys.push(self.key_definition()?);
            } else {
                table.columns.push(self.column()?);
            }
            if self.base.expect_token(&Token::Comma).is_none() {
                return Ok(());
            }
        }
    }

    /// `[db.]name`
    fn qualified_name(&mut self, what: &str) -> Result<(Option<String>, String), DdlError> {
        let first = self
            .base
            .parse_identifier()
            .ok_or_else(|| self.base.expected(what))?;
        if self.base.expect_token(&Token::Period).is_none() {
            return Ok((None, first));
        }
        let second = self
            .base
            .parse_identifier()
            .ok_or_else(|| self.base.expected(what))?;
        Ok((Some(first), second))
    }

    /// A key clause starts with one of [`KEY_CLAUSE_WORDS`]. When the next
    /// word is a type keyword the item is a column named like a keyword
    /// (`key varchar(10)`), unless that word is followed by a column list
    /// (`KEY date (d)`), which makes it an index name.
    fn at_key_clause(&self) -> bool {
        let opens_clause = KEY_CLAUSE_WORDS
            .iter()
            .any(|word| self.base.check_word_ci(word));
        if !opens_clause {
            return false;
        }
        let followed_by_type = matches!(
            self.base.peek(1),
            Some(Token::Word(w)) if w.quote_style.is_none() && ColumnType::from_keyword(&w.value).is_some()
        );
        if !followed_by_type {
            return true;
        }
        matches!(self.base.peek(2), Some(Token::LParen))
            && !matches!(self.base.peek(3), Some(Token::Number(..)))
    }

    /// Parse a table-level key or index clause.
    pub fn key_definition(&mut self) -> Result<KeyDefinition, DdlError> {
        let mut constraint_name = None;
        if self.base.expect_word_ci("constraint").is_some() {
            let unnamed = ["primary", "unique", "foreign"]
                .iter()
                .any(|word| self.base.check_word_ci(word));
            if !unnamed {
                let name = self
                    .base
                    .parse_identifier()
                    .ok_or_else(|| self.base.expected("constraint name"))?;
                constraint_name = Some(name);
            }
        }

        let kind = if self.base.expect_phrase_ci("primary key").is_some() {
            KeyKind::Primary
        } else if self.base.expect_word_ci("unique").is_some() {
            self.index_keyword();
            KeyKind::Unique
        } else if self.base.expect_word_ci("fulltext").is_some() {
            self.index_keyword();
            KeyKind::Fulltext
        } else if self.base.expect_phrase_ci("foreign key").is_some() {
            KeyKind::Foreign
        } else if self.index_keyword() {
            KeyKind::Index
        } else {
            return Err(self
                .base
                .expected("PRIMARY KEY, UNIQUE, KEY, INDEX, FULLTEXT or FOREIGN KEY"));
        };

        let mut index_name = None;
        if kind != KeyKind::Primary
            && !self.base.check_token(&Token::LParen)
            && !self.base.check_word_ci("using")
        {
            let name = self
                .base
                .parse_identifier()
                .ok_or_else(|| self.base.expected("index name or '('"))?;
            index_name = Some(name);
        }

        self.index_options();
        let columns = self.key_columns()?;
        let references = if kind == KeyKind::Foreign {
            Some(self.foreign_reference()?)
        } else {
            None
        };
        self.index_options();

        Ok(KeyDefinition {
            kind,
            name: constraint_name.or(index_name),
            columns,
            references,
        })
    }

    fn index_keyword(&mut self) -> bool {
        self.base
            .expect_word_ci("key")
            .or_else(|| self.base.expect_word_ci("index"))
            .is_some()
    }

    /// `USING BTREE` and `COMMENT '...'` options, in any order.
    fn index_options(&mut self) {
        loop {
            let using = self.attempt(|g| {
                g.base.expect_word_ci("using")?;
                g.base.parse_identifier()
            });
            let comment = self.attempt(|g| {
                g.base.expect_word_ci("comment")?;
                g.base.parse_string_literal()
            });
            if using.is_none() && comment.is_none() {
                return;
            }
        }
    }

    /// `(col [(prefix)] [ASC | DESC] [, ...])`
    fn key_columns(&mut self) -> Result<Vec<String>, DdlError> {
        self.base
            .expect_token(&Token::LParen)
            .ok_or_else(|| self.base.expected("'('"))?;

        let mut columns = Vec::new();
        loop {
            let name = self
                .base
                .parse_identifier()
                .ok_or_else(|| self.base.expected("key column"))?;
            self.attempt(|g| {
                g.base.expect_token(&Token::LParen)?;
                g.base.parse_digits()?;
                g.base.expect_token(&Token::RParen)
            });
            if self.base.expect_word_ci("asc").is_none() {
                self.base.expect_word_ci("desc");
            }
            columns.push(name);

            if self.base.expect_token(&Token::Comma).is_none() {
                break;
            }
        }

        self.base
            .expect_token(&Token::RParen)
            .ok_or_else(|| self.base.expected("',' or ')'"))?;
        Ok(columns)
    }

    fn foreign_reference(&mut self) -> Result<ForeignReference, DdlError> {
        self.base
            .expect_word_ci("references")
            .ok_or_else(|| self.base.expected("REFERENCES"))?;
        let table = match self.qualified_name("referenced table")? {
            (Some(schema), name) => format!("{}.{}", schema, name),
            (None, name) => name,
        };
        let columns = self.key_columns()?;

        while self.base.expect_word_ci("on").is_some() {
            self.base
                .expect_word_ci("delete")
                .or_else(|| self.base.expect_word_ci("update"))
                .ok_or_else(|| self.base.expected("DELETE or UPDATE"))?;
            let action = REFERENTIAL_ACTIONS
                .into_iter()
                .find(|action| self.base.check_phrase_ci(action))
                .ok_or_else(|| self.base.expected("referential action"))?;
            self.base.expect_phrase_ci(action);
        }

        Ok(ForeignReference { table, columns })
    }
}
