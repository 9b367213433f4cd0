//! Error types for rust-mysql-ddl

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a `CREATE TABLE` statement
#[derive(Error, Debug)]
pub enum DdlError {
    /// The statement skeleton or one of its columns did not match the grammar.
    #[error("Syntax error at line {line}, column {column}: expected {expected}, found {found}")]
    Syntax {
        /// Byte offset into the input
        offset: usize,
        /// 1-based line number
        line: usize,
        /// 1-based column (in characters)
        column: usize,
        /// Description of the rule that was expected at this position
        expected: String,
        /// The text found instead, or "end of input"
        found: String,
    },

    /// The input could not be split into tokens before the statement was complete.
    #[error("Tokenizer error at line {line}, column {column}: {message}")]
    Tokenize {
        offset: usize,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Failed to read SQL file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQL file is neither UTF-8 nor Windows-1252: {path}")]
    InvalidEncoding { path: PathBuf },
}

impl DdlError {
    /// Byte offset of the failure for errors positioned in the input.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DdlError::Syntax { offset, .. } | DdlError::Tokenize { offset, .. } => Some(*offset),
            DdlError::FileRead { .. } | DdlError::InvalidEncoding { .. } => None,
        }
    }

    /// The expectation carried by a syntax error.
    pub fn expected(&self) -> Option<&str> {
        match self {
            DdlError::Syntax { expected, .. } => Some(expected),
            _ => None,
        }
    }
}
