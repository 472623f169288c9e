// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversion errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of header that failed to split into the expected tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    CreateTable,
    InsertInto,
}

impl std::fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HeaderKind::CreateTable => f.write_str("CREATE TABLE"),
            HeaderKind::InsertInto => f.write_str("INSERT INTO"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("open {}: no such file or directory", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read error after line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: malformed {statement} header: {text:?}")]
    MalformedHeader {
        line: usize,
        statement: HeaderKind,
        text: String,
    },

    #[error("line {line}: CREATE TABLE {table} is never closed")]
    UnterminatedTable { line: usize, table: String },

    #[error("write error: {0}")]
    Write(#[source] io::Error),
}

impl ConvertError {
    /// Process exit status the command line tool reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::FileNotFound { .. } => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
