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

//! MySQL dump to Oracle SQL converter
//!
//! This crate reads a MySQL dump as exported by TablePlus and rewrites it
//! line by line into a script SQL*Developer accepts: identifiers are
//! uppercased and double quoted, column types are mapped to Oracle types,
//! every `INSERT` row becomes its own statement and `NOT NULL` constraints
//! are re-added with `ALTER TABLE` at the end of the script.
//!
//! Primary keys are dropped and have to be recreated by hand.
//!
//! ```rust,no_run
//! use mysqldump_oracle::{Converter, WriteSink};
//! # use std::fs::File;
//! # use std::io::{self, BufReader};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let file: String = std::env::args().collect::<Vec<String>>()[1].clone();
//!
//! let stdout = io::stdout();
//! let mut sink = WriteSink::new(stdout.lock());
//! let summary = Converter::convert_mysqldump(
//!     &mut BufReader::new(File::open(&file)?),
//!     &mut sink,
//! )?;
//! sink.flush()?;
//! eprintln!("{} tables converted", summary.tables);
//! # Ok(())
//! # }
//! ```
//!

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod ast;
mod column;
mod converter;
mod error;
mod reader;
mod sink;

pub mod config;

pub use ast::{
    oracle_identifier, AlterTableNotNull, InsertRow, NotNullColumns, Table, STORAGE_CLAUSE,
};
pub use column::translate_column;
pub use converter::{ConvertState, Converter, LineKind, Summary};
pub use error::{ConvertError, HeaderKind, Result};
pub use reader::{Line, LineReader};
pub use sink::{Sink, WriteSink};
