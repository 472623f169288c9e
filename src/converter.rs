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

//! Dump converter
//!
//! Lines are classified by prefix at the top level. `CREATE TABLE` and
//! `INSERT INTO` switch the converter into a block state that consumes the
//! following lines until the block ends; NOT NULL constraints collected
//! from table blocks are emitted once the input is exhausted.

use log::{debug, info, warn};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::ast::{oracle_identifier, InsertRow, Table, STORAGE_CLAUSE};
use crate::column::translate_column;
use crate::error::{ConvertError, HeaderKind, Result};
use crate::reader::{Line, LineReader};
use crate::sink::Sink;

const COMMENT_PREFIXES: [&str; 3] = ["/*", "--", "//"];

/// What a line means when no block is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    DropTable,
    CreateTable,
    InsertInto,
    Other,
}

impl LineKind {
    /// Classify a trimmed line. Earlier rules win.
    pub fn of(text: &str) -> LineKind {
        if COMMENT_PREFIXES.iter().any(|p| text.starts_with(p)) {
            LineKind::Comment
        } else if text.starts_with("DROP TABLE") {
            LineKind::DropTable
        } else if text.starts_with("CREATE TABLE") {
            LineKind::CreateTable
        } else if text.starts_with("INSERT INTO") {
            LineKind::InsertInto
        } else {
            LineKind::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertState {
    Top,
    InCreateTable {
        table: Table,
        /// line number of the `CREATE TABLE` header
        line: usize,
        columns: usize,
    },
    InInsertRows {
        /// converted header, shared by every row
        header: String,
    },
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub tables: usize,
    pub inserts: usize,
    pub not_null_constraints: usize,
}

pub struct Converter {
    state: ConvertState,
    tables: Vec<Table>,
    summary: Summary,
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new()
    }
}

impl Converter {
    pub fn new() -> Converter {
        debug!("Converter::new");
        Converter {
            state: ConvertState::Top,
            tables: vec![],
            summary: Summary::default(),
        }
    }

    /// Convert a whole dump, handing every produced line to `sink`.
    pub fn convert_mysqldump(input: &mut dyn BufRead, sink: &mut dyn Sink) -> Result<Summary> {
        let mut reader = LineReader::new(input);
        let mut converter = Converter::new();

        while let Some(line) = reader.next_line()? {
            if let Some(line) = converter.step(line, sink)? {
                reader.pushback_line(line);
            }
        }

        let mut summary = converter.finish(sink)?;
        summary.lines = reader.line;
        info!(
            "converted {} lines: {} tables, {} inserts, {} NOT NULL constraints",
            summary.lines, summary.tables, summary.inserts, summary.not_null_constraints
        );
        Ok(summary)
    }

    /// Open `path` and convert it.
    pub fn convert_file<P: AsRef<Path>>(path: P, sink: &mut dyn Sink) -> Result<Summary> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConvertError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ConvertError::Open {
                path: path.to_path_buf(),
                source,
            },
        })?;
        debug!("reading {}", path.display());
        Converter::convert_mysqldump(&mut BufReader::new(file), sink)
    }

    /// Convert an in-memory dump and collect the output lines.
    pub fn convert_str(dump: &str) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        Converter::convert_mysqldump(&mut dump.as_bytes(), &mut lines)?;
        Ok(lines)
    }

    pub fn state(&self) -> &ConvertState {
        &self.state
    }

    /// Tables whose block has been closed, in the order they were read.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Feed one line. A line that ends a block without belonging to it is
    /// returned and must be fed again.
    pub fn step(&mut self, line: Line, sink: &mut dyn Sink) -> Result<Option<Line>> {
        match self.state {
            ConvertState::Top => {
                self.dispatch(line, sink)?;
                Ok(None)
            }
            ConvertState::InCreateTable { .. } => {
                self.table_line(line, sink)?;
                Ok(None)
            }
            ConvertState::InInsertRows { .. } => self.insert_line(line, sink),
        }
    }

    /// End of input: close any insert block and emit the deferred
    /// constraints.
    pub fn finish(mut self, sink: &mut dyn Sink) -> Result<Summary> {
        match std::mem::replace(&mut self.state, ConvertState::Top) {
            ConvertState::InCreateTable { table, line, .. } => {
                return Err(ConvertError::UnterminatedTable {
                    line,
                    table: table.name,
                });
            }
            ConvertState::InInsertRows { .. } => self.ended_insert(),
            ConvertState::Top => {}
        }

        for table in &self.tables {
            for statement in table.not_null_constraints() {
                sink.emit(&statement.to_string())?;
                self.summary.not_null_constraints += 1;
            }
        }

        Ok(self.summary)
    }

    fn dispatch(&mut self, line: Line, sink: &mut dyn Sink) -> Result<()> {
        match LineKind::of(&line.text) {
            LineKind::Comment | LineKind::Other => sink.emit(&line.text),
            LineKind::DropTable => {
                debug!("dropping line {}: {}", line.number, line.text);
                Ok(())
            }
            LineKind::CreateTable => self.create_table_header(line, sink),
            LineKind::InsertInto => self.insert_header(line, sink),
        }
    }

    fn create_table_header(&mut self, line: Line, sink: &mut dyn Sink) -> Result<()> {
        let mut tokens: Vec<String> = line.text.split(' ').map(str::to_string).collect();
        let name = match tokens.get(2) {
            Some(token) if !token.is_empty() => oracle_identifier(token, Some(2)),
            _ => {
                return Err(ConvertError::MalformedHeader {
                    line: line.number,
                    statement: HeaderKind::CreateTable,
                    text: line.text,
                })
            }
        };
        tokens[2] = name.clone();

        sink.emit(&tokens.join(" "))?;
        self.started_create_table(Table::new(name), line.number);
        Ok(())
    }

    fn table_line(&mut self, line: Line, sink: &mut dyn Sink) -> Result<()> {
        if line.starts_with(")") {
            return self.ended_create_table(sink);
        }
        if line.starts_with("PRIMARY KEY") {
            debug!("skipping primary key on line {}", line.number);
            return Ok(());
        }

        if let ConvertState::InCreateTable { table, columns, .. } = &mut self.state {
            if *columns > 0 {
                sink.emit(",")?;
            }
            let column = translate_column(&line.text, &mut table.not_null_columns);
            sink.emit(&column)?;
            *columns += 1;
        }
        Ok(())
    }

    fn insert_header(&mut self, line: Line, sink: &mut dyn Sink) -> Result<()> {
        if line.text.split(' ').nth(2).map_or(true, str::is_empty) {
            return Err(ConvertError::MalformedHeader {
                line: line.number,
                statement: HeaderKind::InsertInto,
                text: line.text,
            });
        }
        if line.text.ends_with(';') {
            warn!(
                "line {}: values on the INSERT line itself are not converted",
                line.number
            );
        }

        // `&` starts a substitution variable in SQL*Plus
        sink.emit("SET DEFINE OFF;")?;
        self.started_insert(oracle_identifier(&line.text, None));
        Ok(())
    }

    fn insert_line(&mut self, line: Line, sink: &mut dyn Sink) -> Result<Option<Line>> {
        if !line.starts_with("(") {
            self.ended_insert();
            return Ok(Some(line));
        }

        if let ConvertState::InInsertRows { header } = &self.state {
            sink.emit(&InsertRow::from_row(header, &line.text).to_string())?;
            self.summary.inserts += 1;
        }
        Ok(None)
    }

    fn started_create_table(&mut self, table: Table, line: usize) {
        debug!("started_create_table {} at line {}", table.name, line);
        debug_assert_eq!(self.state, ConvertState::Top);

        self.state = ConvertState::InCreateTable {
            table,
            line,
            columns: 0,
        };
    }

    fn ended_create_table(&mut self, sink: &mut dyn Sink) -> Result<()> {
        if let ConvertState::InCreateTable { table, columns, .. } =
            std::mem::replace(&mut self.state, ConvertState::Top)
        {
            debug!(
                "ended_create_table {}: {} columns, {} NOT NULL",
                table.name,
                columns,
                table.not_null_columns.len()
            );
            for line in STORAGE_CLAUSE.iter() {
                sink.emit(line)?;
            }
            self.tables.push(table);
            self.summary.tables += 1;
        }
        Ok(())
    }

    fn started_insert(&mut self, header: String) {
        debug!("started_insert {}", header);
        debug_assert_eq!(self.state, ConvertState::Top);

        self.state = ConvertState::InInsertRows { header };
    }

    fn ended_insert(&mut self) {
        debug!("ended_insert");
        self.state = ConvertState::Top;
    }
}
