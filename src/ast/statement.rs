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

use std::fmt;

/// Closes every converted `CREATE TABLE`, replacing the dump's own `)` line.
pub const STORAGE_CLAUSE: [&str; 7] = [
    ")  DEFAULT COLLATION \"USING_NLS_COMP\" SEGMENT CREATION IMMEDIATE ",
    "PCTFREE 10 PCTUSED 40 INITRANS 1 MAXTRANS 255 ",
    "NOCOMPRESS LOGGING",
    "STORAGE(INITIAL 65536 NEXT 1048576 MINEXTENTS 1 MAXEXTENTS 2147483645",
    "PCTINCREASE 0 FREELISTS 1 FREELIST GROUPS 1",
    "BUFFER_POOL DEFAULT FLASH_CACHE DEFAULT CELL_FLASH_CACHE DEFAULT)",
    "TABLESPACE \"DATA\" ;",
];

/// `ALTER TABLE <table> MODIFY (<column> NOT NULL ENABLE);`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlterTableNotNull<'a> {
    pub table: &'a str,
    pub column: &'a str,
}

impl<'a> fmt::Display for AlterTableNotNull<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ALTER TABLE  {} MODIFY ( {}  NOT NULL ENABLE );",
            self.table, self.column
        )
    }
}

/// A single-row `INSERT`: the converted header followed by one value tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertRow<'a> {
    pub header: &'a str,
    pub values: &'a str,
}

impl<'a> InsertRow<'a> {
    /// Build a statement from a raw row line, dropping the separator the dump
    /// put after the tuple.
    pub fn from_row(header: &'a str, row: &'a str) -> Self {
        let mut values = row;
        if values.ends_with(',') {
            values = values.trim_end_matches(',');
        }
        if values.ends_with(';') {
            values = values.trim_end_matches(';');
        }
        InsertRow { header, values }
    }
}

impl<'a> fmt::Display for InsertRow<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} ;", self.header, self.values)
    }
}
