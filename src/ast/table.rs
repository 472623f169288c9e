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

use super::statement::AlterTableNotNull;

/// Columns declared `NOT NULL`, kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotNullColumns(Vec<String>);

impl NotNullColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a column. Returns false if it was already recorded.
    pub fn insert(&mut self, column: &str) -> bool {
        if self.contains(column) {
            return false;
        }
        self.0.push(column.to_string());
        true
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// A table read from a `CREATE TABLE` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Oracle spelling, e.g. `"USERS"`
    pub name: String,
    pub not_null_columns: NotNullColumns,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            not_null_columns: NotNullColumns::new(),
        }
    }

    /// The deferred `ALTER TABLE ... NOT NULL ENABLE` statements for this table.
    pub fn not_null_constraints(&self) -> impl Iterator<Item = AlterTableNotNull<'_>> {
        self.not_null_columns
            .iter()
            .map(move |column| AlterTableNotNull {
                table: &self.name,
                column,
            })
    }
}
