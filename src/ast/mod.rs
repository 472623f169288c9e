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

//! Oracle side of the conversion: tables seen in the dump and the
//! statements emitted for them.

mod statement;
mod table;

pub use self::statement::{AlterTableNotNull, InsertRow, STORAGE_CLAUSE};
pub use self::table::{NotNullColumns, Table};

/// Turn a MySQL identifier into its Oracle spelling: backquotes become
/// double quotes, the rest is uppercased.
///
/// `limit` caps how many backquotes are replaced, `None` replaces them all.
pub fn oracle_identifier(ident: &str, limit: Option<usize>) -> String {
    let quoted = match limit {
        Some(n) => ident.replacen('`', "\"", n),
        None => ident.replace('`', "\""),
    };
    quoted.to_uppercase()
}
