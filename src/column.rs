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

//! Column definition translation
//!
//! Each rule is a plain substring replacement applied once, in order, to
//! the output of the previous one. Matching is not word bounded: `int`
//! also matches inside `point` or `interval`.

use log::debug;

use crate::ast::{oracle_identifier, NotNullColumns};

const NOT_NULL: &str = "NOT NULL";

/// `(pattern, replacement)` pairs run before the NOT NULL check.
const TYPE_RULES: [(&str, &str); 2] = [("int", "NUMBER"), ("float", "FLOAT(126)")];

/// `(pattern, replacement)` pairs run after the NOT NULL check.
const ATTRIBUTE_RULES: [(&str, &str); 5] = [
    ("CHARACTER SET utf8mb4", ""),
    ("COLLATE utf8mb4_ja_0900_as_cs", "COLLATE \"USING_NLS_COMP\""),
    ("varchar", "NVARCHAR2"),
    ("unsigned", ""),
    ("AUTO_INCREMENT", ""),
];

/// Translate one MySQL column definition into Oracle syntax.
///
/// A column declared `NOT NULL` loses the constraint here and is recorded in
/// `not_null` instead, to be enabled by an `ALTER TABLE` once the whole dump
/// has been read.
pub fn translate_column(definition: &str, not_null: &mut NotNullColumns) -> String {
    let definition = definition.trim_end_matches(',');

    let mut tokens: Vec<String> = definition.split(' ').map(str::to_string).collect();
    let name = oracle_identifier(&tokens[0], None);
    tokens[0] = name.clone();
    let mut line = tokens.join(" ");

    for (pattern, replacement) in TYPE_RULES.iter() {
        line = line.replacen(pattern, replacement, 1);
    }

    if line.contains(NOT_NULL) {
        debug!("column {} is NOT NULL", name);
        not_null.insert(&name);
        line = line.replacen(NOT_NULL, "", 1);
    }

    for (pattern, replacement) in ATTRIBUTE_RULES.iter() {
        line = line.replacen(pattern, replacement, 1);
    }

    // Oracle stores '' as NULL for character types
    if line.contains("NVARCHAR2") {
        line = line.replacen("DEFAULT NULL", "DEFAULT ''", 1);
    }

    line.trim_end().to_string()
}
