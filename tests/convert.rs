use matches::assert_matches;

use mysqldump_oracle::{ConvertError, Converter, HeaderKind, STORAGE_CLAUSE};

const DUMP: &str = include_str!("fixtures/tableplus_dump.sql");

fn convert(dump: &str) -> Vec<String> {
    Converter::convert_str(dump).unwrap()
}

fn position(lines: &[String], wanted: &str) -> usize {
    lines
        .iter()
        .position(|l| l == wanted)
        .unwrap_or_else(|| panic!("{:?} not found in {:#?}", wanted, lines))
}

#[test]
fn comments_pass_through_trimmed() {
    let out = convert("   -- a comment   \n/* block */\n\t// slashes\n");
    assert_eq!(out, vec!["-- a comment", "/* block */", "// slashes"]);
}

#[test]
fn drop_table_produces_nothing() {
    let out = convert("DROP TABLE IF EXISTS `customers`;\nDROP TABLE `x`;\n");
    assert!(out.is_empty());
}

#[test]
fn other_lines_pass_through() {
    let out = convert("SET FOREIGN_KEY_CHECKS=0;\n\nCOMMIT;\n");
    assert_eq!(out, vec!["SET FOREIGN_KEY_CHECKS=0;", "", "COMMIT;"]);
}

#[test]
fn full_dump() {
    let out = convert(DUMP);

    assert_eq!(Some(out[0].as_str()), DUMP.lines().next());
    assert!(out.iter().all(|l| !l.starts_with("DROP TABLE")));

    let header = position(&out, "CREATE TABLE \"CUSTOMERS\" (");
    assert_eq!(
        &out[header + 1..header + 8],
        &[
            "\"ID\" NUMBER",
            ",",
            "\"NAME\" NVARCHAR2(64)  COLLATE \"USING_NLS_COMP\"",
            ",",
            "\"BIO\" NVARCHAR2(255) DEFAULT ''",
            ",",
            "\"SCORE\" FLOAT(126) DEFAULT NULL",
        ]
    );
    assert_eq!(&out[header + 8..header + 15], &STORAGE_CLAUSE[..]);

    let notes = position(&out, "CREATE TABLE \"NOTES\" (");
    assert_eq!(out[notes + 1], "\"BODY\" NVARCHAR2(1024) DEFAULT ''");
    assert_eq!(out[notes + 2], STORAGE_CLAUSE[0]);

    let insert = position(&out, "SET DEFINE OFF;");
    assert_eq!(
        &out[insert + 1..insert + 4],
        &[
            "INSERT INTO \"CUSTOMERS\" (\"ID\", \"NAME\", \"BIO\", \"SCORE\") VALUES (1, 'Tom & Jerry', NULL, 1.5) ;",
            "INSERT INTO \"CUSTOMERS\" (\"ID\", \"NAME\", \"BIO\", \"SCORE\") VALUES (2, 'Alice', 'likes tea', NULL) ;",
            "",
        ]
    );
    assert_eq!(out.iter().filter(|l| *l == "SET DEFINE OFF;").count(), 2);
    assert!(out.contains(&"INSERT INTO \"NOTES\" (\"BODY\") VALUES ('first') ;".to_string()));

    // the line ending the last insert block is dispatched as a comment
    let last_comment = position(
        &out,
        "/*!40101 SET CHARACTER_SET_CLIENT=@OLD_CHARACTER_SET_CLIENT */;",
    );
    assert!(last_comment > insert);

    let mut constraints = out[out.len() - 2..].to_vec();
    constraints.sort();
    assert_eq!(
        constraints,
        vec![
            "ALTER TABLE  \"CUSTOMERS\" MODIFY ( \"ID\"  NOT NULL ENABLE );",
            "ALTER TABLE  \"CUSTOMERS\" MODIFY ( \"NAME\"  NOT NULL ENABLE );",
        ]
    );
    assert_eq!(out.iter().filter(|l| l.starts_with("ALTER TABLE")).count(), 2);
}

#[test]
fn summary_counts() {
    let mut out = Vec::new();
    let summary = Converter::convert_mysqldump(&mut DUMP.as_bytes(), &mut out).unwrap();

    assert_eq!(summary.lines, DUMP.lines().count());
    assert_eq!(summary.tables, 2);
    assert_eq!(summary.inserts, 3);
    assert_eq!(summary.not_null_constraints, 2);
}

#[test]
fn n_columns_give_n_minus_one_comma_lines() {
    let mut dump = String::from("CREATE TABLE `wide` (\n");
    for i in 0..5 {
        dump.push_str(&format!("  `c{}` int NOT NULL,\n", i));
    }
    dump.push_str("  PRIMARY KEY (`c0`)\n) ENGINE=InnoDB;\n");

    let out = convert(&dump);
    let body = &out[1..out.len() - STORAGE_CLAUSE.len() - 5];
    assert_eq!(body.len(), 9);
    assert_eq!(body.iter().filter(|l| *l == ",").count(), 4);
    assert!(body.iter().step_by(2).all(|l| l.ends_with("NUMBER")));
}

#[test]
fn constraints_follow_table_order() {
    let dump = "\
CREATE TABLE `b` (
`x` int NOT NULL,
`y` int NOT NULL
)
CREATE TABLE `empty` (
`z` int DEFAULT NULL
)
CREATE TABLE `a` (
`w` int NOT NULL
)
";
    let out = convert(dump);
    let tables: Vec<&str> = out
        .iter()
        .filter(|l| l.starts_with("ALTER TABLE"))
        .map(|l| l.split_whitespace().nth(2).unwrap())
        .collect();
    assert_eq!(tables, vec!["\"B\"", "\"B\"", "\"A\""]);
}

#[test]
fn insert_rows_without_separators() {
    let out = convert("INSERT INTO `t` VALUES\n(1)\n(2),\n(3);\nSELECT 1;\n");
    assert_eq!(
        out,
        vec![
            "SET DEFINE OFF;",
            "INSERT INTO \"T\" VALUES (1) ;",
            "INSERT INTO \"T\" VALUES (2) ;",
            "INSERT INTO \"T\" VALUES (3) ;",
            "SELECT 1;",
        ]
    );
}

#[test]
fn insert_block_followed_by_create_table() {
    let out = convert("INSERT INTO `t` VALUES\n(1);\nCREATE TABLE `u` (\n`a` int\n)\n");
    let header = position(&out, "CREATE TABLE \"U\" (");
    assert_eq!(header, 2);
    assert_eq!(out[3], "\"A\" NUMBER");
}

#[test]
fn duplicate_tables_are_kept() {
    let dump = "CREATE TABLE `t` (\n`a` int NOT NULL\n)\nCREATE TABLE `t` (\n`a` int NOT NULL\n)\n";
    let out = convert(dump);
    assert_eq!(out.iter().filter(|l| l.starts_with("ALTER TABLE")).count(), 2);
}

#[test]
fn malformed_create_table_header() {
    let result = Converter::convert_str("-- ok\nCREATE TABLE\n");
    assert_matches!(
        result,
        Err(ConvertError::MalformedHeader {
            line: 2,
            statement: HeaderKind::CreateTable,
            ..
        })
    );
}

#[test]
fn malformed_insert_header() {
    let result = Converter::convert_str("INSERT INTO \n(1);\n");
    assert_matches!(
        result,
        Err(ConvertError::MalformedHeader {
            line: 1,
            statement: HeaderKind::InsertInto,
            ..
        })
    );
}

#[test]
fn unterminated_table() {
    let result = Converter::convert_str("\nCREATE TABLE `t` (\n`a` int,\n");
    assert_matches!(result, Err(ConvertError::UnterminatedTable { line: 2, .. }));
}

#[test]
fn missing_file() {
    let mut out = Vec::new();
    let result = Converter::convert_file("does/not/exist.sql", &mut out);
    assert_matches!(result, Err(ConvertError::FileNotFound { .. }));
    assert_eq!(result.unwrap_err().exit_code(), 1);
}
