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

//! Line reader
//!
//! Splits the dump into trimmed, numbered lines. A line can be pushed back
//! once consumed, so a block converter that reads one line too far hands it
//! back to the dispatcher.

use std::io::BufRead;

use crate::error::{ConvertError, Result};

/// One physical input line, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the input
    pub number: usize,
    pub text: String,
}

impl Line {
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix)
    }
}

pub struct LineReader<'a> {
    input: &'a mut dyn BufRead,
    buffer: String,
    pub line: usize,
    pushed_back: Option<Line>,
}

impl<'a> LineReader<'a> {
    pub fn new(input: &'a mut dyn BufRead) -> Self {
        Self {
            input,
            buffer: String::new(),
            line: 0,
            pushed_back: None,
        }
    }

    /// Get the next line or None at end of input
    pub fn next_line(&mut self) -> Result<Option<Line>> {
        if let Some(line) = self.pushed_back.take() {
            return Ok(Some(line));
        }

        self.buffer.clear();
        let read = self
            .input
            .read_line(&mut self.buffer)
            .map_err(|source| ConvertError::Read {
                line: self.line,
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }

        self.line += 1;
        Ok(Some(Line {
            number: self.line,
            text: self.buffer.trim().to_string(),
        }))
    }

    /// Hand a consumed line back; the next call to `next_line` returns it.
    pub fn pushback_line(&mut self, line: Line) {
        debug_assert!(self.pushed_back.is_none(), "only one line of lookahead");
        self.pushed_back = Some(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn numbers_and_trims_lines() {
        let mut input = Cursor::new("  first  \r\n\tsecond\n\nlast");
        let mut reader = LineReader::new(&mut input);

        let texts: Vec<(usize, String)> = std::iter::from_fn(|| reader.next_line().unwrap())
            .map(|l| (l.number, l.text))
            .collect();

        assert_eq!(
            texts,
            vec![
                (1, "first".to_string()),
                (2, "second".to_string()),
                (3, String::new()),
                (4, "last".to_string()),
            ]
        );
    }

    #[test]
    fn pushed_back_line_is_returned_again() {
        let mut input = Cursor::new("a\nb\n");
        let mut reader = LineReader::new(&mut input);

        let a = reader.next_line().unwrap().unwrap();
        reader.pushback_line(a.clone());
        assert_eq!(reader.next_line().unwrap(), Some(a));
        assert_eq!(reader.next_line().unwrap().unwrap().text, "b");
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let mut input = Cursor::new(b"ok\n\xff\xfe\n".to_vec());
        let mut reader = LineReader::new(&mut input);

        assert!(reader.next_line().unwrap().is_some());
        match reader.next_line() {
            Err(ConvertError::Read { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected read error, got {:?}", other),
        }
    }
}
