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

//! Output sinks

use std::io::Write;

use crate::error::{ConvertError, Result};

/// Receives converted SQL, one line at a time, without line terminator.
pub trait Sink {
    fn emit(&mut self, line: &str) -> Result<()>;
}

/// Collects lines in memory.
impl Sink for Vec<String> {
    fn emit(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, line: &str) -> Result<()> {
        (**self).emit(line)
    }
}

/// Writes each line followed by `\n`.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        WriteSink { writer }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(ConvertError::Write)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(ConvertError::Write)
    }
}
