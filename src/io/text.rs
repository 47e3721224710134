use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::LoadError;

/// Line oriented reader shared by the text formats.
pub(super) struct TextParserContext {
    buf_reader: BufReader<File>,
    filepath: String,
    line_count: usize,
}

impl TextParserContext {
    pub fn open<P: AsRef<Path>>(filepath: P) -> Result<Self, LoadError> {
        let file = File::open(filepath.as_ref())?;
        Ok(Self {
            buf_reader: BufReader::new(file),
            filepath: filepath.as_ref().display().to_string(),
            line_count: 0,
        })
    }

    /// Reads a line and increase the line counter. It already trim the string.
    /// Returns `None` at the end of the file.
    pub fn read_line(&mut self) -> Result<Option<String>, LoadError> {
        let mut line = String::new();
        if self.buf_reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line_count += 1;
        Ok(Some(line.trim().to_string()))
    }

    /// Same as [`read_line`], but reaching the end of the file is an error.
    pub fn expect_line(&mut self) -> Result<String, LoadError> {
        match self.read_line()? {
            Some(line) => Ok(line),
            None => Err(self.gen_error("unexpected end of file".to_string())),
        }
    }

    /// Formats an error message by putting the file name, the current line and the supplied message.
    ///
    /// # Arguments
    ///
    /// * `message` - An error message.
    pub fn gen_error(&self, message: String) -> LoadError {
        LoadError::ParseError(format!(
            "{}:{}: {}",
            self.filepath, self.line_count, message
        ))
    }
}
