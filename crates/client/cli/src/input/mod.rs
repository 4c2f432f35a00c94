//! Input processing for the CLI client.
//!
//! This module owns the text-to-command mapping so the rest of the
//! application never inspects raw input lines.

use std::io::{self, BufRead};

use maze_content::MapPreset;
use maze_core::Command;

/// High-level outcome of reading one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineInput<T> {
    /// The line decoded to a value.
    Submit(T),
    /// The line was not understood; carries the trimmed text.
    Invalid(String),
    /// Input reached end of file.
    Closed,
}

/// Decodes a turn command. Accepts the menu number, the initial or the word.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" | "a" | "advance" => Some(Command::Advance),
        "2" | "u" | "undo" => Some(Command::Undo),
        "3" | "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

/// Decodes a bundled map letter.
pub fn parse_preset(line: &str) -> Option<MapPreset> {
    line.trim().parse().ok()
}

/// Reads player input line by line.
pub struct InputHandler<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> InputHandler<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    pub fn read_command(&mut self) -> io::Result<LineInput<Command>> {
        self.read_with(parse_command)
    }

    pub fn read_preset(&mut self) -> io::Result<LineInput<MapPreset>> {
        self.read_with(parse_preset)
    }

    /// Blocks until a line (or end of input) arrives; the content is ignored.
    pub fn wait_for_enter(&mut self) -> io::Result<()> {
        self.next_line()?;
        Ok(())
    }

    fn read_with<T>(&mut self, parse: impl Fn(&str) -> Option<T>) -> io::Result<LineInput<T>> {
        let Some(line) = self.next_line()? else {
            return Ok(LineInput::Closed);
        };

        Ok(match parse(line) {
            Some(value) => LineInput::Submit(value),
            None => LineInput::Invalid(line.trim().to_string()),
        })
    }

    fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.as_str()))
    }
}
