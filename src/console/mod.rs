//! Line-oriented console used by both programs.
//!
//! [`Console`] pairs a [`LineSource`] with an output writer. The binaries read from a
//! `rustyline` [`Terminal`]; tests drive the same flows from any [`BufRead`] script
//! (`Cursor<String>` in, `Vec<u8>` out).

pub mod error;

pub use error::*;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Stdout, Write};
use std::str::FromStr;

const NOT_UTF8: &str = "UTF-8 text";

/// Where answers come from.
///
/// `next_line` shows `prompt`, reads one line and returns it without its line
/// terminator. End of input is [`PromptError::Closed`]; a line that is not valid
/// UTF-8 is a [`PromptError::Format`] so callers can re-prompt.
pub trait LineSource {
    fn next_line<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<String, PromptError>;
}

impl<R: BufRead> LineSource for R {
    fn next_line<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<String, PromptError> {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut bytes = Vec::new();
        if self.read_until(b'\n', &mut bytes)? == 0 {
            return Err(PromptError::Closed);
        }
        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }
        String::from_utf8(bytes).map_err(|e| PromptError::Format {
            input: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            expected: NOT_UTF8,
        })
    }
}

/// Interactive terminal input with line editing and in-session history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self, PromptError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Terminal {
    fn next_line<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<String, PromptError> {
        // rustyline draws the prompt itself; anything buffered must land before it.
        out.flush()?;

        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            // Ctrl-D and Ctrl-C both end the session
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Err(PromptError::Closed),
            Err(ReadlineError::Io(e)) if e.kind() == ErrorKind::InvalidData => {
                Err(PromptError::Format {
                    input: String::new(),
                    expected: NOT_UTF8,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

pub struct Console<L, W> {
    lines: L,
    writer: W,
}

impl Console<Terminal, Stdout> {
    /// Console bound to the terminal: `rustyline` input, stdout output.
    pub fn terminal() -> Result<Self, PromptError> {
        Ok(Self::new(Terminal::new()?, io::stdout()))
    }
}

impl<L: LineSource, W: Write> Console<L, W> {
    pub fn new(lines: L, writer: W) -> Self {
        Self { lines, writer }
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> Result<(), PromptError> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Prints `prompt` and reads one line, without its line terminator.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.lines.next_line(prompt, &mut self.writer)
    }

    /// Reads one line and parses it, ignoring surrounding whitespace.
    pub fn ask_parsed<T: FromStr>(
        &mut self,
        prompt: &str,
        expected: &'static str,
    ) -> Result<T, PromptError> {
        let input = self.ask(prompt)?;
        input
            .trim()
            .parse()
            .map_err(|_| PromptError::Format { input, expected })
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<&str>, Vec<u8>> {
        Console::new(Cursor::new(input), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_endings_only() {
        let mut console = console("  Tomato soup \r\nnext\n");
        assert_eq!(console.ask("Name: ").unwrap(), "  Tomato soup ");
        assert_eq!(console.ask("Name: ").unwrap(), "next");
        assert_eq!(String::from_utf8_lossy(console.writer()), "Name: Name: ");
    }

    #[test]
    fn test_end_of_input_is_closed() {
        let mut console = console("");
        assert!(matches!(console.ask("> "), Err(PromptError::Closed)));
    }

    #[test]
    fn test_ask_parsed_reports_format_error() {
        let mut console = console(" 12 \nabc\n");
        assert_eq!(console.ask_parsed::<i64>("> ", "a number").unwrap(), 12);
        match console.ask_parsed::<i64>("> ", "a number") {
            Err(PromptError::Format { input, expected }) => {
                assert_eq!(input, "abc");
                assert_eq!(expected, "a number");
            }
            other => panic!("Expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_line_is_a_format_error_and_is_consumed() {
        let mut console = Console::new(Cursor::new(b"\xff\xfe\n7\n".to_vec()), Vec::new());

        match console.ask("> ") {
            Err(PromptError::Format { input, expected }) => {
                assert_eq!(input, "\u{fffd}\u{fffd}");
                assert_eq!(expected, "UTF-8 text");
            }
            other => panic!("Expected Format error, got {other:?}"),
        }
        assert_eq!(console.ask_parsed::<i64>("> ", "a number").unwrap(), 7);
    }
}
