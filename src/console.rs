//! Line-oriented console I/O for the interactive shell.

use std::io::{self, BufRead, Write};

/// Sentinel that ends a multi-entry input loop.
pub const TERMINATOR: &str = "done";

/// Returns true if `line` is the input terminator, compared
/// case-insensitively.
pub fn is_terminator(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(TERMINATOR)
}

/// The input/output pair the record operations run against.
///
/// In the real session this wraps locked stdin and stdout; tests drive it
/// with a `Cursor` and a byte buffer.
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Writes `text` without a trailing newline, flushes, and reads one
    /// line. Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.read_line()
    }

    /// Reads one line without prompting, with the line ending stripped.
    /// Returns `None` once the input is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Writes one line of status or rendering text.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn test_console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_reads_one_line() {
        let mut console = test_console("Pasta\n");
        let line = console.prompt("Title: ").unwrap();
        assert_eq!(line.as_deref(), Some("Pasta"));
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "Title: ");
    }

    #[test]
    fn test_prompt_at_eof_returns_none() {
        let mut console = test_console("");
        assert_eq!(console.prompt("Title: ").unwrap(), None);
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let mut console = test_console("Pasta\r\n");
        assert_eq!(console.read_line().unwrap().as_deref(), Some("Pasta"));
    }

    #[test]
    fn test_read_line_keeps_empty_lines() {
        let mut console = test_console("\nnext\n");
        assert_eq!(console.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_is_terminator_case_insensitive() {
        assert!(is_terminator("done"));
        assert!(is_terminator("DONE"));
        assert!(is_terminator("  Done  "));
        assert!(!is_terminator("done?"));
        assert!(!is_terminator(""));
    }
}
