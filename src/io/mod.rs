//! Input/output abstractions
//!
//! Traits for line input and text output so the session can be driven
//! by a terminal or by scripted mocks in tests.

use std::io::{self, BufRead, Write};

/// Trait for reading user input
pub trait InputReader {
    /// Prompt and read one line. `Ok(None)` means the input has ended.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !prompt.is_empty() {
            print!("{} ", prompt);
        }
        io::stdout().flush()?;
        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
