//! Interactive command loop over stdin/stdout.
//!
//! The loop prompts, blocks on one line of input, tokenizes it, dispatches to
//! a command handler, prints the reply, and repeats until `close`/`exit` (or
//! end of input). It owns the one [`AddressBook`] instance of the process and
//! passes it by reference into every handler.

use crate::book::AddressBook;
use crate::commands::{self, CommandKind};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Enter a command: ";
const BANNER: &str = "Welcome to the assistant bot!";
const FAREWELL: &str = "Good bye!";
const INVALID_COMMAND: &str = "Invalid command.";

/// Loop state after handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    /// Print the reply and keep running.
    Reply(String),
    /// Print the farewell and stop.
    Terminate,
}

/// The interactive session, generic over its I/O so tests can run scripted
/// conversations over in-memory buffers.
pub struct Repl<R, W> {
    book: AddressBook,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Create a session with an empty address book.
    pub fn new(input: R, output: W) -> Self {
        Self {
            book: AddressBook::new(),
            input,
            output,
        }
    }

    /// Run the conversation until `close`/`exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER)?;

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            // EOF ends the session the same way an explicit exit does.
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input, terminating session");
                writeln!(self.output, "{}", FAREWELL)?;
                return Ok(());
            }

            match step(&mut self.book, &line) {
                Step::Reply(reply) => writeln!(self.output, "{}", reply)?,
                Step::Terminate => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    return Ok(());
                }
            }
        }
    }
}

/// Handle one input line against the book.
fn step(book: &mut AddressBook, line: &str) -> Step {
    match commands::parse_input(line) {
        // A blank line has no command token.
        None => Step::Reply(INVALID_COMMAND.to_string()),
        Some(input) if input.kind == CommandKind::Exit => Step::Terminate,
        Some(input) => Step::Reply(commands::dispatch(book, &input)),
    }
}
