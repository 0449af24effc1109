//! Operator confirmation
//!
//! The answer is free text: only an exact `n` declines, everything else
//! (including just pressing Enter) confirms. A prompt that cannot be answered
//! at all, such as closed stdin or Ctrl-C, counts as declining.

use std::io::{self, BufRead, IsTerminal, Write};

use inquire::Text;

/// The one answer that declines
const DECLINE: &str = "n";

/// Asks the operator a yes/no question
pub trait Confirmation {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Whether an answer confirms
pub fn is_confirmed(answer: &str) -> bool {
    answer != DECLINE
}

/// Prompts on the controlling terminal, or reads a line from piped stdin
pub struct TerminalPrompt;

impl Confirmation for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        if io::stdin().is_terminal() {
            return Text::new(message)
                .with_help_message("Press Enter to confirm, or 'n' to cancel")
                .prompt()
                .is_ok_and(|answer| is_confirmed(&answer));
        }

        let stdin = io::stdin();
        LinePrompt::new(stdin.lock(), io::stdout()).confirm(message)
    }
}

/// Confirms without asking (`--yes`)
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

/// Writes the question and reads one line as the answer
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_answer(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{message} ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&line);
        Ok(Some(answer.to_string()))
    }
}

impl<R: BufRead, W: Write> Confirmation for LinePrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        matches!(self.read_answer(message), Ok(Some(answer)) if is_confirmed(&answer))
    }
}
