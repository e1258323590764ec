//! Interactive yes/no confirmation.

use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question.
pub trait Prompt {
  /// Returns true only on an affirmative answer. Read failures count as "no".
  fn confirm(&mut self, question: &str) -> bool;
}

/// Prompt reading answers line by line from `input`.
pub struct LinePrompt<R, W> {
  input: R,
  output: W,
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
  pub fn stdio() -> Self {
    Self::new(io::stdin().lock(), io::stdout())
  }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
  fn confirm(&mut self, question: &str) -> bool {
    if write!(self.output, "{question} (yes/no): ")
      .and_then(|()| self.output.flush())
      .is_err()
    {
      return false;
    }

    let mut answer = String::new();
    match self.input.read_line(&mut answer) {
      Ok(0) | Err(_) => false,
      Ok(_) => is_affirmative(&answer),
    }
  }
}

/// `yes` or `y`, ignoring case and surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
  let answer = answer.trim();
  answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}
