//! # Validated Input Prompts
//!
//! This module provides utilities for interacting with the terminal to
//! request a typed value. It repeatedly prompts the user until the input
//! parses as the requested type and satisfies the provided acceptance
//! predicate.
//!
//! Each attempt consumes exactly one line of input. The answer is the first
//! whitespace-delimited token of that line; everything after it up to and
//! including the line terminator is discarded, so stray characters from a bad
//! line never leak into the next attempt.
//!
//! ## Features
//! - Continuously prompts the user until valid input is received.
//! - Works with any `FromStr + Display` type (see [`Promptable`]).
//! - Accepts the predicate as any `Fn(&T) -> bool`, closure or ready-made
//!   helper from [`crate::utils::accept`].
//! - A non-looping variant ([`Terminal::ask_once`]) that reports the first
//!   invalid answer as an error instead of retrying.
//! - Exhausted input yields [`PromptError::EndOfInput`] instead of spinning.
//!
//! ## Usage
//!
//! ### Example 1: Numeric range
//! ```rust,no_run
//! use askloop_core::utils::{Terminal, accept};
//!
//! let grade: i32 = Terminal::ask(
//!     "Enter a number between (0, 10):",
//!     accept::between(0, 10),
//! )
//! .unwrap();
//!
//! println!("Accepted: {}", grade);
//! ```
//!
//! ### Example 2: Restricted string input
//! ```rust,no_run
//! use askloop_core::utils::{Terminal, accept};
//!
//! let answer: String = Terminal::ask(
//!     "Do you like Rust? Y/N",
//!     accept::one_of(vec![
//!         String::from("Y"),
//!         String::from("N"),
//!         String::from("y"),
//!         String::from("n"),
//!     ]),
//! )
//! .unwrap();
//!
//! println!("The input: {}", answer);
//! ```

use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Notice printed after every rejected attempt, before the question repeats.
pub const RETRY_NOTICE: &str = "Invalid input. Please try again.";

/// A type that can be asked for at a prompt: parsable from a text token and
/// printable back to the user.
///
/// Blanket-implemented for every `FromStr + Display` type, which covers the
/// primitives (`i32`, `f64`, `bool`, `String`, ...) as well as any user type
/// that implements both traits.
pub trait Promptable: FromStr + Display {}

impl<T: FromStr + Display> Promptable for T {}

/// Represents a failed prompt.
///
/// The looping [`Prompter::ask`] only ever returns [`EndOfInput`] or [`Io`];
/// invalid answers are retried, never surfaced. The non-looping
/// [`Prompter::ask_once`] additionally reports the first invalid answer as
/// [`NotParsable`] or [`Refused`], carrying the offending token.
///
/// [`EndOfInput`]: PromptError::EndOfInput
/// [`Io`]: PromptError::Io
/// [`NotParsable`]: PromptError::NotParsable
/// [`Refused`]: PromptError::Refused
#[derive(Debug)]
pub enum PromptError {
    EndOfInput,
    Io(io::Error),
    NotParsable(String),
    Refused(String),
}

impl Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "The input ended before a valid value was read"),
            Self::Io(e) => write!(f, "Couldn't read line: {}", e),
            Self::NotParsable(t) => {
                write!(f, "The value {:?} can't be parsed as the requested type", t)
            }
            Self::Refused(t) => write!(f, "The value {:?} was refused by the validator", t),
        }
    }
}

impl Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// The prompt engine, generic over the input source and output sink.
///
/// [`Terminal`] wires this to stdin/stdout; tests (and any non-terminal
/// caller) can wire it to in-memory streams instead.
///
/// # Example
/// ```rust
/// use askloop_core::utils::{Prompter, accept};
/// use std::io::Cursor;
///
/// let mut output = Vec::new();
/// let mut prompter = Prompter::new(Cursor::new("abc\n7\n"), &mut output);
///
/// let answer: i32 = prompter
///     .ask("Enter a number between (0, 10):", accept::between(0, 10))
///     .unwrap();
/// assert_eq!(answer, 7);
/// ```
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Prompter<R, W> {
        Prompter { input, output }
    }

    /// Prints the question and loops until an answer parses as `T` and
    /// passes `accept`. The question is re-printed unchanged on every retry,
    /// after the retry notice.
    ///
    /// Returns the accepted value, or [`PromptError::EndOfInput`] if the
    /// source runs out of lines before a valid answer arrives.
    pub fn ask<T, P>(&mut self, question: &str, accept: P) -> Result<T, PromptError>
    where
        T: Promptable,
        P: Fn(&T) -> bool,
    {
        loop {
            writeln!(self.output, "{}", question)?;
            self.output.flush()?;

            let parsed = self.next_token()?.and_then(|token| token.parse::<T>().ok());

            match parsed {
                Some(value) if accept(&value) => return Ok(value),
                _ => writeln!(self.output, "{}", RETRY_NOTICE)?,
            }
        }
    }

    /// Prints the question and reads exactly one answer. The first invalid
    /// answer is returned as an error instead of being retried:
    /// [`PromptError::NotParsable`] if the token did not parse as `T`,
    /// [`PromptError::Refused`] if it parsed but `accept` rejected it.
    ///
    /// The rest of the line is still discarded on failure, so a subsequent
    /// prompt starts from a clean line.
    pub fn ask_once<T, P>(&mut self, question: &str, accept: P) -> Result<T, PromptError>
    where
        T: Promptable,
        P: Fn(&T) -> bool,
    {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;

        let token = match self.next_token()? {
            Some(token) => token,
            None => return Err(PromptError::NotParsable(String::new())),
        };

        match token.parse::<T>() {
            Ok(value) if accept(&value) => Ok(value),
            Ok(_) => Err(PromptError::Refused(token)),
            Err(_) => Err(PromptError::NotParsable(token)),
        }
    }

    /// Consumes one line and yields its first whitespace-delimited token.
    /// A line with no token (blank or all-whitespace) yields `None`.
    fn next_token(&mut self) -> Result<Option<String>, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(line.split_whitespace().next().map(str::to_string))
    }
}

/// The stdin/stdout front end: asks a question on standard output and reads
/// the answer from standard input.
///
/// # Examples
///
/// ## Example 1: Numeric range
/// ```rust,no_run
/// use askloop_core::utils::{Terminal, accept};
///
/// let grade: i32 = Terminal::ask(
///     "Enter a number between (0, 10):",
///     accept::between(0, 10),
/// )
/// .unwrap();
///
/// println!("Accepted: {}", grade);
/// ```
///
/// ## Example 2: One try only
/// ```rust,no_run
/// use askloop_core::utils::{Terminal, accept};
///
/// match Terminal::ask_once::<i32, _>("Guess the number:", accept::equals(42)) {
///     Ok(n) => println!("Correct: {}", n),
///     Err(e) => println!("{}", e),
/// }
/// ```
pub struct Terminal;

impl Terminal {
    /// Asks on stdin/stdout until a valid answer is received.
    /// See [`Prompter::ask`] for the contract.
    pub fn ask<T, P>(question: &str, accept: P) -> Result<T, PromptError>
    where
        T: Promptable,
        P: Fn(&T) -> bool,
    {
        Prompter::new(io::stdin().lock(), io::stdout().lock()).ask(question, accept)
    }

    /// Asks on stdin/stdout exactly once, surfacing the first invalid answer
    /// as an error. See [`Prompter::ask_once`] for the contract.
    pub fn ask_once<T, P>(question: &str, accept: P) -> Result<T, PromptError>
    where
        T: Promptable,
        P: Fn(&T) -> bool,
    {
        Prompter::new(io::stdin().lock(), io::stdout().lock()).ask_once(question, accept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::accept;
    use std::io::Cursor;

    fn notices(output: &[u8]) -> usize {
        String::from_utf8_lossy(output).matches(RETRY_NOTICE).count()
    }

    fn prompts(output: &[u8], question: &str) -> usize {
        String::from_utf8_lossy(output).matches(question).count()
    }

    #[test]
    fn test_ask_valid_first_try_prints_no_notice() {
        let mut out = Vec::new();
        let answer: i32 = Prompter::new(Cursor::new("5\n"), &mut out)
            .ask("Enter a number between (0, 10):", accept::between(0, 10))
            .unwrap();
        assert_eq!(answer, 5);
        assert_eq!(notices(&out), 0);
        assert_eq!(prompts(&out, "Enter a number between (0, 10):"), 1);
    }

    #[test]
    fn test_ask_out_of_range_then_valid() {
        let mut out = Vec::new();
        let answer: i32 = Prompter::new(Cursor::new("-5\n3\n"), &mut out)
            .ask("Enter a number between (0, 10):", accept::between(0, 10))
            .unwrap();
        assert_eq!(answer, 3);
        assert_eq!(notices(&out), 1);
        // The question repeats unchanged on the retry.
        assert_eq!(prompts(&out, "Enter a number between (0, 10):"), 2);
    }

    #[test]
    fn test_ask_non_numeric_then_valid() {
        let mut out = Vec::new();
        let answer: i32 = Prompter::new(Cursor::new("abc\n7\n"), &mut out)
            .ask("Enter a number between (0, 10):", accept::between(0, 10))
            .unwrap();
        assert_eq!(answer, 7);
        assert_eq!(notices(&out), 1);
    }

    #[test]
    fn test_ask_string_equality() {
        let mut out = Vec::new();
        let answer: String = Prompter::new(Cursor::new("Alice\nBob\n"), &mut out)
            .ask("Who goes there?", accept::equals(String::from("Bob")))
            .unwrap();
        assert_eq!(answer, "Bob");
        assert_eq!(notices(&out), 1);
    }

    #[test]
    fn test_ask_float_range() {
        let mut out = Vec::new();
        let answer: f64 = Prompter::new(Cursor::new("10.5\n4.2\n"), &mut out)
            .ask("Enter a rating from 0 to 10:", accept::between(0.0, 10.0))
            .unwrap();
        assert_eq!(answer, 4.2);
        assert_eq!(notices(&out), 1);
    }

    #[test]
    fn test_ask_closure_predicate() {
        let mut out = Vec::new();
        let answer: u32 = Prompter::new(Cursor::new("3\n8\n"), &mut out)
            .ask("Enter an even number:", |n: &u32| n % 2 == 0)
            .unwrap();
        assert_eq!(answer, 8);
        assert_eq!(notices(&out), 1);
    }

    #[test]
    fn test_trailing_text_after_valid_token_is_discarded() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("3 junk on the same line\n9\n"), &mut out);

        let first: i32 = prompter.ask("First:", accept::between(0, 10)).unwrap();
        let second: i32 = prompter.ask("Second:", accept::between(0, 10)).unwrap();

        assert_eq!(first, 3);
        // "junk" never became the answer to the second prompt.
        assert_eq!(second, 9);
        assert_eq!(notices(&out), 0);
    }

    #[test]
    fn test_token_glued_to_garbage_is_rejected_whole() {
        let mut out = Vec::new();
        let answer: i32 = Prompter::new(Cursor::new("12extra\n5\n"), &mut out)
            .ask("Enter a number:", accept::anything())
            .unwrap();
        // "12extra" is one token and does not parse; it is never split into
        // an accepted "12" plus leftovers.
        assert_eq!(answer, 5);
        assert_eq!(notices(&out), 1);
    }

    #[test]
    fn test_blank_lines_are_retried() {
        let mut out = Vec::new();
        let answer: i32 = Prompter::new(Cursor::new("\n   \n4\n"), &mut out)
            .ask("Enter a number:", accept::anything())
            .unwrap();
        assert_eq!(answer, 4);
        assert_eq!(notices(&out), 2);
    }

    #[test]
    fn test_ask_end_of_input() {
        let mut out = Vec::new();
        let res: Result<i32, _> =
            Prompter::new(Cursor::new(""), &mut out).ask("Enter a number:", accept::anything());
        assert!(matches!(res, Err(PromptError::EndOfInput)));
    }

    #[test]
    fn test_ask_end_of_input_after_rejection() {
        let mut out = Vec::new();
        let res: Result<i32, _> =
            Prompter::new(Cursor::new("abc\n"), &mut out).ask("Enter a number:", accept::anything());
        assert!(matches!(res, Err(PromptError::EndOfInput)));
        assert_eq!(notices(&out), 1);
    }

    #[test]
    fn test_ask_once_success() {
        let mut out = Vec::new();
        let answer: i32 = Prompter::new(Cursor::new("5\n"), &mut out)
            .ask_once("Enter a number between (0, 10):", accept::between(0, 10))
            .unwrap();
        assert_eq!(answer, 5);
        assert_eq!(notices(&out), 0);
    }

    #[test]
    fn test_ask_once_not_parsable() {
        let mut out = Vec::new();
        let res: Result<i32, _> = Prompter::new(Cursor::new("abc\n"), &mut out)
            .ask_once("Enter a number:", accept::anything());
        assert!(matches!(&res, Err(PromptError::NotParsable(t)) if t == "abc"));
        if let Err(e) = res {
            assert_eq!(
                format!("{}", e),
                "The value \"abc\" can't be parsed as the requested type"
            );
        }
    }

    #[test]
    fn test_ask_once_refused() {
        let mut out = Vec::new();
        let res: Result<i32, _> = Prompter::new(Cursor::new("-5\n"), &mut out)
            .ask_once("Enter a non-negative number:", accept::at_least(0));
        assert!(matches!(&res, Err(PromptError::Refused(t)) if t == "-5"));
        if let Err(e) = res {
            assert_eq!(
                format!("{}", e),
                "The value \"-5\" was refused by the validator"
            );
        }
    }

    #[test]
    fn test_ask_once_end_of_input() {
        let mut out = Vec::new();
        let res: Result<i32, _> = Prompter::new(Cursor::new(""), &mut out)
            .ask_once("Enter a number:", accept::anything());
        assert!(matches!(res, Err(PromptError::EndOfInput)));
    }

    #[test]
    fn test_ask_once_blank_line_is_not_parsable() {
        let mut out = Vec::new();
        let res: Result<String, _> = Prompter::new(Cursor::new("\n"), &mut out)
            .ask_once("Say something:", accept::anything());
        assert!(matches!(res, Err(PromptError::NotParsable(ref t)) if t.is_empty()));
    }

    #[test]
    fn test_ask_once_leaves_stream_synchronized() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("99 tail\n7\n"), &mut out);

        let first: i32 = prompter.ask_once("First:", accept::anything()).unwrap();
        let second: i32 = prompter.ask("Second:", accept::anything()).unwrap();

        assert_eq!(first, 99);
        assert_eq!(second, 7);
    }

    #[test]
    fn test_end_of_input_message() {
        assert_eq!(
            format!("{}", PromptError::EndOfInput),
            "The input ended before a valid value was read"
        );
    }
}
