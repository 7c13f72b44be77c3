//! # AskLoop Core
//!
//! A small library for validated console input in interactive CLI
//! applications.
//!
//! The main idea is that you ask for a **typed** value together with an
//! **acceptance predicate**, and the prompt loops until the user supplies
//! input that both parses as the requested type and satisfies the predicate.
//! Parse failures and rejected values are handled the same way: a retry
//! notice is printed, the rest of the offending line is discarded, and the
//! question is asked again.
//!
//! ## Features
//! - Typed prompts for any `FromStr + Display` type (integers, floats,
//!   strings, or your own aggregates) via [`utils::Terminal::ask`].
//! - Acceptance predicates as plain closures, plus a vocabulary of ready-made
//!   ones in [`utils::accept`] (ranges, exact matches, option lists).
//! - A non-looping variant, [`utils::Terminal::ask_once`], that surfaces the
//!   first invalid answer as an error instead of retrying.
//! - A stream-generic engine, [`utils::Prompter`], usable with any `BufRead`
//!   source and `Write` sink, so prompt flows are testable without a
//!   terminal.
//! - Exhausted input is reported as a distinct error instead of looping
//!   forever.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use askloop_core::utils::{Terminal, accept};
//!
//! let threads: u8 = Terminal::ask(
//!     "Enter scan threads (1-16):",
//!     accept::between(1, 16),
//! )
//! .unwrap();
//! println!("Threads: {}", threads);
//! ```
//!
//! ## Custom predicates
//!
//! Any `Fn(&T) -> bool` works; the helpers in [`utils::accept`] are only a
//! convenience:
//!
//! ```rust,no_run
//! use askloop_core::utils::Terminal;
//!
//! let even: u32 = Terminal::ask(
//!     "Enter an even number:",
//!     |n: &u32| n % 2 == 0,
//! )
//! .unwrap();
//! println!("Accepted: {}", even);
//! ```
//!
//! ## Testing prompt flows
//!
//! ```rust
//! use askloop_core::utils::{Prompter, accept};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! let mut prompter = Prompter::new(Cursor::new("oops\n7\n"), &mut output);
//!
//! let answer: i32 = prompter
//!     .ask("Enter a number between (0, 10):", accept::between(0, 10))
//!     .unwrap();
//! assert_eq!(answer, 7);
//! ```
//!
//! ## Architecture
//!
//! - **`utils::prompt`** - the reader engine, the stdin/stdout front end and
//!   the error type
//! - **`utils::accept`** - ready-made acceptance predicates

pub mod utils;
