//! # Acceptance Predicates
//!
//! Ready-made predicates for the common validation shapes: inclusive and
//! exclusive ranges, one-sided bounds, exact matches and option lists. Each
//! helper returns an `impl Fn(&T) -> bool` that can be passed straight to
//! [`crate::utils::Terminal::ask`] or [`crate::utils::Prompter::ask`];
//! hand-written closures work just as well.
//!
//! ## Example
//! ```rust,no_run
//! use askloop_core::utils::{Terminal, accept};
//!
//! let port: u16 = Terminal::ask(
//!     "Enter a port (1024-65535):",
//!     accept::at_least(1024),
//! )
//! .unwrap();
//! println!("Port: {}", port);
//! ```

/// Accepts every value. Useful when only the type check matters.
pub fn anything<T>() -> impl Fn(&T) -> bool {
    |_| true
}

/// Accepts values in the inclusive range `[low, high]`.
pub fn between<T: PartialOrd>(low: T, high: T) -> impl Fn(&T) -> bool {
    move |value| *value >= low && *value <= high
}

/// Accepts values in the exclusive range `(low, high)`.
pub fn inside<T: PartialOrd>(low: T, high: T) -> impl Fn(&T) -> bool {
    move |value| *value > low && *value < high
}

/// Accepts values greater than or equal to `min`.
pub fn at_least<T: PartialOrd>(min: T) -> impl Fn(&T) -> bool {
    move |value| *value >= min
}

/// Accepts values less than or equal to `max`.
pub fn at_most<T: PartialOrd>(max: T) -> impl Fn(&T) -> bool {
    move |value| *value <= max
}

/// Accepts only `wanted`.
pub fn equals<T: PartialEq>(wanted: T) -> impl Fn(&T) -> bool {
    move |value| *value == wanted
}

/// Accepts any of the given options.
pub fn one_of<T: PartialEq>(options: Vec<T>) -> impl Fn(&T) -> bool {
    move |value| options.contains(value)
}

/// Accepts values that pass both predicates.
pub fn both<T>(first: impl Fn(&T) -> bool, second: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |value| first(value) && second(value)
}
