pub mod accept;

pub mod prompt;
pub use prompt::{PromptError, Promptable, Prompter, RETRY_NOTICE, Terminal};
