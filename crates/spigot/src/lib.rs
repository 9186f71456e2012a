pub mod args;
pub mod error;
pub mod generator;
pub mod runner;
pub mod runtime;
pub mod verify;

// Re-export commonly used types
pub use args::Args;
pub use error::SpigotError;
pub use generator::{DigitGroup, PiDigits, group_count, pi_digits, table_len};
pub use runner::{CancelToken, RunConfig, RunOutcome, Runner, StopReason};
pub use verify::verify;
