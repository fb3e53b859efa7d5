mod command;
mod runner;
mod util;

pub use crate::report::OutputMode;
pub use command::{Command, Settings};
pub use runner::{run, run_with_format};
pub use util::{apply_overrides, parse_algorithms, parse_sizes};
