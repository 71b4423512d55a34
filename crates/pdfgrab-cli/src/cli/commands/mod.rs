//! CLI command handlers. Each command is in its own file.

mod filename;
mod resolve;
mod run;

pub use filename::run_filename;
pub use resolve::run_resolve;
pub use run::{run_batch, RunOverrides};
