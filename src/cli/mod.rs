//! # Command-Line Interface
//!
//! ```bash
//! trello2pivotal board.json pivotal.csv
//! ```
//!
//! ## Flags
//!
//! | Flag | Purpose |
//! |------|---------|
//! | `--format text\|json` | Summary as text (default) or a JSON object |
//! | `--verbose` / `-v` | Debug logging on stderr |
//! | `--quiet` / `-q` | Skip the banner and board details |
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and convert the board.

mod app;
mod convert;
mod logging;
mod output;

pub use app::{run, Cli};
pub use output::{Output, OutputFormat};
