//! Terminal driver for strictly_connect_four.
//!
//! # Architecture
//!
//! - **CLI**: command-line flags parsed with `clap`
//! - **Config**: TOML game settings, overridable from the command line
//! - **Driver**: the game loop, reading moves from any [`std::io::BufRead`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use driver::{Command, Driver, DriverError};
