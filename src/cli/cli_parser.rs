use crate::cli::{Commands, HELP_TEMPLATE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
   // Obtain during build time, not runtime
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
#[command(
    after_help = HELP_TEMPLATE.replace("%BINARY_NAME%", env!("CARGO_PKG_NAME"))
)]
pub struct Cli {
    /// The file holding the pre-allocated memory block (see the `create` subcommand).
    #[arg(
        value_name = "block",
        help = "Path to the block file backing the map. Allocate one with `create` first."
    )]
    pub block: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}
