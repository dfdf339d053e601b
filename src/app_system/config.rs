use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Buyer purchase tracker: lists orders by status and moves them along with
/// pay / pickup / delivery actions read from stdin.
#[derive(Parser, Debug)]
#[command(name = "purchase_tracker", version)]
pub struct Cli {
    /// JSON file holding an array of orders to seed the store with.
    /// A built-in demo set is used when omitted.
    #[arg(long, value_name = "FILE")]
    pub orders: Option<PathBuf>,

    /// Mailbox size of the order store.
    #[arg(long, default_value_t = DEFAULT_CHANNEL_CAPACITY, value_parser = parse_capacity)]
    pub channel_capacity: usize,

    /// Colour status badges with ANSI escapes.
    #[arg(long)]
    pub color: bool,
}

fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(e.to_string()),
    }
}
