//! specindex CLI - builds the viewer artifacts for an HTML document tree
//!
//! # Examples
//!
//! ```bash
//! cd 3gpp-rel-17-html
//! specindex
//! # Generated manifest.json and search_data.json. Indexed 1234 documents/sections.
//!
//! # With per-document detail
//! RUST_LOG=specindex=debug specindex
//! ```

use clap::Parser;
use specindex::cli::{output, run, Cli};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "specindex=error".into()),
        )
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
