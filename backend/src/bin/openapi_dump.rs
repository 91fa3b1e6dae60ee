//! Print the served OpenAPI document as JSON.
//!
//! The document is taken from a fully assembled router, so the dump fails
//! whenever the registered routes and the generated document disagree.

use std::io::Write;
use std::sync::Arc;

use backend::inbound::http::{StatusTable, build_router};
use clap::Parser;

/// Command-line options for the dump tool.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the pet service OpenAPI document")]
struct Cli {
    /// Indent the output for human readers.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let router = build_router(Arc::new(StatusTable))?;
    let document = router.document();
    let json = if cli.pretty {
        document.to_pretty_json()?
    } else {
        document.to_json()?
    };
    writeln!(std::io::stdout().lock(), "{json}")?;
    Ok(())
}
