//! RSVP command-line interface
//!
//! Administer categories, invitations and RSVPs, or reply as a guest.

use anyhow::Result;
use clap::Parser;

use rsvp_cli::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    rsvp_cli::init_logging(cli.verbose);

    let config = rsvp_cli::load_config(cli.config.as_deref())?;
    let app = rsvp_cli::build_app(config)?;

    let output = rsvp_cli::run(cli, app).await?;
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
