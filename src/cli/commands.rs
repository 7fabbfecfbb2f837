use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use crate::api::PincodeClient;
use crate::filters::filter_by_name;
use crate::models::Pincode;
use crate::state::NO_MATCH_MESSAGE;
use crate::tui;

#[derive(Parser)]
#[command(name = "pincode-lookup")]
#[command(version = "0.1.0")]
#[command(about = "Look up Indian postal pincode data and filter it by name", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a pincode once and print its post offices
    Lookup {
        /// 6-digit pincode to look up
        pincode: String,

        /// Only print post offices whose name contains this text
        #[arg(long)]
        filter: Option<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Lookup { pincode, filter }) => lookup_once(pincode, filter.as_deref()),
        None => tui::run_interactive(PincodeClient::new()),
    }
}

fn lookup_once(input: &str, filter: Option<&str>) -> Result<()> {
    let pincode: Pincode = input.parse().map_err(|e| anyhow!("{}", e))?;

    let client = PincodeClient::new();
    let records = client.lookup(&pincode).map_err(|err| match err.detail() {
        Some(detail) => anyhow!("{} ({})", err, detail),
        None => anyhow!("{}", err),
    })?;

    let filter = filter.unwrap_or("");
    let visible = filter_by_name(&records, filter);

    if visible.is_empty() {
        if !filter.is_empty() {
            println!("{}", NO_MATCH_MESSAGE);
        } else {
            println!("No post offices found for {}", pincode);
        }
        return Ok(());
    }

    println!("Post offices for {}", pincode);
    println!("================================");
    for record in &visible {
        println!("Name: {}", record.name);
        println!("  Branch Type: {}", record.branch_type);
        println!("  Delivery Status: {}", record.delivery_status);
        println!("  District: {}", record.district);
        println!("  Division: {}", record.division);
        println!();
    }
    println!("{} of {} post offices shown", visible.len(), records.len());

    Ok(())
}
