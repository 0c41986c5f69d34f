//! Report the complexity and minimum fee of a platform chain transaction.
//!
//! Reads a JSON transaction description from a file or standard input and prints the
//! complexity vector, gas and fee as JSON.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, Environment, File};
use platform_fee_common::{Dimensions, FeeConfig, Transaction, TxKind};
use platform_fee_module_tx_complexity::{calculate_fee, get_tx_complexity, to_gas, Gas};
use tracing::info;

#[derive(Debug, clap::Parser)]
#[command(name = "tx-complexity")]
#[command(about = "Compute the complexity and minimum fee of a platform chain transaction")]
struct Args {
    #[arg(long, value_name = "PATH", default_values_t = vec!["tx-complexity.toml".to_string()])]
    config: Vec<String>,

    /// JSON transaction description; read from stdin when absent
    #[arg(long, value_name = "FILE")]
    tx: Option<PathBuf>,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    kind: TxKind,
    type_id: u32,
    complexity: Dimensions,
    gas: Gas,
    gas_price: u64,

    /// Decimal string, as fees can exceed the JSON safe integer range
    fee: String,
}

fn read_tx(path: Option<&PathBuf>) -> Result<serde_json::Value> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
            text
        }
    };
    serde_json::from_str(&text).context("Transaction is not valid JSON")
}

fn main() -> Result<()> {
    // Get arguments and config
    let args = Args::parse();
    tracing_subscriber::fmt().with_env_filter("info").with_writer(io::stderr).init();
    let mut builder = Config::builder();
    for file in &args.config {
        builder = builder.add_source(File::with_name(file).required(false));
    }
    let config = builder.add_source(Environment::with_prefix("PLATFORM_FEE")).build()?;
    let fee_config = FeeConfig::from_config(&config);

    let tx = Transaction::from_json(read_tx(args.tx.as_ref())?)?;
    let kind = tx.kind();
    info!("Pricing {:?} transaction", kind);

    let complexity = get_tx_complexity(&tx)?;
    let gas = to_gas(&complexity, &fee_config.weights)?;
    let fee = calculate_fee(&complexity, &fee_config)?;

    let report = Report {
        kind,
        type_id: kind.type_id(),
        complexity,
        gas,
        gas_price: fee_config.gas_price,
        fee: fee.to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
