// ===============================
// src/main.rs
// ===============================
//
// One-shot signed calls against the exchange's private REST API:
// status / buy / sell / cancel / past. Each invocation builds one payload,
// signs it, issues one POST, and prints the JSON response.

mod cli;
mod client;
mod config;
mod domain;
mod error;
mod payload;
mod signer;

use std::io;

use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command, OrderArgs};
use crate::client::ExchangeClient;
use crate::domain::{CancelTarget, OrderKind, OrderSpec, Side};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // ---- Logging ----
    // Logs go to stderr; stdout carries only the exchange's JSON response.
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(io::stderr)
        .init();

    match run().await {
        Ok(()) => {}
        // A non-2xx reply is printed like any other response; HTTP status
        // never maps to the exit code.
        Err(CliError::Exchange(body)) => print_json(&body),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

async fn run() -> Result<(), CliError> {
    let args = Cli::parse();

    // ---- Load credentials & settings ----
    let (credentials, settings) = config::load()?;
    let client = ExchangeClient::new(credentials, &settings)?;

    let body = match args.command {
        Command::Status => client.active_orders().await?,
        Command::Buy(order) => match place_order(&client, order, Side::Buy).await? {
            Some(body) => body,
            None => return Ok(()),
        },
        Command::Sell(order) => match place_order(&client, order, Side::Sell).await? {
            Some(body) => body,
            None => return Ok(()),
        },
        Command::Cancel { order_id, all } => {
            let target = CancelTarget::from_args(order_id, all)?;
            client.cancel(&target).await?
        }
        Command::Past { symbol, limit } => {
            domain::validate_symbol(&symbol)?;
            client.past_trades(&symbol, limit).await?
        }
    };

    print_json(&body);
    Ok(())
}

/// Validate, confirm interactively, then send. Returns `None` when the user
/// declines; nothing goes out in that case.
async fn place_order(
    client: &ExchangeClient,
    order: OrderArgs,
    side: Side,
) -> Result<Option<String>, CliError> {
    domain::validate_symbol(&order.symbol)?;

    let spec = OrderSpec {
        symbol: order.symbol,
        amount: order.amount,
        price: order.price,
        side,
        kind: if order.stop {
            OrderKind::StopLimit
        } else {
            OrderKind::Limit
        },
    };

    println!("{}", cli::order_prompt(&spec));
    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|e| CliError::Validation(format!("cannot read confirmation: {e}")))?;

    if !cli::confirmed(&answer) {
        info!("order declined, nothing sent");
        return Ok(None);
    }

    client.new_order(&spec).await.map(Some)
}

/// Pretty-print a JSON body; pass anything else through untouched.
fn print_json(body: &str) {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(v) => {
            let pretty = serde_json::to_string_pretty(&v).unwrap_or_else(|_| body.to_string());
            println!("{pretty}");
        }
        Err(_) => println!("{body}"),
    }
}
