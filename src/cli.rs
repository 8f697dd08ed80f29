// ===============================
// src/cli.rs
// ===============================
use clap::{Args, Parser, Subcommand};

use crate::domain::OrderSpec;
use crate::payload::DEFAULT_TRADE_LIMIT;

#[derive(Debug, Parser)]
#[command(name = "exchange-cli", version)]
#[command(about = "Signed one-shot calls against the exchange private REST API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get status of active orders
    Status,
    /// Create a new buy order
    Buy(OrderArgs),
    /// Create a new sell order
    Sell(OrderArgs),
    /// Cancel one order by id, or everything with --all
    Cancel {
        /// Server-side id of the order to cancel
        order_id: Option<String>,
        /// Cancel all open orders
        #[arg(long, conflicts_with = "order_id")]
        all: bool,
    },
    /// List recent past trades for a symbol
    Past {
        symbol: String,
        /// Maximum number of trades to return
        #[arg(long, default_value_t = DEFAULT_TRADE_LIMIT)]
        limit: u32,
    },
}

#[derive(Debug, Args)]
pub struct OrderArgs {
    pub symbol: String,
    pub amount: f64,
    pub price: f64,
    /// Place as a stop-limit order (trigger price equals the limit price)
    #[arg(long)]
    pub stop: bool,
}

/// Confirmation line shown before any order is sent.
pub fn order_prompt(spec: &OrderSpec) -> String {
    format!(
        "[{}] {} {} @ ${}. Total= ${}. Stop limit = {}. Are you sure? (y/n)",
        spec.side,
        spec.amount,
        spec.symbol,
        spec.price,
        spec.total(),
        spec.is_stop(),
    )
}

/// Only an exact `y` proceeds; anything else aborts without sending.
pub fn confirmed(input: &str) -> bool {
    input.trim() == "y"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderKind, Side};
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cancel_rejects_id_and_all_together() {
        let res = Cli::try_parse_from(["exchange-cli", "cancel", "847365", "--all"]);
        assert!(res.is_err());
    }

    #[test]
    fn buy_parses_stop_flag() {
        let cli = Cli::try_parse_from(["exchange-cli", "buy", "btcusd", "0.1", "10000", "--stop"])
            .unwrap();
        match cli.command {
            Command::Buy(args) => {
                assert_eq!(args.symbol, "btcusd");
                assert_eq!(args.amount, 0.1);
                assert_eq!(args.price, 10000.0);
                assert!(args.stop);
            }
            other => panic!("expected buy, got {other:?}"),
        }
    }

    #[test]
    fn past_defaults_trade_limit() {
        let cli = Cli::try_parse_from(["exchange-cli", "past", "ethusd"]).unwrap();
        match cli.command {
            Command::Past { symbol, limit } => {
                assert_eq!(symbol, "ethusd");
                assert_eq!(limit, DEFAULT_TRADE_LIMIT);
            }
            other => panic!("expected past, got {other:?}"),
        }
    }

    #[test]
    fn only_exact_y_confirms() {
        assert!(confirmed("y"));
        assert!(confirmed("y\n"));
        assert!(!confirmed("Y"));
        assert!(!confirmed("yes"));
        assert!(!confirmed("n"));
        assert!(!confirmed(""));
    }

    #[test]
    fn prompt_shows_computed_total() {
        let spec = OrderSpec {
            symbol: "ethusd".to_string(),
            amount: 4.0,
            price: 1100.0,
            side: Side::Buy,
            kind: OrderKind::Limit,
        };
        let prompt = order_prompt(&spec);
        assert!(prompt.contains("[buy]"));
        assert!(prompt.contains("Total= $4400"));
        assert!(prompt.contains("Stop limit = false"));
    }
}
