//! stock-sentiment: Print a user's friend-trade alerts from a JSON fixture.
//!
//! The fixture holds the friend graph and raw trade lines:
//!   {"friends": {"me": ["alice", "bob"]}, "trades": {"alice": ["2024-03-09,BUY,GOOG"]}}
//!
//! Usage:
//!   cargo run -p sentiment-cli -- --user me --data fixture.json
//!   cargo run -p sentiment-cli -- --user me --data fixture.json --today 2024-03-10
//!   cargo run -p sentiment-cli -- --user me --data fixture.json --json

use anyhow::{bail, Context};
use chrono::NaiveDate;
use friend_sentiment::{InMemoryFriendOracle, SentimentConfig, StockSentiment, TRADE_DATE_FORMAT};
use sentiment_core::{Clock, SystemClock};

struct Args {
    user: String,
    data: String,
    today: Option<NaiveDate>,
    json: bool,
}

/// Value following `flag`, if the flag is present. A flag with nothing after
/// it, or followed by another `--flag`, is an error.
fn flag_value(args: &[String], flag: &str) -> anyhow::Result<Option<String>> {
    let Some(idx) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    match args.get(idx + 1) {
        Some(value) if !value.starts_with("--") => Ok(Some(value.clone())),
        _ => bail!("{} requires a value", flag),
    }
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let json = args.iter().any(|a| a == "--json");

    let (Some(user), Some(data)) = (flag_value(args, "--user")?, flag_value(args, "--data")?) else {
        eprintln!("Usage:");
        eprintln!("  stock-sentiment --user ID --data PATH [--today YYYY-MM-DD] [--json]");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --today DATE   Pin the last day of the trailing window (default: local today)");
        eprintln!("  --json         Print alerts as a JSON array");
        eprintln!();
        eprintln!("Environment:");
        eprintln!("  SENTIMENT_WINDOW_DAYS      Trailing window length in days (default: 7)");
        eprintln!("  SENTIMENT_SKIP_MALFORMED   Skip unparseable trade lines instead of failing");
        bail!("--user and --data are required");
    };

    let today = flag_value(args, "--today")?
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, TRADE_DATE_FORMAT)
                .with_context(|| format!("invalid --today '{}'", raw))
        })
        .transpose()?;

    Ok(Args {
        user,
        data,
        today,
        json,
    })
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stock_sentiment=info,friend_sentiment=info".into());
    // Logs go to stderr so stdout carries only alerts
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let raw_args: Vec<String> = std::env::args().collect();
    let args = parse_args(&raw_args)?;

    let config = SentimentConfig::from_env()?;
    tracing::info!(
        window_days = config.window_days,
        policy = ?config.malformed_policy,
        "Configuration loaded"
    );

    let fixture = std::fs::read_to_string(&args.data)
        .with_context(|| format!("failed to read {}", args.data))?;
    let oracle = InMemoryFriendOracle::from_json(&fixture)
        .with_context(|| format!("failed to parse {}", args.data))?;
    tracing::info!(
        users = oracle.friends.len(),
        traders = oracle.trades.len(),
        "Loaded fixture from {}",
        args.data
    );

    let today = args.today.unwrap_or_else(|| SystemClock.today());
    let engine = StockSentiment::new(oracle).with_config(config)?;

    if args.json {
        let alerts = engine.alerts_at(&args.user, today)?;
        println!("{}", serde_json::to_string_pretty(&alerts)?);
    } else {
        for alert in engine.get_alerts_at(&args.user, today)? {
            println!("{}", alert);
        }
    }

    Ok(())
}
