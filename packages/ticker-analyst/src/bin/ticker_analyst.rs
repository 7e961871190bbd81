//! Ticker Analyst CLI
//!
//! Analyzes one URL and prints the tickers found and a summary for the
//! first of them. Logs go to stderr; the result goes to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticker_analyst::ai::AnthropicCompletion;
use ticker_analyst::{AnalysisResult, Analyzer, Config, HttpFetcher};

#[derive(Parser)]
#[command(name = "ticker-analyst")]
#[command(about = "Find the stock tickers a web page mentions and summarize the first one")]
struct Cli {
    /// Page to analyze
    url: String,

    /// Model identifier (overrides ANTHROPIC_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Output token ceiling per model call (overrides ANTHROPIC_MAX_TOKENS)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_tokens: Option<u32>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,ticker_analyst=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    let cli = Cli::parse();

    // Load .env file if present (development)
    dotenvy::dotenv().ok();

    let mut credentials = Config::from_env()
        .context("Failed to load configuration")?
        .credentials;
    if let Some(model) = cli.model {
        credentials = credentials.with_model(model);
    }
    if let Some(max_tokens) = cli.max_tokens {
        credentials = credentials.with_max_tokens(max_tokens);
    }

    let fetcher = HttpFetcher::new().context("Failed to create HTTP client")?;
    let model = AnthropicCompletion::from_credentials(&credentials);
    let analyzer = Analyzer::with_config(fetcher, model, credentials.analyzer_config());

    let result = analyzer
        .analyze(&cli.url)
        .await
        .with_context(|| format!("Failed to analyze {}", cli.url))?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?
        );
    } else {
        print_result(&result);
    }

    Ok(())
}

fn print_result(result: &AnalysisResult) {
    println!("Found Tickers: [{}]", result.tickers.join(", "));
    if let Some(ticker) = result.summarized_ticker() {
        println!("\nSummary ({}): {}", ticker, result.summary);
    }
}
