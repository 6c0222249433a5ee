//! Command-line front-end for the crypto confidence analyzer
//!
//! Runs one analysis and renders the report as terminal tables; the
//! scoring core never depends on anything in this crate.

use clap::Parser;
use coinlens_analysis::{Analysis, AnalyzerConfig, CoinAnalyzer, ConfidenceReport};
use comfy_table::{Table, presets::UTF8_FULL};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "coinlens")]
#[command(about = "360-degree crypto confidence analyzer", long_about = None)]
struct Args {
    /// Coin symbol to analyze (e.g. BTC, ETH, SOL)
    symbol: String,

    /// Emit the full analysis as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    info!("starting analysis for {}", args.symbol);

    let analyzer = CoinAnalyzer::new(AnalyzerConfig::default())?;
    let analysis = analyzer.analyze(&args.symbol).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        render(&analysis);
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();
}

fn render(analysis: &Analysis) {
    let report = &analysis.report;

    println!();
    println!(
        "  {} Investment Confidence Score: {}/100",
        report.symbol, report.score
    );
    println!("  Verdict: {}", verdict(report.score));
    println!();

    println!("{}", technical_table(report));
    println!("{}", fundamental_table(report));
    println!("{}", sentiment_table(report));
}

/// Verdict band for a confidence score
fn verdict(score: u8) -> &'static str {
    if score > 70 {
        "STRONG BUY"
    } else if score > 50 {
        "MODERATE BUY / HOLD"
    } else if score > 30 {
        "WATCH / RISKY"
    } else {
        "STRONG SELL / AVOID"
    }
}

fn technical_table(report: &ConfidenceReport) -> Table {
    let tech = &report.technical;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Technicals", "Value"])
        .add_row(vec![
            "Current Price".to_string(),
            format!("${:.2}", tech.current_price),
        ])
        .add_row(vec!["RSI (14)".to_string(), format!("{:.2}", tech.rsi)])
        .add_row(vec!["EMA 50".to_string(), format!("${:.2}", tech.ema_50)])
        .add_row(vec!["EMA 200".to_string(), format!("${:.2}", tech.ema_200)])
        .add_row(vec!["Trend".to_string(), tech.trend.to_string()])
        .add_row(vec![
            "Support / Resistance".to_string(),
            format!("${:.2} / ${:.2}", tech.support, tech.resistance),
        ]);
    table
}

fn fundamental_table(report: &ConfidenceReport) -> Table {
    let fund = &report.fundamental;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Fundamentals", "Value"])
        .add_row(vec![
            "Market Cap".to_string(),
            format!("${:.0}", fund.market_cap),
        ])
        .add_row(vec!["24h Volume".to_string(), format!("${:.0}", fund.volume)])
        .add_row(vec![
            "Vol / MCap Ratio".to_string(),
            format!("{:.4}", fund.volume_to_market_cap),
        ])
        .add_row(vec![
            "Supply Released".to_string(),
            fund.supply_percent
                .map_or_else(|| "uncapped".to_string(), |p| format!("{p:.1}%")),
        ])
        .add_row(vec![
            "52w Range Position".to_string(),
            format!("{:.1}%", fund.range_position),
        ]);
    table
}

fn sentiment_table(report: &ConfidenceReport) -> Table {
    let sentiment = &report.sentiment;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![
            format!(
                "Sentiment: {} ({:.2})",
                sentiment.category, sentiment.score
            ),
            "Polarity".to_string(),
        ]);

    for item in &sentiment.items {
        table.add_row(vec![
            format!("{} ({})", item.title, item.publisher),
            format!("{:+.2}", item.polarity),
        ]);
    }
    if sentiment.items.is_empty() {
        table.add_row(vec!["No recent headlines".to_string(), "-".to_string()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_bands() {
        assert_eq!(verdict(85), "STRONG BUY");
        assert_eq!(verdict(71), "STRONG BUY");
        assert_eq!(verdict(70), "MODERATE BUY / HOLD");
        assert_eq!(verdict(51), "MODERATE BUY / HOLD");
        assert_eq!(verdict(50), "WATCH / RISKY");
        assert_eq!(verdict(31), "WATCH / RISKY");
        assert_eq!(verdict(30), "STRONG SELL / AVOID");
        assert_eq!(verdict(0), "STRONG SELL / AVOID");
    }
}
