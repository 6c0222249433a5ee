//! End-to-end analysis against the live providers
//!
//! Run with: cargo run --example basic_analysis -- BTC

use coinlens_analysis::{AnalyzerConfig, CoinAnalyzer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let ticker = std::env::args().nth(1).unwrap_or_else(|| "BTC".to_string());

    let analyzer = CoinAnalyzer::new(AnalyzerConfig::default())?;
    let analysis = analyzer.analyze(&ticker).await?;
    let report = &analysis.report;

    println!("{} confidence: {}/100", report.symbol, report.score);
    println!(
        "trend {} | rsi {:.1} | support {:.2} | resistance {:.2}",
        report.technical.trend,
        report.technical.rsi,
        report.technical.support,
        report.technical.resistance
    );
    println!(
        "vol/mcap {:.4} | range position {:.1}%",
        report.fundamental.volume_to_market_cap, report.fundamental.range_position
    );
    println!(
        "sentiment {} ({:.2}) over {} headlines",
        report.sentiment.category,
        report.sentiment.score,
        report.sentiment.items.len()
    );

    Ok(())
}
