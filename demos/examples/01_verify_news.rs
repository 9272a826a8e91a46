use newsverify::{NewsItem, NewsVerifierAgent};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let agent = NewsVerifierAgent::new();

    let item = NewsItem::new(json!({
        "headline": "Local council approves new bike lanes",
        "source": "https://example.org/news/1",
    }));

    let verified = agent.verify_news(&item).await?;
    println!("verified: {verified}");

    let report = agent.verify_news_report(&item).await?;
    println!(
        "report: verified={} avs={} at={}",
        report.verified, report.avs, report.checked_at
    );

    Ok(())
}
