use newsverify::{NewsItem, NewsVerifierAgent};
use newsverify_examples::common::get_avs;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,newsverify=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let agent = NewsVerifierAgent::builder().avs(get_avs()).build()?;

    let _ = agent.verify_news(&NewsItem::empty()).await?;
    let _ = agent.verify_news(&NewsItem::absent()).await?;

    Ok(())
}
