use std::time::Duration;

use newsverify::{NewsItem, NewsVerifierAgent};
use newsverify_examples::common::get_avs;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let agent = NewsVerifierAgent::builder()
        .avs(get_avs())
        .avs_timeout(Duration::from_secs(2))
        .request_timeout(Duration::from_secs(10))
        .build()?;

    let items = vec![
        NewsItem::new(json!({"headline": "one"})),
        NewsItem::new(json!({"headline": "two"})),
        NewsItem::empty(),
    ];

    for (i, outcome) in agent.verify_batch(&items).await?.into_iter().enumerate() {
        match outcome {
            Ok(v) => println!("item {i}: verified={v}"),
            Err(e) => println!("item {i}: error={e}"),
        }
    }

    let resp = agent.respond_to_task(0, 1, &items[0]).await?;
    println!("task response: {}", serde_json::to_string(&resp)?);

    Ok(())
}
