use std::sync::Arc;
use std::time::Duration;

use newsverify::{AvsConnector, NewsItem, NewsVerifierAgent, VerifyError};
use newsverify_mock::{DynamicMockAvs, MockAvs, MockBehavior};
use serde_json::json;

use crate::helpers::article;

#[tokio::test]
async fn default_agent_verifies_every_item() {
    let agent = NewsVerifierAgent::new();
    let items = vec![NewsItem::empty(), NewsItem::absent(), article(1)];

    let out = agent.verify_batch(&items).await.expect("no deadline");
    assert_eq!(out, vec![Ok(true), Ok(true), Ok(true)]);
}

#[tokio::test]
async fn empty_batch_is_empty() {
    let agent = NewsVerifierAgent::new();
    let out = agent.verify_batch(&[]).await.expect("no deadline");
    assert!(out.is_empty());
}

#[tokio::test]
async fn outcomes_keep_input_order_and_isolate_failures() {
    let agent = NewsVerifierAgent::builder()
        .avs(Arc::new(MockAvs::new()))
        .build()
        .expect("valid agent");
    let items = vec![
        article(1),
        NewsItem::new(json!("FAIL")),
        NewsItem::new(json!({"verified": false})),
        NewsItem::empty(),
    ];

    let out = agent.verify_batch(&items).await.expect("no deadline");
    assert_eq!(out.len(), 4);
    assert_eq!(out[0], Ok(true));
    assert!(matches!(out[1], Err(VerifyError::Avs { .. })));
    assert_eq!(out[2], Ok(false));
    assert_eq!(out[3], Ok(true));
}

#[tokio::test(start_paused = true)]
async fn request_deadline_bounds_the_batch() {
    let (mock, controller) = DynamicMockAvs::new_with_controller("P0");
    controller
        .set_behavior(MockBehavior::Delay(Duration::from_secs(2), true))
        .await;
    let agent = NewsVerifierAgent::builder()
        .avs(mock as Arc<dyn AvsConnector>)
        .avs_timeout(Duration::from_secs(10))
        .request_timeout(Duration::from_millis(500))
        .build()
        .expect("valid agent");

    let err = agent
        .verify_batch(&[article(1), article(2)])
        .await
        .expect_err("deadline");
    assert_eq!(err, VerifyError::request_timeout("verify-batch"));
}

#[tokio::test(start_paused = true)]
async fn per_call_timeouts_stay_per_item() {
    let (mock, controller) = DynamicMockAvs::new_with_controller("P0");
    controller.set_behavior(MockBehavior::Hang).await;
    let agent = NewsVerifierAgent::builder()
        .avs(mock as Arc<dyn AvsConnector>)
        .avs_timeout(Duration::from_millis(100))
        .build()
        .expect("valid agent");

    let out = agent
        .verify_batch(&[article(1), article(2)])
        .await
        .expect("no request deadline");
    assert!(out.iter().all(|r| matches!(r, Err(VerifyError::AvsTimeout { .. }))));
}
