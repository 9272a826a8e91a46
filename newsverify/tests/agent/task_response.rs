use newsverify::{NewsItem, NewsVerifierAgent, TaskResponse, VerifyError};
use newsverify_mock::MockBehavior;

use crate::helpers::{agent_with_mock, article};

#[tokio::test]
async fn stub_task_response_is_positive() {
    let agent = NewsVerifierAgent::new();
    let resp = agent
        .respond_to_task(3, 19_000_000, &NewsItem::empty())
        .await
        .expect("stub never fails");
    assert_eq!(
        resp,
        TaskResponse {
            task_index: 3,
            verification_status: true,
            block_number: 19_000_000,
        }
    );
}

#[tokio::test]
async fn task_response_carries_negative_outcome() {
    let (agent, controller) = agent_with_mock("P0");
    controller.set_behavior(MockBehavior::Return(false)).await;

    let resp = agent
        .respond_to_task(11, 42, &article(1))
        .await
        .expect("mock answers");
    assert!(!resp.verification_status);
    assert_eq!(resp.task_index, 11);
}

#[tokio::test]
async fn task_response_propagates_avs_failure() {
    let (agent, controller) = agent_with_mock("P0");
    controller
        .set_behavior(MockBehavior::Fail(VerifyError::avs("P0", "down")))
        .await;

    let err = agent
        .respond_to_task(1, 1, &article(1))
        .await
        .expect_err("fails");
    assert_eq!(err, VerifyError::avs("P0", "down"));
}
