use newsverify_core::{AvsConnector, StubAvs};
use std::sync::Arc;

/// Return an AVS connector for examples.
///
/// Uses the deterministic mock when `NEWSVERIFY_EXAMPLES_USE_MOCK` is set,
/// otherwise the stub AVS.
#[must_use]
pub fn get_avs() -> Arc<dyn AvsConnector> {
    if std::env::var("NEWSVERIFY_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock AVS for CI) ---");
        Arc::new(newsverify_mock::MockAvs::new())
    } else {
        Arc::new(StubAvs::new())
    }
}
