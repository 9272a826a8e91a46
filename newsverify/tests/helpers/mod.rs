// Shared fixtures so tests can `use crate::helpers::*;`

use std::sync::Arc;
use std::time::Duration;

use newsverify::{AvsConnector, NewsItem, NewsVerifierAgent};
use newsverify_mock::{DynamicMockAvs, DynamicMockController};
use serde_json::json;

/// A news item shaped the way callers usually send one.
pub fn article(id: u64) -> NewsItem {
    NewsItem::new(json!({
        "id": id,
        "headline": format!("headline {id}"),
        "source": "wire",
    }))
}

/// Agent backed by a dynamic mock, with a short per-call timeout.
pub fn agent_with_mock(name: &'static str) -> (NewsVerifierAgent, DynamicMockController) {
    let (mock, controller) = DynamicMockAvs::new_with_controller(name);
    let agent = NewsVerifierAgent::builder()
        .avs(mock as Arc<dyn AvsConnector>)
        .avs_timeout(Duration::from_millis(100))
        .build()
        .expect("valid agent");
    (agent, controller)
}

/// In-memory sink for formatted log output.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<std::sync::Mutex<Vec<u8>>>);

impl LogCapture {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let buf = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Number of times `needle` appears in the captured output.
    pub fn count(&self, needle: &str) -> usize {
        self.contents().matches(needle).count()
    }

    /// A plain-text fmt subscriber writing into this capture.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        let sink = self.clone();
        tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        let mut buf = self.0.lock().expect("log buffer poisoned");
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// The line the stub AVS logs on every call.
pub const AVS_LOG_LINE: &str = "Calling AVS for verification...";
