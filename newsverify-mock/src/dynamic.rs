use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use newsverify_core::{AvsConnector, NewsItem, NewsVerificationProvider, VerifyError};

/// Instruction for how a verification call should behave.
#[derive(Clone, Debug)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(VerifyError),
    /// Wait for the given duration, then return the value.
    Delay(std::time::Duration, T),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

struct InternalState {
    behavior: MockBehavior<bool>,
    requests: Vec<NewsItem>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for subsequent `verify_news` calls.
    pub async fn set_behavior(&self, behavior: MockBehavior<bool>) {
        let mut guard = self.state.lock().await;
        guard.behavior = behavior;
    }

    /// Return a copy of every item received so far, in call order.
    pub async fn requests(&self) -> Vec<NewsItem> {
        let guard = self.state.lock().await;
        guard.requests.clone()
    }
}

/// AVS connector whose behavior is programmed at runtime through a controller.
pub struct DynamicMockAvs {
    name: &'static str,
    verifies: bool,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockAvs {
    /// Create a mock that answers `true` until told otherwise, plus its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<Self>, DynamicMockController) {
        Self::build(name, true)
    }

    /// Create a mock that does not advertise the news verification capability.
    #[must_use]
    pub fn without_verification(name: &'static str) -> (Arc<Self>, DynamicMockController) {
        Self::build(name, false)
    }

    fn build(name: &'static str, verifies: bool) -> (Arc<Self>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState {
            behavior: MockBehavior::Return(true),
            requests: Vec::new(),
        }));
        let mock = Arc::new(Self {
            name,
            verifies,
            state: Arc::clone(&state),
        });
        (mock, DynamicMockController { state })
    }
}

impl AvsConnector for DynamicMockAvs {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_news_verification_provider(&self) -> Option<&dyn NewsVerificationProvider> {
        if self.verifies {
            Some(self as &dyn NewsVerificationProvider)
        } else {
            None
        }
    }
}

#[async_trait]
impl NewsVerificationProvider for DynamicMockAvs {
    async fn verify_news(&self, item: &NewsItem) -> Result<bool, VerifyError> {
        // Clone the behavior out so the lock is not held across the await below
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(item.clone());
            guard.behavior.clone()
        };
        match behavior {
            MockBehavior::Return(v) => Ok(v),
            MockBehavior::Fail(e) => Err(e),
            MockBehavior::Delay(d, v) => {
                tokio::time::sleep(d).await;
                Ok(v)
            }
            MockBehavior::Hang => std::future::pending().await,
        }
    }
}
