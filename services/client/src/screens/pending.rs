//! services/client/src/screens/pending.rs
//!
//! A spawned one-shot completion that can be called off before it applies.

use std::future::Future;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// Handle to a delayed completion running on the runtime.
///
/// The work receives the task's token and must check it after its last
/// suspension point, right before it writes anything.
pub struct PendingTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl PendingTask {
    pub fn spawn<F, Fut>(token: CancellationToken, work: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let guard = token.clone();
        let fut = work(token.clone());
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = guard.cancelled() => {
                    debug!("Pending completion discarded.");
                }
                _ = fut => {}
            }
        });
        Self { token, handle }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the completion to apply or be discarded.
    pub async fn wait(self) {
        if let Err(e) = self.handle.await {
            if !e.is_cancelled() {
                error!("Pending completion failed: {:?}", e);
            }
        }
    }
}
