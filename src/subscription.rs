//! Subscription handles.

use minutemizer_storage::{Backend, WatchId};
use std::sync::Arc;

/// Live registration of a listener
///
/// Delivery stops when the handle is dropped or [`Subscription::unsubscribe`]
/// is called, whichever comes first.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    backend: Arc<dyn Backend>,
    id: Option<WatchId>,
}

impl Subscription {
    pub(crate) fn new(backend: Arc<dyn Backend>, id: WatchId) -> Self {
        Self {
            backend,
            id: Some(id),
        }
    }

    /// Stop delivery
    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            self.backend.unwatch(id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
