use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide connectivity flag.
///
/// Starts online and stays online until a network-level failure proves
/// otherwise. Only the API client transitions it offline (timeout or an
/// unreachable server); HTTP status failures leave it alone because a
/// status proves the server was reached. Recovery is a successful request
/// or the explicit user-triggered [`reset`](ConnectivityTracker::reset) —
/// there is no automatic recovery polling.
#[derive(Debug)]
pub struct ConnectivityTracker {
    online: AtomicBool,
}

impl Default for ConnectivityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityTracker {
    pub fn new() -> Self {
        Self {
            online: AtomicBool::new(true),
        }
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Called by the API client when a request never reached the server.
    pub fn mark_offline(&self) {
        self.online.store(false, Ordering::SeqCst);
    }

    /// Called by the API client on a successful round trip.
    pub fn mark_online(&self) {
        self.online.store(true, Ordering::SeqCst);
    }

    /// Explicit user-triggered recovery.
    pub fn reset(&self) {
        self.online.store(true, Ordering::SeqCst);
    }
}
