use std::sync::atomic::{AtomicU64, Ordering};

/// Returns a process-unique, monotonically increasing connection id used to
/// correlate log lines for one WebSocket client.
pub fn next_conn_id() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
