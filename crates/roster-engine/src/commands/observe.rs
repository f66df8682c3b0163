//! End-of-operation logging shared by the engine operations.

use std::future::Future;
use std::time::Instant;

use roster_core::errors::Result;
use roster_core::{log_op_end, log_op_error};

/// Await `fut` and emit the matching end or end_error event for `op`.
///
/// The caller emits the start event so it can attach its own fields.
pub(crate) async fn observe<T>(op: &'static str, fut: impl Future<Output = Result<T>>) -> Result<T> {
    let start = Instant::now();
    let result = fut.await;
    let elapsed = elapsed_ms(start);

    match &result {
        Ok(_) => log_op_end!(op, duration_ms = elapsed),
        Err(e) => log_op_error!(op, e.clone(), duration_ms = elapsed),
    }
    result
}

pub(crate) fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
