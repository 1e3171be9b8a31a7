//! Presentation delay around an already-computed result.

use std::time::Duration;

/// Hold `value` for `delay`, then hand it back unchanged.
///
/// The value is computed before the wait and owned by this call, so concurrent
/// callers cannot observe or reorder each other's results. A zero delay returns at once.
pub async fn simulate_latency<T>(delay: Duration, value: T) -> T {
  if !delay.is_zero() {
    tokio::time::sleep(delay).await;
  }
  value
}
