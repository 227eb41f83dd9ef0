//! Poll-until-condition, instead of fixed sleeps.
//!
//! The favorites toggle on the live site is applied asynchronously, so every
//! state-changing click is followed by polling an observable condition (icon
//! class change, card count change) under an explicit deadline. A condition
//! that never holds is a test failure, not a silent pass.

use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use tracing::trace;

use crate::error::SuiteError;

/// Deadline for a toggle click to be reflected in the page.
pub const TOGGLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline for a navigated page to render its item containers.
pub const PAGE_TIMEOUT: Duration = Duration::from_secs(15);

/// Interval between probes.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Poll `probe` every `interval` until it returns `true`, failing with
/// [`SuiteError::WaitTimeout`] once `timeout` elapses. Probe errors propagate
/// immediately.
pub async fn until<F, Fut>(
    what: &str,
    timeout: Duration,
    interval: Duration,
    mut probe: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let poll = async {
        loop {
            if probe().await? {
                return Ok(());
            }
            trace!("still waiting for {what}");
            tokio::time::sleep(interval).await;
        }
    };

    match tokio::time::timeout(timeout, poll).await {
        Ok(outcome) => outcome,
        Err(_) => Err(SuiteError::WaitTimeout {
            what: what.to_string(),
            timeout,
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn resolves_once_condition_holds() {
        let calls = Cell::new(0u32);
        let result = until(
            "third probe",
            Duration::from_secs(1),
            Duration::from_millis(1),
            || {
                calls.set(calls.get() + 1);
                let done = calls.get() >= 3;
                async move { anyhow::Ok(done) }
            },
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn fails_with_timeout_error_when_condition_never_holds() {
        let result = until(
            "a condition that never holds",
            Duration::from_millis(50),
            Duration::from_millis(10),
            || async { anyhow::Ok(false) },
        )
        .await;
        let err = result.expect_err("should time out");
        match err.downcast_ref::<SuiteError>() {
            Some(SuiteError::WaitTimeout { what, .. }) => {
                assert_eq!(what, "a condition that never holds");
            }
            other => panic!("expected WaitTimeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn probe_errors_propagate_immediately() {
        let result = until(
            "an erroring probe",
            Duration::from_secs(1),
            Duration::from_millis(1),
            || async { Err(anyhow::anyhow!("probe exploded")) },
        )
        .await;
        let err = result.expect_err("probe error should propagate");
        assert!(err.to_string().contains("probe exploded"));
    }
}
