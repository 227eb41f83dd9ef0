use std::time::Duration;
use thiserror::Error;

/// Failure categories the suite raises itself.
///
/// Element lookup failures from the browser driver are propagated as
/// contextualized `anyhow` errors instead; these variants cover the cases the
/// suite distinguishes deliberately.
#[derive(Error, Debug)]
pub enum SuiteError {
    /// The home page rendered item containers, but none had a usable title.
    #[error("no product with a non-empty title found on the page")]
    NoTitledProduct,

    /// A polled condition did not hold before its deadline.
    #[error("timed out after {timeout:?} waiting for {what}")]
    WaitTimeout { what: String, timeout: Duration },
}
