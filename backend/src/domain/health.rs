//! Service health use-case.

use super::Error;

/// Report whether the service can take traffic.
///
/// The service has no dependencies to probe, so this always succeeds.
///
/// # Errors
/// Never fails today; the signature leaves room for dependency checks.
pub fn healthcheck() -> Result<(), Error> {
    Ok(())
}
