//! Status provider contract.

use crate::status::Status;

/// Capability supplied by the integrator: compute the current status of a
/// setting.
///
/// The handler calls this exactly once per request, never concurrently with
/// itself. It runs on the service's single processing turn and must return
/// promptly; a slow implementation delays acceptance of the next request.
///
/// The returned [`Status`] must be fully formed. A panic here is a contract
/// violation the handler does not catch: it propagates to the dispatch
/// layer's generic failure path.
pub trait StatusProvider: Send {
    /// Read the current status of the setting.
    fn status(&self) -> Status;
}

/// Closures work directly as providers.
impl<F> StatusProvider for F
where
    F: Fn() -> Status + Send,
{
    fn status(&self) -> Status {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider {
        summary: &'static str,
        enabled: bool,
    }

    impl StatusProvider for FixedProvider {
        fn status(&self) -> Status {
            Status::new(self.summary, self.enabled)
        }
    }

    #[test]
    fn test_struct_provider() {
        let provider = FixedProvider {
            summary: "ON",
            enabled: true,
        };
        assert_eq!(provider.status(), Status::new("ON", true));
    }

    #[test]
    fn test_closure_provider() {
        let provider = || Status::new("OFF", false);
        assert_eq!(provider.status(), Status::new("OFF", false));
    }

    #[test]
    fn test_fresh_value_per_invocation() {
        let provider = || Status::new("ON", true);
        let first = provider.status();
        let second = provider.status();
        assert_eq!(first, second);
    }
}
