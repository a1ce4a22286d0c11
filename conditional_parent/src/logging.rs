use crate::ContractViolation;

/// Reports a [`ContractViolation`] before it is returned to the caller.
///
/// Goes through `tracing` when that feature is enabled, and otherwise to stderr in debug builds
/// only.
#[track_caller]
pub(crate) fn log_violation(violation: &ContractViolation) {
    #[cfg(feature = "tracing")]
    {
        tracing::error!(
            at = %std::panic::Location::caller(),
            "{violation}"
        );
    }
    #[cfg(all(debug_assertions, not(feature = "tracing")))]
    {
        eprintln!(
            "At {}, conditional parent contract violated: {violation}",
            std::panic::Location::caller()
        );
    }
    #[cfg(all(not(debug_assertions), not(feature = "tracing")))]
    {
        _ = violation;
    }
}
