use thiserror::Error;

use crate::position::ProviderId;

/// Errors surfaced by the platform location service.
///
/// Note that the broker deliberately folds most of these into boolean
/// results: a failing enablement query reads as "provider disabled" and a
/// failing handle acquisition makes `start()` return `false`. The error
/// values still carry the platform's reason for logging.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The platform service handle could not be acquired.
    #[error("location service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Querying a provider's enablement state failed at the platform layer.
    #[error("enablement query for provider {provider} failed: {reason}")]
    ProviderQuery {
        provider: ProviderId,
        reason: String,
    },

    /// The platform rejected an update subscription.
    #[error("update subscription rejected: {0}")]
    SubscriptionRejected(String),
}

/// Result type for platform service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
