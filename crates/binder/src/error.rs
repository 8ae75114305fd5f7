//! Binding error taxonomy

use thiserror::Error;

/// Fatal binding failures.
///
/// Both variants are development-time misconfiguration: they propagate to
/// the caller and fail the enclosing binding pass, with no retry or
/// fallback. An unconfigured route or an inactive request scope is not an
/// error; those states simply yield no URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A configured route could not be resolved while a request scope was
    /// active.
    #[error("the data url for route '{route}' could not be resolved")]
    RouteResolution { route: String },

    /// A configured value-provider reference is invalid.
    #[error(transparent)]
    ProviderResolution(#[from] ProviderError),
}

/// Invalid value-provider references, one variant per failure mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("value provider '{provider}' is not registered")]
    UnknownProvider { provider: String },

    #[error("value provider '{provider}' does not expose method '{method}'")]
    UnknownMethod { provider: String, method: String },
}
