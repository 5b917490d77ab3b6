//! Page rendering error types.

/// Page rendering error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Template registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),

    /// Failed to encode the page data as JSON.
    #[error("Failed to encode page data: {0}")]
    DataError(#[from] serde_json::Error),
}
