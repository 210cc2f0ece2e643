use thiserror::Error;

/// Errors from the remote template API. Non-2xx statuses are mapped to
/// the message the UI shows; the raw body is kept for logging.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Unexpected error ({status}): {body}")]
    Unexpected { status: u16, body: String },
}

impl ApiError {
    /// Map a non-success HTTP status to the error taxonomy:
    /// 400 invalid data, 404 not found, 5xx server error, anything
    /// else unexpected.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => Self::InvalidData(body),
            404 => Self::NotFound(body),
            500..=599 => Self::Server(body),
            _ => Self::Unexpected { status, body },
        }
    }
}

/// Step-transition guard failures. Recoverable locally; no transition
/// occurs and no network call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Select at least one section before continuing")]
    NoSectionsSelected,

    #[error("Company name is required")]
    MissingCompanyName,

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Basic info has not been completed")]
    MissingBasicInfo,

    #[error("Section '{section}' is missing required field '{field}'")]
    IncompleteSection {
        section: String,
        field: &'static str,
    },
}

/// Publish workflow failures.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Site is already published")]
    AlreadyPublished,

    #[error("Basic info has not been completed")]
    MissingBasicInfo,

    #[error("No sections are enabled")]
    NoSectionsEnabled,

    #[error("Publish completed for a session that was since reset")]
    StaleSession,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Image upload failures. The first two are raised before any network
/// call is made.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),

    #[error("Image exceeds the {max_mb} MB limit")]
    TooLarge { max_mb: usize },

    #[error(transparent)]
    Api(#[from] ApiError),
}
