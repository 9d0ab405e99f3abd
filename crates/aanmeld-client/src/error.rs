use thiserror::Error;

/// Failures raised by the state container.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("answers must be a JSON object")]
    NotAnObject,
}

impl From<aanmeld_spec::RecordError> for StateError {
    fn from(err: aanmeld_spec::RecordError) -> Self {
        match err {
            aanmeld_spec::RecordError::UnknownField(name) => StateError::UnknownField(name),
            aanmeld_spec::RecordError::NotAnObject => StateError::NotAnObject,
        }
    }
}

/// Everything that can go wrong during submission. The `Display` text is the
/// user-facing message; nothing else ever reaches the presentation layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// No connection, DNS failure, timeout: the server never answered.
    #[error("Kan geen verbinding maken met de server. Controleer of de server draait.")]
    Unreachable,
    /// Non-2xx response; the message comes from the body when it has one.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// 2xx response carrying an application-level `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// Anything that fits no other bucket.
    #[error("Er is een onbekende fout opgetreden.")]
    Unknown,
}

impl SubmitError {
    pub fn server(status: u16, message: Option<String>) -> Self {
        SubmitError::Server {
            status,
            message: message.unwrap_or_else(|| format!("Serverfout: {}", status)),
        }
    }
}
