use thiserror::Error;

use odps_common::UnknownStatus;

#[derive(Debug, Error)]
pub enum OdpsError {
    /// A required caller argument was missing or blank. Raised before any I/O.
    #[error("{0} required.")]
    InvalidArgument(&'static str),

    /// Marshalling or unmarshalling a payload failed.
    #[error("{0}")]
    Codec(String),

    /// The service answered with a non-success status.
    #[error("HTTP Error {status} on {resource}: {message}")]
    Remote {
        status: u16,
        resource: String,
        message: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The operation needs the service but no transport is attached.
    #[error("online model {0} has no rest client attached")]
    NotConnected(String),

    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatus),
}

impl From<quick_xml::DeError> for OdpsError {
    fn from(err: quick_xml::DeError) -> Self {
        OdpsError::Codec(err.to_string())
    }
}

impl From<quick_xml::SeError> for OdpsError {
    fn from(err: quick_xml::SeError) -> Self {
        OdpsError::Codec(err.to_string())
    }
}

impl From<serde_json::Error> for OdpsError {
    fn from(err: serde_json::Error) -> Self {
        OdpsError::Codec(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OdpsError>;
