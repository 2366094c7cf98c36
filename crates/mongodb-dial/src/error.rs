use thiserror::Error;

/// Errors raised while assembling a dial configuration or establishing a session.
#[derive(Debug, Error)]
pub enum DialError {
    /// The connection string did not parse as a MongoDB URI. Carries the driver parser's
    /// message unchanged.
    #[error(transparent)]
    InvalidConnectionString(mongodb::error::Error),

    /// The supplied mechanism name matched none of the supported mechanisms. The message
    /// names the normalized form of the input.
    #[error("{0} did not match an existing MongoDB authentication mechanism")]
    UnrecognizedMechanism(String),

    /// The driver failed to establish a session, for any network, TLS, or server reason.
    #[error(transparent)]
    ConnectionFailure(#[from] mongodb::error::Error),
}
