//! Establish a session with a MongoDB deployment from a connection string and a named
//! authentication mechanism, over TLS or explicitly in cleartext. Network dialing, the
//! TLS handshake, and the wire protocol are all delegated to the `mongodb` driver; this
//! crate only assembles the driver's options.

mod auth;
mod dial;
pub mod error;
mod transport;

pub use self::auth::AuthMechanism;
pub use self::dial::{dial, dial_insecure, DialConfig, DIAL_TIMEOUT};
pub use self::transport::Transport;
