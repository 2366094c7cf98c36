use std::str::FromStr;

use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};

use crate::error::DialError;

// Mechanism labels a deployment can be asked to authenticate with, as accepted by the
// `authMechanism` connection string option:
// https://www.mongodb.com/docs/manual/core/authentication-mechanisms/
//
// - "SCRAM-SHA-1"
// - "MONGODB-CR"
// - "PLAIN"
// - "MONGODB-X500"
// - "GSSAPI"
//
// plus the empty label, which means authentication is disabled.

/// A MongoDB authentication mechanism. Use [AuthMechanism::None] to dial without
/// authenticating, even when the connection string embeds credentials.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AuthMechanism {
    ScramSha1,
    MongoDbCr,
    Plain,
    MongoDbX500,
    Gssapi,
    None,
}

use AuthMechanism as M;

impl AuthMechanism {
    /// The label this mechanism is requested by. [AuthMechanism::None] is the empty
    /// string.
    pub fn mechanism_name(self) -> &'static str {
        match self {
            M::ScramSha1 => "SCRAM-SHA-1",
            M::MongoDbCr => "MONGODB-CR",
            M::Plain => "PLAIN",
            M::MongoDbX500 => "MONGODB-X500",
            M::Gssapi => "GSSAPI",
            M::None => "",
        }
    }

    /// Matches a free-form mechanism name against the supported mechanisms. Matching is
    /// insensitive to case and to whitespace anywhere in the input, so `" scram-sha-1 "`
    /// parses to [AuthMechanism::ScramSha1]. An empty (or all-whitespace) input parses to
    /// [AuthMechanism::None].
    pub fn from_mechanism_name(name: &str) -> Result<Self, DialError> {
        let normalized: String = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect();
        let mechanism = all::<AuthMechanism>().find(|m| m.mechanism_name() == normalized);
        mechanism.ok_or(DialError::UnrecognizedMechanism(normalized))
    }

    /// The driver-side label stamped into the assembled credential. The driver spells
    /// certificate authentication "MONGODB-X509"; [AuthMechanism::MongoDbX500] requests
    /// that same mechanism.
    pub(crate) fn driver_mechanism(self) -> Option<mongodb::options::AuthMechanism> {
        match self {
            M::ScramSha1 => Some(mongodb::options::AuthMechanism::ScramSha1),
            M::MongoDbCr => Some(mongodb::options::AuthMechanism::MongoDbCr),
            M::Plain => Some(mongodb::options::AuthMechanism::Plain),
            M::MongoDbX500 => Some(mongodb::options::AuthMechanism::MongoDbX509),
            M::Gssapi => Some(mongodb::options::AuthMechanism::Gssapi),
            M::None => Option::None,
        }
    }
}

impl std::fmt::Display for AuthMechanism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mechanism_name())
    }
}

impl FromStr for AuthMechanism {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthMechanism::from_mechanism_name(s)
    }
}

impl TryFrom<String> for AuthMechanism {
    type Error = DialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AuthMechanism::from_mechanism_name(&value)
    }
}

impl From<AuthMechanism> for String {
    fn from(mechanism: AuthMechanism) -> Self {
        mechanism.mechanism_name().to_owned()
    }
}
