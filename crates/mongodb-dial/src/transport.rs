use mongodb::options::{ClientOptions, Tls, TlsOptions};

/// How the connection to each server address in the deployment is opened. Selected by the
/// caller; the TLS options themselves (trust roots, client certificates, verification
/// policy) are the driver's and are passed through untouched.
#[derive(Clone, Debug)]
pub enum Transport {
    /// The driver's built-in TCP transport. Everything on the wire, credentials included,
    /// is cleartext.
    Plain,
    /// Open a TLS connection over TCP to every server address, using the supplied
    /// options.
    Tls(TlsOptions),
}

impl Transport {
    /// Pins the transport choice into the driver options. [Transport::Plain] disables TLS
    /// even when the connection string requests it.
    pub(crate) fn apply(self, options: &mut ClientOptions) {
        options.tls = Some(match self {
            Transport::Plain => Tls::Disabled,
            Transport::Tls(tls_options) => Tls::Enabled(tls_options),
        });
    }
}
