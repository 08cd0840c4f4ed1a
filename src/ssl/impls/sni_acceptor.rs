use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::create_server_config_with_key;
use crate::ssl::structs::certificate_resolver::CertificateResolver;
use crate::ssl::structs::sni_acceptor::SniAcceptor;
use log::warn;
use rustls::server::Acceptor;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_rustls::LazyConfigAcceptor;
use tokio_rustls::server::TlsStream;

impl std::fmt::Debug for SniAcceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SniAcceptor")
            .field("resolver", &self.resolver)
            .field("alpn_protocols", &self.alpn_protocols.len())
            .finish()
    }
}

impl SniAcceptor {
    pub fn new(resolver: Arc<CertificateResolver>) -> Self {
        Self {
            resolver,
            provider: Arc::new(rustls::crypto::ring::default_provider()),
            alpn_protocols: Vec::new(),
        }
    }

    pub fn with_alpn_protocols(mut self, alpn_protocols: Vec<Vec<u8>>) -> Self {
        self.alpn_protocols = alpn_protocols;
        self
    }

    pub fn resolver(&self) -> &Arc<CertificateResolver> {
        &self.resolver
    }

    /// Runs one server handshake on `io`, presenting the certificate stored for
    /// the requested server name. Any error means the connection should be
    /// dropped.
    pub async fn accept<IO>(&self, io: IO) -> Result<TlsStream<IO>, CertificateError>
    where
        IO: AsyncRead + AsyncWrite + Unpin,
    {
        let start = LazyConfigAcceptor::new(Acceptor::default(), io)
            .await
            .map_err(|e| CertificateError::Handshake(e.to_string()))?;
        let server_name = match start.client_hello().server_name() {
            Some(name) => name.to_string(),
            None => {
                warn!("[CERTIFICATE] Client hello without server name, dropping connection");
                return Err(CertificateError::MissingServerName);
            }
        };
        let certified_key = match self.resolver.resolve_certificate(&server_name).await {
            Ok(certified_key) => certified_key,
            Err(e) => {
                warn!("[CERTIFICATE] Unable to resolve certificate for {}: {}", server_name, e);
                return Err(e);
            }
        };
        let mut config = create_server_config_with_key(self.provider.clone(), certified_key)?;
        config.alpn_protocols = self.alpn_protocols.clone();
        start
            .into_stream(Arc::new(config))
            .await
            .map_err(|e| CertificateError::Handshake(e.to_string()))
    }
}
