mod certificate_resolver_tests {
    use crate::bundle::enums::bundle_error::BundleError;
    use crate::config::structs::certificate_resolver_config::CertificateResolverConfig;
    use crate::ssl::enums::certificate_error::CertificateError;
    use crate::ssl::structs::certificate_resolver::CertificateResolver;
    use crate::store::enums::store_error::StoreError;
    use crate::store::traits::hash_store::MockHashStore;
    use std::sync::Arc;

    const RSA_CERT: &str = include_str!("../../tests/fixtures/rsa_cert.pem");
    const RSA_KEY: &str = include_str!("../../tests/fixtures/rsa_pkcs8.pem");

    fn rsa_bundle() -> String {
        format!("{}{}", RSA_CERT, RSA_KEY)
    }

    fn resolver_with(store: MockHashStore, config: CertificateResolverConfig) -> CertificateResolver {
        CertificateResolver::with_store(config, Arc::new(store))
    }

    #[tokio::test]
    async fn test_resolve_certificate_reads_prefixed_key() {
        let bundle = rsa_bundle();
        let mut store = MockHashStore::new();
        store
            .expect_get_field()
            .withf(|key, field| key == "s:rsa.test" && field == "cert")
            .times(1)
            .returning(move |_, _| Ok(bundle.clone()));
        let resolver = resolver_with(store, CertificateResolverConfig::default());

        let certified_key = resolver.resolve_certificate("rsa.test").await.unwrap();
        assert_eq!(certified_key.cert.len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_certificate_uses_configured_names() {
        let bundle = rsa_bundle();
        let mut store = MockHashStore::new();
        store
            .expect_get_field()
            .withf(|key, field| key == "certs:Shop.Example.com" && field == "bundle")
            .times(1)
            .returning(move |_, _| Ok(bundle.clone()));
        let config = CertificateResolverConfig::from_options([("prefix", "certs"), ("certKey", "bundle")]).unwrap();
        let resolver = resolver_with(store, config);

        assert!(resolver.resolve_certificate("Shop.Example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_certificate_missing_field() {
        let mut store = MockHashStore::new();
        store.expect_get_field().returning(|key, field| {
            Err(StoreError::FieldNotFound {
                key: key.to_string(),
                field: field.to_string(),
            })
        });
        let resolver = resolver_with(store, CertificateResolverConfig::default());

        let error = resolver.resolve_certificate("unknown.test").await.unwrap_err();
        assert!(matches!(error, CertificateError::Store(StoreError::FieldNotFound { .. })));
        assert_eq!(error.to_string(), "no such field: cert in s:unknown.test");
    }

    #[tokio::test]
    async fn test_resolve_certificate_store_unreachable() {
        let mut store = MockHashStore::new();
        store
            .expect_get_field()
            .returning(|_, _| Err(StoreError::ConnectionError("connection refused".to_string())));
        let resolver = resolver_with(store, CertificateResolverConfig::default());

        let error = resolver.resolve_certificate("rsa.test").await.unwrap_err();
        assert!(matches!(error, CertificateError::Store(StoreError::ConnectionError(_))));
    }

    #[tokio::test]
    async fn test_resolve_certificate_bundle_error_is_verbatim() {
        let mut store = MockHashStore::new();
        store
            .expect_get_field()
            .returning(|_, _| Ok("-----BEGIN FOO-----\nAAAA\n-----END FOO-----\n".to_string()));
        let resolver = resolver_with(store, CertificateResolverConfig::default());

        let error = resolver.resolve_certificate("rsa.test").await.unwrap_err();
        assert!(matches!(error, CertificateError::Bundle(BundleError::UnrecognizedBlockType(_))));
        assert_eq!(error.to_string(), "unrecognized PEM block type: FOO");
    }

    #[tokio::test]
    async fn test_resolve_certificate_empty_bundle() {
        let mut store = MockHashStore::new();
        store.expect_get_field().returning(|_, _| Ok(String::new()));
        let resolver = resolver_with(store, CertificateResolverConfig::default());

        let error = resolver.resolve_certificate("rsa.test").await.unwrap_err();
        assert_eq!(error.to_string(), "failed to parse bundle");
    }

    #[tokio::test]
    async fn test_shutdown_closes_store() {
        let mut store = MockHashStore::new();
        store.expect_close().times(1).returning(|| Ok(()));
        let resolver = resolver_with(store, CertificateResolverConfig::default());

        assert!(resolver.shutdown().await.is_ok());
    }
}

mod server_config_tests {
    use crate::bundle::bundle::decode_bundle;
    use crate::ssl::ssl::create_server_config_with_key;
    use std::sync::Arc;

    const EC_CERT: &str = include_str!("../../tests/fixtures/ec_cert.pem");
    const EC_KEY: &str = include_str!("../../tests/fixtures/ec_key_with_params.pem");

    #[test]
    fn test_create_server_config_with_key() {
        let bundle = format!("{}{}", EC_KEY, EC_CERT);
        let certified_key = Arc::new(decode_bundle(bundle.as_bytes()).unwrap());
        let provider = Arc::new(rustls::crypto::ring::default_provider());

        let config = create_server_config_with_key(provider, certified_key).unwrap();
        assert!(config.alpn_protocols.is_empty());
    }
}
