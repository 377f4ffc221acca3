// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use investment_portal_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_input() {
        let err = CoreError::InvalidInput("costValue is negative (-5)".into());
        assert_eq!(err.to_string(), "Invalid input: costValue is negative (-5)");
    }

    #[test]
    fn invalid_input_empty_message() {
        let err = CoreError::InvalidInput(String::new());
        assert_eq!(err.to_string(), "Invalid input: ");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("expected value".into());
        assert_eq!(err.to_string(), "Deserialization error: expected value");
    }

    #[test]
    fn config() {
        let err = CoreError::Config("endpoint nav_history_url is empty".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: endpoint nav_history_url is empty"
        );
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            provider: "Flashfund".into(),
            message: "HTTP 503 Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (Flashfund): HTTP 503 Service Unavailable"
        );
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod from_impls {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn from_serde_json_error_eof() {
        let json_err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let err: CoreError = json_err.into();
        match err {
            CoreError::Deserialization(msg) => assert!(msg.contains("EOF")),
            other => panic!("expected Deserialization, got {other:?}"),
        }
    }
}

// ── std::error::Error / Send / Sync ─────────────────────────────────

mod std_error {
    use super::*;

    #[test]
    fn core_error_implements_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::InvalidInput("x".into()));
        assert_eq!(err.to_string(), "Invalid input: x");
    }

    #[test]
    fn core_error_implements_send() {
        fn assert_send<T: Send>() {}
        assert_send::<CoreError>();
    }

    #[test]
    fn core_error_implements_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<CoreError>();
    }
}
