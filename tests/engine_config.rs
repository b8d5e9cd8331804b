use std::fs;

use pagecraft_core::config::{ComposerConfig, ConfigError, EngineConfig, SectionCaps};
use pagecraft_core::engine::Engine;
use pagecraft_core::roles::{PageRole, SchemaRole};
use pagecraft_core::schema::SchemaPolicy;
use pagecraft_core::tokens::TokenRepository;
use serde_json::json;
use tempfile::tempdir;

#[test]
fn defaults_are_v0() {
    let config = EngineConfig::default();
    assert_eq!(config.composer, ComposerConfig::v0());
    assert_eq!(config.schema, SchemaPolicy::v0());
    assert_eq!(
        config.composer.caps,
        SectionCaps {
            angles: 3,
            process: 4,
            benefits: 4,
            proof: 5,
            sentences: 5,
            local: 2,
            nearby: 4,
        }
    );
}

#[test]
fn partial_config_file_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(
        &path,
        r#"{"composer": {"caps": {"angles": 2}, "fallback_cta": "Say hello"}}"#,
    )
    .unwrap();

    let config = EngineConfig::from_path(&path).unwrap();
    assert_eq!(config.composer.caps.angles, 2);
    assert_eq!(config.composer.caps.process, 4);
    assert_eq!(config.composer.fallback_cta, "Say hello");
    assert_eq!(config.composer.fallback_local, ComposerConfig::v0().fallback_local);
    assert_eq!(config.schema, SchemaPolicy::v0());
}

#[test]
fn zero_cap_is_rejected() {
    let err = EngineConfig::from_json_str(r#"{"composer": {"caps": {"nearby": 0}}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidCap("nearby")));
}

#[test]
fn unreadable_or_malformed_config() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        EngineConfig::from_path(&dir.path().join("missing.json")),
        Err(ConfigError::Io(_))
    ));
    assert!(matches!(
        EngineConfig::from_json_str("{"),
        Err(ConfigError::Serialization(_))
    ));
}

#[test]
fn engine_threads_config_through_every_call() {
    let mut config = EngineConfig::default();
    config.composer.caps.angles = 1;
    config.composer.fallback_cta = "Write to us".into();
    let engine = Engine::new(config, TokenRepository::default());

    let bundle = engine.compose("seo", "austin-tx", "https://x/services/seo/austin-tx/");
    assert_eq!(bundle.cta, "Write to us");

    assert_eq!(engine.classify("/services/seo/austin-tx/", None), PageRole::Conversion);
    assert_eq!(engine.classify("/services/seo/", Some("authority")), PageRole::Authority);
    assert_eq!(engine.schema_role("/", None), SchemaRole::Homepage);
    assert_eq!(engine.schema_role("/contact/", None), SchemaRole::Contact);
    assert_eq!(engine.schema_role("/services/seo/austin-tx/", None), SchemaRole::Service);

    let graph = vec![json!({"@type": "Product"}), json!({"@type": "Service"})];
    let role = engine.schema_role("/services/seo/austin-tx/", None);
    assert!(!engine.validate_schema(&graph, role).valid);
    assert_eq!(engine.clean_schema(&graph, role), vec![json!({"@type": "Service"})]);
    assert_eq!(engine.clean_schema_with_report(&graph, role).removed_nodes.len(), 1);

    let audit = engine.audit_page("/about/", "About Acme Digital and the team behind it", "", None);
    assert_eq!(audit.role, PageRole::Hybrid);
    assert!(!audit.description.valid);
}

#[test]
fn reload_publishes_new_tokens_without_touching_old_snapshots() {
    let engine = Engine::new(EngineConfig::default(), TokenRepository::default());
    let url = "https://x/services/agentic-seo/austin-tx/";

    let before = engine.compose("agentic-seo", "austin-tx", url);
    let old = engine.tokens();

    let previous = engine.reload(TokenRepository::embedded().unwrap());
    assert!(previous.services.is_empty());
    assert!(old.services.is_empty());

    let after = engine.compose("agentic-seo", "austin-tx", url);
    assert_ne!(before, after);
    assert_eq!(after, Engine::embedded().unwrap().compose("agentic-seo", "austin-tx", url));
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn engine_is_shareable_across_threads() {
    init_tracing();
    let engine = std::sync::Arc::new(Engine::embedded().unwrap());
    let url = "https://x/services/local-seo/denver-co/";
    let expected = engine.compose("local-seo", "denver-co", url);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || engine.compose("local-seo", "denver-co", url))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
