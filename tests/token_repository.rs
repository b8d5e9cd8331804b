use std::collections::BTreeMap;
use std::fs;

use pagecraft_core::tokens::{
    merge, CityTokens, SharedRepository, TokenLoadError, TokenRepository, TokenSet, TokenValue,
};
use proptest::prelude::*;
use tempfile::tempdir;

fn list_set(key: &str, items: &[&str]) -> TokenSet {
    let mut set = TokenSet::new();
    set.insert_list(key, items.iter().copied());
    set
}

#[test]
fn merge_with_empty_overlay_is_identity() {
    let mut base = list_set("angles", &["A", "B"]);
    base.insert_list("ctas", ["Call"]);
    base.insert_text("name", "Base");

    assert_eq!(merge(&base, &TokenSet::new()), base);
}

#[test]
fn merge_appends_only_new_overlay_entries() {
    let base = list_set("angles", &["A", "B"]);
    let overlay = list_set("angles", &["B", "C"]);

    assert_eq!(merge(&base, &overlay), list_set("angles", &["A", "B", "C"]));
}

#[test]
fn merge_keeps_base_duplicates_and_order() {
    let base = list_set("process", &["x", "y", "x"]);
    let overlay = list_set("process", &["z", "y", "z"]);

    let merged = merge(&base, &overlay);
    assert_eq!(merged.list("process"), ["x", "y", "x", "z"]);
}

#[test]
fn merge_overrides_scalars_and_adds_new_keys() {
    let mut base = TokenSet::new();
    base.insert_text("name", "Base Name");
    base.insert_list("benefits", ["speed"]);

    let mut overlay = TokenSet::new();
    overlay.insert_text("name", "Service Name");
    overlay.insert_list("angles", ["fresh"]);

    let merged = merge(&base, &overlay);
    assert_eq!(merged.text("name"), Some("Service Name"));
    assert_eq!(merged.list("benefits"), ["speed"]);
    assert_eq!(merged.list("angles"), ["fresh"]);
}

#[test]
fn merge_scalar_over_list_replaces() {
    let base = list_set("ctas", &["Call now"]);
    let mut overlay = TokenSet::new();
    overlay.insert_text("ctas", "Single CTA");

    let merged = merge(&base, &overlay);
    assert_eq!(merged.get("ctas"), Some(&TokenValue::Text("Single CTA".into())));
    assert!(merged.list("ctas").is_empty());
}

proptest! {
    #[test]
    fn property_merge_never_loses_base_entries(
        base in prop::collection::vec("[a-e]{1,2}", 0..8),
        extra in prop::collection::vec("[a-e]{1,2}", 0..8),
    ) {
        let merged = merge(&list_set("angles", &base.iter().map(String::as_str).collect::<Vec<_>>()),
                           &list_set("angles", &extra.iter().map(String::as_str).collect::<Vec<_>>()));
        let out = merged.list("angles");

        prop_assert_eq!(&out[..base.len()], &base[..]);
        for item in &extra {
            prop_assert!(out.contains(item));
        }
        for item in &out[base.len()..] {
            prop_assert!(!base.contains(item));
        }
    }
}

#[test]
fn untagged_token_values_on_the_wire() {
    let raw = r#"{"name": "Local SEO", "angles": ["a", "b"]}"#;
    let set: TokenSet = serde_json::from_str(raw).unwrap();

    assert_eq!(set.text("name"), Some("Local SEO"));
    assert_eq!(set.list("angles"), ["a", "b"]);
    assert!(set.list("missing").is_empty());
    assert_eq!(set.text("angles"), None);
}

#[test]
fn embedded_library_loads() {
    let repo = TokenRepository::embedded().unwrap();

    assert_eq!(
        repo.service_slugs().collect::<Vec<_>>(),
        ["agentic-seo", "local-seo", "technical-seo"]
    );
    assert_eq!(
        repo.city_slugs().collect::<Vec<_>>(),
        ["austin-tx", "denver-co", "portland-or"]
    );
    assert!(!repo.base.list("proof_points").is_empty());
    assert!(!repo.base.list("ctas").is_empty());
    assert_eq!(repo.city("denver-co").unwrap().name, None);
    assert!(repo.service("nope").is_none());
}

#[test]
fn load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tokens.json");
    fs::write(
        &path,
        r#"{
            "base": {"angles": ["one"]},
            "services": {"web-design": {"angles": ["two"]}},
            "cities": {"boise-id": {"local": ["Boise is growing."]}}
        }"#,
    )
    .unwrap();

    let repo = TokenRepository::from_path(&path).unwrap();
    assert_eq!(repo.base.list("angles"), ["one"]);
    assert_eq!(repo.service("web-design").unwrap().list("angles"), ["two"]);

    let city = repo.city("boise-id").unwrap();
    assert_eq!(city.local, ["Boise is growing."]);
    assert!(city.nearbys.is_empty(), "missing nearbys default to empty");
}

#[test]
fn invalid_slug_is_rejected() {
    let raw = r#"{"cities": {"Austin TX": {"local": []}}}"#;
    let err = TokenRepository::from_json_str(raw).unwrap_err();
    assert!(matches!(
        err,
        TokenLoadError::InvalidKey { section: "cities", ref slug } if slug == "Austin TX"
    ));

    let mut services = BTreeMap::new();
    services.insert("bad_slug".to_string(), TokenSet::new());
    let err = TokenRepository::new(TokenSet::new(), services, BTreeMap::new()).unwrap_err();
    assert!(matches!(err, TokenLoadError::InvalidKey { section: "services", .. }));
}

#[test]
fn malformed_file_is_a_serialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        TokenRepository::from_path(&path),
        Err(TokenLoadError::Serialization(_))
    ));
    assert!(matches!(
        TokenRepository::from_path(&dir.path().join("missing.json")),
        Err(TokenLoadError::Io(_))
    ));
}

#[test]
fn shared_repository_swap_keeps_old_snapshots_intact() {
    let shared = SharedRepository::new(TokenRepository::default());
    let before = shared.snapshot();

    let mut cities = BTreeMap::new();
    cities.insert("reno-nv".to_string(), CityTokens::fallback("Reno."));
    let next = TokenRepository::new(TokenSet::new(), BTreeMap::new(), cities).unwrap();

    let previous = shared.swap(next);
    assert!(before.cities.is_empty());
    assert!(previous.cities.is_empty());
    assert!(shared.snapshot().city("reno-nv").is_some());
}
