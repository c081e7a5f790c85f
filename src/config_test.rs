use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
    let env = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    SiteConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = config_from(&[]);
    assert_eq!(cfg.addr, DEFAULT_ADDR);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_all_settings() {
    let cfg = config_from(&[("SITE_ADDR", "127.0.0.1"), ("PORT", "8080"), ("ASSETS_DIR", "/srv/site")]);
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/site"));
}

#[test]
fn invalid_port_falls_back_to_default() {
    for raw in ["http", "-1", "70000", "80.5"] {
        assert_eq!(config_from(&[("PORT", raw)]).port, DEFAULT_PORT, "{raw:?}");
    }
}

#[test]
fn port_is_trimmed() {
    assert_eq!(config_from(&[("PORT", " 4000 ")]).port, 4000);
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = config_from(&[("SITE_ADDR", "  "), ("ASSETS_DIR", "")]);
    assert_eq!(cfg.addr, DEFAULT_ADDR);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
}
