#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::Path;

use shelfdash_host::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
host:
  prot: 8080 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.host.port, 3000);
    assert_eq!(cfg.host.listen_host, "0.0.0.0");
    assert_eq!(cfg.host.root, Path::new("static"));
    assert_eq!(cfg.host.favicon, Path::new("favicon.ico"));
    assert_eq!(cfg.client.api_base, None);
    assert_eq!(cfg.client.page_origin, "http://localhost:3000");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
host:
  listen_host: "127.0.0.1"
  port: 8081
  root: "public"
  favicon: "assets/favicon.ico"
client:
  api_base: "https://metrics.example.com/"
  page_origin: "https://dash.example.com"
  output: "public/index.html"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.host.listen_addr(), "127.0.0.1:8081");
    assert_eq!(cfg.client.api_base.as_deref(), Some("https://metrics.example.com/"));
    assert_eq!(cfg.client.output, Path::new("public/index.html"));
}

#[test]
fn rejects_unknown_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

#[test]
fn rejects_non_http_page_origin() {
    let bad = r#"
version: 1
client:
  page_origin: "file:///tmp"
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn port_override() {
    let mut cfg = config::DashConfig::default();
    config::apply_port_override(&mut cfg, None).unwrap();
    assert_eq!(cfg.host.port, 3000);

    config::apply_port_override(&mut cfg, Some("8088")).unwrap();
    assert_eq!(cfg.host.port, 8088);

    let err = config::apply_port_override(&mut cfg, Some("eighty")).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
    assert_eq!(cfg.host.port, 8088);
}

#[test]
fn missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config::load_or_default(dir.path().join("absent.yaml")).unwrap();
    assert_eq!(cfg.host.port, 3000);
}

#[test]
fn present_file_is_parsed_strictly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shelfdash.yaml");
    std::fs::write(&path, "version: 1\nhost:\n  port: 9000\n").unwrap();
    assert_eq!(config::load_or_default(&path).unwrap().host.port, 9000);

    std::fs::write(&path, "version: 1\nextra: true\n").unwrap();
    assert!(config::load_or_default(&path).is_err());
}
