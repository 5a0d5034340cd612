#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use shelfdash_host::client::{ApiBase, HttpMetricsSource};

#[test]
fn localhost_page_targets_local_api() {
    let base = ApiBase::resolve(None, "http://localhost:3000");
    assert_eq!(base.endpoint("/metrics"), "http://localhost:8000/api/metrics");
}

#[test]
fn deployed_page_uses_same_origin() {
    let base = ApiBase::resolve(None, "https://dash.example.com");
    assert!(base.is_same_origin());
    assert_eq!(base.endpoint("/metrics"), "/api/metrics");
}

#[test]
fn override_wins_and_loses_one_trailing_slash() {
    let base = ApiBase::resolve(Some("https://api.example.com/"), "http://localhost:3000");
    assert_eq!(base.endpoint("/heatmap"), "https://api.example.com/api/heatmap");

    let base = ApiBase::resolve(Some("https://api.example.com"), "https://dash.example.com");
    assert_eq!(base.endpoint("/heatmap"), "https://api.example.com/api/heatmap");
}

#[test]
fn empty_override_is_ignored() {
    let base = ApiBase::resolve(Some(""), "http://localhost:5173");
    assert_eq!(base.origin(), "http://localhost:8000");

    let base = ApiBase::resolve(Some(""), "https://dash.example.com");
    assert!(base.is_same_origin());
}

#[test]
fn https_localhost_is_not_local_dev() {
    let base = ApiBase::resolve(None, "https://localhost:3000");
    assert!(base.is_same_origin());
}

#[test]
fn same_origin_urls_resolve_against_the_page() {
    let base = ApiBase::resolve(None, "https://dash.example.com");
    let source = HttpMetricsSource::new(base, "https://dash.example.com").unwrap();
    assert_eq!(
        source.url("/time_series").unwrap().as_str(),
        "https://dash.example.com/api/time_series"
    );
}

#[test]
fn invalid_page_origin_is_a_config_error() {
    let base = ApiBase::resolve(None, "not a url");
    let err = HttpMetricsSource::new(base, "not a url").err().expect("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}
