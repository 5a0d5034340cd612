//! API origin resolution.
//!
//! 1. an explicit, non-empty override
//! 2. `http://localhost:8000` when the page itself is served from localhost
//! 3. otherwise the page's own origin (empty prefix, same-origin requests)

pub const LOCAL_API_ORIGIN: &str = "http://localhost:8000";
pub const API_PREFIX: &str = "/api";

const LOCAL_PAGE_PREFIX: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    origin: String,
}

impl ApiBase {
    pub fn resolve(override_origin: Option<&str>, page_origin: &str) -> Self {
        let origin = match override_origin {
            Some(o) if !o.is_empty() => o.strip_suffix('/').unwrap_or(o).to_string(),
            _ if page_origin.starts_with(LOCAL_PAGE_PREFIX) => LOCAL_API_ORIGIN.to_string(),
            _ => String::new(),
        };
        Self { origin }
    }

    /// Empty when requests go to the page's own origin.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn is_same_origin(&self) -> bool {
        self.origin.is_empty()
    }

    /// `origin + "/api" + path`; relative when same-origin.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.origin)
    }
}
