//! Endpoint descriptors.
//!
//! Each endpoint method declares one [`Endpoint`]: method, `/v1/...`
//! path template, parameter bindings, and body encoding. The descriptor
//! is resolved against the configured base URL at dispatch time.

use reqwest::Method;
use serde::Serialize;
use url::Url;

/// Body encoding declared by an endpoint.
#[derive(Debug)]
pub(crate) enum RequestBody {
    /// No body.
    None,
    /// JSON-encoded body.
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded` body.
    Form(Vec<(&'static str, String)>),
}

/// One REST operation, described declaratively.
#[derive(Debug)]
pub(crate) struct Endpoint {
    pub(crate) method: Method,
    /// Path template with `{name}` placeholders (e.g. `/v1/user/{id}`).
    pub(crate) path: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, Option<String>)>,
    pub(crate) body: RequestBody,
    encode_error: Option<serde_json::Error>,
}

impl Endpoint {
    fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            path_params: Vec::new(),
            query: Vec::new(),
            body: RequestBody::None,
            encode_error: None,
        }
    }

    pub(crate) fn get(path: &'static str) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: &'static str) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn put(path: &'static str) -> Self {
        Self::new(Method::PUT, path)
    }

    pub(crate) fn delete(path: &'static str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Bind a `{name}` placeholder in the path template.
    pub(crate) fn path_param(mut self, name: &'static str, value: impl std::fmt::Display) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    /// Bind a query parameter. `None` values are omitted from the URL.
    pub(crate) fn query(mut self, name: &'static str, value: Option<impl std::fmt::Display>) -> Self {
        self.query.push((name, value.map(|v| v.to_string())));
        self
    }

    /// Declare a JSON body.
    pub(crate) fn json(mut self, body: &impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = RequestBody::Json(value),
            Err(error) => self.encode_error = Some(error),
        }
        self
    }

    /// Declare a form-urlencoded body.
    pub(crate) fn form(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.body = RequestBody::Form(pairs);
        self
    }

    /// Fail early if the declared body could not be serialized.
    pub(crate) fn take_encode_error(&mut self) -> Option<serde_json::Error> {
        self.encode_error.take()
    }

    /// Resolve the full request URL: substitute path parameters into the
    /// template, append the result to the base URL's path, then append
    /// query parameters, skipping absent values.
    ///
    /// A base URL carrying its own path (e.g. `https://host/api/`) keeps
    /// that prefix in front of the template.
    pub(crate) fn resolve_url(&self, base: &Url) -> Url {
        let mut path = self.path.to_string();
        for (name, value) in &self.path_params {
            path = path.replace(&format!("{{{name}}}"), value);
        }

        let mut url = base.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{prefix}{path}"));
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                if let Some(value) = value {
                    pairs.append_pair(name, value);
                }
            }
        }
        // `query_pairs_mut` leaves a bare `?` when nothing was appended.
        if url.query() == Some("") {
            url.set_query(None);
        }
        url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base() -> Url {
        "https://api.thriftwear.test".parse().unwrap()
    }

    #[test]
    fn path_params_substitute_into_template() {
        let endpoint = Endpoint::get("/v1/user/{id}").path_param("id", "42");
        let url = endpoint.resolve_url(&base());
        assert_eq!(url.as_str(), "https://api.thriftwear.test/v1/user/42");
    }

    #[test]
    fn absent_query_values_are_omitted() {
        let endpoint = Endpoint::get("/v1/user/order")
            .query("page", Some(2_u32))
            .query("page_size", None::<u32>);
        let url = endpoint.resolve_url(&base());
        assert_eq!(
            url.as_str(),
            "https://api.thriftwear.test/v1/user/order?page=2"
        );
    }

    #[test]
    fn no_query_values_leaves_url_bare() {
        let endpoint = Endpoint::get("/v1/categories").query("id", None::<&str>);
        let url = endpoint.resolve_url(&base());
        assert_eq!(url.as_str(), "https://api.thriftwear.test/v1/categories");
    }

    #[test]
    fn present_query_values_appear_exactly_once() {
        let endpoint = Endpoint::post("/v1/forgot-password").query("email", Some("a@b.test"));
        let url = endpoint.resolve_url(&base());
        assert_eq!(
            url.as_str(),
            "https://api.thriftwear.test/v1/forgot-password?email=a%40b.test"
        );
    }

    #[test]
    fn base_url_with_trailing_slash_resolves_cleanly() {
        let base: Url = "https://api.thriftwear.test/".parse().unwrap();
        let url = Endpoint::get("/v1/role").resolve_url(&base);
        assert_eq!(url.as_str(), "https://api.thriftwear.test/v1/role");
    }

    #[test]
    fn base_url_path_prefix_is_preserved() {
        let base: Url = "https://gateway.thriftwear.test/api/".parse().unwrap();
        let url = Endpoint::get("/v1/role").resolve_url(&base);
        assert_eq!(url.as_str(), "https://gateway.thriftwear.test/api/v1/role");
    }

    #[test]
    fn base_url_path_prefix_without_trailing_slash_is_preserved() {
        let base: Url = "https://gateway.thriftwear.test/api".parse().unwrap();
        let endpoint = Endpoint::get("/v1/user/{id}").path_param("id", "42");
        assert_eq!(
            endpoint.resolve_url(&base).as_str(),
            "https://gateway.thriftwear.test/api/v1/user/42"
        );
    }

    #[test]
    fn json_body_is_captured() {
        let endpoint = Endpoint::post("/v1/categories")
            .json(&serde_json::json!({"title": "Shoes", "type": "Footwear"}));
        assert!(matches!(endpoint.body, RequestBody::Json(_)));
    }
}
