//! HTTP API Client
//!
//! URL resolution, the single-shot resource fetch, and response
//! normalization shared by every list view.

use std::fmt;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{FetchError, FetchResult};
use crate::config::ApiConfig;

/// The five backend collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Teams,
    Activities,
    Workouts,
    Leaderboard,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Users,
        Resource::Teams,
        Resource::Activities,
        Resource::Workouts,
        Resource::Leaderboard,
    ];

    /// Path segment under `/api/`
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Teams => "teams",
            Resource::Activities => "activities",
            Resource::Workouts => "workouts",
            Resource::Leaderboard => "leaderboard",
        }
    }

    /// Client-side route for the view listing this resource
    pub fn route(self) -> &'static str {
        match self {
            Resource::Users => "/users",
            Resource::Teams => "/teams",
            Resource::Activities => "/activities",
            Resource::Workouts => "/workouts",
            Resource::Leaderboard => "/leaderboard",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the absolute endpoint URL for a resource.
///
/// A configured hosted identifier selects
/// `https://{identifier}-{port}.{hosted_domain}/api/{resource}/`; otherwise
/// the local fallback `http://localhost:{port}/api/{resource}/` is used.
pub fn api_url(config: &ApiConfig, resource: Resource) -> String {
    match config.hosted_identifier() {
        Some(identifier) => format!(
            "https://{}-{}.{}/api/{}/",
            identifier, config.port, config.hosted_domain, resource
        ),
        None => format!("http://localhost:{}/api/{}/", config.port, resource),
    }
}

/// Extract the record list from a parsed response body.
///
/// Accepts an envelope (`{"results": [...]}`) or a bare array. Anything else,
/// including an envelope whose `results` is not an array, yields no records.
pub fn normalize_records(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut envelope) => match envelope.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// Reject any status outside 2xx.
pub fn check_status(status: u16) -> FetchResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

/// Parse a response body and decode its normalized record list.
pub fn decode_records<T>(body: &str) -> FetchResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let parsed: Value = serde_json::from_str(body)?;
    let records = normalize_records(parsed);
    Ok(serde_json::from_value(Value::Array(records))?)
}

/// Fetch one resource collection.
pub async fn fetch_records<T>(config: &ApiConfig, resource: Resource) -> FetchResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let url = api_url(config, resource);
    log::info!("Fetching {} from: {}", resource, url);

    let response = Request::get(&url).send().await?;
    check_status(response.status())?;

    let body = response.text().await?;
    let records: Vec<T> = decode_records(&body)?;
    log::debug!("Received {} {} records", records.len(), resource);

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hosted(identifier: &str) -> ApiConfig {
        ApiConfig {
            codespace_name: Some(identifier.to_string()),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_hosted_url() {
        assert_eq!(
            api_url(&hosted("abc123"), Resource::Users),
            "https://abc123-8000.app.github.dev/api/users/"
        );
    }

    #[test]
    fn test_local_url() {
        assert_eq!(
            api_url(&ApiConfig::default(), Resource::Users),
            "http://localhost:8000/api/users/"
        );
    }

    #[test]
    fn test_url_for_every_resource() {
        let config = ApiConfig::default();
        for resource in Resource::ALL {
            let url = api_url(&config, resource);
            assert!(url.ends_with(&format!("/api/{}/", resource.as_str())));
            assert_eq!(resource.route(), format!("/{}", resource.as_str()));
        }
    }

    #[test]
    fn test_normalize_envelope() {
        let body = json!({"count": 2, "next": null, "results": [{"id": 1}, {"id": 2}]});
        assert_eq!(normalize_records(body), vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn test_normalize_bare_array() {
        let body = json!([{"id": "a"}]);
        assert_eq!(normalize_records(body), vec![json!({"id": "a"})]);
    }

    #[test]
    fn test_normalize_other_shapes() {
        assert!(normalize_records(json!({"detail": "ok"})).is_empty());
        assert!(normalize_records(json!({"results": null})).is_empty());
        assert!(normalize_records(json!({"results": "nope"})).is_empty());
        assert!(normalize_records(json!("text")).is_empty());
        assert!(normalize_records(json!(null)).is_empty());
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert_eq!(check_status(404), Err(FetchError::Status(404)));
        assert_eq!(check_status(500), Err(FetchError::Status(500)));
        assert_eq!(check_status(302), Err(FetchError::Status(302)));
    }

    #[test]
    fn test_decode_keeps_order() {
        let records: Vec<Value> = decode_records(r#"[{"id": 3}, {"id": 1}, {"id": 2}]"#).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_decode_unparseable_body() {
        let expected = serde_json::from_str::<Value>("<html>").unwrap_err().to_string();
        let err = decode_records::<Value>("<html>").unwrap_err();
        assert_eq!(err, FetchError::Parse(expected));
    }
}
