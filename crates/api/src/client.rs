use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url, header};
use serde::{Deserialize, Serialize};
use storedesk_types::{Collection, CollectionId, ProductId};
use storedesk_util::{StoredeskConfig, redact_sensitive};
use tracing::debug;

use crate::{ApiError, CollectionService};

/// Hostnames allowed for local development regardless of scheme.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

#[derive(Debug, Clone)]
/// Thin wrapper around a configured `reqwest::Client` for the storefront API.
///
/// The client pre-configures default headers and resolves API-relative
/// paths against a validated base URL.
pub struct StorefrontClient {
    base_url: Url,
    http: Client,
    user_agent: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddProductBody<'a> {
    product_id: &'a str,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MessageBody {
    Object {
        #[serde(alias = "error")]
        message: String,
    },
    Bare(String),
}

impl StorefrontClient {
    /// Construct a [`StorefrontClient`] from resolved configuration.
    ///
    /// The base URL must be http(s); non-localhost hosts must use HTTPS. When
    /// an API token is configured it is sent as a bearer token.
    pub fn from_config(config: &StoredeskConfig) -> Result<Self, ApiError> {
        let base_url = validate_base_url(&config.api_base)?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        if let Some(token) = config.api_token.as_deref() {
            let value = header::HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| ApiError::InvalidToken)?;
            default_headers.insert(header::AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            http,
            user_agent: format!("storedesk/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a `reqwest::RequestBuilder` for a method and API-relative path.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.base_url.join(path.trim_start_matches('/')).map_err(|error| ApiError::InvalidBaseUrl {
            base: self.base_url.to_string(),
            reason: error.to_string(),
        })?;
        debug!(%method, %url, "building request");

        Ok(self.http.request(method, url).header(header::USER_AGENT, &self.user_agent))
    }
}

#[async_trait]
impl CollectionService for StorefrontClient {
    async fn fetch_collection(&self, id: &CollectionId) -> Result<Option<Collection>, ApiError> {
        let response = self.request(Method::GET, &format!("api/collections/{id}"))?.send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_collection(status, &body)
    }

    async fn add_product(&self, collection_id: &CollectionId, product_id: &ProductId) -> Result<String, ApiError> {
        let response = self
            .request(Method::POST, &format!("api/collections/{collection_id}/products"))?
            .json(&AddProductBody {
                product_id: product_id.as_str(),
            })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        decode_add_product(status, &body)
    }
}

/// Interpret a collection lookup response. 404 and a JSON `null` body both
/// mean "not found".
pub(crate) fn decode_collection(status: StatusCode, body: &str) -> Result<Option<Collection>, ApiError> {
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(status_error(status, body));
    }
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<Collection>>(body)?)
}

/// Interpret an add-product response, extracting the confirmation message.
pub(crate) fn decode_add_product(status: StatusCode, body: &str) -> Result<String, ApiError> {
    if !status.is_success() {
        return Err(status_error(status, body));
    }
    match serde_json::from_str::<MessageBody>(body)? {
        MessageBody::Object { message } | MessageBody::Bare(message) => Ok(message),
    }
}

fn status_error(status: StatusCode, body: &str) -> ApiError {
    let message = match serde_json::from_str::<MessageBody>(body) {
        Ok(MessageBody::Object { message } | MessageBody::Bare(message)) => message,
        Err(_) => {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                trimmed.chars().take(200).collect()
            }
        }
    };
    ApiError::Status {
        status: status.as_u16(),
        message: redact_sensitive(&message),
    }
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - scheme must be `http` or `https`
/// - `localhost` or `127.0.0.1`: either scheme is allowed
/// - otherwise: scheme must be HTTPS
///
/// The returned URL always ends with `/` so relative paths join beneath it.
pub fn validate_base_url(base: &str) -> Result<Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        base: base.to_string(),
        reason,
    };
    let mut parsed = Url::parse(base).map_err(|error| invalid(error.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    let host_name = parsed.host_str().ok_or_else(|| invalid("URL must include a host".into()))?;

    let is_local = LOCALHOST_DOMAINS.iter().any(|&allowed| host_name.eq_ignore_ascii_case(allowed));
    if !is_local && parsed.scheme() != "https" {
        return Err(invalid(format!(
            "must use https for non-localhost hosts; got '{}://'",
            parsed.scheme()
        )));
    }

    if !parsed.path().ends_with('/') {
        let path = format!("{}/", parsed.path());
        parsed.set_path(&path);
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storedesk_types::Visibility;

    #[test]
    fn base_url_rules() {
        assert!(validate_base_url("http://localhost:3000").is_ok());
        assert!(validate_base_url("https://shop.example.com").is_ok());
        assert!(validate_base_url("http://shop.example.com").is_err());
        assert!(validate_base_url("ftp://localhost").is_err());
        assert!(validate_base_url("not a url").is_err());
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let url = validate_base_url("https://shop.example.com/admin").expect("valid");
        assert_eq!(url.as_str(), "https://shop.example.com/admin/");
    }

    #[test]
    fn request_joins_relative_paths() {
        let config = StoredeskConfig {
            api_base: "https://shop.example.com/v1".into(),
            ..StoredeskConfig::default()
        };
        let client = StorefrontClient::from_config(&config).expect("client");
        let request = client
            .request(Method::GET, "/api/collections/99001")
            .expect("builder")
            .build()
            .expect("request");
        assert_eq!(request.url().as_str(), "https://shop.example.com/v1/api/collections/99001");
        assert!(request.headers().contains_key(header::USER_AGENT));
    }

    #[test]
    fn not_found_and_null_mean_missing() {
        assert!(decode_collection(StatusCode::NOT_FOUND, "").expect("decode").is_none());
        assert!(decode_collection(StatusCode::OK, "null").expect("decode").is_none());
        assert!(decode_collection(StatusCode::OK, "").expect("decode").is_none());
    }

    #[test]
    fn decodes_collection_payload() {
        let body = r#"{ "id": "7", "name": "Bedroom", "visibility": "HIDDEN", "products": [] }"#;
        let collection = decode_collection(StatusCode::OK, body).expect("decode").expect("present");
        assert_eq!(collection.name, "Bedroom");
        assert_eq!(collection.visibility, Visibility::Hidden);
    }

    #[test]
    fn server_errors_surface_status_and_message() {
        let error = decode_collection(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#).expect_err("error");
        assert_eq!(error.status(), Some(500));
        assert_eq!(error.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn add_product_reads_message() {
        let message = decode_add_product(StatusCode::OK, r#"{"message":"Product added"}"#).expect("decode");
        assert_eq!(message, "Product added");
        let bare = decode_add_product(StatusCode::CREATED, r#""Added""#).expect("decode");
        assert_eq!(bare, "Added");
    }

    #[test]
    fn add_product_conflict_is_an_error() {
        let error = decode_add_product(StatusCode::CONFLICT, "Product already in collection").expect_err("conflict");
        assert_eq!(error.status(), Some(409));
        assert!(error.to_string().contains("already in collection"));
    }

    #[test]
    fn error_bodies_are_redacted() {
        let error = decode_add_product(StatusCode::BAD_GATEWAY, "upstream rejected API_TOKEN=abc123").expect_err("error");
        assert_eq!(error.to_string(), "HTTP 502: upstream rejected API_TOKEN=<redacted>");
    }
}
