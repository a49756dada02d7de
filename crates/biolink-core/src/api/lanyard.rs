use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use super::{http_client, PresenceSource};
use crate::error::FetchError;
use crate::models::PresenceSnapshot;

/// Envelope wrapping every presence response
#[derive(Debug, Deserialize)]
struct PresenceEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<PresenceSnapshot>,
    #[serde(default)]
    error: Option<EnvelopeError>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Lanyard presence API client
pub struct LanyardClient {
    base_url: String,
    client: reqwest::Client,
}

impl LanyardClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: http_client()?,
        })
    }

    fn user_url(&self, user_id: &str) -> String {
        format!("{}/users/{}", self.base_url, user_id)
    }
}

#[async_trait]
impl PresenceSource for LanyardClient {
    async fn fetch_presence(&self, user_id: &str) -> Result<PresenceSnapshot, FetchError> {
        let url = self.user_url(user_id);
        tracing::debug!(%url, "fetching presence");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        // The service reports failures inside the body, so the status alone
        // does not decide the outcome.
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_presence_response(status, &body)
    }
}

/// Decode a presence response body into a snapshot
pub(crate) fn parse_presence_response(
    status: u16,
    body: &str,
) -> Result<PresenceSnapshot, FetchError> {
    let envelope: PresenceEnvelope = serde_json::from_str(body).map_err(|e| {
        FetchError::Upstream(format!("unreadable presence response (HTTP {}): {}", status, e))
    })?;

    if !envelope.success {
        let reason = envelope
            .error
            .map(|err| match (err.code, err.message) {
                (Some(code), Some(message)) => format!("{}: {}", code, message),
                (None, Some(message)) => message,
                (Some(code), None) => code,
                (None, None) => format!("HTTP {}", status),
            })
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(FetchError::Upstream(reason));
    }

    envelope
        .data
        .ok_or_else(|| FetchError::Upstream("presence response missing data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server;
    use crate::models::PresenceStatus;

    #[test]
    fn test_parse_success() {
        let body = r#"{"success": true, "data": {
            "discord_user": {"id": "1", "username": "wan", "discriminator": "0", "avatar": null},
            "discord_status": "online",
            "activities": []
        }}"#;
        let snapshot = parse_presence_response(200, body).unwrap();
        assert_eq!(snapshot.status, PresenceStatus::Online);
        assert!(snapshot.activities.is_empty());
    }

    #[test]
    fn test_parse_not_monitored() {
        let body = r#"{"success": false, "error": {"code": "user_not_monitored", "message": "User is not being monitored"}}"#;
        let err = parse_presence_response(404, body).unwrap_err();
        assert_eq!(
            err,
            FetchError::Upstream("user_not_monitored: User is not being monitored".to_string())
        );
    }

    #[test]
    fn test_parse_failure_without_details() {
        let err = parse_presence_response(500, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err, FetchError::Upstream("HTTP 500".to_string()));
    }

    #[test]
    fn test_parse_garbage_body() {
        let err = parse_presence_response(502, "<html>bad gateway</html>").unwrap_err();
        assert!(!err.is_network());
    }

    #[test]
    fn test_success_without_data() {
        let err = parse_presence_response(200, r#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
    }

    #[test]
    fn test_user_url_trims_slash() {
        let client = LanyardClient::new("https://api.lanyard.rest/v1/").unwrap();
        assert_eq!(
            client.user_url("123"),
            "https://api.lanyard.rest/v1/users/123"
        );
    }

    #[tokio::test]
    async fn test_fetch_over_http() {
        let body = r#"{"success": true, "data": {
            "discord_user": {"id": "1", "username": "wan", "discriminator": "0", "avatar": null},
            "discord_status": "idle",
            "activities": []
        }}"#;
        let base = test_server::serve(vec![("/users/1", 200, body)]).await;
        let client = LanyardClient::new(base).unwrap();

        let snapshot = client.fetch_presence("1").await.unwrap();
        assert_eq!(snapshot.status, PresenceStatus::Idle);

        // Unknown ids come back as a 404 envelope without `success: true`
        let err = client.fetch_presence("2").await.unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_failure() {
        let client = LanyardClient::new(test_server::closed_port().await).unwrap();
        let err = client.fetch_presence("1").await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_live_presence() {
        let client = LanyardClient::new(crate::constants::PRESENCE_API_BASE).unwrap();
        let result = client.fetch_presence("94490510688792576").await;
        assert!(result.is_ok() || matches!(result, Err(FetchError::Upstream(_))));
    }
}
