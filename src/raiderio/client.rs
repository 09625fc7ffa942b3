//! Raider.io HTTP client.
//!
//! Issues one `GET /characters/profile` per call and classifies the response.
//! Anything other than a decodable 200 is a soft failure: the character is
//! treated as absent from that region and the caller moves on.

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serenity::async_trait;
use tracing::{debug, error, info, warn};

use crate::config::types::RaiderIoConfig;
use crate::raiderio::models::CharacterProfile;

/// Profile sections requested by default.
pub const DEFAULT_FIELDS: [&str; 6] = [
    "gear",
    "guild",
    "raid_progression",
    "mythic_plus_scores_by_season:current",
    "mythic_plus_best_runs",
    "mythic_plus_ranks",
];

/// Result of asking one region for a character.
#[derive(Debug)]
pub enum FetchOutcome {
    Found(Box<CharacterProfile>),
    Absent(AbsentReason),
}

#[cfg(test)]
impl FetchOutcome {
    pub fn into_profile(self) -> Option<CharacterProfile> {
        match self {
            Self::Found(profile) => Some(*profile),
            Self::Absent(_) => None,
        }
    }
}

/// Why a region produced no profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsentReason {
    /// The API answered with a non-200 status.
    Status { status: u16, body: String },
    /// The request never completed.
    Transport(String),
    /// A 200 response whose body was not a profile.
    Decode(String),
}

/// Anything that can look up a character profile in one region.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, name: &str, realm: &str, region: &str) -> FetchOutcome;
}

/// Client for the Raider.io public API.
#[derive(Debug, Clone)]
pub struct RaiderIoClient {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl RaiderIoClient {
    pub fn new(config: &RaiderIoConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        }
    }

    fn profile_url(&self) -> String {
        format!("{}/characters/profile", self.base_url)
    }

    /// Fetch a profile requesting an explicit set of sections.
    pub async fn fetch_profile_with_fields(
        &self,
        name: &str,
        realm: &str,
        region: &str,
        fields: &[&str],
    ) -> FetchOutcome {
        let fields = fields.join(",");
        let url = self.profile_url();
        info!(
            "Requesting {}?region={}&realm={}&name={}&fields={}",
            url, region, realm, name, fields
        );

        let response = match self
            .http
            .get(&url)
            .query(&[
                ("region", region),
                ("realm", realm),
                ("name", name),
                ("fields", fields.as_str()),
            ])
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Exception while fetching character data: {}", e);
                return FetchOutcome::Absent(AbsentReason::Transport(e.to_string()));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to read response body ({}): {}", status, e);
                return FetchOutcome::Absent(AbsentReason::Transport(e.to_string()));
            }
        };

        classify(name, realm, region, status, body)
    }
}

#[async_trait]
impl ProfileSource for RaiderIoClient {
    async fn fetch_profile(&self, name: &str, realm: &str, region: &str) -> FetchOutcome {
        self.fetch_profile_with_fields(name, realm, region, &DEFAULT_FIELDS)
            .await
    }
}

fn classify(name: &str, realm: &str, region: &str, status: StatusCode, body: String) -> FetchOutcome {
    if status != StatusCode::OK {
        warn!(
            "Character not found: {}-{} ({}) - HTTP {}",
            name, realm, region, status
        );
        debug!("API Response: {}", body);
        return FetchOutcome::Absent(AbsentReason::Status {
            status: status.as_u16(),
            body,
        });
    }

    match serde_json::from_str::<CharacterProfile>(&body) {
        Ok(profile) => {
            info!(
                "Success! Character found: {} on {}",
                profile.name, profile.realm
            );
            FetchOutcome::Found(Box::new(profile))
        }
        Err(e) => {
            error!("Failed to decode character profile for {}-{} ({}): {}", name, realm, region, e);
            FetchOutcome::Absent(AbsentReason::Decode(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> RaiderIoClient {
        RaiderIoClient::new(&RaiderIoConfig {
            api_url: format!("{}/", server.uri()),
            ..RaiderIoConfig::default()
        })
    }

    #[tokio::test]
    async fn test_ok_response_is_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/characters/profile"))
            .and(query_param("region", "eu"))
            .and(query_param("realm", "argent-dawn"))
            .and(query_param("name", "Jaina"))
            .and(query_param("fields", DEFAULT_FIELDS.join(",")))
            .and(header("accept", "application/json"))
            .and(header("user-agent", "RaiderBot Discord Bot"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Jaina",
                "realm": "Argent Dawn",
                "region": "eu",
                "class": "Mage"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .fetch_profile("Jaina", "argent-dawn", "eu")
            .await;

        let profile = outcome.into_profile().expect("profile should be found");
        assert_eq!(profile.name, "Jaina");
        assert_eq!(profile.class, "Mage");
    }

    #[tokio::test]
    async fn test_not_found_status_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/characters/profile"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"error":"Not Found"}"#),
            )
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .fetch_profile("Nobody", "stormrage", "us")
            .await;

        match outcome {
            FetchOutcome::Absent(AbsentReason::Status { status, body }) => {
                assert_eq!(status, 404);
                assert!(body.contains("Not Found"));
            }
            other => panic!("expected absent status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .fetch_profile("Thrall", "stormrage", "us")
            .await;

        assert!(matches!(outcome, FetchOutcome::Absent(AbsentReason::Decode(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let client = RaiderIoClient::new(&RaiderIoConfig {
            api_url: "http://127.0.0.1:1".to_string(),
            ..RaiderIoConfig::default()
        });

        let outcome = client.fetch_profile("Thrall", "stormrage", "us").await;

        assert!(matches!(outcome, FetchOutcome::Absent(AbsentReason::Transport(_))));
    }

    #[tokio::test]
    async fn test_field_override_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("fields", "gear,guild"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Thrall"})))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .fetch_profile_with_fields("Thrall", "stormrage", "us", &["gear", "guild"])
            .await;

        assert!(matches!(outcome, FetchOutcome::Found(_)));
    }

    #[tokio::test]
    async fn test_null_nested_values_still_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Thrall",
                "mythic_plus_best_runs": [
                    {"dungeon": "The Rookery", "mythic_level": 12, "affixes": null}
                ]
            })))
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .fetch_profile("Thrall", "stormrage", "us")
            .await;

        let profile = outcome.into_profile().expect("profile should be found");
        let runs = profile.mythic_plus_best_runs.unwrap();
        assert!(runs[0].affixes.is_empty());
    }
}
