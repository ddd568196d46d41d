use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::functions::application::ports::outgoing::{
    GithubStats, GithubStatsQuery, UpstreamError,
};

/// GitHub REST v3 client for repository star/fork counts.
pub struct GithubStatsReqwest {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct RepoResponse {
    stargazers_count: Option<i32>,
    forks_count: Option<i32>,
}

impl From<RepoResponse> for GithubStats {
    fn from(body: RepoResponse) -> Self {
        // GitHub omits the count fields on some repo payloads; absent means 0.
        GithubStats {
            stars: body.stargazers_count.unwrap_or(0),
            forks: body.forks_count.unwrap_or(0),
        }
    }
}

impl GithubStatsReqwest {
    pub fn new() -> Self {
        Self::with_base_url("https://api.github.com".to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

impl Default for GithubStatsReqwest {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GithubStatsQuery for GithubStatsReqwest {
    async fn fetch(&self, owner: &str, repo: &str) -> Result<GithubStats, UpstreamError> {
        let url = format!("{}/repos/{}/{}", self.base_url, owner, repo);

        let response = self
            .client
            .get(&url)
            // GitHub rejects requests without a User-Agent.
            .header(reqwest::header::USER_AGENT, "portfolio-api")
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| UpstreamError::RequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound);
        }
        if !response.status().is_success() {
            return Err(UpstreamError::RequestFailed(format!(
                "github returned {}",
                response.status()
            )));
        }

        let body: RepoResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::MalformedResponse(e.to_string()))?;

        Ok(body.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_present_in_the_payload_are_kept() {
        let body: RepoResponse =
            serde_json::from_str(r#"{"stargazers_count": 42, "forks_count": 7}"#).unwrap();

        assert_eq!(
            GithubStats::from(body),
            GithubStats { stars: 42, forks: 7 }
        );
    }

    #[test]
    fn absent_count_fields_coerce_to_zero() {
        let body: RepoResponse = serde_json::from_str(r#"{"full_name": "me/site"}"#).unwrap();

        assert_eq!(GithubStats::from(body), GithubStats { stars: 0, forks: 0 });
    }
}
