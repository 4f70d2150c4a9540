//! GitHub REST client
//!
//! Serves organization membership lookups, issue fetches, and writing the
//! triage comment and label back to the issue.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::json;

use super::issue_body::parse_issue_body;
use crate::adapters::http::{HttpClient, HttpSettings, endpoint, parse_base_url};
use crate::core::models::{IssueRef, IssueReport};
use crate::core::ports::{IssueSource, OrgMembership, ReportSink};
use crate::error::{Result, Service, TriageError};

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
struct MembershipPayload {
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IssuePayload {
    user: IssueUser,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct IssueUser {
    login: String,
}

/// Client for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: HttpClient,
    base_url: Url,
}

impl GithubClient {
    /// Create a client; `token` enables private membership data and writes
    pub fn new(base_url: &str, token: Option<&str>, settings: &HttpSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("token {token}"))
                .map_err(|_| {
                    TriageError::Setup("GitHub token is not a valid header value".to_string())
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(Self {
            http: HttpClient::new(Service::Hosting, settings, headers)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    fn issue_endpoint(&self, issue: &IssueRef, tail: Option<&str>) -> String {
        let number = issue.number.to_string();
        let mut segments =
            vec!["repos", issue.owner.as_str(), issue.repo.as_str(), "issues", number.as_str()];
        segments.extend(tail);
        endpoint(&self.base_url, &segments)
    }
}

impl OrgMembership for GithubClient {
    async fn is_public_member(&self, org: &str, user: &str) -> Result<bool> {
        let url = endpoint(&self.base_url, &["orgs", org, "members", user]);
        let response = self.http.get(&url).await?;
        match response.status() {
            StatusCode::NO_CONTENT => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(TriageError::unexpected_status(Service::Hosting, status.as_u16(), url)),
        }
    }

    async fn membership_role(&self, org: &str, user: &str) -> Result<Option<String>> {
        let url = endpoint(&self.base_url, &["orgs", org, "memberships", user]);
        let response = self.http.get(&url).await?;
        match response.status() {
            StatusCode::OK => {
                let body = self.http.read_text(&url, response).await?;
                match serde_json::from_str::<MembershipPayload>(&body) {
                    Ok(payload) => Ok(payload.role),
                    Err(e) => {
                        warn!("unreadable membership for {user} in {org}: {e}");
                        Ok(None)
                    },
                }
            },
            StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                debug!("membership of {user} in {org} not visible ({})", response.status());
                Ok(None)
            },
            status => Err(TriageError::unexpected_status(Service::Hosting, status.as_u16(), url)),
        }
    }
}

impl IssueSource for GithubClient {
    async fn fetch_report(&self, issue: &IssueRef) -> Result<IssueReport> {
        let url = self.issue_endpoint(issue, None);
        let response = self.http.get(&url).await?;
        match response.status() {
            StatusCode::OK => {},
            StatusCode::NOT_FOUND => {
                return Err(TriageError::not_found(Service::Hosting, format!("issue {issue}")));
            },
            status => {
                return Err(TriageError::unexpected_status(Service::Hosting, status.as_u16(), url));
            },
        }
        let payload: IssuePayload = self.http.read_json(&url, response).await?;
        Ok(IssueReport {
            reporter: payload.user.login,
            fields: parse_issue_body(payload.body.as_deref().unwrap_or_default()),
            url: payload.html_url,
            created_at: payload.created_at,
        })
    }
}

impl ReportSink for GithubClient {
    async fn post_report(&self, issue: &IssueRef, markdown: &str) -> Result<()> {
        let url = self.issue_endpoint(issue, Some("comments"));
        let response = self.http.post_json(&url, &json!({ "body": markdown })).await?;
        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(TriageError::unexpected_status(Service::Hosting, status.as_u16(), url));
        }
        Ok(())
    }

    async fn apply_label(&self, issue: &IssueRef, label: &str) -> Result<()> {
        let url = self.issue_endpoint(issue, Some("labels"));
        let response = self.http.post_json(&url, &[label]).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TriageError::unexpected_status(Service::Hosting, status.as_u16(), url));
        }
        Ok(())
    }
}
