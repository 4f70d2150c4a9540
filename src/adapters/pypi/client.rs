//! Package index client
//!
//! One client serves both the user-page directory and the JSON metadata
//! endpoint, so both kinds of lookup draw from the same request budget.

use std::collections::HashMap;

use log::debug;
use reqwest::Url;
use reqwest::header::HeaderMap;
use serde::Deserialize;

use super::user_page::parse_user_page;
use crate::adapters::http::{HttpClient, HttpSettings, endpoint, parse_base_url};
use crate::core::models::PackageInfo;
use crate::core::ports::{PackageDirectory, PackageMetadata};
use crate::error::{Result, Service, TriageError};

/// Public package index
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org";

#[derive(Debug, Default, Deserialize)]
struct ProjectDocument {
    #[serde(default)]
    info: ProjectInfo,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectInfo {
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    author_email: Option<String>,
    #[serde(default)]
    project_urls: Option<HashMap<String, Option<String>>>,
}

impl From<ProjectInfo> for PackageInfo {
    fn from(info: ProjectInfo) -> Self {
        let urls = info.project_urls.unwrap_or_default();
        // A declared Source key wins even when blank; Homepage only fills a missing key
        let declared = urls.get("Source").or_else(|| urls.get("Homepage"));
        Self {
            source_url: declared.cloned().flatten().filter(|u| !u.trim().is_empty()),
            author: info.author.filter(|a| !a.is_empty()),
            author_email: info.author_email.filter(|e| !e.is_empty()),
        }
    }
}

/// Client for the package index web pages and JSON API
#[derive(Debug, Clone)]
pub struct PypiClient {
    http: HttpClient,
    base_url: Url,
}

impl PypiClient {
    /// Create a client for the index at `base_url`
    pub fn new(base_url: &str, settings: &HttpSettings) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(Service::PackageIndex, settings, HeaderMap::new())?,
            base_url: parse_base_url(base_url)?,
        })
    }
}

impl PackageDirectory for PypiClient {
    async fn list_packages(&self, user: &str) -> Result<Vec<String>> {
        let url = endpoint(&self.base_url, &["user", user, ""]);
        let response = self.http.get(&url).await?;
        if !response.status().is_success() {
            debug!("{url} answered {}", response.status());
            return Err(TriageError::not_found(Service::PackageIndex, format!("user {user}")));
        }
        let html = self.http.read_text(&url, response).await?;
        parse_user_page(user, &html)
    }
}

impl PackageMetadata for PypiClient {
    async fn get_package_info(&self, name: &str) -> Result<PackageInfo> {
        let url = endpoint(&self.base_url, &["pypi", name, "json"]);
        let response = self.http.get(&url).await?;
        if !response.status().is_success() {
            debug!("{url} answered {}", response.status());
            return Err(TriageError::not_found(Service::PackageIndex, format!("project {name}")));
        }
        let document: ProjectDocument = self.http.read_json(&url, response).await?;
        Ok(document.info.into())
    }
}
