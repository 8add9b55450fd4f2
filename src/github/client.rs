use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::models::*;
use super::pagination::{next_page_from_headers, PER_PAGE};
use crate::application::ports::HostingApi;
use crate::error::GitHubError;
use crate::infrastructure::logging::TraceContext;

const USER_AGENT: &str = "package-aggregator";
const API_VERSION: &str = "2022-11-28";

pub struct GitHubClient {
    client: Client,
    token: String,
    base_url: String,
    trace_id: String,
}

impl GitHubClient {
    pub fn new(token: String, base_url: &str, trace_id: &str) -> Self {
        Self {
            client: Client::new(),
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            trace_id: trace_id.to_string(),
        }
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let mut headers = HeaderMap::new();
        TraceContext::add_to_headers(&mut headers, &self.trace_id);

        self.client
            .get(url)
            .headers(headers)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    async fn send(&self, url: &str) -> Result<Response, GitHubError> {
        let response = self.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(GitHubError::Api { status, body });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
        Ok(self.send(url).await?.json().await?)
    }

    /// List every repository of an organization, following `Link` pagination
    pub async fn list_org_repositories(&self, org: &str) -> Result<Vec<Repository>, GitHubError> {
        let mut url = format!("{}/orgs/{}/repos?per_page={}", self.base_url, org, PER_PAGE);
        let mut repositories = Vec::new();

        loop {
            let response = self.send(&url).await?;
            let next = next_page_from_headers(response.headers());
            let page: Vec<Repository> = response.json().await?;
            repositories.extend(page);

            match next {
                Some(next_url) => url = next_url,
                None => break,
            }
        }

        Ok(repositories)
    }

    /// List runs of one workflow file, newest first. Only the newest run is fetched.
    pub async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        workflow_file: &str,
    ) -> Result<WorkflowRuns, GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/actions/workflows/{}/runs?per_page=1",
            self.base_url, owner, repo, workflow_file
        );
        self.get_json(&url).await
    }
}

#[async_trait]
impl HostingApi for GitHubClient {
    async fn list_org_repositories(&self, org: &str) -> anyhow::Result<Vec<Repository>> {
        Ok(GitHubClient::list_org_repositories(self, org).await?)
    }

    async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        workflow_file: &str,
    ) -> anyhow::Result<WorkflowRuns> {
        Ok(GitHubClient::list_workflow_runs(self, owner, repo, workflow_file).await?)
    }
}
