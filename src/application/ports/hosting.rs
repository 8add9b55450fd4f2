use async_trait::async_trait;
use anyhow::Result;

use crate::github::models::{Repository, WorkflowRuns};

/// Trait for source hosting operations (GitHub, GitHub Enterprise, fakes in tests)
#[async_trait]
pub trait HostingApi: Send + Sync {
    /// List every repository of an organization, archived ones included
    async fn list_org_repositories(&self, org: &str) -> Result<Vec<Repository>>;

    /// List runs of a workflow file, newest first
    async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        workflow_file: &str,
    ) -> Result<WorkflowRuns>;
}
