use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub archived: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowRuns {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub workflow_runs: Vec<WorkflowRun>,
}

impl WorkflowRuns {
    /// Newest run, if any. GitHub lists runs newest first.
    pub fn latest(&self) -> Option<&WorkflowRun> {
        if self.total_count < 1 {
            return None;
        }
        self.workflow_runs.first()
    }
}

/// `updated_at` is kept as the raw string so that a malformed timestamp can be
/// reported instead of failing the whole response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowRun {
    #[serde(default)]
    pub id: u64,
    pub status: Option<String>,
    pub conclusion: Option<String>,
    pub updated_at: Option<String>,
}
