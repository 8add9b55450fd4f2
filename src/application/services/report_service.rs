use anyhow::{Context, Result};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use super::classifier::StatusClassifier;
use super::selector::RepositorySelector;
use crate::application::ports::HostingApi;
use crate::error::GitHubError;
use crate::models::{PackageState, PackageStatus};
use crate::infrastructure::logging::{BoundaryLogger, Timer};

/// Settings for one scan, built once from the command line
#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub organization: String,
    pub prefix: String,
    pub workflow_file: String,
    /// Comma separated repository names
    pub exclude: String,
    pub stale_hours: f64,
}

/// ReportService - 패키지 레포지토리들의 빌드 상태를 수집
///
/// 책임:
/// - 조직 레포지토리 전체 조회 (실패 시 치명적)
/// - prefix / exclude 기준 선택
/// - 레포지토리별 최신 워크플로우 실행 조회 및 상태 판정 (실패는 상태 라벨로 기록)
///
/// 레포지토리는 하나씩 순서대로 처리한다.
pub struct ReportService<H>
where
    H: HostingApi,
{
    hosting: Arc<H>,
    settings: ScanSettings,
    logger: Arc<BoundaryLogger>,
}

impl<H> ReportService<H>
where
    H: HostingApi,
{
    pub fn new(hosting: Arc<H>, settings: ScanSettings, logger: Arc<BoundaryLogger>) -> Self {
        Self {
            hosting,
            settings,
            logger,
        }
    }

    /// 선택된 레포지토리 이름 목록 (API 순서 유지)
    pub async fn select_repositories(&self, trace_id: &str) -> Result<Vec<String>> {
        let org = &self.settings.organization;

        self.logger.external_call(trace_id, "ReportService", "GitHub", "list_org_repositories", org);
        let timer = Timer::start();
        let repositories = match self.hosting.list_org_repositories(org).await {
            Ok(repositories) => {
                self.logger.external_done(trace_id, "ReportService", "GitHub", "list_org_repositories", timer.elapsed_ms());
                repositories
            }
            Err(e) => {
                self.logger.external_error(trace_id, "ReportService", "GitHub", "list_org_repositories", &e);
                return Err(e).with_context(|| format!("Failed to list repositories of {}", org));
            }
        };

        let selector = RepositorySelector::new(&self.settings.prefix, &self.settings.exclude);
        let selected = selector.select(&repositories);
        info!(
            organization = %org,
            listed = repositories.len(),
            selected = selected.len(),
            "Repositories selected"
        );
        Ok(selected)
    }

    /// 레포지토리 하나의 상태 판정. 실패하지 않는다.
    pub async fn check_repository(&self, trace_id: &str, repo: &str) -> PackageState {
        let now = Utc::now();

        self.logger.external_call(trace_id, "ReportService", "GitHub", "list_workflow_runs", repo);
        let timer = Timer::start();
        let runs = self
            .hosting
            .list_workflow_runs(&self.settings.organization, repo, &self.settings.workflow_file)
            .await;
        if runs.is_ok() {
            self.logger.external_done(trace_id, "ReportService", "GitHub", "list_workflow_runs", timer.elapsed_ms());
        }

        let state = StatusClassifier::new(self.settings.stale_hours).classify(repo, &runs, now);

        match state.status {
            PackageStatus::WorkFlowNotFound => {
                let reason = match runs.as_ref().err() {
                    Some(e) if e.downcast_ref::<GitHubError>().is_some_and(GitHubError::is_not_found) => {
                        format!("no workflow file {}", self.settings.workflow_file)
                    }
                    Some(e) => format!("{:#}", e),
                    None => String::new(),
                };
                self.logger.package_degraded(trace_id, repo, state.status.as_str(), &reason);
            }
            PackageStatus::NoRunFound => {
                self.logger.package_degraded(trace_id, repo, state.status.as_str(), "list of runs was empty");
            }
            PackageStatus::BrokenTimeStamp => {
                let raw = runs
                    .as_ref()
                    .ok()
                    .and_then(|r| r.latest())
                    .and_then(|run| run.updated_at.clone())
                    .unwrap_or_default();
                let reason = format!("unparsable updated_at {:?}", raw);
                self.logger.package_degraded(trace_id, repo, state.status.as_str(), &reason);
            }
            _ => self.logger.package_state(trace_id, repo, state.status.as_str(), &state.time),
        }

        state
    }

    /// 전체 수집: 선택된 순서대로 PackageState 하나씩
    pub async fn collect(&self, trace_id: &str) -> Result<Vec<PackageState>> {
        let timer = Timer::start();
        self.logger.service_entry(trace_id, "CLI", "ReportService", "collect", &self.settings.organization);

        let repositories = match self.select_repositories(trace_id).await {
            Ok(repositories) => repositories,
            Err(e) => {
                self.logger.service_error(trace_id, "CLI", "ReportService", "collect", &e);
                return Err(e);
            }
        };

        let mut states = Vec::with_capacity(repositories.len());
        for repo in &repositories {
            states.push(self.check_repository(trace_id, repo).await);
        }

        self.logger.service_exit(trace_id, "CLI", "ReportService", "collect", timer.elapsed_ms());
        Ok(states)
    }
}

/// 상태 라벨별 개수
pub fn summarize(states: &[PackageState]) -> BTreeMap<PackageStatus, usize> {
    let mut counts = BTreeMap::new();
    for state in states {
        *counts.entry(state.status).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::hosting::fake::FakeHosting;
    use crate::application::services::classifier::format_time;
    use crate::github::models::WorkflowRun;
    use chrono::Duration;

    fn settings() -> ScanSettings {
        ScanSettings {
            organization: "acme".to_string(),
            prefix: "package-".to_string(),
            workflow_file: "build.yml".to_string(),
            exclude: "package-foo".to_string(),
            stale_hours: 24.0,
        }
    }

    fn service(hosting: FakeHosting) -> ReportService<FakeHosting> {
        ReportService::new(Arc::new(hosting), settings(), Arc::new(BoundaryLogger::new()))
    }

    fn completed(conclusion: &str, hours_ago: i64) -> WorkflowRun {
        WorkflowRun {
            id: 1,
            status: Some("completed".to_string()),
            conclusion: Some(conclusion.to_string()),
            updated_at: Some(format_time(Utc::now() - Duration::hours(hours_ago))),
        }
    }

    #[tokio::test]
    async fn test_collect_checks_selected_repositories_in_order() {
        let hosting = FakeHosting::with_repos(&[
            ("package-foo", false),
            ("package-zeta", false),
            ("other", false),
            ("package-archived", true),
            ("package-alpha", false),
        ])
        .with_run("package-zeta", completed("success", 1))
        .with_run("package-alpha", completed("failure", 1));
        let service = service(hosting);

        let states = service.collect("trace").await.unwrap();

        let names: Vec<_> = states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["package-zeta", "package-alpha"]);
        assert_eq!(states[0].status, PackageStatus::Success);
        assert_eq!(states[1].status, PackageStatus::Failure);
        assert_eq!(
            *service.hosting.run_requests.lock().unwrap(),
            vec!["package-zeta".to_string(), "package-alpha".to_string()]
        );
    }

    #[tokio::test]
    async fn test_per_repository_failures_do_not_stop_the_scan() {
        let hosting = FakeHosting::with_repos(&[
            ("package-missing", false),
            ("package-empty", false),
            ("package-old", false),
        ])
        .with_no_runs("package-empty")
        .with_run("package-old", completed("success", 25));

        let states = service(hosting).collect("trace").await.unwrap();

        let statuses: Vec<_> = states.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![PackageStatus::WorkFlowNotFound, PackageStatus::NoRunFound, PackageStatus::Stale]
        );
    }

    #[tokio::test]
    async fn test_listing_failure_is_fatal() {
        let hosting = FakeHosting {
            fail_listing: true,
            ..Default::default()
        };

        let err = service(hosting).collect("trace").await.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to list repositories of acme"));
    }

    #[tokio::test]
    async fn test_broken_timestamp_is_reported() {
        let run = WorkflowRun {
            id: 3,
            status: Some("completed".to_string()),
            conclusion: Some("success".to_string()),
            updated_at: Some("not-a-time".to_string()),
        };
        let hosting = FakeHosting::with_repos(&[("package-x", false)]).with_run("package-x", run);

        let state = service(hosting).check_repository("trace", "package-x").await;
        assert_eq!(state.status, PackageStatus::BrokenTimeStamp);
        assert_eq!(state.name, "package-x");
    }

    #[test]
    fn test_summarize_counts_labels() {
        let state = |status| PackageState {
            status,
            time: String::new(),
            name: String::new(),
        };
        let counts = summarize(&[
            state(PackageStatus::Success),
            state(PackageStatus::Failure),
            state(PackageStatus::Success),
        ]);
        assert_eq!(counts.get(&PackageStatus::Success), Some(&2));
        assert_eq!(counts.get(&PackageStatus::Failure), Some(&1));
        assert_eq!(counts.get(&PackageStatus::Stale), None);
    }
}
