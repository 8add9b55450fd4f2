use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::github::models::{WorkflowRun, WorkflowRuns};
use crate::models::{PackageState, PackageStatus};

pub const DEFAULT_STALE_HOURS: f64 = 24.0;

const RUN_IN_PROGRESS: &str = "in_progress";
const RUN_COMPLETED: &str = "completed";
const CONCLUSION_SUCCESS: &str = "success";

/// RFC 3339 in UTC, the format used for every `Time` in the report
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn parse_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// StatusClassifier - 최신 워크플로우 실행 결과를 대시보드 상태로 변환
///
/// 판정 순서:
/// 1. 실행 목록 조회 실패 → workFlowNotFound
/// 2. 실행 없음 → noRunFound
/// 3. updated_at 파싱 실패 → brokenTimeStamp
/// 4. in_progress → progress
/// 5. completed + success → success / stale (threshold 초과 시)
/// 6. completed + 그 외 → failure
/// 7. 나머지 (queued 등) → pending
#[derive(Debug, Clone, Copy)]
pub struct StatusClassifier {
    stale_hours: f64,
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_HOURS)
    }
}

impl StatusClassifier {
    pub fn new(stale_hours: f64) -> Self {
        Self { stale_hours }
    }

    pub fn classify(
        &self,
        name: &str,
        runs: &Result<WorkflowRuns>,
        now: DateTime<Utc>,
    ) -> PackageState {
        let checked_at = format_time(now);
        let state = |status, time: String| PackageState {
            status,
            time,
            name: name.to_string(),
        };

        let runs = match runs {
            Ok(runs) => runs,
            Err(_) => return state(PackageStatus::WorkFlowNotFound, checked_at),
        };

        let Some(run) = runs.latest() else {
            return state(PackageStatus::NoRunFound, checked_at);
        };

        let updated_at = match run.updated_at.as_deref() {
            Some(raw) => match parse_time(raw) {
                Some(time) => Some(time),
                None => return state(PackageStatus::BrokenTimeStamp, checked_at),
            },
            None => None,
        };

        let status = self.run_status(run, updated_at, now);
        state(status, updated_at.map(format_time).unwrap_or(checked_at))
    }

    fn run_status(
        &self,
        run: &WorkflowRun,
        updated_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> PackageStatus {
        match run.status.as_deref() {
            Some(RUN_IN_PROGRESS) => PackageStatus::Progress,
            Some(RUN_COMPLETED) => {
                if run.conclusion.as_deref() != Some(CONCLUSION_SUCCESS) {
                    return PackageStatus::Failure;
                }
                // no timestamp: nothing proves the run is old
                let age_hours = updated_at
                    .map(|t| (now - t).num_milliseconds() as f64 / 3_600_000.0)
                    .unwrap_or(0.0);
                if age_hours > self.stale_hours {
                    PackageStatus::Stale
                } else {
                    PackageStatus::Success
                }
            }
            _ => PackageStatus::Pending,
        }
    }
}
