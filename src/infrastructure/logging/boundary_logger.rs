use std::time::Instant;
use tracing::{info, warn, error};

/// BoundaryLogger - 파이프라인과 외부 시스템(GitHub) 경계에서 로깅을 담당
///
/// 로깅 포맷: [trace_id] [호출자→피호출자] [작업] [상태] [duration]
#[derive(Clone)]
pub struct BoundaryLogger;

impl BoundaryLogger {
    pub fn new() -> Self {
        Self
    }

    /// 서비스 레이어 호출 시작
    /// 예: [CLI→ReportService] collect [ENTRY] params="gardenlinux"
    pub fn service_entry<T: std::fmt::Debug>(&self, trace_id: &str, from: &str, service: &str, method: &str, params: &T) {
        info!(
            trace_id = %trace_id,
            from = %from,
            service = %service,
            method = %method,
            flow = format!("{}→{}", from, service),
            stage = "ENTRY",
            params = ?params,
            "[{}] [{}→{}] {} [ENTRY] params={:?}",
            trace_id, from, service, method, params
        );
    }

    /// 서비스 레이어 완료
    /// 예: [CLI→ReportService] collect [←DONE] 5300ms
    pub fn service_exit(&self, trace_id: &str, from: &str, service: &str, method: &str, duration_ms: f64) {
        info!(
            trace_id = %trace_id,
            from = %from,
            service = %service,
            method = %method,
            flow = format!("{}→{}", from, service),
            stage = "←DONE",
            duration_ms = %duration_ms,
            "[{}] [{}→{}] {} [←DONE] {:.2}ms",
            trace_id, from, service, method, duration_ms
        );
    }

    /// 서비스 레이어 에러
    pub fn service_error<E: std::fmt::Display>(&self, trace_id: &str, from: &str, service: &str, method: &str, error: &E) {
        error!(
            trace_id = %trace_id,
            from = %from,
            service = %service,
            method = %method,
            flow = format!("{}→{}", from, service),
            stage = "←FAIL",
            error = %error,
            "[{}] [{}→{}] {} [←FAIL] error={:#}",
            trace_id, from, service, method, error
        );
    }

    /// 외부 시스템 호출 시작
    /// 예: [ReportService→GitHub] list_workflow_runs [EXT→] package-foo
    pub fn external_call(&self, trace_id: &str, from: &str, system: &str, operation: &str, target: &str) {
        info!(
            trace_id = %trace_id,
            from = %from,
            system = %system,
            operation = %operation,
            target = %target,
            flow = format!("{}→{}", from, system),
            stage = "EXT→",
            "[{}] [{}→{}] {} [EXT→] {}",
            trace_id, from, system, operation, target
        );
    }

    /// 외부 시스템 완료
    /// 예: [ReportService→GitHub] list_org_repositories [←DONE] 820ms
    pub fn external_done(&self, trace_id: &str, from: &str, system: &str, operation: &str, duration_ms: f64) {
        info!(
            trace_id = %trace_id,
            from = %from,
            system = %system,
            operation = %operation,
            flow = format!("{}→{}", from, system),
            stage = "←DONE",
            duration_ms = %duration_ms,
            "[{}] [{}→{}] {} [←DONE] {:.2}ms",
            trace_id, from, system, operation, duration_ms
        );
    }

    /// 외부 시스템 에러
    pub fn external_error<E: std::fmt::Display>(&self, trace_id: &str, from: &str, system: &str, operation: &str, error: &E) {
        error!(
            trace_id = %trace_id,
            from = %from,
            system = %system,
            operation = %operation,
            flow = format!("{}→{}", from, system),
            stage = "←FAIL",
            error = %error,
            "[{}] [{}→{}] {} [←FAIL] error={:#}",
            trace_id, from, system, operation, error
        );
    }

    /// 패키지 판정 결과 (정상)
    /// 예: [package-foo] status=success time=2024-07-01T10:00:00Z
    pub fn package_state(&self, trace_id: &str, repo: &str, status: &str, time: &str) {
        info!(
            trace_id = %trace_id,
            repo = %repo,
            status = %status,
            time = %time,
            "[{}] [{}] status={} time={}",
            trace_id, repo, status, time
        );
    }

    /// 패키지 판정 실패 (복구 가능, 상태 라벨로 기록됨)
    /// 예: [package-foo] status=workFlowNotFound reason="GitHub API error (404 Not Found)"
    pub fn package_degraded(&self, trace_id: &str, repo: &str, status: &str, reason: &str) {
        warn!(
            trace_id = %trace_id,
            repo = %repo,
            status = %status,
            reason = %reason,
            "[{}] [{}] status={} reason={}",
            trace_id, repo, status, reason
        );
    }
}

impl Default for BoundaryLogger {
    fn default() -> Self {
        Self::new()
    }
}

/// 성능 측정용 타이머
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// 타이머 시작
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// 경과 시간 (밀리초)
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}
