use reqwest::header::HeaderMap;

pub const TRACE_HEADER: &str = "x-trace-id";

/// Trace ID 생성 및 전파를 담당
///
/// 실행 한 번에 Trace ID 하나. 로그와 GitHub 요청에 같은 ID가 붙는다.
pub struct TraceContext;

impl TraceContext {
    /// 새 Trace ID 생성 (UUID v4)
    pub fn new_trace_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Trace ID를 HTTP 헤더에 추가
    pub fn add_to_headers(headers: &mut HeaderMap, trace_id: &str) {
        if let Ok(value) = trace_id.parse() {
            headers.insert(TRACE_HEADER, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trace_id() {
        let id1 = TraceContext::new_trace_id();
        let id2 = TraceContext::new_trace_id();

        assert_ne!(id1, id2);
        // Should be a valid UUID format
        assert!(uuid::Uuid::parse_str(&id1).is_ok());
    }

    #[test]
    fn test_add_to_headers() {
        let mut headers = HeaderMap::new();
        TraceContext::add_to_headers(&mut headers, "test-trace-id");

        assert_eq!(headers.get(TRACE_HEADER).unwrap(), "test-trace-id");
    }

    #[test]
    fn test_invalid_header_value_is_skipped() {
        let mut headers = HeaderMap::new();
        TraceContext::add_to_headers(&mut headers, "bad\nvalue");

        assert!(headers.get(TRACE_HEADER).is_none());
    }
}
