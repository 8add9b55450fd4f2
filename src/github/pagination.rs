use reqwest::header::{HeaderMap, LINK};

/// Repositories requested per page when listing an organization
pub const PER_PAGE: u32 = 30;

/// Extract the `rel="next"` target from a GitHub `Link` header.
///
/// Format: `<https://api.github.com/...&page=2>; rel="next", <...>; rel="last"`
pub fn next_page_url(link: &str) -> Option<String> {
    link.split(',').find_map(|part| {
        let mut segments = part.split(';');
        let target = segments.next()?.trim();
        let is_next = segments.any(|param| {
            let param = param.trim();
            param == r#"rel="next""# || param == "rel=next"
        });
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}

pub fn next_page_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(LINK)
        .and_then(|value| value.to_str().ok())
        .and_then(next_page_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_link_is_found() {
        let link = r#"<https://api.github.com/organizations/1/repos?per_page=30&page=2>; rel="next", <https://api.github.com/organizations/1/repos?per_page=30&page=5>; rel="last""#;
        assert_eq!(
            next_page_url(link).as_deref(),
            Some("https://api.github.com/organizations/1/repos?per_page=30&page=2")
        );
    }

    #[test]
    fn test_last_page_has_no_next() {
        let link = r#"<https://api.github.com/organizations/1/repos?per_page=30&page=1>; rel="first", <https://api.github.com/organizations/1/repos?per_page=30&page=4>; rel="prev""#;
        assert_eq!(next_page_url(link), None);
    }

    #[test]
    fn test_next_not_listed_first() {
        let link = r#"<https://x/repos?page=1>; rel="prev", <https://x/repos?page=3>; rel="next""#;
        assert_eq!(next_page_url(link).as_deref(), Some("https://x/repos?page=3"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(next_page_from_headers(&HeaderMap::new()), None);
    }
}
