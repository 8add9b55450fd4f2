use std::collections::HashSet;

use crate::github::models::Repository;

/// RepositorySelector - 조직의 레포지토리 중 점검 대상 패키지를 고른다
///
/// 규칙:
/// - archived 레포지토리는 제외
/// - prefix로 시작하는 이름만 선택
/// - exclude 목록(콤마 구분)에 있는 이름은 제외
/// - 중복 제거, API가 돌려준 순서 유지
pub struct RepositorySelector<'a> {
    prefix: &'a str,
    excluded: HashSet<&'a str>,
}

impl<'a> RepositorySelector<'a> {
    pub fn new(prefix: &'a str, exclude: &'a str) -> Self {
        Self {
            prefix,
            excluded: parse_exclude_list(exclude),
        }
    }

    pub fn is_selected(&self, repo: &Repository) -> bool {
        !repo.archived
            && repo.name.starts_with(self.prefix)
            && !self.excluded.contains(repo.name.as_str())
    }

    pub fn select(&self, repositories: &[Repository]) -> Vec<String> {
        let mut seen = HashSet::new();
        repositories
            .iter()
            .filter(|repo| self.is_selected(repo))
            .filter(|repo| seen.insert(repo.name.as_str()))
            .map(|repo| repo.name.clone())
            .collect()
    }
}

fn parse_exclude_list(exclude: &str) -> HashSet<&str> {
    exclude
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}
