/// 规范化搜索词：去除首尾空白并转小写，空白搜索词视为未提供
pub fn normalize_search_term(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// 任一字段包含搜索词即匹配（不区分大小写）
pub fn matches_any(needle: &str, fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
