//! Static navigation path table.
//!
//! The closed mapping from functional-area label to application route.
//! It is written into the classifier prompt and is also the single source
//! of truth when a navigate intent is dispatched: classifier output never
//! reaches the client without passing through `resolve`.

/// One navigable functional area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
}

/// All navigable destinations, in the order shown to the classifier.
pub static NAV_TABLE: &[NavEntry] = &[
    NavEntry { label: "列表找房", path: "/TenantHome/browse" },
    NavEntry { label: "地圖找房", path: "/TenantHome/map" },
    NavEntry { label: "我的收藏", path: "/TenantHome/favorites" },
    NavEntry { label: "預約記錄", path: "/TenantHome/reservations" },
    NavEntry { label: "簽署合約", path: "/TenantHome/contracts" },
    NavEntry { label: "租屋管理", path: "/TenantHome/living" },
    NavEntry { label: "修改個人資料/密碼", path: "/TenantHome/profile" },
];

/// Look up the canonical route for a label.
pub fn path_for_label(label: &str) -> Option<&'static str> {
    NAV_TABLE
        .iter()
        .find(|entry| entry.label == label)
        .map(|entry| entry.path)
}

/// Look up the table entry for a route.
pub fn entry_for_path(path: &str) -> Option<&'static NavEntry> {
    NAV_TABLE.iter().find(|entry| entry.path == path)
}

/// Resolve a classifier-chosen (path, label) pair against the table.
///
/// The label wins: a known label yields its canonical entry even when the
/// classifier echoed a divergent path. An unknown label falls back to a
/// path lookup. Returns `None` when neither is in the table.
pub fn resolve(path: &str, label: &str) -> Option<&'static NavEntry> {
    NAV_TABLE
        .iter()
        .find(|entry| entry.label == label)
        .or_else(|| entry_for_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_seven_entries() {
        assert_eq!(NAV_TABLE.len(), 7);
    }

    #[test]
    fn test_path_for_label() {
        assert_eq!(path_for_label("我的收藏"), Some("/TenantHome/favorites"));
        assert_eq!(path_for_label("列表找房"), Some("/TenantHome/browse"));
        assert_eq!(
            path_for_label("修改個人資料/密碼"),
            Some("/TenantHome/profile")
        );
        assert_eq!(path_for_label("不存在的功能"), None);
    }

    #[test]
    fn test_entry_for_path() {
        let entry = entry_for_path("/TenantHome/map").unwrap();
        assert_eq!(entry.label, "地圖找房");
        assert!(entry_for_path("/Admin/secret").is_none());
    }

    #[test]
    fn test_resolve_valid_pair() {
        let entry = resolve("/TenantHome/favorites", "我的收藏").unwrap();
        assert_eq!(entry.path, "/TenantHome/favorites");
        assert_eq!(entry.label, "我的收藏");
    }

    #[test]
    fn test_resolve_label_overrides_divergent_path() {
        // Known label, wrong path: the table's canonical path wins.
        let entry = resolve("/Somewhere/else", "預約記錄").unwrap();
        assert_eq!(entry.path, "/TenantHome/reservations");
    }

    #[test]
    fn test_resolve_falls_back_to_path() {
        let entry = resolve("/TenantHome/contracts", "亂取的名字").unwrap();
        assert_eq!(entry.label, "簽署合約");
    }

    #[test]
    fn test_resolve_unknown_pair() {
        assert!(resolve("/Nope", "不存在").is_none());
    }

    #[test]
    fn test_paths_and_labels_are_unique() {
        use std::collections::HashSet;
        let labels: HashSet<_> = NAV_TABLE.iter().map(|e| e.label).collect();
        let paths: HashSet<_> = NAV_TABLE.iter().map(|e| e.path).collect();
        assert_eq!(labels.len(), NAV_TABLE.len());
        assert_eq!(paths.len(), NAV_TABLE.len());
    }
}
