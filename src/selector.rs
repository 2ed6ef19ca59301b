use std::collections::HashMap;

use log::debug;

use crate::models::package::PackageRecord;

/// Architecture preference, evaluated as successive filters: rootless
/// builds first, then rootful, then whatever the group holds.
pub const ARCH_PREFERENCE: [&str; 2] = ["iphoneos-arm64", "iphoneos-arm"];

/// Reduce the parsed records to one per package identifier.
///
/// Records are grouped case-insensitively by their `Package` value. Within
/// a group the preferred architecture subset is chosen first, and only
/// then the highest version inside that subset. Output order is
/// unspecified; rendering re-sorts.
pub fn select_latest(records: Vec<PackageRecord>) -> Vec<PackageRecord> {
    let mut groups: HashMap<String, Vec<PackageRecord>> = HashMap::new();
    for record in records {
        groups
            .entry(record.normalized_id())
            .or_default()
            .push(record);
    }

    let mut selected = Vec::with_capacity(groups.len());
    for (id, group) in groups {
        if let Some(record) = pick_from_group(&group) {
            debug!(
                "Selected v{} ({}) for '{id}'",
                record.version,
                record.architecture.as_deref().unwrap_or("any")
            );
            selected.push(record.clone());
        }
    }
    selected
}

fn pick_from_group(group: &[PackageRecord]) -> Option<&PackageRecord> {
    for arch in ARCH_PREFERENCE {
        let subset: Vec<&PackageRecord> = group
            .iter()
            .filter(|record| record.architecture.as_deref() == Some(arch))
            .collect();
        if !subset.is_empty() {
            return highest_version(subset);
        }
    }
    highest_version(group.iter().collect())
}

/// Highest version wins; on a tie the first record encountered is kept.
fn highest_version(records: Vec<&PackageRecord>) -> Option<&PackageRecord> {
    let mut best: Option<&PackageRecord> = None;
    for record in records {
        match best {
            None => best = Some(record),
            Some(current) => {
                if record.version > current.version {
                    best = Some(record);
                }
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::version::Version;

    fn record(package: &str, version: &str, architecture: Option<&str>) -> PackageRecord {
        PackageRecord {
            package: package.to_string(),
            version: Version::parse(version),
            architecture: architecture.map(str::to_string),
            name: None,
            description: None,
            icon: None,
        }
    }

    #[test]
    fn test_case_insensitive_grouping() {
        let records = vec![
            record("Foo", "1.0", None),
            record("foo", "1.5", None),
            record("FOO", "1.2", None),
        ];
        let selected = select_latest(records);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].version.to_string(), "1.5");
        // Original casing of the winning record is preserved
        assert_eq!(selected[0].package, "foo");
    }

    #[test]
    fn test_highest_semantic_version_wins() {
        let records = vec![
            record("foo", "1.9", None),
            record("foo", "1.10", None),
            record("foo", "2.0", None),
        ];
        let selected = select_latest(records);
        assert_eq!(selected[0].version.to_string(), "2.0");
    }

    #[test]
    fn test_arch_preference_overrides_version() {
        let records = vec![
            record("foo", "1.0", Some("iphoneos-arm64")),
            record("foo", "2.0", Some("iphoneos-arm")),
        ];
        let selected = select_latest(records);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].version.to_string(), "1.0");
        assert_eq!(selected[0].architecture.as_deref(), Some("iphoneos-arm64"));
    }

    #[test]
    fn test_rootful_fallback() {
        let records = vec![
            record("foo", "1.0", Some("iphoneos-arm")),
            record("foo", "2.0", Some("all")),
        ];
        let selected = select_latest(records);
        assert_eq!(selected[0].architecture.as_deref(), Some("iphoneos-arm"));
    }

    #[test]
    fn test_no_preferred_arch_uses_full_group() {
        let records = vec![
            record("foo", "1.0", Some("all")),
            record("foo", "1.2", None),
        ];
        let selected = select_latest(records);
        assert_eq!(selected[0].version.to_string(), "1.2");
    }

    #[test]
    fn test_version_max_within_preferred_subset() {
        let records = vec![
            record("foo", "1.0", Some("iphoneos-arm64")),
            record("foo", "1.5", Some("iphoneos-arm64")),
            record("foo", "9.9", Some("iphoneos-arm")),
        ];
        let selected = select_latest(records);
        assert_eq!(selected[0].version.to_string(), "1.5");
    }

    #[test]
    fn test_tie_keeps_first_encountered() {
        let mut first = record("foo", "1.0", None);
        first.name = Some("first".to_string());
        let mut second = record("foo", "1.0", None);
        second.name = Some("second".to_string());

        let selected = select_latest(vec![first, second]);
        assert_eq!(selected[0].name.as_deref(), Some("first"));
    }

    #[test]
    fn test_one_selection_per_group() {
        let records = vec![
            record("foo", "1.0", None),
            record("bar", "1.0", None),
            record("Foo", "2.0", None),
            record("baz", "1.0", None),
        ];
        let mut ids: Vec<String> = select_latest(records)
            .iter()
            .map(PackageRecord::normalized_id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["bar", "baz", "foo"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(select_latest(Vec::new()).is_empty());
    }
}
