use crate::models::version::Version;

/// One package variant parsed from a control-file block.
///
/// `Package` and `Version` are required for a block to be retained; the
/// remaining fields are optional control keys used for rendering. Keys
/// outside this shape are dropped at parse time.
#[derive(Debug, Clone)]
pub struct PackageRecord {
    pub package: String,
    pub version: Version,
    pub architecture: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl PackageRecord {
    /// Human-facing name: the `Name` field when present, the package
    /// identifier otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.package)
    }

    /// Grouping key. Identifiers differing only in case are the same
    /// package; the record keeps its original casing.
    pub fn normalized_id(&self) -> String {
        self.package.to_lowercase()
    }
}
