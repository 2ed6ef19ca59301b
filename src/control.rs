use std::fs;
use std::path::Path;

use log::{debug, error};

use crate::models::package::PackageRecord;
use crate::models::version::Version;

/// Read and parse a Debian-style `Packages` control file.
///
/// An unreadable file is logged and yields an empty set; the rest of the
/// run still executes against it. This is the only failure the pipeline
/// recovers from.
pub fn parse_packages_file(path: &Path) -> Vec<PackageRecord> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!(
                "Package list '{}' could not be read: {e}",
                path.display()
            );
            return Vec::new();
        }
    };

    let records = parse_control(&content);
    debug!(
        "Parsed {} package records from '{}'",
        records.len(),
        path.display()
    );
    records
}

/// Split control-file content into blank-line-delimited blocks and parse
/// each into a record. Blocks missing `Package` or `Version` are dropped;
/// output order follows block order in the source.
pub fn parse_control(content: &str) -> Vec<PackageRecord> {
    content
        .trim()
        .split("\n\n")
        .filter_map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> Option<PackageRecord> {
    let mut package = None;
    let mut version = None;
    let mut architecture = None;
    let mut name = None;
    let mut description = None;
    let mut icon = None;

    for line in block.lines() {
        // Split on the first colon only; lines without one are noise
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().to_string();
        match key.trim() {
            "Package" => package = Some(value),
            "Version" => version = Some(value),
            "Architecture" => architecture = Some(value),
            "Name" => name = Some(value),
            "Description" => description = Some(value),
            "Icon" => icon = Some(value),
            _ => {}
        }
    }

    Some(PackageRecord {
        package: package?,
        version: Version::parse(&version?),
        architecture,
        name,
        description,
        icon,
    })
}
