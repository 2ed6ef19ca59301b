use crate::models::package::PackageRecord;

/// Icon used when a package carries no `Icon` field, and the client-side
/// fallback when its icon fails to load.
pub const DEFAULT_ICON: &str = "Icon.png";

/// Fixed list item emitted when the selected set is empty.
pub const NO_PACKAGES_ITEM: &str = "<li class='no-tweaks'>No packages found.</li>";

const NO_DESCRIPTION_TEXT: &str = "No description.";

/// Rendering knobs, passed in to keep the renderer pure.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub default_icon: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_icon: DEFAULT_ICON.to_string(),
        }
    }
}

/// Render the selected packages as a sequence of `<li>` elements, sorted
/// by display name (case-insensitive). Field values are emitted as-is;
/// package metadata is trusted input here.
pub fn render_package_list(packages: &[PackageRecord], options: &RenderOptions) -> String {
    if packages.is_empty() {
        return NO_PACKAGES_ITEM.to_string();
    }

    let mut sorted: Vec<&PackageRecord> = packages.iter().collect();
    sorted.sort_by_key(|package| package.display_name().to_lowercase());

    let mut html = String::new();
    for package in sorted {
        let name = package.display_name();
        let version = &package.version;
        let description = package
            .description
            .as_deref()
            .unwrap_or(NO_DESCRIPTION_TEXT);
        let icon = package.icon.as_deref().unwrap_or(&options.default_icon);
        let default_icon = &options.default_icon;

        html.push_str(&format!(
            r#"
        <li>
            <img src="{icon}" alt="{name} icon" class="tweak-icon" onerror="this.src='{default_icon}';">
            <div class="tweak-info">
                <div class="tweak-header">
                    <strong>{name}</strong>
                    <span>v{version}</span>
                </div>
                <p>{description}</p>
            </div>
        </li>
        "#
        ));
    }
    html
}
