use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::error::{Result, TweakdexError};

/// Literal marker in the template where the rendered list is injected.
pub const PLACEHOLDER: &str = "<!-- TWEAKS_LIST_PLACEHOLDER -->";

/// Merge the rendered fragment into the template and write the output.
///
/// Every occurrence of the placeholder is replaced (plain substring
/// replace). A missing template or marker aborts before anything is
/// written, leaving any pre-existing output file untouched.
pub fn publish(
    template_path: &Path,
    output_path: &Path,
    placeholder: &str,
    fragment: &str,
    dry_run: bool,
) -> Result<()> {
    let template = match fs::read_to_string(template_path) {
        Ok(template) => template,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(TweakdexError::TemplateNotFound(
                template_path.display().to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    if !template.contains(placeholder) {
        return Err(TweakdexError::PlaceholderMissing {
            placeholder: placeholder.to_string(),
            template: template_path.display().to_string(),
        });
    }

    let output = template.replace(placeholder, fragment);

    if dry_run {
        info!(
            "Dry run: would write {} bytes to '{}'",
            output.len(),
            output_path.display()
        );
        return Ok(());
    }

    fs::write(output_path, &output)?;
    debug!("Wrote {} bytes", output.len());
    println!(
        "'{}' generated with the final package list.",
        output_path.display()
    );
    Ok(())
}
