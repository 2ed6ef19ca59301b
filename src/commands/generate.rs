use log::info;

use crate::config::TweakdexConfig;
use crate::control;
use crate::error::Result;
use crate::publish;
use crate::render::{self, RenderOptions};
use crate::selector;

pub struct GenerateCommand<'a> {
    config: &'a TweakdexConfig,
}

impl<'a> GenerateCommand<'a> {
    pub fn new(config: &'a TweakdexConfig) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run the four stages in order: parse, select, render, publish.
    pub fn execute(&self, dry_run: bool) -> Result<()> {
        let records = control::parse_packages_file(&self.config.paths.packages);
        info!("Parsed {} package records", records.len());

        let selected = selector::select_latest(records);
        info!("{} distinct packages after selection", selected.len());

        let options = RenderOptions {
            default_icon: self.config.render.default_icon.clone(),
        };
        let fragment = render::render_package_list(&selected, &options);

        publish::publish(
            &self.config.paths.template,
            &self.config.paths.output,
            &self.config.render.placeholder,
            &fragment,
            dry_run,
        )
    }
}
