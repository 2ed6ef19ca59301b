// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::{Path, PathBuf};

use clap::Parser;
use tweakdex::commands::generate::GenerateCommand;
use tweakdex::config::TweakdexConfig;
use tweakdex::error::{Result, format_error_chain, get_exit_code};
use tweakdex::logging;

#[derive(Parser)]
#[command(name = "tweakdex")]
#[command(author, version, about = "Static repo page generator for Debian-style package indexes", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Package index to read (default: ./Packages)
    #[arg(long, value_name = "PATH")]
    packages: Option<PathBuf>,

    /// HTML template containing the list placeholder marker
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Path of the generated HTML page
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Render and report without writing the output file
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger based on CLI flags and environment
    logging::setup_logger(cli.verbose);

    // Load configuration once at startup; CLI paths override it
    let mut config = match TweakdexConfig::load(Path::new(".")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    if let Some(packages) = cli.packages {
        config.paths.packages = packages;
    }
    if let Some(template) = cli.template {
        config.paths.template = template;
    }
    if let Some(output) = cli.output {
        config.paths.output = output;
    }

    let result: Result<()> = (|| {
        let command = GenerateCommand::new(&config)?;
        command.execute(cli.dry_run)
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}
