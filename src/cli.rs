use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};

/// Output file name used when no path is given.
pub const DEFAULT_OUTPUT: &str = "src-catalog.md";

/// Directory, relative to the working directory, that gets catalogued.
pub const SOURCE_DIR: &str = "src";

pub struct Config {
    pub output_path: PathBuf,
    /// Base for the paths shown in file headings.
    pub project_root: PathBuf,
    /// Directory that is walked and drawn.
    pub source_root: PathBuf,
    pub verbosity: u8,
}

impl Config {
    /// Config for cataloguing `<project_root>/src` into `output_path`.
    pub fn for_project(project_root: PathBuf, output_path: PathBuf) -> Self {
        Self {
            source_root: project_root.join(SOURCE_DIR),
            output_path,
            project_root,
            verbosity: 0,
        }
    }
}

pub fn build_cli() -> Command {
    Command::new("src-catalog")
        .version(clap::crate_version!())
        .about("Collects the TypeScript sources under ./src into a single .md catalog")
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .help(format!("Sets the output .md file path [default: {DEFAULT_OUTPUT}]"))
                .num_args(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increases log output (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
}

pub fn parse_args() -> Result<Config> {
    let matches = build_cli().get_matches();
    let project_root = std::env::current_dir()?;
    Ok(config_from_matches(&matches, &project_root))
}

/// Resolves parsed arguments against the working directory.
pub fn config_from_matches(matches: &ArgMatches, project_root: &Path) -> Config {
    let output_path = matches
        .get_one::<String>("output")
        .map(|s| project_root.join(s))
        .unwrap_or_else(|| project_root.join(DEFAULT_OUTPUT));

    let mut config = Config::for_project(project_root.to_path_buf(), output_path);
    config.verbosity = matches.get_count("verbose");
    config
}
