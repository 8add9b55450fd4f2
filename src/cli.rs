use clap::Parser;
use std::path::PathBuf;

use crate::application::services::ScanSettings;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Parser)]
#[command(
    name = "package-aggregator",
    about = "Collect the build status of an organization's package repositories into a JSON report",
    version
)]
pub struct Cli {
    /// Output filename
    #[arg(short = 'o', long = "output", default_value = "test.json")]
    pub output: PathBuf,

    /// The GitHub organization name to scrape
    #[arg(long, default_value = "gardenlinux")]
    pub orga: String,

    /// Filter the organization's repos by this prefix
    #[arg(long, default_value = "package-")]
    pub prefix: String,

    /// Scrape workflow runs of this file
    #[arg(long, default_value = "build.yml")]
    pub workflowfile: String,

    /// A comma separated list of repositories to exclude from scraping
    #[arg(long, default_value = "")]
    pub exclude: String,

    /// Hours after which a successful run is considered stale
    #[arg(long, default_value_t = 24.0, value_parser = parse_stale_hours)]
    pub stale: f64,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            organization: self.orga.clone(),
            prefix: self.prefix.clone(),
            workflow_file: self.workflowfile.clone(),
            exclude: self.exclude.clone(),
            stale_hours: self.stale,
        }
    }
}

fn parse_stale_hours(s: &str) -> Result<f64, String> {
    let hours: f64 = s
        .parse()
        .map_err(|e| format!("invalid number of hours '{}': {}", s, e))?;
    if !hours.is_finite() || hours < 0.0 {
        return Err(format!("stale threshold must be a non-negative number, got {}", s));
    }
    Ok(hours)
}
