use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::models::PackageState;

/// Writes the dashboard report: a JSON array indented one space per level
pub struct ReportWriter;

impl ReportWriter {
    pub fn to_json(states: &[PackageState]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b" "));
        states
            .serialize(&mut serializer)
            .context("Failed to serialize package states")?;
        Ok(out)
    }

    pub async fn write(path: &Path, states: &[PackageState]) -> Result<()> {
        let json = Self::to_json(states)?;

        fs::write(path, &json)
            .await
            .with_context(|| format!("Failed to write report to {}", path.display()))?;

        info!(path = %path.display(), packages = states.len(), "Report written");
        Ok(())
    }
}
