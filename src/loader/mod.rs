mod parse_error;

use anyhow::{Context, Result, bail};
use miette::Report;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::models::ProjectSpec;

pub use parse_error::ParseError;

/// Reads a project-spec file from disk and deserializes it. A parse or
/// shape failure here is the structural precondition gate: semantic
/// validation never runs on a document that does not deserialize.
pub struct SpecLoader;

impl SpecLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<ProjectSpec> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read spec file: {path:?}"))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        debug!("Parsing {path:?} as {extension}");
        let spec = match extension {
            "yml" | "yaml" => self.parse_yaml(&content, path)?,
            "json" => self.parse_json(&content, path)?,
            other => bail!("Unsupported spec file extension '{other}' (expected yml, yaml or json)"),
        };

        info!(
            "Loaded '{}': {} domains, {} entities",
            spec.project_name,
            spec.domains.len(),
            spec.entity_count()
        );
        Ok(spec)
    }

    fn parse_yaml(&self, content: &str, path: &Path) -> Result<ProjectSpec> {
        match ProjectSpec::from_yaml(content) {
            Ok(spec) => Ok(spec),
            Err(error) => {
                let offset = error.location().map(|l| l.index()).unwrap_or(0);
                let parse_error =
                    ParseError::new(path, content.to_string(), offset, error.to_string());
                eprintln!("{:?}", Report::new(parse_error));
                bail!("Structural validation failed for {path:?} (see detailed errors above)");
            }
        }
    }

    fn parse_json(&self, content: &str, path: &Path) -> Result<ProjectSpec> {
        match ProjectSpec::from_json(content) {
            Ok(spec) => Ok(spec),
            Err(error) => {
                let offset = offset_of(content, error.line(), error.column());
                let parse_error =
                    ParseError::new(path, content.to_string(), offset, error.to_string());
                eprintln!("{:?}", Report::new(parse_error));
                bail!("Structural validation failed for {path:?} (see detailed errors above)");
            }
        }
    }
}

impl Default for SpecLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of a 1-based line/column position.
fn offset_of(content: &str, line: usize, column: usize) -> usize {
    let mut remaining = line.saturating_sub(1);
    let mut offset = 0;
    for current in content.lines() {
        if remaining == 0 {
            return offset + column.saturating_sub(1).min(current.len());
        }
        offset += current.len() + 1;
        remaining -= 1;
    }
    content.len()
}
