/// Portfolio content loading
///
/// The default document is compiled into the binary. A user-supplied
/// document (config `content_path` / `FOLIO_CONTENT`) replaces it when
/// it parses and validates; otherwise the embedded one is used.

use std::path::Path;

use super::data::Portfolio;
use crate::error::{FolioError, Result};

const EMBEDDED: &str = include_str!("../../content/portfolio.json");

/// Where the loaded content came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Embedded,
    File(String),
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Embedded => write!(f, "embedded"),
            ContentSource::File(path) => write!(f, "{}", path),
        }
    }
}

/// Parse and validate a portfolio document
pub fn parse(raw: &str, origin: &str) -> Result<Portfolio> {
    let portfolio: Portfolio =
        serde_json::from_str(raw).map_err(|e| FolioError::json(origin, e))?;
    validate(&portfolio)?;
    Ok(portfolio)
}

pub fn embedded() -> Result<Portfolio> {
    parse(EMBEDDED, "embedded portfolio")
}

pub fn from_file(path: &Path) -> Result<Portfolio> {
    let raw = std::fs::read_to_string(path).map_err(|e| FolioError::io(path, e))?;
    parse(&raw, &path.display().to_string())
}

/// Load the user document if one is configured, falling back to the
/// embedded one
pub fn load(path: Option<&Path>) -> Result<(Portfolio, ContentSource)> {
    if let Some(path) = path {
        match from_file(path) {
            Ok(portfolio) => {
                return Ok((portfolio, ContentSource::File(path.display().to_string())))
            }
            Err(e) => log::warn!("Falling back to embedded content: {}", e),
        }
    }
    Ok((embedded()?, ContentSource::Embedded))
}

fn validate(portfolio: &Portfolio) -> Result<()> {
    if portfolio.profile.name.trim().is_empty() {
        return Err(FolioError::Invalid("profile name is empty".into()));
    }

    for (i, project) in portfolio.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            return Err(FolioError::Invalid(format!("project #{} has no title", i + 1)));
        }
        if project.image.trim().is_empty() {
            return Err(FolioError::Invalid(format!(
                "project '{}' has no cover image",
                project.title
            )));
        }
        if let Some(gallery) = &project.gallery {
            if gallery.iter().any(|src| src.trim().is_empty()) {
                return Err(FolioError::Invalid(format!(
                    "project '{}' has an empty gallery entry",
                    project.title
                )));
            }
        }
    }

    Ok(())
}
