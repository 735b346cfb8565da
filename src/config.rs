//! Package list loading
//!
//! The package list is read once at startup. YAML is the default format;
//! files with a `.toml` extension are parsed as TOML. Any failure here is
//! fatal for the run.

use crate::domain::PackageList;
use crate::error::ConfigError;
use std::path::Path;
use tracing::debug;

/// Default package list file name, resolved against the working directory
pub const DEFAULT_PACKAGE_LIST: &str = "package-list.yml";

/// Document format of a package list file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Yaml,
    Toml,
}

impl ListFormat {
    /// Picks the format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ListFormat::Toml,
            _ => ListFormat::Yaml,
        }
    }
}

impl PackageList {
    /// Parses a YAML package list
    pub fn from_yaml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let list: PackageList = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::yaml_parse_error(path, e.to_string()))?;
        list.validate()?;
        Ok(list)
    }

    /// Parses a TOML package list
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let list: PackageList = toml::from_str(content)
            .map_err(|e| ConfigError::toml_parse_error(path, e.to_string()))?;
        list.validate()?;
        Ok(list)
    }

    /// Rejects entries that cannot name a package
    fn validate(&self) -> Result<(), ConfigError> {
        for (group, entries) in self.groups() {
            if let Some(entry) = entries.iter().find(|e| e.name().trim().is_empty()) {
                return Err(ConfigError::invalid_entry(
                    group,
                    format!("empty package name in {:?}", entry),
                ));
            }
        }
        Ok(())
    }
}

/// Reads and parses the package list at `path`
pub fn load_package_list(path: &Path) -> Result<PackageList, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::not_found(path));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

    let format = ListFormat::from_path(path);
    debug!("Loading package list {} as {:?}", path.display(), format);

    let list = match format {
        ListFormat::Yaml => PackageList::from_yaml_str(&content, path)?,
        ListFormat::Toml => PackageList::from_toml_str(&content, path)?,
    };

    debug!(
        "Loaded {} entries in {} groups",
        list.entry_count(),
        list.groups().count()
    );
    Ok(list)
}
