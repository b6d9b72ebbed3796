use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

/// Build-time constants consumed by the probe, the analog of a generated
/// `feature_config.h`. Resolved once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub project_name: String,
    pub version_major: u32,
    pub version_minor: u32,
    /// Declared language-standard version for the detection tier, if any.
    pub std_version: Option<u64>,
}

/// On-disk config shape. Every field is optional; absent fields keep the
/// value from the previous layer.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ConfigFile {
    pub project_name: Option<String>,
    pub version_major: Option<u32>,
    pub version_minor: Option<u32>,
    pub std_version: Option<u64>,
}

impl BuildInfo {
    /// Defaults baked in from this crate's own manifest.
    pub fn baked() -> Self {
        BuildInfo {
            project_name: env!("CARGO_PKG_NAME").to_string(),
            version_major: env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0),
            version_minor: env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0),
            std_version: None,
        }
    }

    /// Resolves the build configuration: baked defaults, then the optional
    /// YAML file, then `FEATPROBE_*` environment overrides, each layer
    /// overriding the one before it field by field.
    ///
    /// A declared-but-unreadable config file or an unparsable override is an
    /// error; the probe must not silently fall back to defaults the caller
    /// tried to replace.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let mut info = BuildInfo::baked();

        if let Some(path) = path {
            info!("loading build config from {}", path.display());
            let file = File::open(path)
                .map_err(|e| format!("Failed to open config file {}: {}", path.display(), e))?;
            let parsed: ConfigFile = serde_yml::from_reader(BufReader::new(file))
                .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))?;
            info.apply(parsed);
        }

        info.apply(env_overrides()?);
        debug!("resolved build config: {:?}", info);
        Ok(info)
    }

    fn apply(&mut self, layer: ConfigFile) {
        if let Some(name) = layer.project_name {
            self.project_name = name;
        }
        if let Some(major) = layer.version_major {
            self.version_major = major;
        }
        if let Some(minor) = layer.version_minor {
            self.version_minor = minor;
        }
        if let Some(std_version) = layer.std_version {
            self.std_version = Some(std_version);
        }
    }
}

fn env_overrides() -> Result<ConfigFile, String> {
    Ok(ConfigFile {
        project_name: env::var("FEATPROBE_PROJECT_NAME").ok(),
        version_major: env_parse("FEATPROBE_VERSION_MAJOR")?,
        version_minor: env_parse("FEATPROBE_VERSION_MINOR")?,
        std_version: env_parse("FEATPROBE_STD_VERSION")?,
    })
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>, String> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("Invalid {} value: {}", name, raw)),
        Err(_) => Ok(None),
    }
}
