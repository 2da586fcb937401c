//! Layered settings: built-in defaults, then `cadastro.toml` (or the file
//! given with `--config`), then `CADASTRO_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cadastro_validator::validators::ADULT_AGE;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// File read from the working directory when `--config` is absent.
pub const DEFAULT_FILE: &str = "cadastro.toml";

/// Prefix of the environment overrides, e.g. `CADASTRO_MINIMUM_AGE=21`.
pub const ENV_PREFIX: &str = "CADASTRO_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Full years required by the birth date rule.
    pub minimum_age: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            minimum_age: ADULT_AGE,
        }
    }
}

impl Settings {
    /// Builds the provider stack without extracting it.
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.map_or_else(|| PathBuf::from(DEFAULT_FILE), Path::to_path_buf);
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads the settings. An explicit `path` must exist; the default file
    /// is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            anyhow::ensure!(
                path.is_file(),
                "config file `{}` does not exist",
                path.display()
            );
        }

        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            assert_eq!(Settings::load(None).unwrap(), Settings::default());
            Ok(())
        });
    }

    #[test]
    fn file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_FILE, "log_level = \"debug\"\nminimum_age = 16\n")?;
            let settings = Settings::load(None).unwrap();
            assert_eq!(settings.log_level, "debug");
            assert_eq!(settings.minimum_age, 16);

            jail.set_env("CADASTRO_MINIMUM_AGE", "21");
            assert_eq!(Settings::load(None).unwrap().minimum_age, 21);
            Ok(())
        });
    }

    #[test]
    fn explicit_path_must_exist() {
        Jail::expect_with(|_jail| {
            let err = Settings::load(Some(Path::new("missing.toml"))).unwrap_err();
            assert!(err.to_string().contains("missing.toml"));
            Ok(())
        });
    }

    #[test]
    fn bad_value_is_reported() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "minimum_age = \"adult\"\n")?;
            assert!(Settings::load(Some(Path::new("custom.toml"))).is_err());
            Ok(())
        });
    }
}
