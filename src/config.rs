use crate::model::GradeScale;
use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scale: GradeScale,
}

impl Config {
    pub fn load(file_name: &str) -> Result<Config, Error> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot read configuration file {file_name}"))?;
        toml::from_str(&content).wrap_err("cannot parse configuration file")
    }

    /// Load the configuration file if present, otherwise fall back to the
    /// defaults. Used for the implicit default path only; an explicitly given
    /// file must exist.
    pub fn load_or_default(file_name: &str) -> Result<Config, Error> {
        if Path::new(file_name).exists() {
            Config::load(file_name)
        } else {
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gives_default_scale() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.scale.max, 100.0);
        assert_eq!(config.scale.a_cutoff, 90.0);
    }

    #[test]
    fn scale_can_be_overridden() {
        let config: Config = toml::from_str(
            r#"
            [scale]
            min = 0.0
            max = 20.0
            a_cutoff = 16.0
            b_cutoff = 14.0
            c_cutoff = 12.0
            d_cutoff = 10.0
            "#,
        )
        .unwrap();
        assert_eq!(config.scale.max, 20.0);
        assert_eq!(config.scale.letter_for(15.0), crate::model::Letter::B);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("[scale]\ncurve = true\n").is_err());
    }
}
