use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::world_core::config::{Mode, WorldGenConfig};

/// Command-line overrides applied on top of the config file.
#[derive(Clone, Debug, PartialEq)]
pub struct CliArgs {
    pub config_path: PathBuf,
    pub mode: Option<Mode>,
    pub saved_path: Option<PathBuf>,
    pub seed: Option<f64>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(WorldGenConfig::DEFAULT_PATH),
            mode: None,
            saved_path: None,
            seed: None,
        }
    }
}

impl CliArgs {
    pub fn from_env_args() -> Result<Self> {
        Self::from_iter(
            std::env::args_os().skip(1),
            std::env::var_os("WORLD_GEN_CONFIG"),
        )
    }

    fn from_iter<I>(args: I, env_config: Option<OsString>) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut parsed = Self::default();

        if let Some(path) = env_config.filter(|p| !p.is_empty()) {
            parsed.config_path = PathBuf::from(path);
        }

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            let arg_str = arg.to_string_lossy();
            match arg_str.as_ref() {
                "--config" => {
                    parsed.config_path = PathBuf::from(value_for(&mut iter, "--config")?);
                }
                "--path" => {
                    parsed.saved_path = Some(PathBuf::from(value_for(&mut iter, "--path")?));
                }
                "--mode" => {
                    let value = value_for(&mut iter, "--mode")?;
                    let mode = value
                        .to_string_lossy()
                        .parse::<Mode>()
                        .map_err(|e| anyhow!(e))?;
                    parsed.mode = Some(mode);
                }
                "--seed" => {
                    let value = value_for(&mut iter, "--seed")?;
                    let seed = value
                        .to_string_lossy()
                        .parse::<f64>()
                        .with_context(|| format!("invalid --seed {:?}", value))?;
                    parsed.seed = Some(seed);
                }
                other => log::warn!("ignoring unknown argument {other:?}"),
            }
        }

        Ok(parsed)
    }

    pub fn apply(&self, config: &mut WorldGenConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(path) = &self.saved_path {
            config.saved_path = path.clone();
        }
        if let Some(seed) = self.seed {
            config.generation.seed = Some(seed);
        }
    }
}

fn value_for<I>(iter: &mut I, flag: &str) -> Result<OsString>
where
    I: Iterator<Item = OsString>,
{
    iter.next().ok_or_else(|| anyhow!("{flag} requires a value"))
}
