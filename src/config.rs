use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) api_key: String,
  pub(crate) api_url: String,
  pub(crate) log_file: PathBuf,
  pub(crate) log_filter: String,
}

impl Config {
  const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";
  const API_URL_VAR: &str = "OPENWEATHER_API_URL";
  const DEFAULT_API_URL: &str =
    "https://api.openweathermap.org/data/2.5/weather";
  const DEFAULT_LOG_FILTER: &str = "info";
  const LOG_FILE_VAR: &str = "CITYWEATHER_LOG_FILE";
  const LOG_FILTER_VAR: &str = "CITYWEATHER_LOG";

  fn default_log_file<F>(lookup: &F) -> Result<PathBuf>
  where
    F: Fn(&str) -> Option<String>,
  {
    let base_dir = if let Some(dir) = lookup("XDG_STATE_HOME") {
      PathBuf::from(dir)
    } else if let Some(home) = lookup("HOME") {
      PathBuf::from(home).join(".local").join("state")
    } else {
      env::current_dir()
        .context("could not determine current directory")?
        .join(".local")
        .join("state")
    };

    Ok(base_dir.join("cityweather").join("cityweather.log"))
  }

  /// Read configuration from `lookup`, treating empty values as unset.
  pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let lookup = |name: &str| {
      lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    };

    let Some(api_key) = lookup(Self::API_KEY_VAR) else {
      anyhow::bail!(
        "{} is not set\nhint: export an OpenWeatherMap API key, e.g. `export {}=<key>`",
        Self::API_KEY_VAR,
        Self::API_KEY_VAR
      );
    };

    let api_url =
      lookup(Self::API_URL_VAR).unwrap_or_else(|| Self::DEFAULT_API_URL.into());

    let log_file = match lookup(Self::LOG_FILE_VAR) {
      Some(path) => PathBuf::from(path),
      None => Self::default_log_file(&lookup)?,
    };

    let log_filter = lookup(Self::LOG_FILTER_VAR)
      .unwrap_or_else(|| Self::DEFAULT_LOG_FILTER.into());

    Ok(Self {
      api_key,
      api_url,
      log_file,
      log_filter,
    })
  }

  pub(crate) fn load() -> Result<Self> {
    Self::from_lookup(|name| env::var(name).ok())
  }
}
