use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum FetchError {
  #[error("could not decode weather response: {0}")]
  Decode(#[from] serde_json::Error),
  #[error("weather response is missing `{0}`")]
  MissingField(&'static str),
  #[error("weather request failed: {0}")]
  Network(#[from] reqwest::Error),
  #[error("weather provider answered {code}: {message}")]
  Status { code: u16, message: String },
}

impl FetchError {
  pub(crate) fn status(code: u16, message: Option<&str>) -> Self {
    Self::Status {
      code,
      message: truncate(message.unwrap_or("no message"), 80),
    }
  }
}
