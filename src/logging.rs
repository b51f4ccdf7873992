use {
  super::*,
  tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
  },
};

fn ensure_parent_dir(path: &Path) -> Result {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }

  Ok(())
}

/// Send `tracing` output to `path`. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr.
pub(crate) fn init(path: &Path, filter: &str) -> Result {
  let file = open_log_file(path)?;

  let filter = EnvFilter::try_new(filter)
    .with_context(|| format!("invalid log filter `{filter}`"))?;

  tracing_subscriber::registry()
    .with(filter)
    .with(
      fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file)),
    )
    .try_init()?;

  Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
  ensure_parent_dir(path)?;

  fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))
}
