/// A successful current-weather lookup, in metric units.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Weather {
  pub(crate) description: String,
  pub(crate) feels_like: f64,
  pub(crate) humidity: f64,
  pub(crate) location: String,
  pub(crate) temperature: f64,
  pub(crate) wind_speed: f64,
}
