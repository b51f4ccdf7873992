use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchWeather { city: String, request_id: u64 },
  HideSuggestionsAfter { delay: Duration },
}
