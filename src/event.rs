use super::*;

pub(crate) enum Event {
  BlurElapsed,
  Weather {
    request_id: u64,
    result: Result<Weather, FetchError>,
  },
}
