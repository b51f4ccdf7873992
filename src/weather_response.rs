use super::*;

const SUCCESS_CODE: u16 = 200;

/// Body of the current-weather endpoint. Every card field is optional here
/// because error bodies only carry `cod` and `message`.
#[derive(Debug, Deserialize)]
pub(crate) struct WeatherResponse {
  #[serde(deserialize_with = "deserialize_status_code")]
  pub(crate) cod: u16,
  #[serde(default)]
  pub(crate) main: Option<MainReadings>,
  #[serde(default)]
  pub(crate) message: Option<String>,
  #[serde(default)]
  pub(crate) name: Option<String>,
  #[serde(default)]
  pub(crate) weather: Vec<Condition>,
  #[serde(default)]
  pub(crate) wind: Option<WindReadings>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Condition {
  pub(crate) description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainReadings {
  pub(crate) feels_like: f64,
  pub(crate) humidity: f64,
  pub(crate) temp: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WindReadings {
  pub(crate) speed: f64,
}

impl TryFrom<WeatherResponse> for Weather {
  type Error = FetchError;

  fn try_from(response: WeatherResponse) -> Result<Self, Self::Error> {
    if response.cod != SUCCESS_CODE {
      return Err(FetchError::status(
        response.cod,
        response.message.as_deref(),
      ));
    }

    let main = response.main.ok_or(FetchError::MissingField("main"))?;

    let location = response.name.ok_or(FetchError::MissingField("name"))?;

    let description = response
      .weather
      .into_iter()
      .next()
      .ok_or(FetchError::MissingField("weather"))?
      .description;

    let wind = response.wind.ok_or(FetchError::MissingField("wind"))?;

    Ok(Self {
      description,
      feels_like: main.feels_like,
      humidity: main.humidity,
      location,
      temperature: main.temp,
      wind_speed: wind.speed,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(body: &str) -> Result<Weather, FetchError> {
    Weather::try_from(serde_json::from_str::<WeatherResponse>(body)?)
  }

  #[test]
  fn successful_body_becomes_weather() {
    let weather = parse(
      r#"{
        "cod": 200,
        "name": "Mumbai",
        "main": {"temp": 30, "humidity": 70, "feels_like": 33},
        "weather": [{"description": "clear sky", "main": "Clear"}],
        "wind": {"speed": 3.1, "deg": 250}
      }"#,
    )
    .unwrap();

    assert_eq!(
      weather,
      Weather {
        description: "clear sky".to_string(),
        feels_like: 33.0,
        humidity: 70.0,
        location: "Mumbai".to_string(),
        temperature: 30.0,
        wind_speed: 3.1,
      }
    );
  }

  #[test]
  fn only_first_condition_is_used() {
    let weather = parse(
      r#"{
        "cod": 200,
        "name": "Pune",
        "main": {"temp": 24.5, "humidity": 88, "feels_like": 25.1},
        "weather": [{"description": "light rain"}, {"description": "mist"}],
        "wind": {"speed": 5}
      }"#,
    )
    .unwrap();

    assert_eq!(weather.description, "light rain");
  }

  #[test]
  fn string_error_code_is_a_status_failure() {
    let error =
      parse(r#"{"cod": "404", "message": "city not found"}"#).unwrap_err();

    match error {
      FetchError::Status { code, message } => {
        assert_eq!(code, 404);
        assert_eq!(message, "city not found");
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn numeric_non_success_code_is_a_status_failure() {
    assert!(matches!(
      parse(r#"{"cod": 401}"#),
      Err(FetchError::Status { code: 401, .. })
    ));
  }

  #[test]
  fn missing_readings_are_reported() {
    assert!(matches!(
      parse(r#"{"cod": 200, "name": "Delhi"}"#),
      Err(FetchError::MissingField("main"))
    ));

    assert!(matches!(
      parse(
        r#"{"cod": 200, "name": "Delhi",
            "main": {"temp": 1, "humidity": 2, "feels_like": 3},
            "weather": [], "wind": {"speed": 1}}"#
      ),
      Err(FetchError::MissingField("weather"))
    ));
  }

  #[test]
  fn string_success_code_is_not_success() {
    assert!(matches!(
      parse(
        r#"{"cod": "200", "name": "Delhi",
            "main": {"temp": 1, "humidity": 2, "feels_like": 3},
            "weather": [{"description": "haze"}], "wind": {"speed": 1}}"#
      ),
      Err(FetchError::Decode(_))
    ));
  }

  #[test]
  fn missing_code_is_a_decode_failure() {
    assert!(matches!(parse(r#"{"name": "Delhi"}"#), Err(FetchError::Decode(_))));
    assert!(matches!(parse("not json"), Err(FetchError::Decode(_))));
  }
}
