use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  api_key: String,
  api_url: String,
  client: reqwest::Client,
}

impl Client {
  /// Current conditions for `city` in metric units. Any body whose `cod` is
  /// not 200 is an error, whatever the HTTP status says.
  pub(crate) async fn fetch_weather(
    &self,
    city: &str,
  ) -> Result<Weather, FetchError> {
    let body = self
      .client
      .get(&self.api_url)
      .query(&[
        ("q", city),
        ("appid", self.api_key.as_str()),
        ("units", "metric"),
      ])
      .send()
      .await?
      .text()
      .await?;

    Weather::try_from(serde_json::from_str::<WeatherResponse>(&body)?)
  }

  pub(crate) fn new(config: &Config) -> Self {
    Self {
      api_key: config.api_key.clone(),
      api_url: config.api_url.clone(),
      client: reqwest::Client::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    wiremock::{
      Mock, MockServer, ResponseTemplate,
      matchers::{method, path, query_param},
    },
  };

  fn client_for(url: String) -> Client {
    Client::new(&Config {
      api_key: "test-key".to_string(),
      api_url: url,
      log_file: PathBuf::from("unused.log"),
      log_filter: "off".to_string(),
    })
  }

  #[tokio::test]
  async fn fetch_sends_city_key_and_metric_units() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/weather"))
      .and(query_param("q", "Mumbai"))
      .and(query_param("appid", "test-key"))
      .and(query_param("units", "metric"))
      .respond_with(ResponseTemplate::new(200).set_body_json(
        serde_json::json!({
          "cod": 200,
          "name": "Mumbai",
          "main": {"temp": 30, "humidity": 70, "feels_like": 33},
          "weather": [{"description": "clear sky"}],
          "wind": {"speed": 3.1}
        }),
      ))
      .expect(1)
      .mount(&server)
      .await;

    let weather = client_for(format!("{}/weather", server.uri()))
      .fetch_weather("Mumbai")
      .await
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

  #[tokio::test]
  async fn city_names_with_spaces_are_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(query_param("q", "New Delhi"))
      .respond_with(
        ResponseTemplate::new(404)
          .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
      )
      .expect(1)
      .mount(&server)
      .await;

    let error = client_for(format!("{}/weather", server.uri()))
      .fetch_weather("New Delhi")
      .await
      .unwrap_err();

    assert!(matches!(error, FetchError::Status { code: 404, .. }));
  }

  #[tokio::test]
  async fn non_success_code_in_ok_response_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_json(serde_json::json!({"cod": 429, "message": "slow down"})),
      )
      .mount(&server)
      .await;

    let error = client_for(format!("{}/weather", server.uri()))
      .fetch_weather("Pune")
      .await
      .unwrap_err();

    assert_eq!(error.to_string(), "weather provider answered 429: slow down");
  }

  #[tokio::test]
  async fn garbage_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
      .mount(&server)
      .await;

    let error = client_for(format!("{}/weather", server.uri()))
      .fetch_weather("Surat")
      .await
      .unwrap_err();

    assert!(matches!(error, FetchError::Decode(_)));
  }

  #[tokio::test]
  async fn unreachable_provider_is_a_network_error() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
      .and_then(|listener| listener.local_addr())
      .unwrap()
      .port();

    let url = format!("http://127.0.0.1:{port}/weather");

    let error = client_for(url).fetch_weather("Patna").await.unwrap_err();

    assert!(matches!(error, FetchError::Network(_)));
  }
}
