use super::*;

/// The provider sends `cod` as a number on success and as a string such as
/// `"404"` on errors. Only a numeric 200 counts as success, so a string
/// `"200"` is rejected.
pub(crate) fn deserialize_status_code<'de, D>(
  deserializer: D,
) -> Result<u16, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;

  match value {
    Value::Number(n) => n
      .as_u64()
      .and_then(|code| u16::try_from(code).ok())
      .ok_or_else(|| {
        de::Error::invalid_value(Unexpected::Other("number"), &"a status code")
      }),
    Value::String(s) => match s.trim().parse::<u16>() {
      Ok(200) => Err(de::Error::invalid_value(
        Unexpected::Str(&s),
        &"a numeric success code",
      )),
      Ok(code) => Ok(code),
      Err(_) => Err(de::Error::invalid_value(
        Unexpected::Str(&s),
        &"a numeric status code",
      )),
    },
    Value::Null => Err(de::Error::invalid_type(
      Unexpected::Unit,
      &"string or number",
    )),
    Value::Bool(b) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Value::Array(_) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Value::Object(_) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct CodeWrapper {
    #[serde(deserialize_with = "deserialize_status_code")]
    cod: u16,
  }

  fn parse_code(input: &str) -> Result<u16, serde_json::Error> {
    serde_json::from_str::<CodeWrapper>(input).map(|wrapper| wrapper.cod)
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("city not found anywhere", 4), "city...");
  }

  #[test]
  fn truncate_preserves_exact_length_strings() {
    assert_eq!(truncate("exact", 5), "exact");
  }

  #[test]
  fn status_code_accepts_numbers_and_numeric_strings() {
    assert_eq!(parse_code(r#"{"cod": 200}"#).unwrap(), 200);
    assert_eq!(parse_code(r#"{"cod": "404"}"#).unwrap(), 404);
  }

  #[test]
  fn status_code_rejects_everything_else() {
    assert!(parse_code(r#"{"cod": "oops"}"#).is_err());
    assert!(parse_code(r#"{"cod": "200"}"#).is_err());
    assert!(parse_code(r#"{"cod": -1}"#).is_err());
    assert!(parse_code(r#"{"cod": 70000}"#).is_err());
    assert!(parse_code(r#"{"cod": null}"#).is_err());
    assert!(parse_code(r#"{"cod": true}"#).is_err());
    assert!(parse_code(r#"{}"#).is_err());
  }
}
