use super::*;

pub(crate) struct WeatherCard<'a> {
  clear_focused: bool,
  weather: &'a Weather,
}

impl<'a> WeatherCard<'a> {
  const CLEAR_LABEL: &'static str = "🔄 Clear";
  pub(crate) const HEIGHT: u16 = 11;

  fn clear_button(&self) -> Span<'static> {
    let style = if self.clear_focused {
      Style::default()
        .fg(Color::White)
        .bg(Color::Red)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::LightRed)
    };

    Span::styled(format!(" {} ", Self::CLEAR_LABEL), style)
  }

  fn detail(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
      Span::styled(label.to_string(), Style::default().fg(Color::Gray)),
      Span::styled(
        value,
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      ),
    ])
  }

  /// Card body, one entry per row, with the clear button last.
  pub(crate) fn lines(&self) -> Vec<Line<'static>> {
    let weather = self.weather;

    vec![
      Line::from(Span::styled(
        format!("📍 {}", weather.location),
        Style::default()
          .fg(Color::LightBlue)
          .add_modifier(Modifier::BOLD),
      )),
      Line::from(Span::styled(
        format!("🌡️ {}°C", weather.temperature),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      )),
      Line::from(Span::styled(
        weather.description.clone(),
        Style::default()
          .fg(Color::Gray)
          .add_modifier(Modifier::ITALIC),
      )),
      Line::default(),
      Self::detail("💧 Humidity: ", format!("{}%", weather.humidity)),
      Self::detail("🌬️ Wind: ", format!("{} m/s", weather.wind_speed)),
      Self::detail("🧥 Feels like: ", format!("{}°C", weather.feels_like)),
      Line::default(),
      Line::from(self.clear_button()),
    ]
  }

  pub(crate) fn new(weather: &'a Weather, clear_focused: bool) -> Self {
    Self {
      clear_focused,
      weather,
    }
  }

  /// Draw the card at the top of `area` and return where the clear button
  /// landed, if it fit.
  pub(crate) fn render(&self, frame: &mut Frame, area: Rect) -> Option<Rect> {
    let area = Rect {
      height: area.height.min(Self::HEIGHT),
      ..area
    };

    let block = Block::default()
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);

    let lines = self.lines();

    let button_row = u16::try_from(lines.len().saturating_sub(1)).ok()?;

    let button_width =
      u16::try_from(self.clear_button().width()).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).centered().block(block), area);

    if button_row >= inner.height {
      return None;
    }

    let width = button_width.min(inner.width);

    Some(Rect::new(
      inner.x + (inner.width - width) / 2,
      inner.y + button_row,
      width,
      1,
    ))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn mumbai() -> Weather {
    Weather {
      description: "clear sky".to_string(),
      feels_like: 33.0,
      humidity: 70.0,
      location: "Mumbai".to_string(),
      temperature: 30.0,
      wind_speed: 3.1,
    }
  }

  fn text(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
  }

  #[test]
  fn card_shows_readings_as_provided() {
    let weather = mumbai();

    let lines = WeatherCard::new(&weather, false)
      .lines()
      .iter()
      .map(text)
      .collect::<Vec<_>>();

    assert_eq!(
      lines,
      vec![
        "📍 Mumbai",
        "🌡️ 30°C",
        "clear sky",
        "",
        "💧 Humidity: 70%",
        "🌬️ Wind: 3.1 m/s",
        "🧥 Feels like: 33°C",
        "",
        " 🔄 Clear ",
      ]
    );
  }

  #[test]
  fn fractional_readings_keep_their_digits() {
    let weather = Weather {
      feels_like: -1.25,
      temperature: 24.5,
      ..mumbai()
    };

    let lines = WeatherCard::new(&weather, false).lines();

    assert_eq!(text(&lines[1]), "🌡️ 24.5°C");
    assert_eq!(text(&lines[6]), "🧥 Feels like: -1.25°C");
  }

  #[test]
  fn description_case_is_untouched() {
    let weather = Weather {
      description: "overcast clouds".to_string(),
      ..mumbai()
    };

    assert_eq!(
      text(&WeatherCard::new(&weather, false).lines()[2]),
      "overcast clouds"
    );
  }

  #[test]
  fn card_height_fits_all_lines() {
    let weather = mumbai();

    let lines = WeatherCard::new(&weather, true).lines().len();

    assert_eq!(usize::from(WeatherCard::HEIGHT), lines + 2);
  }
}
