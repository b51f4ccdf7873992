use super::*;

/// Key binding overlay. While open it swaps the status line for
/// `HELP_STATUS` and puts the previous message back on close.
pub(crate) struct HelpView {
  hidden_status: Option<String>,
}

impl HelpView {
  const KEY_COLUMN: usize = 12;

  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.is_visible() {
      return;
    }

    let area = Self::overlay_area(frame.area());

    frame.render_widget(Clear, area);

    let help = Paragraph::new(Self::lines())
      .block(
        Block::default()
          .title(HELP_TITLE)
          .borders(Borders::ALL)
          .border_style(Style::default().fg(Color::Cyan)),
      )
      .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        Command::Quit
      }
      _ => Command::None,
    }
  }

  pub(crate) fn hide(&mut self, message: &mut String) {
    if let Some(status) = self.hidden_status.take() {
      *message = status;
    }
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.hidden_status.is_some()
  }

  /// Section headings in bold, key names in cyan, descriptions plain.
  fn lines() -> Vec<Line<'static>> {
    HELP_TEXT
      .lines()
      .map(|line| {
        if !line.starts_with(' ') {
          return Line::from(Span::styled(
            line,
            Style::default().add_modifier(Modifier::BOLD),
          ));
        }

        let split = line
          .char_indices()
          .nth(Self::KEY_COLUMN)
          .map_or(line.len(), |(index, _)| index);

        let (keys, description) = line.split_at(split);

        Line::from(vec![
          Span::styled(keys, Style::default().fg(Color::Cyan)),
          Span::raw(description),
        ])
      })
      .collect()
  }

  pub(crate) fn new() -> Self {
    Self {
      hidden_status: None,
    }
  }

  fn overlay_area(area: Rect) -> Rect {
    let widest = HELP_TEXT
      .lines()
      .map(|line| Line::from(line).width())
      .max()
      .unwrap_or(0);

    let width = u16::try_from(widest.saturating_add(2))
      .unwrap_or(u16::MAX)
      .min(area.width);

    let height = u16::try_from(HELP_TEXT.lines().count().saturating_add(2))
      .unwrap_or(u16::MAX)
      .min(area.height);

    Rect::new(
      area.x + (area.width - width) / 2,
      area.y + (area.height - height) / 2,
      width,
      height,
    )
  }

  pub(crate) fn show(&mut self, message: &mut String) {
    if self.is_visible() {
      return;
    }

    self.hidden_status = Some(std::mem::replace(message, HELP_STATUS.into()));
  }
}
