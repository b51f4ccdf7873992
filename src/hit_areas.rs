use super::*;

/// Screen regions recorded while drawing, used to route mouse clicks.
#[derive(Debug, Default)]
pub(crate) struct HitAreas {
  pub(crate) button: Rect,
  pub(crate) clear: Option<Rect>,
  pub(crate) input: Rect,
  pub(crate) suggestions: Vec<(usize, Rect)>,
}

impl HitAreas {
  pub(crate) fn command_at(&self, column: u16, row: u16) -> Command {
    let position = Position::new(column, row);

    if let Some((index, _)) = self
      .suggestions
      .iter()
      .find(|(_, area)| area.contains(position))
    {
      return Command::SelectSuggestion(*index);
    }

    if self.clear.is_some_and(|area| area.contains(position)) {
      Command::Clear
    } else if self.button.contains(position) {
      Command::SubmitQuery
    } else if self.input.contains(position) {
      Command::FocusInput
    } else {
      Command::Blur
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn areas() -> HitAreas {
    HitAreas {
      button: Rect::new(30, 2, 5, 3),
      clear: Some(Rect::new(4, 12, 10, 1)),
      input: Rect::new(2, 2, 28, 3),
      suggestions: vec![(3, Rect::new(3, 5, 26, 1)), (4, Rect::new(3, 6, 26, 1))],
    }
  }

  #[test]
  fn clicks_route_to_controls() {
    let areas = areas();

    assert_eq!(areas.command_at(5, 3), Command::FocusInput);
    assert_eq!(areas.command_at(32, 3), Command::SubmitQuery);
    assert_eq!(areas.command_at(6, 12), Command::Clear);
    assert_eq!(areas.command_at(10, 6), Command::SelectSuggestion(4));
  }

  #[test]
  fn clicks_elsewhere_blur() {
    assert_eq!(areas().command_at(50, 20), Command::Blur);
    assert_eq!(HitAreas::default().command_at(0, 0), Command::Blur);
  }
}
