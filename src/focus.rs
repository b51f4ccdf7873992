use super::*;

/// Which control receives keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Focus {
  Button,
  ClearButton,
  #[default]
  Input,
  /// Nothing is focused, e.g. after clicking an empty part of the screen.
  Page,
}

impl Focus {
  pub(crate) fn handle_key(self, key: KeyEvent, suggestions_shown: bool) -> Command {
    let modifiers = key.modifiers;

    if key.code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL)
    {
      return Command::Quit;
    }

    match key.code {
      KeyCode::Tab => return Command::FocusNext,
      KeyCode::BackTab => return Command::FocusPrevious,
      _ => {}
    }

    if self == Focus::Input {
      return match key.code {
        KeyCode::Esc if suggestions_shown => Command::HideSuggestions,
        KeyCode::Esc => Command::Quit,
        KeyCode::Down => Command::SuggestionNext,
        KeyCode::Up => Command::SuggestionPrevious,
        KeyCode::Enter => Command::Enter,
        KeyCode::Backspace => Command::DeleteChar,
        KeyCode::Char(ch) => {
          if modifiers.contains(KeyModifiers::CONTROL)
            || modifiers.contains(KeyModifiers::ALT)
            || modifiers.contains(KeyModifiers::SUPER)
          {
            Command::None
          } else {
            Command::InsertChar(ch)
          }
        }
        _ => Command::None,
      };
    }

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Char('i' | '/') => Command::FocusInput,
      KeyCode::Enter | KeyCode::Char(' ') => match self {
        Focus::Button => Command::SubmitQuery,
        Focus::ClearButton => Command::Clear,
        Focus::Input | Focus::Page => Command::None,
      },
      _ => Command::None,
    }
  }

  pub(crate) fn next(self, card_shown: bool) -> Self {
    match self {
      Focus::Input => Focus::Button,
      Focus::Button if card_shown => Focus::ClearButton,
      Focus::Button | Focus::ClearButton | Focus::Page => Focus::Input,
    }
  }

  pub(crate) fn previous(self, card_shown: bool) -> Self {
    match self {
      Focus::Input if card_shown => Focus::ClearButton,
      Focus::Input | Focus::ClearButton => Focus::Button,
      Focus::Button | Focus::Page => Focus::Input,
    }
  }

  pub(crate) fn status(self, suggestions_shown: bool) -> &'static str {
    match self {
      Focus::Input if suggestions_shown => SUGGESTIONS_STATUS,
      Focus::Input => INPUT_STATUS,
      Focus::Button => BUTTON_STATUS,
      Focus::ClearButton => CLEAR_STATUS,
      Focus::Page => PAGE_STATUS,
    }
  }
}
