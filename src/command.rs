#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  Blur,
  Clear,
  DeleteChar,
  Enter,
  FocusGained,
  FocusInput,
  FocusLost,
  FocusNext,
  FocusPrevious,
  HideHelp,
  HideSuggestions,
  InsertChar(char),
  None,
  Quit,
  SelectSuggestion(usize),
  ShowHelp,
  SubmitQuery,
  SuggestionNext,
  SuggestionPrevious,
}
