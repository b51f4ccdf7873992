use super::*;

pub(crate) struct State {
  active_index: Option<usize>,
  confirmed_city: String,
  focus: Focus,
  help: HelpView,
  in_flight: Option<PendingFetch>,
  loading: bool,
  message: String,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  query: QueryInput,
  suggestions_visible: bool,
  weather: Option<Weather>,
}

impl State {
  pub(crate) fn active_index(&self) -> Option<usize> {
    self.active_index
  }

  /// Focus left the input; the list stays up briefly so a click on an entry
  /// can still land.
  fn blur(&mut self) {
    self.pending_effects.push(Effect::HideSuggestionsAfter {
      delay: BLUR_DELAY,
    });
  }

  fn clear(&mut self) {
    self.query.clear();
    self.confirmed_city.clear();
    self.weather = None;
    self.suggestions_visible = false;
    self.active_index = None;

    if self.focus == Focus::ClearButton {
      self.focus = Focus::Input;
      self.refresh_status();
    }
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn confirm_selection(&mut self, text: &str) {
    let city = text.trim();

    if city.is_empty() {
      return;
    }

    self.suggestions_visible = false;
    self.active_index = None;

    if city != self.confirmed_city {
      city.clone_into(&mut self.confirmed_city);
      self.start_fetch();
    }
  }

  fn confirm_suggestion(&mut self, city: &str) {
    self.query.set(city);
    self.confirm_selection(city);
  }

  #[cfg(test)]
  pub(crate) fn confirmed_city(&self) -> &str {
    &self.confirmed_city
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::InsertChar(ch) => {
        self.query.insert_char(ch);
        self.text_changed();
      }
      Command::DeleteChar => {
        if !self.query.is_empty() {
          self.query.delete_char();
          self.text_changed();
        }
      }
      Command::SuggestionNext => self.move_active(next_index),
      Command::SuggestionPrevious => self.move_active(previous_index),
      Command::Enter => self.enter(),
      Command::SubmitQuery => {
        let text = self.query.text().to_string();
        self.confirm_selection(&text);
      }
      Command::SelectSuggestion(index) => {
        if let Some(city) = self.visible_suggestions().get(index).copied() {
          self.confirm_suggestion(city);
        }
      }
      Command::HideSuggestions => {
        self.suggestions_visible = false;
        self.active_index = None;
      }
      Command::Clear => self.clear(),
      Command::FocusNext => {
        self.move_focus(self.focus.next(self.weather.is_some()));
      }
      Command::FocusPrevious => {
        self.move_focus(self.focus.previous(self.weather.is_some()));
      }
      Command::FocusInput => self.move_focus(Focus::Input),
      Command::Blur => self.move_focus(Focus::Page),
      Command::FocusGained => {
        if self.focus == Focus::Input {
          self.focus_input();
        }
      }
      Command::FocusLost => {
        if self.focus == Focus::Input {
          self.blur();
        }
      }
      Command::None => {}
    }

    self.refresh_status();

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  fn enter(&mut self) {
    if !self.suggestions_visible {
      return;
    }

    let active = self
      .active_index
      .and_then(|index| self.suggestions().get(index).copied());

    if let Some(city) = active {
      self.confirm_suggestion(city);
    } else {
      let text = self.query.text().to_string();
      self.confirm_selection(&text);
    }
  }

  pub(crate) fn focus(&self) -> Focus {
    self.focus
  }

  fn focus_input(&mut self) {
    if !self.suggestions().is_empty() {
      self.suggestions_visible = true;
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::BlurElapsed => {
        self.suggestions_visible = false;
        self.refresh_status();
      }
      Event::Weather { request_id, result } => {
        let Some(pending) = self.in_flight.as_ref() else {
          Self::log_discarded(
            request_id,
            &result,
            "discarding weather for a settled request",
          );
          return;
        };

        if pending.request_id != request_id {
          Self::log_discarded(
            request_id,
            &result,
            "discarding weather for a superseded request",
          );
          return;
        }

        let Some(pending) = self.in_flight.take() else {
          return;
        };

        self.loading = false;

        if pending.city != self.confirmed_city {
          Self::log_discarded(
            request_id,
            &result,
            "discarding weather for a city that is no longer confirmed",
          );
          return;
        }

        match result {
          Ok(weather) => {
            info!(
              city = %pending.city,
              location = %weather.location,
              temperature = weather.temperature,
              "weather fetched"
            );

            self.weather = Some(weather);
          }
          Err(error) => {
            warn!(city = %pending.city, %error, "weather fetch failed");

            self.weather = None;

            if self.focus == Focus::ClearButton {
              self.focus = Focus::Page;
              self.refresh_status();
            }
          }
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.loading
  }

  /// Failures are logged even when dropped; successes only at debug.
  fn log_discarded(
    request_id: u64,
    result: &Result<Weather, FetchError>,
    reason: &str,
  ) {
    match result {
      Ok(_) => debug!(request_id, "{reason}"),
      Err(error) => warn!(request_id, %error, "{reason}"),
    }
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  fn move_active(&mut self, step: fn(Option<usize>, usize) -> Option<usize>) {
    if !self.suggestions_visible {
      return;
    }

    self.active_index = step(self.active_index, self.suggestions().len());
  }

  fn move_focus(&mut self, target: Focus) {
    let previous = self.focus;

    self.focus = target;

    if previous == Focus::Input && target != Focus::Input {
      self.blur();
    } else if previous != Focus::Input && target == Focus::Input {
      self.focus_input();
    }

    self.refresh_status();
  }

  pub(crate) fn new() -> Self {
    let focus = Focus::default();

    Self {
      active_index: None,
      confirmed_city: String::new(),
      focus,
      help: HelpView::new(),
      in_flight: None,
      loading: false,
      message: focus.status(false).into(),
      next_request_id: 0,
      pending_effects: Vec::new(),
      query: QueryInput::default(),
      suggestions_visible: false,
      weather: None,
    }
  }

  pub(crate) fn query(&self) -> &QueryInput {
    &self.query
  }

  fn refresh_status(&mut self) {
    if !self.help.is_visible() {
      self.message = self.focus.status(self.suggestions_visible).into();
    }
  }

  fn start_fetch(&mut self) {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    let city = self.confirmed_city.clone();

    info!(%city, request_id, "fetching weather");

    self.in_flight = Some(PendingFetch {
      city: city.clone(),
      request_id,
    });

    self.loading = true;

    self
      .pending_effects
      .push(Effect::FetchWeather { city, request_id });
  }

  pub(crate) fn suggestions(&self) -> Vec<&'static str> {
    suggestions(self.query.text())
  }

  fn text_changed(&mut self) {
    self.suggestions_visible = true;
    self.active_index = None;
  }

  /// Suggestions as drawn: empty whenever the dropdown is hidden.
  pub(crate) fn visible_suggestions(&self) -> Vec<&'static str> {
    if self.suggestions_visible {
      self.suggestions()
    } else {
      Vec::new()
    }
  }

  pub(crate) fn weather(&self) -> Option<&Weather> {
    self.weather.as_ref()
  }
}
