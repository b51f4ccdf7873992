use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  hit_areas: HitAreas,
  state: State,
}

impl App {
  const MAX_VISIBLE_SUGGESTIONS: usize = 6;
  const POLL_INTERVAL: Duration = Duration::from_millis(100);
  const WIDGET_HEIGHT: u16 = 17;
  const WIDGET_WIDTH: u16 = 48;

  fn draw(&mut self, frame: &mut Frame) {
    self.hit_areas = Self::render(&self.state, frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchWeather { city, request_id } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::Weather {
            request_id,
            result: client.fetch_weather(&city).await,
          });
        });
      }
      Effect::HideSuggestionsAfter { delay } => {
        let sender = self.event_tx.clone();

        self.handle.spawn(async move {
          tokio::time::sleep(delay).await;
          let _ = sender.send(Event::BlurElapsed);
        });
      }
    }
  }

  pub(crate) fn new(client: Client) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      hit_areas: HitAreas::default(),
      state: State::new(),
    }
  }

  fn process_pending_events(&mut self) {
    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  /// Draw the whole screen from `state` and report where the clickable
  /// controls ended up.
  fn render(state: &State, frame: &mut Frame) -> HitAreas {
    let screen = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Min(0), Constraint::Length(1)])
      .split(frame.area());

    let area = Self::widget_area(screen[0]);

    let block = Block::default()
      .title(Span::styled(
        TITLE,
        Style::default()
          .fg(Color::LightBlue)
          .add_modifier(Modifier::BOLD),
      ))
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::Blue));

    let inner = block.inner(area);

    frame.render_widget(block, area);

    let rows = Layout::default()
      .direction(Direction::Vertical)
      .constraints([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
      ])
      .split(inner);

    let controls = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([Constraint::Min(0), Constraint::Length(5)])
      .split(rows[0]);

    let (input_area, button_area) = (controls[0], controls[1]);

    let focus = state.focus();

    let border = |focused: bool| {
      Style::default().fg(if focused {
        Color::Cyan
      } else {
        Color::DarkGray
      })
    };

    let input_block = Block::default()
      .borders(Borders::ALL)
      .border_style(border(focus == Focus::Input));

    let input_inner = input_block.inner(input_area);

    let text_width = usize::from(input_inner.width.saturating_sub(1));

    let query = state.query();

    let (text, text_style) = if query.is_empty() {
      (PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
      (
        query.visible_tail(text_width),
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
    };

    frame.render_widget(
      Paragraph::new(Span::styled(text, text_style)).block(input_block),
      input_area,
    );

    if focus == Focus::Input && !state.help_is_visible() {
      let typed = if query.is_empty() {
        0
      } else {
        u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
      };

      frame.set_cursor_position(Position::new(
        input_inner.x + typed.min(input_inner.width.saturating_sub(1)),
        input_inner.y,
      ));
    }

    let button_style = if focus == Focus::Button {
      Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Blue)
    };

    frame.render_widget(
      Paragraph::new("●").centered().style(button_style).block(
        Block::default()
          .borders(Borders::ALL)
          .border_style(border(focus == Focus::Button)),
      ),
      button_area,
    );

    if state.is_loading() {
      frame.render_widget(
        Paragraph::new(LOADING_STATUS).centered().style(
          Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
        ),
        rows[1],
      );
    }

    let clear = state.weather().and_then(|weather| {
      WeatherCard::new(weather, focus == Focus::ClearButton)
        .render(frame, rows[2])
    });

    let suggestions =
      Self::render_suggestions(state, frame, input_area, screen[0]);

    frame.render_widget(
      Paragraph::new(state.message())
        .style(Style::default().fg(Color::DarkGray)),
      screen[1],
    );

    state.help().draw(frame);

    HitAreas {
      button: button_area,
      clear,
      input: input_area,
      suggestions,
    }
  }

  /// Dropdown under `anchor`, drawn over whatever is below it.
  fn render_suggestions(
    state: &State,
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
  ) -> Vec<(usize, Rect)> {
    let items = state.visible_suggestions();

    if items.is_empty() {
      return Vec::new();
    }

    let rows =
      u16::try_from(items.len().min(Self::MAX_VISIBLE_SUGGESTIONS))
        .unwrap_or(u16::MAX);

    let top = anchor.bottom();

    let height = rows
      .saturating_add(2)
      .min(bounds.bottom().saturating_sub(top));

    if height <= 2 {
      return Vec::new();
    }

    let area = Rect::new(anchor.x, top, anchor.width, height);

    let block = Block::default()
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);

    let list = List::new(
      items
        .iter()
        .map(|city| {
          ListItem::new(Line::from(vec![Span::raw(" "), Span::raw(*city)]))
        }),
    )
    .block(block)
    .style(Style::default().fg(Color::White))
    .highlight_style(
      Style::default()
        .fg(Color::Black)
        .bg(Color::LightBlue)
        .add_modifier(Modifier::BOLD),
    );

    let mut list_state =
      ListState::default().with_selected(state.active_index());

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);

    let offset = list_state.offset();

    (0..inner.height)
      .filter_map(|row| {
        let index = offset + usize::from(row);

        (index < items.len()).then_some((
          index,
          Rect::new(inner.x, inner.y + row, inner.width, 1),
        ))
      })
      .collect()
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Self::POLL_INTERVAL)? {
        continue;
      }

      let command = match crossterm_event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
          if self.state.help_is_visible() {
            HelpView::handle_key(key)
          } else {
            let suggestions_shown =
              !self.state.visible_suggestions().is_empty();

            self.state.focus().handle_key(key, suggestions_shown)
          }
        }
        CrosstermEvent::Mouse(MouseEvent {
          kind: MouseEventKind::Down(MouseButton::Left),
          column,
          row,
          ..
        }) if !self.state.help_is_visible() => {
          self.hit_areas.command_at(column, row)
        }
        CrosstermEvent::FocusGained => Command::FocusGained,
        CrosstermEvent::FocusLost => Command::FocusLost,
        _ => continue,
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          self.state.clear_pending_effects();
          warn!(%error, "command failed");
        }
      }
    }

    Ok(())
  }

  fn widget_area(area: Rect) -> Rect {
    let width = Self::WIDGET_WIDTH.min(area.width);
    let height = Self::WIDGET_HEIGHT.min(area.height);

    Rect::new(
      area.x + (area.width - width) / 2,
      area.y + (area.height - height) / 2,
      width,
      height,
    )
  }
}
