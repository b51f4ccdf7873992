use {
  anyhow::Context,
  app::App,
  city::{next_index, previous_index, suggestions},
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      DisableFocusChange, DisableMouseCapture, EnableFocusChange,
      EnableMouseCapture, Event as CrosstermEvent, KeyCode, KeyEvent,
      KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  fetch_error::FetchError,
  focus::Focus,
  help_view::HelpView,
  hit_areas::HitAreas,
  pending_fetch::PendingFetch,
  query_input::QueryInput,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env, fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
    sync::Mutex,
    time::Duration,
  },
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  utils::{deserialize_status_code, truncate},
  weather::Weather,
  weather_card::WeatherCard,
  weather_response::WeatherResponse,
};

mod app;
mod city;
mod client;
mod command;
mod command_dispatch;
mod config;
mod effect;
mod event;
mod fetch_error;
mod focus;
mod help_view;
mod hit_areas;
mod logging;
mod pending_fetch;
mod query_input;
mod state;
mod utils;
mod weather;
mod weather_card;
mod weather_response;

const BLUR_DELAY: Duration = Duration::from_millis(200);

const TITLE: &str = "🌤️ Weather Forecast";
const PLACEHOLDER: &str = "🏙️ Enter city";
const LOADING_STATUS: &str = "⏳ Loading...";

const INPUT_STATUS: &str = "type a city • tab next • esc quit";

const SUGGESTIONS_STATUS: &str =
  "type a city • ↑/↓ choose • enter get weather • esc hide list • tab next";

const BUTTON_STATUS: &str =
  "enter get weather • tab next • i edit city • q/esc quit • ? help";

const CLEAR_STATUS: &str =
  "enter clear • tab next • i edit city • q/esc quit • ? help";

const PAGE_STATUS: &str = "tab next • i edit city • q/esc quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const HELP_TEXT: &str = "\
City input:
  type      edit the city name
  backspace delete the last character
  ↓ / ↑     move through suggestions, wrapping at either end
  enter     get weather for the highlighted suggestion,
            or for the typed city when none is highlighted
  esc       hide suggestions, or quit when they are hidden

Anywhere:
  tab       move focus: city, get weather, clear
  shift+tab move focus backwards
  click     pick a suggestion, press a button, focus the input
  ctrl+c    quit

Buttons:
  enter     press the focused button
  i or /    return to the city input
  q or esc  quit
  ?         toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(
    stdout,
    EnterAlternateScreen,
    EnableMouseCapture,
    EnableFocusChange
  )?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(
    terminal.backend_mut(),
    DisableFocusChange,
    DisableMouseCapture,
    LeaveAlternateScreen
  )?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::load().context("could not load configuration")?;

  logging::init(&config.log_file, &config.log_filter)
    .context("could not initialize logging")?;

  info!(endpoint = %config.api_url, "starting cityweather");

  let client = Client::new(&config);

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
