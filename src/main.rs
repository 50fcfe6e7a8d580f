//! Weather lookup TUI

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_lookup::action::Action;
use weather_lookup::api::OpenWeatherClient;
use weather_lookup::components::{Component, WeatherDisplay, WeatherDisplayProps};
use weather_lookup::config::{API_KEY_ENV, Config, DEFAULT_ENDPOINT, DEFAULT_REVEAL_DELAY_MS};
use weather_lookup::effect::{self, Effect};
use weather_lookup::error::LookupError;
use weather_lookup::logging;
use weather_lookup::reducer::reducer;
use weather_lookup::state::{AppState, SPINNER_TICK_MS, Unit};

/// Look up current weather for a city (OpenWeather)
#[derive(Parser, Debug)]
#[command(name = "weather-lookup")]
#[command(about = "Look up the current weather for a city")]
struct Args {
    /// City to search for on start
    #[arg(long, short)]
    city: Option<String>,

    /// Initial temperature unit
    #[arg(long, value_enum, default_value = "imperial")]
    unit: Unit,

    /// Pause between receiving a result and showing it, in milliseconds
    #[arg(long, default_value_t = DEFAULT_REVEAL_DELAY_MS)]
    reveal_delay_ms: u64,

    /// OpenWeather API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Current-weather endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Append logs to this file (RUST_LOG sets the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum LookupComponentId {
    Display,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum LookupContext {
    Main,
}

impl EventRoutingState<LookupComponentId, LookupContext> for AppState {
    fn focused(&self) -> Option<LookupComponentId> {
        Some(LookupComponentId::Display)
    }

    fn modal(&self) -> Option<LookupComponentId> {
        None
    }

    fn binding_context(&self, _id: LookupComponentId) -> LookupContext {
        LookupContext::Main
    }

    fn default_context(&self) -> LookupContext {
        LookupContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        unit,
        reveal_delay_ms,
        api_key,
        endpoint,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = log_file.as_deref() {
        logging::init(path)?;
    }

    let config = match Config::new(api_key, endpoint, Duration::from_millis(reveal_delay_ms)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("startup aborted: {e}");
            eprintln!("Error: {}", LookupError::from(e));
            eprintln!("Get a free key at https://openweathermap.org/api");
            std::process::exit(1);
        }
    };
    tracing::info!(
        endpoint = %config.endpoint,
        reveal_delay_ms,
        "starting weather lookup"
    );

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let initial_city = city.clone();
    let state = debug
        .load_state_or_else_async(move || async move {
            let state = match initial_city {
                Some(city) => AppState::with_city(unit, city),
                None => AppState::new(unit),
            };
            Ok::<AppState, io::Error>(state)
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let init_action = city.map(|_| Action::SearchSubmit);
    let result = run_app(
        &mut terminal,
        &debug,
        store,
        &config,
        init_action,
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("weather lookup exited");
    Ok(())
}

struct LookupUi {
    display: WeatherDisplay,
}

impl LookupUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<LookupComponentId>,
    ) {
        event_ctx.set_component_area(LookupComponentId::Display, area);

        let props = WeatherDisplayProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.display.render(frame, area, props);
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    config: &Config,
    init_action: Option<Action>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(LookupUi::new()));
    let mut bus: EventBus<AppState, Action, LookupComponentId, LookupContext> = EventBus::new();
    let keybindings: Keybindings<LookupContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(LookupComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    let client = OpenWeatherClient::new(config);
    let reveal_delay = config.reveal_delay;

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            init_action,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client, reveal_delay),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(
    effect: Effect,
    ctx: &mut EffectContext<Action>,
    client: &OpenWeatherClient,
    reveal_delay: Duration,
) {
    match effect {
        Effect::FetchWeather { request, query } => {
            let client = client.clone();
            // One task key: a newer lookup replaces the older task.
            ctx.tasks().spawn("weather", async move {
                effect::fetch_weather(&client, request, query, reveal_delay).await
            });
        }
    }
}
