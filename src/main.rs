use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io, sync::Mutex, time::Duration};
use tokio::sync::mpsc::UnboundedReceiver;

use filetui::api::FileServerClient;
use filetui::config::{self, Config};
use filetui::handlers;
use filetui::model::Model;
use filetui::services::{api::spawn_api_service, ApiResponse};
use filetui::ui::{
    self,
    icons::{IconMode, IconRenderer, IconTheme},
};
use filetui::{utils, App};

/// Terminal client for a remote file server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/filetui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Server base URL, overrides the config file
    #[arg(short, long)]
    url: Option<String>,
}

/// Route tracing output to the debug log file
fn init_logging() -> Result<()> {
    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::debug!("Debug mode enabled");
    Ok(())
}

fn build_app(config: &Config) -> (App, UnboundedReceiver<ApiResponse>) {
    let client = FileServerClient::new(&config.base_url);
    let (api_tx, api_rx) = spawn_api_service(client);

    let icon_renderer = IconRenderer::new(
        IconMode::from_config(&config.icon_mode),
        IconTheme::default(),
    );

    let mut model = Model::new(config.vim_mode);
    model.ui.server_label = config.base_url.clone();

    let app = App::new(model, api_tx, icon_renderer, config.download_dir());
    (app, api_rx)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if args.debug {
        init_logging()?;
    }

    let mut config = config::load_config(args.config.as_deref(), args.url.as_deref())?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let (mut app, mut api_rx) = build_app(&config);

    // First listing: the server root
    app.go_home();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app, &mut api_rx);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api_rx: &mut UnboundedReceiver<ApiResponse>,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast once it has been visible long enough
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Poll for input with a short timeout so responses keep flowing
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key(app, key);
                }
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
