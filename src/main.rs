use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use pooprequests_rs::api::HttpBackend;
use pooprequests_rs::controller::{AppController, ControllerOptions};
use pooprequests_rs::model::AppModel;
use pooprequests_rs::view::AppView;
use pooprequests_rs::{cli, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref()).and_then(|path| {
        match config::load_config(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: ignoring config file {}: {}", path.display(), e);
                None
            }
        }
    });
    let config = config::Config::resolve(file_config, &args);

    if let Err(e) = logging::init_logging(&config.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!(server = %config.server, "=== PoopRequests client starting ===");

    let backend = Arc::new(HttpBackend::new(config.server.clone()));
    let model = Arc::new(AppModel::new(config.toast));
    let controller = AppController::new(model.clone(), backend, ControllerOptions::from(&config));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("PoopRequests client shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        model.auto_clear_expired_toast().await;
        let ui_state = model.get_ui_state().await;

        terminal.draw(|f| {
            AppView::render(f, &ui_state);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    Ok(())
}
