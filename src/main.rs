use anyhow::{Context, Result};
use clap::Parser;
use stepnav::app::App;
use stepnav::cli::Cli;
use stepnav::config::Config;
use stepnav::styles::init_theme;
use stepnav::tui::Tui;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    let log_dir = stepnav::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("stepnav.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, "stepnav.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config_path = cli.config_path();
    let mut config = Config::load_or_create(&config_path)?;
    cli.apply_overrides(&mut config);
    init_theme(config.theme_type());

    let mut tui = Tui::new()?;
    let mut app = App::new(config, config_path);
    let result = app.run(&mut tui);

    drop(tui);
    drop(guard);

    result
}
