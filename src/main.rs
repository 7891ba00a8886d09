use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Instant;

use newsreel::App;
use newsreel::config::{self, ConfigResult};

const STARTUP_HINT: &str = "Hover the news to pause, drag to browse";

/// Terminal landing page with an autoplaying news carousel
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal landing page for Yayasan Ashabul Quran with an autoplaying news carousel"
)]
struct Args {
    /// Config file to use instead of ~/.config/newsreel/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Columns the carousel advances per frame
    #[arg(long)]
    speed: Option<f64>,

    /// Milliseconds the carousel waits at each edge before reversing
    #[arg(long, value_name = "MS")]
    edge_delay_ms: Option<u64>,

    /// Multiplier applied to pointer travel while dragging the carousel
    #[arg(long)]
    drag_gain: Option<f64>,

    /// Carousel refreshes per second
    #[arg(long, value_name = "FPS")]
    fps: Option<u32>,
}

fn main() -> Result<()> {
    // Writes to /tmp/newsreel-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/newsreel-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== NEWSREEL DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    // An explicit --config must exist and parse; the default location falls back softly
    let mut config_result = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };
    apply_overrides(&args, &mut config_result);

    let terminal = init_terminal()?;

    let app = App::new(&config_result.config, Instant::now());
    let result = run(terminal, app, config_result.warning);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== NEWSREEL DEBUG SESSION ENDED ===");

    Ok(())
}

/// Apply command line flags on top of the loaded config, re-checking ranges
fn apply_overrides(args: &Args, config_result: &mut ConfigResult) {
    let carousel = &mut config_result.config.carousel;
    if let Some(speed) = args.speed {
        carousel.speed = speed;
    }
    if let Some(edge_delay_ms) = args.edge_delay_ms {
        carousel.edge_delay_ms = edge_delay_ms;
    }
    if let Some(drag_gain) = args.drag_gain {
        carousel.drag_gain = drag_gain;
    }
    if let Some(fps) = args.fps {
        carousel.frame_rate = fps;
    }

    let mut warnings: Vec<String> = config_result.warning.take().into_iter().collect();
    warnings.extend(carousel.sanitize());
    config_result.warning = config::join_warnings(warnings);
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, warning: Option<String>) -> Result<()> {
    match warning {
        Some(warning) => app.notification.show_warning(&warning),
        None => app.notification.show(STARTUP_HINT),
    }

    loop {
        app.tick_carousel(Instant::now());

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    app.shutdown();
    Ok(())
}
