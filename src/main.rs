use anyhow::{Context, bail};
use crossterm::{
    event::{self, Event},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

use notepad::autosave::{AutoSaveTick, AutoSaveTicker};
use notepad::cli;
use notepad::clipboard::Clipboard;
use notepad::command::Command;
use notepad::config::NotepadConfig;
use notepad::editor::{EditorState, Storage};
use notepad::paths;
use notepad::shell::Shell;
use notepad::ui::renderer::TuiRenderer;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application entry point: parse arguments, load preferences and recent
/// files, open the requested file, then run the terminal UI until the user
/// quits. The terminal is restored even when the event loop fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();
    init_logging();

    if cli_args.is_directory() {
        bail!("cannot edit a directory");
    }

    let config = match paths::find_config_file() {
        Some(path) => NotepadConfig::from_file(&path).unwrap_or_else(|e| {
            warn!("ignoring config: {e}");
            NotepadConfig::default()
        }),
        None => NotepadConfig::default(),
    };

    let clipboard = Clipboard::new();
    if !clipboard.is_system() {
        info!("using in-memory clipboard");
    }
    let mut editor =
        EditorState::with_storage(Storage::from_config_dir()).with_clipboard(clipboard);
    if let Some(path) = &cli_args.file {
        if path.exists() {
            editor.execute(Command::Open(path.clone()));
        } else {
            // Start an empty document that saves to the requested name
            editor.file.associate(path);
            editor.status_message = Some(format!("New file {}", path.display()));
        }
    }

    let (ticker, ticks) = match cli_args.auto_save(&config) {
        Some(interval) => {
            let (ticker, ticks) = AutoSaveTicker::spawn(interval, editor.save_gate().clone());
            (Some(ticker), Some(ticks))
        }
        None => (None, None),
    };

    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let mut shell = Shell::new(editor);
    let result = run(&mut shell, ticks);

    if let Some(ticker) = ticker {
        ticker.cancel();
    }
    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    if result.is_err() {
        shell.editor.persist_session();
    }
    info!("exiting");
    result
}

fn run(shell: &mut Shell, mut ticks: Option<UnboundedReceiver<AutoSaveTick>>) -> anyhow::Result<()> {
    let mut renderer = TuiRenderer::new().context("creating terminal renderer")?;
    let (cols, rows) = crossterm::terminal::size()?;
    shell.editor.handle_resize(rows, cols);

    let mut title = String::new();
    loop {
        let current_title = shell.editor.title();
        if current_title != title {
            crossterm::execute!(std::io::stdout(), SetTitle(&current_title))?;
            title = current_title;
        }
        renderer.draw(&shell.editor, &shell.mode)?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if shell.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(cols, rows) => shell.editor.handle_resize(rows, cols),
                _ => {}
            }
        }

        if let Some(rx) = ticks.as_mut() {
            while rx.try_recv().is_ok() {
                shell.on_auto_save_tick();
            }
        }
    }
}

/// Log to a file in the config directory; stderr belongs to the TUI.
/// `RUST_LOG` controls verbosity.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let log_path = paths::log_file();
    let file = log_path
        .parent()
        .map(std::fs::create_dir_all)
        .transpose()
        .and_then(|_| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
        });
    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}
