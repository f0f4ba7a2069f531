use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ui_kit::config::Config;
use ui_kit::kit::UiKit;
use ui_kit::platform::{Window, WindowEvent};
use ui_kit::ui::{App, handle_event, render};

#[derive(Parser)]
#[command(name = "ui-kit", about = "Design system showcase for the terminal", version)]
struct Cli {
    /// 配置文件路径 (默认 ~/.config/ui-kit/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 日志文件路径 (默认 ~/.local/share/ui-kit/ui-kit.log)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

/// 日志写入文件，终端被界面占用
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("ui-kit"))
        .unwrap_or_default()
        .join("ui-kit.log")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.unwrap_or_else(default_log_path);
    init_logging(&log_path)?;

    let config = match cli.config.or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    info!(?config, "starting");

    let kit = UiKit::new();
    let mut app = App::new(config.animation.clone(), Instant::now());
    let mut window = Window::open(&config.window, config.animation.tick_interval())?;

    let result = run_app(&mut window, &mut app, &kit);
    let closed = window.close();
    finish(result, closed)
}

/// 先记录帧循环的结果，再记录终端恢复的结果，帧循环的错误优先返回
fn finish(result: Result<()>, closed: Result<()>) -> Result<()> {
    match &result {
        Ok(()) => info!("window closed"),
        Err(err) => error!(error = %err, "window destroyed with error"),
    }
    if let Err(err) = &closed {
        error!(error = %err, "failed to restore terminal");
    }
    result.and(closed)
}

fn run_app(window: &mut Window, app: &mut App, kit: &UiKit) -> Result<()> {
    loop {
        match window.next_event() {
            WindowEvent::Destroy(None) => return Ok(()),
            WindowEvent::Destroy(Some(err)) => return Err(err),
            WindowEvent::Frame(input) => {
                for event in &input.events {
                    handle_event(app, event);
                }
                app.tick(input.now);
                window.present(|frame| render(frame, app, kit))?;
            }
        }
    }
}
