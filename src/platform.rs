//! 终端平台: 原始模式、备用屏幕、鼠标捕获与事件等待
//!
//! 每次 `next_event` 阻塞到有输入或经过一个计时间隔，然后把积压的事件一次取完，
//! 交给一帧处理。

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::config::WindowConfig;
use crate::kit::metrics::Dp;

/// 一帧的输入
#[derive(Debug)]
pub struct FrameInput {
    pub now: Instant,
    pub events: Vec<Event>,
}

/// 平台事件
#[derive(Debug)]
pub enum WindowEvent {
    /// 窗口销毁，携带导致销毁的错误 (若有)
    Destroy(Option<anyhow::Error>),
    /// 可以绘制新的一帧
    Frame(FrameInput),
}

/// Ctrl-C / Ctrl-Q 视为关闭窗口
pub fn is_destroy_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

fn setup_terminal<W: Write>(mut out: W, title: &str) -> Result<Terminal<CrosstermBackend<W>>> {
    execute!(
        out,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        SetTitle(title)
    )
    .context("failed to set up terminal")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(out)).context("failed to create terminal")?;
    terminal.clear().context("failed to clear terminal")?;
    Ok(terminal)
}

fn leave_screen<W: Write>(out: &mut W) {
    if let Err(err) = execute!(
        out,
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    ) {
        warn!(error = %err, "failed to leave alternate screen");
    }
}

pub struct Window {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick: Duration,
    open: bool,
}

impl Window {
    /// 进入原始模式与备用屏幕
    pub fn open(config: &WindowConfig, tick: Duration) -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let terminal = match setup_terminal(io::stdout(), &config.title) {
            Ok(terminal) => terminal,
            Err(err) => {
                // 初始化中途失败，撤销已经生效的设置
                leave_screen(&mut io::stdout());
                if let Err(err) = disable_raw_mode() {
                    warn!(error = %err, "failed to disable raw mode");
                }
                return Err(err);
            }
        };
        let window = Self {
            terminal,
            tick,
            open: true,
        };

        let wanted = (Dp(config.width).cols(), Dp(config.height).rows());
        match crossterm::terminal::size() {
            Ok((cols, rows)) if cols < wanted.0 || rows < wanted.1 => warn!(
                cols,
                rows,
                wanted_cols = wanted.0,
                wanted_rows = wanted.1,
                "terminal is smaller than the configured window size"
            ),
            Ok((cols, rows)) => info!(cols, rows, title = %config.title, "window opened"),
            Err(err) => warn!(error = %err, "failed to query terminal size"),
        }
        Ok(window)
    }

    /// 阻塞等待下一帧，I/O 错误作为带错误的销毁事件返回
    pub fn next_event(&mut self) -> WindowEvent {
        match self.collect_events() {
            Ok(events) if events.iter().any(|e| matches!(e, Event::Key(key) if is_destroy_key(key))) => {
                WindowEvent::Destroy(None)
            }
            Ok(events) => WindowEvent::Frame(FrameInput {
                now: Instant::now(),
                events,
            }),
            Err(err) => WindowEvent::Destroy(Some(err)),
        }
    }

    fn collect_events(&mut self) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        if event::poll(self.tick).context("failed to poll terminal events")? {
            events.push(event::read().context("failed to read terminal event")?);
            while event::poll(Duration::ZERO).context("failed to poll terminal events")? {
                events.push(event::read().context("failed to read terminal event")?);
            }
        }
        Ok(events)
    }

    /// 提交一帧
    pub fn present(&mut self, draw: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(draw).context("failed to draw frame")?;
        Ok(())
    }

    /// 恢复终端，可重复调用
    pub fn close(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )
        .context("failed to restore terminal")?;
        self.terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_setup_failure_is_reported() {
        let err = setup_terminal(ClosedPipe, "UI Kit Demo").err();
        assert!(err.is_some_and(|e| e.to_string().contains("failed to set up terminal")));
    }

    #[test]
    fn test_leave_screen_restores_terminal_modes() {
        let mut out = Vec::new();
        leave_screen(&mut out);
        let written = String::from_utf8_lossy(&out);
        // 离开备用屏幕、关闭鼠标捕获与括号粘贴
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?1000l"));
        assert!(written.contains("\x1b[?2004l"));

        // 写入失败只记录日志
        leave_screen(&mut ClosedPipe);
    }

    #[test]
    fn test_destroy_keys() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert!(is_destroy_key(&ctrl('c')));
        assert!(is_destroy_key(&ctrl('q')));
        assert!(!is_destroy_key(&ctrl('x')));
        assert!(!is_destroy_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    }
}
