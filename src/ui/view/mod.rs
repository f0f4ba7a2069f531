//! 视图层模块
//!
//! 每帧根据 App 状态完整重建界面: 页头、标签栏、可滚动的内容区

pub mod components;
pub mod form;
pub mod layouts;
pub mod settings;
pub mod showcase;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Widget},
};

use super::state::{App, Control, Tab};
use crate::kit::UiKit;
use crate::kit::interaction::HitMap;
use crate::kit::metrics::{self, Dp};
use crate::kit::palette::Swatch;
use crate::kit::scroll;
use crate::kit::widgets::{ButtonSize, ButtonVariant, fill, inset};
use components::{Canvas, Cues};
use layouts::Column;

/// 页头高度
pub const HEADER_HEIGHT: Dp = Dp(80.0);
/// 标签栏高度
pub const TAB_BAR_HEIGHT: Dp = Dp(48.0);

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App, kit: &UiKit) {
    let area = frame.area();
    draw(frame.buffer_mut(), area, app, kit);
}

/// 构建阶段: 绘制到 `buf` 并记录本帧的控件区域
pub fn draw(buf: &mut Buffer, area: Rect, app: &mut App, kit: &UiKit) {
    fill(buf, area, kit.colors[Swatch::Background].into());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT.rows()),  // 页头
            Constraint::Length(TAB_BAR_HEIGHT.rows()), // 标签栏
            Constraint::Min(0),                        // 内容
        ])
        .split(area);

    let mut hits = HitMap::new();
    let cues = Cues {
        focus: app.focus,
        hovered: app.pointer.hovered(),
    };
    let mut canvas = Canvas {
        kit,
        cues,
        buf,
        hits: &mut hits,
    };

    render_header(&mut canvas, chunks[0]);
    render_tabs(&mut canvas, app.tab, chunks[1]);
    render_content(&mut canvas, app, chunks[2]);

    app.hits = hits;
    app.pointer.refresh_hover(&app.hits);
}

fn render_header(canvas: &mut Canvas<'_, '_>, area: Rect) {
    let kit = canvas.kit;
    let card = kit.card().padding(kit.spacing.large, kit.spacing.none);
    let inner = card.inner(area);
    card.render(area, canvas.buf);

    let mut column = Column::new(inner);
    kit.text("UI Kit Demo", kit.typography.display_small, Swatch::TextPrimary)
        .centered()
        .render(column.take(1), canvas.buf);
    column.gap(kit.space_rows(kit.spacing.small));
    kit.text(
        "A comprehensive design system",
        kit.typography.body_medium,
        Swatch::TextSecondary,
    )
    .centered()
    .render(column.take(1), canvas.buf);
}

fn render_tabs(canvas: &mut Canvas<'_, '_>, selected: Tab, area: Rect) {
    let kit = canvas.kit;
    let mut x = area.x;
    for tab in Tab::ALL {
        let control = Control::Tab(tab);
        let variant = if tab == selected {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Outline
        };
        let button = kit
            .button(tab.title(), variant, ButtonSize::Medium)
            .on(Swatch::Background)
            .hovered(canvas.cues.is_hovered(control))
            .focused(canvas.cues.is_focused(control));
        let width = button.measure().width.min(area.right().saturating_sub(x));
        let rect = Rect::new(x, area.y, width, area.height);
        button.render(rect, canvas.buf);
        canvas.hits.push(control, rect);
        x = x.saturating_add(width);
    }
}

fn render_content(canvas: &mut Canvas<'_, '_>, app: &mut App, area: Rect) {
    let kit = canvas.kit;
    let block = Block::bordered()
        .border_type(metrics::border_type(kit.spacing.small))
        .border_style(Style::default().fg(kit.colors.on(Swatch::Border, Swatch::Background)));
    let viewport = inset(
        block.inner(area),
        kit.space_cols(kit.spacing.medium),
        kit.space_rows(kit.spacing.medium),
    );
    block.render(area, canvas.buf);

    let content_height = match app.tab {
        Tab::Components => showcase::height(kit, app),
        Tab::Form => form::height(kit, app),
        Tab::Settings => settings::height(kit, app),
    };
    let focus = if app.follow_focus { app.focus } else { None };
    let background = Style::default().bg(kit.colors[Swatch::Background].into());
    let mut offset = app.scroll;
    let cues = canvas.cues;

    scroll::render_scrolled(
        canvas.buf,
        viewport,
        content_height,
        background,
        &mut offset,
        focus,
        canvas.hits,
        |buf, content, hits| {
            let mut canvas = Canvas {
                kit,
                cues,
                buf,
                hits,
            };
            match app.tab {
                Tab::Components => showcase::draw(&mut canvas, app, content),
                Tab::Form => form::draw(&mut canvas, app, content),
                Tab::Settings => settings::draw(&mut canvas, app, content),
            }
        },
    );

    app.scroll = offset;
    app.follow_focus = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationConfig;
    use crate::kit::widgets::AlertVariant;
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend, layout::Position};
    use std::time::Instant;

    fn app() -> App {
        App::new(AnimationConfig::default(), Instant::now())
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    fn draw_app(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let kit = UiKit::new();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app, &kit)).unwrap();
        terminal
    }

    #[test]
    fn test_layout_regions() {
        assert_eq!(HEADER_HEIGHT.rows(), 5);
        assert_eq!(TAB_BAR_HEIGHT.rows(), 3);
    }

    #[test]
    fn test_components_tab() {
        let mut app = app();
        let terminal = draw_app(&mut app, 100, 80);
        let text = screen(&terminal);

        assert!(text.contains("UI Kit Demo"));
        assert!(text.contains("A comprehensive design system"));
        assert!(text.contains("Typography"));
        assert!(text.contains("Display Small"));
        assert!(text.contains("Secondary"));
        assert!(text.contains("Pending"));
        assert!(text.contains("0%"));
        assert!(!text.contains("Notification"));

        // 三个标签与六个演示按钮都记录了区域
        for tab in Tab::ALL {
            assert!(app.hits.rect_of(Control::Tab(tab)).is_some());
        }
        for variant in ButtonVariant::ALL {
            assert!(app.hits.rect_of(Control::Demo(variant)).is_some());
        }
    }

    #[test]
    fn test_notification_alert_is_shown() {
        let mut app = app();
        app.dispatch(Action::Activate(Control::Demo(ButtonVariant::Danger)));
        let text = screen(&draw_app(&mut app, 100, 80));
        assert!(text.contains("Notification"));
        assert!(text.contains("Danger! This is a destructive action"));
        assert!(text.contains("✗"));
        assert_eq!(app.notification.as_ref().map(|n| n.level), Some(AlertVariant::Error));
    }

    #[test]
    fn test_tab_click_switches_tab() {
        let mut app = app();
        draw_app(&mut app, 100, 60);

        let rect = app.hits.rect_of(Control::Tab(Tab::Form)).unwrap();
        assert_eq!(
            app.hits.hit(Position::new(rect.x + 1, rect.y + 1)),
            Some(Control::Tab(Tab::Form))
        );
        app.dispatch(Action::Activate(Control::Tab(Tab::Form)));

        let text = screen(&draw_app(&mut app, 100, 60));
        assert!(text.contains("Contact Form"));
        assert!(text.contains("John Doe"));
        assert!(text.contains("Clear Form"));
        assert!(text.contains("Send Message"));
        assert!(!text.contains("Please enter a valid email address"));
    }

    #[test]
    fn test_selecting_same_tab_twice_renders_same_frame() {
        let mut app = app();
        app.dispatch(Action::SelectTab(Tab::Form));
        let first = draw_app(&mut app, 100, 60).backend().buffer().clone();

        app.dispatch(Action::SelectTab(Tab::Form));
        let second = draw_app(&mut app, 100, 60).backend().buffer().clone();
        assert_eq!(app.tab, Tab::Form);
        assert_eq!(first, second);
    }

    #[test]
    fn test_form_shows_email_error() {
        let mut app = app();
        app.tab = Tab::Form;
        app.email = tui_textarea::TextArea::new(vec!["not-an-email".to_string()]);
        let text = screen(&draw_app(&mut app, 100, 60));
        assert!(text.contains("Please enter a valid email address"));
    }

    #[test]
    fn test_settings_tab() {
        let mut app = app();
        app.tab = Tab::Settings;
        app.toggles = [true, false, false];
        let text = screen(&draw_app(&mut app, 100, 60));
        assert!(text.contains("Checkbox Options"));
        assert!(text.contains("[x] Option 1"));
        assert!(text.contains("[ ] Option 2"));
        assert!(text.contains("Slider Control"));
        assert!(text.contains("Value: 0.50"));
        assert!(app.hits.rect_of(Control::Slider).is_some());
    }

    #[test]
    fn test_small_terminal_scrolls_to_focus() {
        let mut app = app();
        app.tab = Tab::Form;
        app.dispatch(Action::Focus(Control::Submit));
        draw_app(&mut app, 80, 20);

        assert!(app.scroll > 0);
        assert!(!app.follow_focus);
        let rect = app.hits.rect_of(Control::Submit).unwrap();
        assert!(rect.bottom() <= 20);
        assert!(app.hits.rect_of(Control::Name).is_none());
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        for tab in Tab::ALL {
            app.tab = tab;
            draw_app(&mut app, 10, 4);
            draw_app(&mut app, 1, 1);
        }
    }
}
