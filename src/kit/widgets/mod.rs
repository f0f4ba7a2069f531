//! 控件
//!
//! 每个控件都是一次性的描述值，实现 `ratatui::widgets::Widget`，
//! 并提供 `measure` / `height` 等布局计算。

mod alert;
mod badge;
mod button;
mod card;
mod divider;
mod input;
mod progress;
mod text;
mod toggle;

pub use alert::{Alert, AlertVariant};
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use divider::Divider;
pub use input::Input;
pub use progress::ProgressBar;
pub use text::Label;
pub use toggle::{Checkbox, Slider};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
};

/// 控件的自然尺寸 (单元格)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 四周各收缩 `cols` 列 / `rows` 行
pub fn inset(area: Rect, cols: u16, rows: u16) -> Rect {
    let width = area.width.saturating_sub(cols.saturating_mul(2));
    let height = area.height.saturating_sub(rows.saturating_mul(2));
    Rect::new(
        area.x.saturating_add(cols.min(area.width / 2)),
        area.y.saturating_add(rows.min(area.height / 2)),
        width,
        height,
    )
}

/// 用背景色填充区域并清空字符
pub fn fill(buf: &mut Buffer, area: Rect, background: Color) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_bg(background);
            }
        }
    }
}

/// 文本显示宽度
pub fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

pub(crate) fn fg_bg(foreground: Color, background: Color) -> Style {
    Style::default().fg(foreground).bg(background)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        assert_eq!(inset(Rect::new(2, 3, 20, 10), 2, 1), Rect::new(4, 4, 16, 8));
        assert_eq!(inset(Rect::new(0, 0, 3, 1), 2, 1), Rect::new(1, 0, 0, 0));
    }

    #[test]
    fn test_fill_paints_background() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        buf.set_string(0, 0, "ab", Style::default());
        fill(&mut buf, Rect::new(0, 0, 2, 1), Color::Red);
        let cell = buf.cell((0, 0)).cloned().unwrap_or_default();
        assert_eq!(cell.symbol(), " ");
        assert_eq!(cell.bg, Color::Red);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("Primary"), 7);
        assert_eq!(text_width(""), 0);
    }
}
