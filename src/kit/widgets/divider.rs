use ratatui::{buffer::Buffer, layout::Rect, symbols::line, widgets::Widget};

use super::fg_bg;
use crate::kit::UiKit;
use crate::kit::palette::Swatch;

/// 水平分割线
pub struct Divider<'a> {
    kit: &'a UiKit,
}

impl<'a> Divider<'a> {
    pub const HEIGHT: u16 = 1;

    pub fn new(kit: &'a UiKit) -> Self {
        Self { kit }
    }
}

impl Widget for Divider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let colors = &self.kit.colors;
        let style = fg_bg(
            colors.on(Swatch::Border, Swatch::Surface),
            colors.on(Swatch::Surface, Swatch::Background),
        );
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_symbol(line::HORIZONTAL).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_render_draws_border_rule() {
        let kit = UiKit::new();
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);
        kit.divider().render(area, &mut buf);

        for x in 0..5 {
            let cell = buf.cell((x, 0)).cloned().unwrap_or_default();
            assert_eq!(cell.symbol(), "─");
            assert_eq!(cell.fg, Color::from(kit.colors[Swatch::Border]));
        }
        assert_eq!(buf.cell((0, 1)).map(|c| c.symbol().to_string()), Some(" ".into()));
    }
}
