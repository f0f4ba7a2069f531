use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Widget},
};

use super::{fg_bg, fill, inset};
use crate::kit::UiKit;
use crate::kit::metrics::{self, Dp, RADIUS_LARGE, SHADOW_SMALL};
use crate::kit::palette::Swatch;

/// 卡片: 底部阴影层 + 带边框、圆角、内边距的 Surface 容器
pub struct Card<'a> {
    kit: &'a UiKit,
    padding_x: Dp,
    padding_y: Dp,
}

impl<'a> Card<'a> {
    pub fn new(kit: &'a UiKit) -> Self {
        Self {
            kit,
            padding_x: kit.spacing.large,
            padding_y: kit.spacing.large,
        }
    }

    /// 覆盖内边距
    pub fn padding(mut self, horizontal: Dp, vertical: Dp) -> Self {
        self.padding_x = horizontal;
        self.padding_y = vertical;
        self
    }

    fn shadow(&self) -> u16 {
        metrics::shadow_cells(SHADOW_SMALL)
    }

    /// 边框、内边距与阴影占用的总行数
    pub fn vertical_chrome(&self) -> u16 {
        2 + self.padding_y.rows() * 2 + self.shadow()
    }

    /// 容纳 `content_height` 行内容所需的外部高度
    pub fn outer_height(&self, content_height: u16) -> u16 {
        content_height.saturating_add(self.vertical_chrome())
    }

    fn body(&self, area: Rect) -> Rect {
        let shadow = self.shadow();
        Rect::new(
            area.x,
            area.y,
            area.width.saturating_sub(shadow),
            area.height.saturating_sub(shadow),
        )
    }

    /// 内容区域
    pub fn inner(&self, area: Rect) -> Rect {
        let body = inset(self.body(area), 1, 1);
        inset(body, self.padding_x.cols(), self.padding_y.rows())
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.kit.colors;
        let backdrop = colors[Swatch::Background];
        let body = self.body(area);
        let shadow = self.shadow();

        // 阴影层: 向右下偏移
        let shadow_area = Rect::new(
            body.x.saturating_add(shadow),
            body.y.saturating_add(shadow),
            body.width,
            body.height,
        )
        .intersection(area);
        fill(buf, shadow_area, colors[Swatch::Shadow].over(backdrop).into());

        let surface = colors[Swatch::Surface].over(backdrop);
        fill(buf, body, surface.into());
        Block::bordered()
            .border_type(metrics::border_type(RADIUS_LARGE))
            .border_style(fg_bg(
                colors[Swatch::BorderLight].over(surface).into(),
                surface.into(),
            ))
            .render(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_layout_arithmetic() {
        let kit = UiKit::new();
        let card = kit.card();
        // 边框 2 + 内边距 (24dp = 1 行) * 2 + 阴影 1
        assert_eq!(card.vertical_chrome(), 5);
        assert_eq!(card.outer_height(4), 9);
        // 宽度: 边框 1 + 内边距 3 列
        assert_eq!(card.inner(Rect::new(0, 0, 30, 9)), Rect::new(4, 2, 21, 4));
    }

    #[test]
    fn test_compact_padding() {
        let kit = UiKit::new();
        let card = kit.card().padding(kit.spacing.large, kit.spacing.none);
        assert_eq!(card.outer_height(2), 5);
        assert_eq!(card.inner(Rect::new(0, 0, 30, 5)), Rect::new(4, 1, 21, 2));
    }

    #[test]
    fn test_render_paints_shadow_and_surface() {
        let kit = UiKit::new();
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        kit.card().render(area, &mut buf);

        let surface = buf.cell((3, 2)).cloned().unwrap_or_default();
        assert_eq!(surface.bg, Color::from(kit.colors[Swatch::Surface]));

        let shadow = buf.cell((9, 4)).cloned().unwrap_or_default();
        let expected = kit.colors[Swatch::Shadow].over(kit.colors[Swatch::Background]);
        assert_eq!(shadow.bg, Color::from(expected));
    }
}
