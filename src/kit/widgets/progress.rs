use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::fill;
use crate::kit::UiKit;
use crate::kit::palette::Swatch;

/// 进度条，始终占一行
pub struct ProgressBar<'a> {
    kit: &'a UiKit,
    progress: f32,
}

impl<'a> ProgressBar<'a> {
    pub const HEIGHT: u16 = 1;

    pub fn new(kit: &'a UiKit, progress: f32) -> Self {
        Self { kit, progress }
    }

    /// 截断到 [0, 1] 后的进度，NaN 视为 0
    pub fn fraction(&self) -> f32 {
        if self.progress.is_nan() {
            0.0
        } else {
            self.progress.clamp(0.0, 1.0)
        }
    }

    /// 已完成部分的列数
    pub fn filled_cols(&self, width: u16) -> u16 {
        (f32::from(width) * self.fraction()).floor() as u16
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.kit.colors;
        let area = Rect::new(area.x, area.y, area.width, area.height.min(Self::HEIGHT));
        fill(buf, area, colors.on(Swatch::Gray200, Swatch::Surface));

        let filled = self.filled_cols(area.width);
        if filled > 0 {
            let bar = Rect::new(area.x, area.y, filled, area.height);
            fill(buf, bar, colors.on(Swatch::Primary500, Swatch::Surface));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_fraction_is_clamped() {
        let kit = UiKit::new();
        assert_eq!(kit.progress_bar(-0.3).fraction(), 0.0);
        assert_eq!(kit.progress_bar(1.7).fraction(), 1.0);
        assert_eq!(kit.progress_bar(0.25).fraction(), 0.25);
        assert_eq!(kit.progress_bar(f32::NAN).fraction(), 0.0);
    }

    #[test]
    fn test_filled_cols() {
        let kit = UiKit::new();
        assert_eq!(kit.progress_bar(0.5).filled_cols(20), 10);
        assert_eq!(kit.progress_bar(0.33).filled_cols(10), 3);
        assert_eq!(kit.progress_bar(-1.0).filled_cols(10), 0);
        assert_eq!(kit.progress_bar(2.0).filled_cols(10), 10);
    }

    #[test]
    fn test_render_fill_and_track() {
        let kit = UiKit::new();
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        kit.progress_bar(0.4).render(area, &mut buf);

        let fill = Color::from(kit.colors[Swatch::Primary500]);
        let track = Color::from(kit.colors[Swatch::Gray200]);
        assert_eq!(buf.cell((3, 0)).map(|c| c.bg), Some(fill));
        assert_eq!(buf.cell((4, 0)).map(|c| c.bg), Some(track));
        // 只占一行
        assert_eq!(buf.cell((0, 1)).map(|c| c.bg), Some(Color::Reset));
    }
}
