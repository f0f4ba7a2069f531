//! 垂直滚动视图
//!
//! 内容先完整绘制到离屏缓冲区，再把可见窗口拷贝到目标区域，
//! 同时把离屏阶段记录的命中区域平移到屏幕坐标。

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use super::interaction::HitMap;

/// 将滚动偏移限制在内容范围内
pub fn clamp_offset(offset: u16, content_height: u16, viewport_height: u16) -> u16 {
    offset.min(content_height.saturating_sub(viewport_height))
}

/// 调整偏移使 `target` (内容坐标) 完整可见
pub fn reveal(offset: u16, target: Rect, viewport_height: u16) -> u16 {
    let bottom = target.y.saturating_add(target.height);
    if target.y < offset {
        target.y
    } else if bottom > offset.saturating_add(viewport_height) {
        bottom.saturating_sub(viewport_height).min(target.y)
    } else {
        offset
    }
}

/// 绘制可滚动内容
///
/// `draw` 收到的区域从 (0, 0) 开始，宽度与视口相同，高度为 `content_height`。
/// `focus` 为当前焦点控件，若它在内容中则保证其可见。
#[allow(clippy::too_many_arguments)]
pub fn render_scrolled<K, F>(
    buf: &mut Buffer,
    viewport: Rect,
    content_height: u16,
    background: Style,
    offset: &mut u16,
    focus: Option<K>,
    hits: &mut HitMap<K>,
    draw: F,
) where
    K: Copy + PartialEq,
    F: FnOnce(&mut Buffer, Rect, &mut HitMap<K>),
{
    if viewport.width == 0 || viewport.height == 0 {
        return;
    }

    let content_area = Rect::new(0, 0, viewport.width, content_height.max(viewport.height));
    let mut scratch = Buffer::empty(content_area);
    scratch.set_style(content_area, background);

    let start = hits.len();
    draw(&mut scratch, content_area, hits);

    let mut top = clamp_offset(*offset, content_area.height, viewport.height);
    if let Some(key) = focus {
        if let Some(target) = hits.rect_of_since(start, key) {
            top = reveal(top, target, viewport.height);
        }
    }
    *offset = top;

    for row in 0..viewport.height {
        for col in 0..viewport.width {
            let src = scratch.cell((col, top + row)).cloned();
            if let (Some(cell), Some(dst)) =
                (src, buf.cell_mut((viewport.x + col, viewport.y + row)))
            {
                *dst = cell;
            }
        }
    }

    hits.translate_from(
        start,
        i32::from(viewport.x),
        i32::from(viewport.y) - i32::from(top),
        viewport,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(10, 30, 20), 10);
        assert_eq!(clamp_offset(15, 30, 20), 10);
        assert_eq!(clamp_offset(5, 10, 20), 0);
    }

    #[test]
    fn test_reveal() {
        let target = Rect::new(0, 25, 10, 3);
        assert_eq!(reveal(0, target, 20), 8);
        assert_eq!(reveal(26, target, 20), 25);
        assert_eq!(reveal(10, target, 20), 10);
    }

    #[test]
    fn test_render_scrolled_copies_window_and_translates_hits() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 6));
        let viewport = Rect::new(1, 1, 8, 4);
        let mut hits: HitMap<u8> = HitMap::new();
        let mut offset = 2;

        render_scrolled(
            &mut buf,
            viewport,
            10,
            Style::default(),
            &mut offset,
            None,
            &mut hits,
            |scratch, area, hits| {
                for y in 0..area.height {
                    scratch.set_string(0, y, format!("r{y}"), Style::default());
                }
                hits.push(7, Rect::new(0, 3, 8, 1));
            },
        );

        assert_eq!(offset, 2);
        assert_eq!(buf.cell((1, 1)).map(|c| c.symbol()), Some("r"));
        assert_eq!(buf.cell((2, 1)).map(|c| c.symbol()), Some("2"));
        assert_eq!(hits.hit(Position::new(3, 2)), Some(7));
        assert_eq!(hits.rect_of(7), Some(Rect::new(1, 2, 8, 1)));
    }

    #[test]
    fn test_render_scrolled_follows_focus() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        let mut hits: HitMap<u8> = HitMap::new();
        let mut offset = 0;

        render_scrolled(
            &mut buf,
            Rect::new(0, 0, 10, 5),
            40,
            Style::default(),
            &mut offset,
            Some(3),
            &mut hits,
            |_, _, hits| hits.push(3, Rect::new(0, 20, 10, 3)),
        );

        assert_eq!(offset, 18);
        assert_eq!(hits.rect_of(3), Some(Rect::new(0, 2, 10, 3)));
    }
}
