use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Widget},
};
use tui_textarea::TextArea;

use super::{fg_bg, fill, inset};
use crate::kit::UiKit;
use crate::kit::metrics::{self, RADIUS_MEDIUM};
use crate::kit::palette::{Swatch, Tones};

/// 文本输入框
///
/// 编辑、光标与选区全部交给 `tui_textarea`，这里只负责外框与配色。
pub struct Input<'a, 't> {
    kit: &'a UiKit,
    editor: &'a mut TextArea<'t>,
    hint: &'t str,
    has_error: bool,
    focused: bool,
}

impl<'a, 't> Input<'a, 't> {
    /// 单行输入框的高度
    pub const SINGLE_LINE_HEIGHT: u16 = 3;

    pub fn new(kit: &'a UiKit, editor: &'a mut TextArea<'t>, hint: &'t str, has_error: bool) -> Self {
        Self {
            kit,
            editor,
            hint,
            has_error,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 边框颜色: 错误优先，其次焦点，否则默认
    pub fn border_swatch(has_error: bool, focused: bool) -> Swatch {
        if has_error {
            Swatch::Error
        } else if focused {
            Swatch::Primary500
        } else {
            Swatch::Border
        }
    }

    fn tones(&self) -> Tones {
        let colors = &self.kit.colors;
        Tones {
            background: colors[Swatch::Surface],
            foreground: colors[Swatch::OnSurface],
            border: colors[Self::border_swatch(self.has_error, self.focused)],
        }
    }
}

impl Widget for Input<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.kit.colors;
        let tones = self.tones();
        let background = tones.background.over(colors[Swatch::Background]);

        fill(buf, area, background.into());
        let block = Block::bordered()
            .border_type(metrics::border_type(RADIUS_MEDIUM))
            .border_style(fg_bg(tones.border.over(background).into(), background.into()));
        let inner = inset(block.inner(area), self.kit.spacing.medium.cols(), 0);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let text_style = fg_bg(tones.foreground.into(), background.into());
        self.editor.set_block(Block::default().style(text_style));
        self.editor.set_style(text_style);
        self.editor.set_cursor_line_style(Style::default());
        self.editor.set_placeholder_text(self.hint);
        self.editor
            .set_placeholder_style(fg_bg(colors[Swatch::TextSecondary].into(), background.into()));
        if self.focused {
            self.editor
                .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            // 失去焦点时隐藏光标
            self.editor.set_cursor_style(text_style);
        }

        (&*self.editor).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_priority() {
        assert_eq!(Input::border_swatch(true, true), Swatch::Error);
        assert_eq!(Input::border_swatch(true, false), Swatch::Error);
        assert_eq!(Input::border_swatch(false, true), Swatch::Primary500);
        assert_eq!(Input::border_swatch(false, false), Swatch::Border);
    }

    #[test]
    fn test_render_shows_content_and_error_border() {
        let kit = UiKit::new();
        let mut editor = TextArea::new(vec!["abc".to_string()]);
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        kit.input(&mut editor, "email", true).render(area, &mut buf);

        let row: String = (0..area.width)
            .filter_map(|x| buf.cell((x, 1)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(row.contains("abc"));
        let corner = buf.cell((0, 0)).cloned().unwrap_or_default();
        assert_eq!(
            corner.fg,
            ratatui::style::Color::from(kit.colors[Swatch::Error])
        );
    }

    #[test]
    fn test_render_shows_hint_when_empty() {
        let kit = UiKit::new();
        let mut editor = TextArea::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        kit.input(&mut editor, "Enter your full name", false)
            .render(area, &mut buf);

        let row: String = (0..area.width)
            .filter_map(|x| buf.cell((x, 1)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(row.contains("Enter your full name"));
    }
}
