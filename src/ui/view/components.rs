//! 通用 UI 组件
//!
//! 卡片、按钮等在各标签页中重复出现的绘制片段

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::layouts::{self, Column};
use crate::kit::UiKit;
use crate::kit::interaction::HitMap;
use crate::kit::palette::Swatch;
use crate::kit::typography::TextStyle;
use crate::kit::widgets::{ButtonSize, ButtonVariant};
use crate::ui::state::Control;

/// 焦点与悬停状态，决定控件的强调样式
#[derive(Debug, Clone, Copy, Default)]
pub struct Cues {
    pub focus: Option<Control>,
    pub hovered: Option<Control>,
}

impl Cues {
    pub fn is_focused(&self, control: Control) -> bool {
        self.focus == Some(control)
    }

    pub fn is_hovered(&self, control: Control) -> bool {
        self.hovered == Some(control)
    }
}

/// 绘制上下文: 设计系统、交互提示与本帧的命中区域
pub struct Canvas<'a, 'b> {
    pub kit: &'a UiKit,
    pub cues: Cues,
    pub buf: &'b mut Buffer,
    pub hits: &'b mut HitMap<Control>,
}

impl Canvas<'_, '_> {
    /// [组件] 卡片外框，返回内容区
    pub fn card(&mut self, area: Rect) -> Rect {
        let card = self.kit.card();
        let inner = card.inner(area);
        card.render(area, self.buf);
        inner
    }

    /// [组件] 单行文本
    pub fn text(&mut self, area: Rect, text: &str, style: TextStyle, color: Swatch) {
        self.kit.text(text, style, color).render(area, self.buf);
    }

    /// [组件] 区块标题
    pub fn heading(&mut self, area: Rect, text: &str) {
        let style = self.kit.typography.headline_small;
        self.text(area, text, style, Swatch::TextPrimary);
    }

    /// [组件] 可交互按钮，记录命中区域
    pub fn button(&mut self, area: Rect, control: Control, label: &str, variant: ButtonVariant) {
        self.kit
            .button(label, variant, ButtonSize::Medium)
            .hovered(self.cues.is_hovered(control))
            .focused(self.cues.is_focused(control))
            .render(area, self.buf);
        self.hits.push(control, area);
    }

    /// [组件] 一行按自然宽度排列的按钮
    pub fn button_row(&mut self, area: Rect, buttons: &[(Control, &str, ButtonVariant)]) {
        let widths: Vec<u16> = buttons
            .iter()
            .map(|(_, label, variant)| {
                self.kit
                    .button(*label, *variant, ButtonSize::Medium)
                    .measure()
                    .width
            })
            .collect();
        let gap = self.kit.space_cols(self.kit.spacing.medium);
        for (rect, (control, label, variant)) in layouts::row(area, &widths, gap).into_iter().zip(buttons) {
            self.button(rect, *control, label, *variant);
        }
    }
}

/// 卡片内容区的高度为 `content` 行时卡片的总高度
pub fn card_height(kit: &UiKit, content: u16) -> u16 {
    kit.card().outer_height(content)
}

/// 在纵向容器中取出一张卡片，返回卡片内容区的纵向容器
pub fn take_card(canvas: &mut Canvas<'_, '_>, column: &mut Column, content: u16) -> Column {
    let area = column.take(card_height(canvas.kit, content));
    Column::new(canvas.card(area))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn test_button_row_records_hits() {
        let kit = UiKit::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 3));
        let mut hits = HitMap::new();
        let mut canvas = Canvas {
            kit: &kit,
            cues: Cues::default(),
            buf: &mut buf,
            hits: &mut hits,
        };
        canvas.button_row(
            Rect::new(0, 0, 40, 3),
            &[
                (Control::Reset, "Clear", ButtonVariant::Outline),
                (Control::Submit, "Send", ButtonVariant::Primary),
            ],
        );

        // "Clear" 5 列 + 内边距 2*2 + 边框 2 = 11，间隔 2 列
        assert_eq!(hits.rect_of(Control::Reset), Some(Rect::new(0, 0, 11, 3)));
        assert_eq!(hits.rect_of(Control::Submit), Some(Rect::new(13, 0, 10, 3)));
        assert_eq!(hits.hit(Position::new(12, 1)), None);
    }

    #[test]
    fn test_cues() {
        let cues = Cues {
            focus: Some(Control::Name),
            hovered: Some(Control::Slider),
        };
        assert!(cues.is_focused(Control::Name));
        assert!(!cues.is_focused(Control::Slider));
        assert!(cues.is_hovered(Control::Slider));
    }
}
