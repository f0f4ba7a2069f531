use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::kit::UiKit;
use crate::kit::palette::Swatch;
use crate::kit::typography::TextStyle;

/// 单行排版文本
pub struct Label<'a> {
    kit: &'a UiKit,
    text: Cow<'a, str>,
    style: TextStyle,
    color: Swatch,
    alignment: Alignment,
}

impl<'a> Label<'a> {
    pub fn new(kit: &'a UiKit, text: impl Into<Cow<'a, str>>, style: TextStyle, color: Swatch) -> Self {
        Self {
            kit,
            text: text.into(),
            style,
            color,
            alignment: Alignment::Left,
        }
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }
}

impl Widget for Label<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.kit.colors;
        let style = self
            .style
            .style()
            .fg(colors.on(self.color, Swatch::Surface))
            .bg(colors.on(Swatch::Surface, Swatch::Background));
        Paragraph::new(Line::from(Span::styled(self.text, style)))
            .alignment(self.alignment)
            .render(area, buf);
    }
}
