//! 复选框与滑块

use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{Size, fg_bg, text_width};
use crate::kit::UiKit;
use crate::kit::palette::Swatch;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

pub struct Checkbox<'a> {
    kit: &'a UiKit,
    label: Cow<'a, str>,
    checked: bool,
    hovered: bool,
    focused: bool,
}

impl<'a> Checkbox<'a> {
    pub fn new(kit: &'a UiKit, label: impl Into<Cow<'a, str>>, checked: bool) -> Self {
        Self {
            kit,
            label: label.into(),
            checked,
            hovered: false,
            focused: false,
        }
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn measure(&self) -> Size {
        Size::new(text_width(CHECKED) + 1 + text_width(&self.label), 1)
    }
}

impl Widget for Checkbox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.kit.colors;
        let background = colors.on(Swatch::Surface, Swatch::Background);
        let box_color = if self.checked || self.hovered || self.focused {
            Swatch::Primary500
        } else {
            Swatch::Gray500
        };

        let mut box_style = fg_bg(colors.on(box_color, Swatch::Surface), background)
            .add_modifier(Modifier::BOLD);
        let mut label_style = self
            .kit
            .typography
            .body_large
            .style()
            .patch(fg_bg(colors.on(Swatch::OnSurface, Swatch::Surface), background));
        if self.focused {
            box_style = box_style.add_modifier(Modifier::REVERSED);
            label_style = label_style.add_modifier(Modifier::UNDERLINED);
        }

        let mark = if self.checked { CHECKED } else { UNCHECKED };
        Paragraph::new(Line::from(vec![
            Span::styled(mark, box_style),
            Span::styled(" ", fg_bg(background, background)),
            Span::styled(self.label, label_style),
        ]))
        .render(area, buf);
    }
}

pub struct Slider<'a> {
    kit: &'a UiKit,
    value: f32,
    hovered: bool,
    focused: bool,
}

impl<'a> Slider<'a> {
    pub const HEIGHT: u16 = 1;

    pub fn new(kit: &'a UiKit, value: f32) -> Self {
        Self {
            kit,
            value: if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, 1.0)
            },
            hovered: false,
            focused: false,
        }
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 列 `column` 在轨道 `track` 上对应的取值
    pub fn fraction_at(track: Rect, column: u16) -> f32 {
        if track.width <= 1 {
            return 0.0;
        }
        let offset = column.saturating_sub(track.x).min(track.width - 1);
        f32::from(offset) / f32::from(track.width - 1)
    }

    fn thumb_offset(&self, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        (self.value * f32::from(width - 1)).round() as u16
    }
}

impl Widget for Slider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let colors = &self.kit.colors;
        let background = colors.on(Swatch::Surface, Swatch::Background);
        let active = fg_bg(colors.on(Swatch::Primary500, Swatch::Surface), background);
        let inactive = fg_bg(colors.on(Swatch::Gray300, Swatch::Surface), background);
        let mut thumb = active.add_modifier(Modifier::BOLD);
        if self.focused || self.hovered {
            thumb = thumb.fg(colors.on(Swatch::Primary700, Swatch::Surface));
        }
        if self.focused {
            thumb = thumb.add_modifier(Modifier::REVERSED);
        }

        let thumb_at = self.thumb_offset(area.width);
        for i in 0..area.width {
            let (symbol, style): (&str, Style) = match i.cmp(&thumb_at) {
                std::cmp::Ordering::Less => ("━", active),
                std::cmp::Ordering::Equal => ("●", thumb),
                std::cmp::Ordering::Greater => ("─", inactive),
            };
            if let Some(cell) = buf.cell_mut((area.x + i, area.y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}
