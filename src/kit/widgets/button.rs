use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::{Size, fg_bg, fill, text_width};
use crate::kit::UiKit;
use crate::kit::metrics::{self, Dp, RADIUS_MEDIUM};
use crate::kit::palette::{ColorPalette, Swatch, SwatchTones, Tones};
use crate::kit::typography::TextStyle;

/// 按钮外观
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
    Success,
}

/// 按钮尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

struct VariantStyle {
    tones: SwatchTones,
    hover_background: Option<Swatch>,
}

// 顺序与 ButtonVariant 的声明顺序一致
const VARIANT_STYLES: [VariantStyle; 6] = [
    VariantStyle {
        tones: SwatchTones::new(Swatch::Primary500, Swatch::OnPrimary, Swatch::Transparent),
        hover_background: Some(Swatch::Primary600),
    },
    VariantStyle {
        tones: SwatchTones::new(Swatch::Gray100, Swatch::OnSecondary, Swatch::Transparent),
        hover_background: Some(Swatch::Gray200),
    },
    VariantStyle {
        tones: SwatchTones::new(Swatch::Transparent, Swatch::Primary500, Swatch::Primary500),
        hover_background: None,
    },
    VariantStyle {
        tones: SwatchTones::new(Swatch::Transparent, Swatch::Primary500, Swatch::Transparent),
        hover_background: None,
    },
    VariantStyle {
        tones: SwatchTones::new(Swatch::Error, Swatch::OnError, Swatch::Transparent),
        hover_background: None,
    },
    VariantStyle {
        tones: SwatchTones::new(Swatch::Success, Swatch::OnSuccess, Swatch::Transparent),
        hover_background: None,
    },
];

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 6] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Danger,
        ButtonVariant::Success,
    ];

    fn style(self) -> &'static VariantStyle {
        &VARIANT_STYLES[self as usize]
    }

    /// 背景 / 前景 / 边框，悬停只影响 Primary 与 Secondary 的背景
    pub fn tones(self, palette: &ColorPalette, hovered: bool) -> Tones {
        let style = self.style();
        let mut tones = style.tones.resolve(palette);
        if hovered {
            if let Some(hover) = style.hover_background {
                tones.background = palette[hover];
            }
        }
        tones
    }
}

impl ButtonSize {
    /// 内边距与文字样式
    pub fn metrics(self, kit: &UiKit) -> (Dp, TextStyle) {
        match self {
            ButtonSize::Small => (kit.spacing.small, kit.typography.label_small),
            ButtonSize::Medium => (kit.spacing.medium, kit.typography.label_medium),
            ButtonSize::Large => (kit.spacing.large, kit.typography.label_large),
        }
    }
}

/// 按钮，高度固定为三行 (边框 + 文字 + 边框)
pub struct Button<'a> {
    kit: &'a UiKit,
    label: Cow<'a, str>,
    variant: ButtonVariant,
    size: ButtonSize,
    hovered: bool,
    focused: bool,
    backdrop: Swatch,
}

impl<'a> Button<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(
        kit: &'a UiKit,
        label: impl Into<Cow<'a, str>>,
        variant: ButtonVariant,
        size: ButtonSize,
    ) -> Self {
        Self {
            kit,
            label: label.into(),
            variant,
            size,
            hovered: false,
            focused: false,
            backdrop: Swatch::Surface,
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

    pub fn on(mut self, backdrop: Swatch) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn measure(&self) -> Size {
        let (padding, _) = self.size.metrics(self.kit);
        let width = text_width(&self.label)
            .saturating_add(padding.cols().saturating_mul(2))
            .saturating_add(2);
        Size::new(width, Self::HEIGHT)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.kit.colors;
        let backdrop = colors[self.backdrop].over(colors[Swatch::Background]);
        let tones = self.variant.tones(colors, self.hovered);

        let background = tones.background.over(backdrop);
        let border = if self.focused {
            colors[Swatch::Focus].over(background)
        } else if tones.border.is_transparent() {
            background
        } else {
            tones.border.over(backdrop)
        };

        fill(buf, area, background.into());
        let block = Block::bordered()
            .border_type(metrics::border_type(RADIUS_MEDIUM))
            .border_style(fg_bg(border.into(), background.into()));
        let inner = block.inner(area);
        block.render(area, buf);

        let (_, text_style) = self.size.metrics(self.kit);
        let style = text_style
            .style()
            .fg(tones.foreground.over(background).into())
            .bg(background.into());
        Paragraph::new(Line::from(Span::styled(self.label, style)))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::palette::Rgba;
    use ratatui::style::Color;

    #[test]
    fn test_variant_tones_are_stable() {
        let palette = ColorPalette::new();
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.tones(&palette, false), variant.tones(&palette, false));
        }

        let primary = ButtonVariant::Primary.tones(&palette, false);
        assert_eq!(primary.background, palette[Swatch::Primary500]);
        assert_eq!(primary.foreground, palette[Swatch::OnPrimary]);

        let outline = ButtonVariant::Outline.tones(&palette, false);
        assert_eq!(outline.background, Rgba::TRANSPARENT);
        assert_eq!(outline.border, palette[Swatch::Primary500]);

        let danger = ButtonVariant::Danger.tones(&palette, false);
        assert_eq!(danger.background, palette[Swatch::Error]);
    }

    #[test]
    fn test_hover_only_shifts_primary_and_secondary() {
        let palette = ColorPalette::new();
        for variant in ButtonVariant::ALL {
            let idle = variant.tones(&palette, false);
            let hover = variant.tones(&palette, true);
            match variant {
                ButtonVariant::Primary => {
                    assert_eq!(hover.background, palette[Swatch::Primary600])
                }
                ButtonVariant::Secondary => {
                    assert_eq!(hover.background, palette[Swatch::Gray200])
                }
                _ => assert_eq!(hover, idle),
            }
            assert_eq!(hover.foreground, idle.foreground);
            assert_eq!(hover.border, idle.border);
        }
    }

    #[test]
    fn test_measure_follows_size() {
        let kit = UiKit::new();
        let small = kit.button("Send", ButtonVariant::Primary, ButtonSize::Small);
        let large = kit.button("Send", ButtonVariant::Primary, ButtonSize::Large);
        assert_eq!(small.measure(), Size::new(4 + 2 + 2, 3));
        assert_eq!(large.measure(), Size::new(4 + 6 + 2, 3));
    }

    #[test]
    fn test_render_draws_label_on_variant_background() {
        let kit = UiKit::new();
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        kit.button("Danger", ButtonVariant::Danger, ButtonSize::Medium)
            .render(area, &mut buf);

        let row: String = (0..area.width)
            .filter_map(|x| buf.cell((x, 1)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(row.contains("Danger"));
        let center = buf.cell((6, 1)).cloned().unwrap_or_default();
        assert_eq!(center.bg, Color::from(kit.colors[Swatch::Error]));
    }
}
