use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{Size, fg_bg, fill, text_width};
use crate::kit::UiKit;
use crate::kit::palette::{ColorPalette, Swatch, SwatchTones, Tones};

/// 徽标外观
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    Default,
    Success,
    Warning,
    Error,
    Info,
}

const BADGE_TONES: [SwatchTones; 5] = [
    SwatchTones::new(Swatch::Gray200, Swatch::TextPrimary, Swatch::Transparent),
    SwatchTones::new(Swatch::SuccessLight, Swatch::Success, Swatch::Transparent),
    SwatchTones::new(Swatch::WarningLight, Swatch::OnWarning, Swatch::Transparent),
    SwatchTones::new(Swatch::ErrorLight, Swatch::Error, Swatch::Transparent),
    SwatchTones::new(Swatch::InfoLight, Swatch::Info, Swatch::Transparent),
];

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 5] = [
        BadgeVariant::Default,
        BadgeVariant::Success,
        BadgeVariant::Warning,
        BadgeVariant::Error,
        BadgeVariant::Info,
    ];

    pub fn tones(self, palette: &ColorPalette) -> Tones {
        BADGE_TONES[self as usize].resolve(palette)
    }
}

/// 徽标: 单行，左右各留 small 间距
pub struct Badge<'a> {
    kit: &'a UiKit,
    text: Cow<'a, str>,
    variant: BadgeVariant,
}

impl<'a> Badge<'a> {
    pub fn new(kit: &'a UiKit, text: impl Into<Cow<'a, str>>, variant: BadgeVariant) -> Self {
        Self {
            kit,
            text: text.into(),
            variant,
        }
    }

    fn padding(&self) -> u16 {
        self.kit.spacing.small.cols()
    }

    pub fn measure(&self) -> Size {
        Size::new(
            text_width(&self.text).saturating_add(self.padding() * 2),
            1,
        )
    }
}

impl Widget for Badge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.kit.colors;
        let tones = self.variant.tones(colors);
        let background = tones.background.over(colors[Swatch::Surface]);
        let width = self.measure().width.min(area.width);
        let area = Rect::new(area.x, area.y, width, area.height.min(1));

        fill(buf, area, background.into());
        let padding = self.padding().min(area.width / 2);
        let text_area = Rect::new(
            area.x + padding,
            area.y,
            area.width.saturating_sub(padding * 2),
            area.height,
        );
        let style = self
            .kit
            .typography
            .label_small
            .style()
            .patch(fg_bg(tones.foreground.over(background).into(), background.into()));
        Paragraph::new(Line::from(Span::styled(self.text, style))).render(text_area, buf);
    }
}
