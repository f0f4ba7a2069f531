use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::{fg_bg, fill, inset, text_width};
use crate::kit::UiKit;
use crate::kit::metrics::{self, RADIUS_MEDIUM};
use crate::kit::palette::{ColorPalette, Swatch, SwatchTones, Tones};

/// 提示框的严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertVariant {
    Info,
    Success,
    Warning,
    Error,
}

struct AlertStyle {
    // 前景即图标颜色
    tones: SwatchTones,
    icon: &'static str,
}

const ALERT_STYLES: [AlertStyle; 4] = [
    AlertStyle {
        tones: SwatchTones::new(Swatch::InfoLight, Swatch::Info, Swatch::Info),
        icon: "ℹ",
    },
    AlertStyle {
        tones: SwatchTones::new(Swatch::SuccessLight, Swatch::Success, Swatch::Success),
        icon: "✓",
    },
    AlertStyle {
        tones: SwatchTones::new(Swatch::WarningLight, Swatch::Warning, Swatch::Warning),
        icon: "⚠",
    },
    AlertStyle {
        tones: SwatchTones::new(Swatch::ErrorLight, Swatch::Error, Swatch::Error),
        icon: "✗",
    },
];

impl AlertVariant {
    pub const ALL: [AlertVariant; 4] = [
        AlertVariant::Info,
        AlertVariant::Success,
        AlertVariant::Warning,
        AlertVariant::Error,
    ];

    fn style(self) -> &'static AlertStyle {
        &ALERT_STYLES[self as usize]
    }

    pub fn tones(self, palette: &ColorPalette) -> Tones {
        self.style().tones.resolve(palette)
    }

    pub fn icon(self) -> &'static str {
        self.style().icon
    }
}

/// 提示框: 图标 + 可选标题 + 正文
pub struct Alert<'a> {
    kit: &'a UiKit,
    title: Cow<'a, str>,
    message: Cow<'a, str>,
    variant: AlertVariant,
}

impl<'a> Alert<'a> {
    pub fn new(
        kit: &'a UiKit,
        title: impl Into<Cow<'a, str>>,
        message: impl Into<Cow<'a, str>>,
        variant: AlertVariant,
    ) -> Self {
        Self {
            kit,
            title: title.into(),
            message: message.into(),
            variant,
        }
    }

    fn padding(&self) -> (u16, u16) {
        let medium = self.kit.spacing.medium;
        (medium.cols(), medium.rows())
    }

    /// 边框 + 内边距 + 标题行 (若有) + 正文行
    pub fn height(&self) -> u16 {
        let (_, rows) = self.padding();
        let title = if self.title.is_empty() {
            0
        } else {
            1 + self.kit.spacing.tiny.rows()
        };
        2 + rows * 2 + title + 1
    }
}

impl Widget for Alert<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.kit.colors;
        let tones = self.variant.tones(colors);
        let background = tones.background.over(colors[Swatch::Surface]);
        let area = Rect::new(area.x, area.y, area.width, area.height.min(self.height()))
            .intersection(buf.area);

        fill(buf, area, background.into());
        let block = Block::bordered()
            .border_type(metrics::border_type(RADIUS_MEDIUM))
            .border_style(fg_bg(tones.border.over(background).into(), background.into()));
        let (cols, rows) = self.padding();
        let inner = inset(block.inner(area), cols, rows);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let icon = self.variant.icon();
        let icon_style = fg_bg(tones.foreground.over(background).into(), background.into());
        buf.set_stringn(inner.x, inner.y, icon, usize::from(inner.width), icon_style);

        let gap = text_width(icon).saturating_add(self.kit.spacing.medium.cols());
        let text_area = Rect::new(
            inner.x.saturating_add(gap),
            inner.y,
            inner.width.saturating_sub(gap),
            inner.height,
        );

        let text_fg = colors[Swatch::OnSurface].over(background).into();
        let mut lines = Vec::with_capacity(2);
        if !self.title.is_empty() {
            let style = self
                .kit
                .typography
                .label_medium
                .style()
                .patch(fg_bg(text_fg, background.into()));
            lines.push(Line::from(Span::styled(self.title, style)));
            for _ in 0..self.kit.spacing.tiny.rows() {
                lines.push(Line::default());
            }
        }
        let style = self
            .kit
            .typography
            .body_medium
            .style()
            .patch(fg_bg(text_fg, background.into()));
        lines.push(Line::from(Span::styled(self.message, style)));
        Paragraph::new(lines).render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_variant_table() {
        let palette = ColorPalette::new();
        let icons: Vec<_> = AlertVariant::ALL.iter().map(|v| v.icon()).collect();
        assert_eq!(icons, ["ℹ", "✓", "⚠", "✗"]);

        let error = AlertVariant::Error.tones(&palette);
        assert_eq!(error.background, palette[Swatch::ErrorLight]);
        assert_eq!(error.border, palette[Swatch::Error]);
        assert_eq!(error.foreground, palette[Swatch::Error]);
    }

    #[test]
    fn test_height_depends_on_title() {
        let kit = UiKit::new();
        assert_eq!(kit.alert("Notice", "body", AlertVariant::Info).height(), 6);
        assert_eq!(kit.alert("", "body", AlertVariant::Info).height(), 5);
    }

    #[test]
    fn test_render_layout() {
        let kit = UiKit::new();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        kit.alert("Notification", "Form reset", AlertVariant::Success)
            .render(area, &mut buf);

        // 边框 1 列 + 内边距 2 列
        let icon = buf.cell((3, 2)).cloned().unwrap_or_default();
        assert_eq!(icon.symbol(), "✓");
        assert_eq!(icon.fg, Color::from(kit.colors[Swatch::Success]));
        assert_eq!(icon.bg, Color::from(kit.colors[Swatch::SuccessLight]));

        assert!(row(&buf, 2).contains("Notification"));
        assert!(row(&buf, 3).contains("Form reset"));
    }
}
