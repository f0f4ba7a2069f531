//! 调色板 (Style Registry - 颜色)
//!
//! 所有颜色都以带 alpha 的 `Rgba` 存储，终端单元格没有透明通道，
//! 绘制前需先与背景色合成 (`Rgba::over`)。

use std::ops::Index;

use ratatui::style::Color;

/// 8 位 RGBA 颜色 (非预乘)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// 将自身合成到 `backdrop` 之上 (source-over)
    pub fn over(self, backdrop: Rgba) -> Rgba {
        if self.a == 0xFF {
            return self;
        }
        if self.a == 0 {
            return backdrop;
        }

        let sa = u32::from(self.a);
        let da = u32::from(backdrop.a) * (255 - sa) / 255;
        let out_a = sa + da;
        let mix = |s: u8, d: u8| -> u8 {
            let v = (u32::from(s) * sa + u32::from(d) * da + out_a / 2) / out_a;
            v.min(255) as u8
        };

        Rgba {
            r: mix(self.r, backdrop.r),
            g: mix(self.g, backdrop.g),
            b: mix(self.b, backdrop.b),
            a: out_a.min(255) as u8,
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// 调色板中的具名颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swatch {
    // 主色 (蓝灰)
    Primary50,
    Primary100,
    Primary200,
    Primary300,
    Primary400,
    Primary500,
    Primary600,
    Primary700,
    Primary800,
    Primary900,

    // 中性灰
    Gray50,
    Gray100,
    Gray200,
    Gray300,
    Gray400,
    Gray500,
    Gray600,
    Gray700,
    Gray800,
    Gray900,

    // 语义色
    Success,
    SuccessLight,
    Warning,
    WarningLight,
    Error,
    ErrorLight,
    Info,
    InfoLight,

    // 表面
    White,
    Background,
    Surface,
    SurfaceElevated,

    // 文本
    TextPrimary,
    TextSecondary,
    TextDisabled,
    TextInverse,

    // 边框
    Border,
    BorderLight,
    BorderHover,

    // 特殊
    Shadow,
    Overlay,
    Focus,

    OnBackground,
    OnSurface,
    OnPrimary,
    OnSecondary,
    OnError,
    OnSuccess,
    OnWarning,
    OnInfo,
    OnSurfaceElevated,
    OnSurfaceDisabled,
    OnSurfaceVariant,

    Transparent,
}

impl Swatch {
    pub const COUNT: usize = 54;

    pub const ALL: [Swatch; Self::COUNT] = [
        Swatch::Primary50,
        Swatch::Primary100,
        Swatch::Primary200,
        Swatch::Primary300,
        Swatch::Primary400,
        Swatch::Primary500,
        Swatch::Primary600,
        Swatch::Primary700,
        Swatch::Primary800,
        Swatch::Primary900,
        Swatch::Gray50,
        Swatch::Gray100,
        Swatch::Gray200,
        Swatch::Gray300,
        Swatch::Gray400,
        Swatch::Gray500,
        Swatch::Gray600,
        Swatch::Gray700,
        Swatch::Gray800,
        Swatch::Gray900,
        Swatch::Success,
        Swatch::SuccessLight,
        Swatch::Warning,
        Swatch::WarningLight,
        Swatch::Error,
        Swatch::ErrorLight,
        Swatch::Info,
        Swatch::InfoLight,
        Swatch::White,
        Swatch::Background,
        Swatch::Surface,
        Swatch::SurfaceElevated,
        Swatch::TextPrimary,
        Swatch::TextSecondary,
        Swatch::TextDisabled,
        Swatch::TextInverse,
        Swatch::Border,
        Swatch::BorderLight,
        Swatch::BorderHover,
        Swatch::Shadow,
        Swatch::Overlay,
        Swatch::Focus,
        Swatch::OnBackground,
        Swatch::OnSurface,
        Swatch::OnPrimary,
        Swatch::OnSecondary,
        Swatch::OnError,
        Swatch::OnSuccess,
        Swatch::OnWarning,
        Swatch::OnInfo,
        Swatch::OnSurfaceElevated,
        Swatch::OnSurfaceDisabled,
        Swatch::OnSurfaceVariant,
        Swatch::Transparent,
    ];

    /// 默认主题 (现代蓝灰) 中该颜色的取值
    pub const fn default_value(self) -> Rgba {
        match self {
            Swatch::Primary50 => Rgba::rgb(0xF8, 0xFA, 0xFC),
            Swatch::Primary100 => Rgba::rgb(0xF1, 0xF5, 0xF9),
            Swatch::Primary200 => Rgba::rgb(0xE2, 0xE8, 0xF0),
            Swatch::Primary300 => Rgba::rgb(0xCB, 0xD5, 0xE1),
            Swatch::Primary400 => Rgba::rgb(0x94, 0xA3, 0xB8),
            Swatch::Primary500 => Rgba::rgb(0x64, 0x74, 0x8B),
            Swatch::Primary600 => Rgba::rgb(0x47, 0x56, 0x69),
            Swatch::Primary700 => Rgba::rgb(0x33, 0x4E, 0x68),
            Swatch::Primary800 => Rgba::rgb(0x2D, 0x3F, 0x58),
            Swatch::Primary900 => Rgba::rgb(0x1E, 0x29, 0x3B),

            Swatch::Gray50 => Rgba::rgb(0xF9, 0xFA, 0xFB),
            Swatch::Gray100 => Rgba::rgb(0xF3, 0xF4, 0xF6),
            Swatch::Gray200 => Rgba::rgb(0xE5, 0xE7, 0xEB),
            Swatch::Gray300 => Rgba::rgb(0xD1, 0xD5, 0xDB),
            Swatch::Gray400 => Rgba::rgb(0x9C, 0xA3, 0xAF),
            Swatch::Gray500 => Rgba::rgb(0x6B, 0x72, 0x80),
            Swatch::Gray600 => Rgba::rgb(0x4B, 0x55, 0x63),
            Swatch::Gray700 => Rgba::rgb(0x37, 0x41, 0x51),
            Swatch::Gray800 => Rgba::rgb(0x1F, 0x29, 0x37),
            Swatch::Gray900 => Rgba::rgb(0x11, 0x18, 0x27),

            Swatch::Success => Rgba::rgb(0x10, 0xB9, 0x81),
            Swatch::SuccessLight => Rgba::rgb(0xD1, 0xFA, 0xE5),
            Swatch::Warning => Rgba::rgb(0xF5, 0x9E, 0x0B),
            Swatch::WarningLight => Rgba::rgb(0xFE, 0xF3, 0xC7),
            Swatch::Error => Rgba::rgb(0xEF, 0x44, 0x44),
            Swatch::ErrorLight => Rgba::rgb(0xFE, 0xE2, 0xE2),
            Swatch::Info => Rgba::rgb(0x38, 0x94, 0xF6),
            Swatch::InfoLight => Rgba::rgb(0xDB, 0xEA, 0xFE),

            Swatch::White => Rgba::rgb(0xFF, 0xFF, 0xFF),
            Swatch::Background => Rgba::rgb(0xF9, 0xFA, 0xFB),
            Swatch::Surface => Rgba::rgb(0xFF, 0xFF, 0xFF),
            Swatch::SurfaceElevated => Rgba::rgb(0xFF, 0xFF, 0xFF),

            Swatch::TextPrimary => Rgba::rgb(0x11, 0x18, 0x27),
            Swatch::TextSecondary => Rgba::rgb(0x6B, 0x72, 0x80),
            Swatch::TextDisabled => Rgba::rgb(0x9C, 0xA3, 0xAF),
            Swatch::TextInverse => Rgba::rgb(0xFF, 0xFF, 0xFF),

            Swatch::Border => Rgba::rgb(0xE5, 0xE7, 0xEB),
            Swatch::BorderLight => Rgba::rgb(0xF3, 0xF4, 0xF6),
            Swatch::BorderHover => Rgba::rgb(0xD1, 0xD5, 0xDB),

            Swatch::Shadow => Rgba::rgba(0x00, 0x00, 0x00, 0x0F),
            Swatch::Overlay => Rgba::rgba(0x00, 0x00, 0x00, 0x40),
            Swatch::Focus => Rgba::rgba(0x38, 0x94, 0xF6, 0x60),

            Swatch::OnBackground => Rgba::rgb(0x11, 0x18, 0x27),
            Swatch::OnSurface => Rgba::rgb(0x11, 0x18, 0x27),
            Swatch::OnPrimary => Rgba::rgb(0xFF, 0xFF, 0xFF),
            Swatch::OnSecondary => Rgba::rgb(0x11, 0x18, 0x27),
            Swatch::OnError => Rgba::rgb(0xFF, 0xFF, 0xFF),
            Swatch::OnSuccess => Rgba::rgb(0xFF, 0xFF, 0xFF),
            Swatch::OnWarning => Rgba::rgb(0x11, 0x18, 0x27),
            Swatch::OnInfo => Rgba::rgb(0xFF, 0xFF, 0xFF),
            Swatch::OnSurfaceElevated => Rgba::rgb(0x11, 0x18, 0x27),
            Swatch::OnSurfaceDisabled => Rgba::rgb(0x9C, 0xA3, 0xAF),
            Swatch::OnSurfaceVariant => Rgba::rgb(0x47, 0x56, 0x69),

            Swatch::Transparent => Rgba::TRANSPARENT,
        }
    }
}

/// 一组控件配色: 背景 / 前景 / 边框
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tones {
    pub background: Rgba,
    pub foreground: Rgba,
    pub border: Rgba,
}

/// 配色查表项，由调色板解析为 [`Tones`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchTones {
    pub background: Swatch,
    pub foreground: Swatch,
    pub border: Swatch,
}

impl SwatchTones {
    pub const fn new(background: Swatch, foreground: Swatch, border: Swatch) -> Self {
        Self {
            background,
            foreground,
            border,
        }
    }

    pub fn resolve(&self, palette: &ColorPalette) -> Tones {
        Tones {
            background: palette[self.background],
            foreground: palette[self.foreground],
            border: palette[self.border],
        }
    }
}

/// 完整调色板，按 [`Swatch`] 索引
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    values: [Rgba; Swatch::COUNT],
}

impl ColorPalette {
    pub fn new() -> Self {
        Self {
            values: Swatch::ALL.map(Swatch::default_value),
        }
    }

    /// 合成到 `backdrop` 后转换为终端颜色
    pub fn on(&self, swatch: Swatch, backdrop: Swatch) -> Color {
        self[swatch].over(self[backdrop]).into()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Swatch> for ColorPalette {
    type Output = Rgba;

    fn index(&self, swatch: Swatch) -> &Rgba {
        &self.values[swatch as usize]
    }
}
