//! 尺寸系统 (Style Registry - 间距 / 圆角 / 阴影)
//!
//! 布局以密度无关单位 dp 描述，终端单元格按 8dp x 16dp 换算。

use std::ops::Mul;

use ratatui::widgets::BorderType;

/// 单元格宽度 (dp)
pub const CELL_WIDTH_DP: f32 = 8.0;
/// 单元格高度 (dp)
pub const CELL_HEIGHT_DP: f32 = 16.0;

/// 密度无关长度
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl Dp {
    /// 水平方向占用的列数 (向下取整)
    pub fn cols(self) -> u16 {
        to_cells(self.0, CELL_WIDTH_DP)
    }

    /// 垂直方向占用的行数 (向下取整)
    pub fn rows(self) -> u16 {
        to_cells(self.0, CELL_HEIGHT_DP)
    }
}

impl Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

fn to_cells(value: f32, cell: f32) -> u16 {
    if value <= 0.0 {
        return 0;
    }
    (value / cell).floor().min(f32::from(u16::MAX)) as u16
}

/// 字号单位
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Sp(pub f32);

/// 间距基准单位
pub const BASE_UNIT: Dp = Dp(4.0);

// 圆角
pub const RADIUS_SMALL: Dp = Dp(4.0);
pub const RADIUS_MEDIUM: Dp = Dp(8.0);
pub const RADIUS_LARGE: Dp = Dp(12.0);
pub const RADIUS_XL: Dp = Dp(16.0);

// 阴影
pub const SHADOW_SMALL: Dp = Dp(2.0);
pub const SHADOW_MEDIUM: Dp = Dp(4.0);
pub const SHADOW_LARGE: Dp = Dp(8.0);

/// 圆角在终端上只能表现为圆角框线或直角框线
pub fn border_type(radius: Dp) -> BorderType {
    if radius >= RADIUS_MEDIUM {
        BorderType::Rounded
    } else {
        BorderType::Plain
    }
}

/// 阴影偏移的单元格数，任何非零阴影至少占一格
pub fn shadow_cells(blur: Dp) -> u16 {
    if blur.0 > 0.0 { blur.rows().max(1) } else { 0 }
}

/// 间距刻度，均为基准单位的整数倍
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub none: Dp,
    pub tiny: Dp,
    pub small: Dp,
    pub medium: Dp,
    pub large: Dp,
    pub xlarge: Dp,
    pub xxlarge: Dp,
    pub xxxlarge: Dp,
}

impl Spacing {
    pub fn new() -> Self {
        Self {
            none: Dp(0.0),
            tiny: BASE_UNIT,
            small: BASE_UNIT * 2.0,
            medium: BASE_UNIT * 4.0,
            large: BASE_UNIT * 6.0,
            xlarge: BASE_UNIT * 8.0,
            xxlarge: BASE_UNIT * 12.0,
            xxxlarge: BASE_UNIT * 16.0,
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::new()
    }
}
