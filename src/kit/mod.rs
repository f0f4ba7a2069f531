//! 设计系统组件库
//!
//! - Style Registry: palette / metrics / typography，构造后只读
//! - Widget Library: widgets，每帧由参数和 `&UiKit` 构造，绘制后即丢弃
//! - interaction / scroll: 命中测试与滚动视图

pub mod interaction;
pub mod metrics;
pub mod palette;
pub mod scroll;
pub mod typography;
pub mod widgets;

use std::borrow::Cow;

use metrics::{Dp, Spacing};
use palette::{ColorPalette, Swatch};
use typography::{TextStyle, Typography};
use widgets::{
    Alert, AlertVariant, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, Checkbox,
    Divider, Input, Label, ProgressBar, Slider,
};

/// 设计系统实例: 调色板、间距与字体层级
#[derive(Debug, Clone)]
pub struct UiKit {
    pub colors: ColorPalette,
    pub spacing: Spacing,
    pub typography: Typography,
}

impl UiKit {
    pub fn new() -> Self {
        Self {
            colors: ColorPalette::new(),
            spacing: Spacing::new(),
            typography: Typography::new(),
        }
    }

    pub fn button<'a>(
        &'a self,
        label: impl Into<Cow<'a, str>>,
        variant: ButtonVariant,
        size: ButtonSize,
    ) -> Button<'a> {
        Button::new(self, label, variant, size)
    }

    pub fn input<'a, 't>(
        &'a self,
        editor: &'a mut tui_textarea::TextArea<'t>,
        hint: &'t str,
        has_error: bool,
    ) -> Input<'a, 't> {
        Input::new(self, editor, hint, has_error)
    }

    pub fn card(&self) -> Card<'_> {
        Card::new(self)
    }

    pub fn badge<'a>(&'a self, text: impl Into<Cow<'a, str>>, variant: BadgeVariant) -> Badge<'a> {
        Badge::new(self, text, variant)
    }

    pub fn alert<'a>(
        &'a self,
        title: impl Into<Cow<'a, str>>,
        message: impl Into<Cow<'a, str>>,
        variant: AlertVariant,
    ) -> Alert<'a> {
        Alert::new(self, title, message, variant)
    }

    pub fn progress_bar(&self, progress: f32) -> ProgressBar<'_> {
        ProgressBar::new(self, progress)
    }

    pub fn divider(&self) -> Divider<'_> {
        Divider::new(self)
    }

    pub fn text<'a>(
        &'a self,
        text: impl Into<Cow<'a, str>>,
        style: TextStyle,
        color: Swatch,
    ) -> Label<'a> {
        Label::new(self, text, style, color)
    }

    pub fn checkbox<'a>(&'a self, label: impl Into<Cow<'a, str>>, checked: bool) -> Checkbox<'a> {
        Checkbox::new(self, label, checked)
    }

    pub fn slider(&self, value: f32) -> Slider<'_> {
        Slider::new(self, value)
    }

    /// 垂直间隔的行数
    pub fn space_rows(&self, size: Dp) -> u16 {
        size.rows()
    }

    /// 水平间隔的列数
    pub fn space_cols(&self, size: Dp) -> u16 {
        size.cols()
    }
}

impl Default for UiKit {
    fn default() -> Self {
        Self::new()
    }
}
