//! 字体层级 (Style Registry - 排版)

use ratatui::style::{Modifier, Style};

use super::metrics::Sp;

/// 单个文本样式
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: Sp,
    pub line_height: f32,
    pub weight: u16,
}

impl TextStyle {
    pub const fn new(size: f32, line_height: f32, weight: u16) -> Self {
        Self {
            size: Sp(size),
            line_height,
            weight,
        }
    }

    /// 终端无法缩放字号，大字号与中等字重统一表现为粗体
    pub fn is_emphasized(&self) -> bool {
        self.weight >= 500 || self.size.0 >= 24.0
    }

    pub fn style(&self) -> Style {
        if self.is_emphasized() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }
}

/// 完整字体层级
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub display_large: TextStyle,
    pub display_medium: TextStyle,
    pub display_small: TextStyle,
    pub headline_large: TextStyle,
    pub headline_medium: TextStyle,
    pub headline_small: TextStyle,
    pub title_large: TextStyle,
    pub title_medium: TextStyle,
    pub title_small: TextStyle,
    pub body_large: TextStyle,
    pub body_medium: TextStyle,
    pub body_small: TextStyle,
    pub label_large: TextStyle,
    pub label_medium: TextStyle,
    pub label_small: TextStyle,
}

impl Typography {
    pub fn new() -> Self {
        Self {
            display_large: TextStyle::new(57.0, 64.0, 400),
            display_medium: TextStyle::new(45.0, 52.0, 400),
            display_small: TextStyle::new(36.0, 44.0, 400),
            headline_large: TextStyle::new(32.0, 40.0, 400),
            headline_medium: TextStyle::new(28.0, 36.0, 400),
            headline_small: TextStyle::new(24.0, 32.0, 400),
            title_large: TextStyle::new(22.0, 28.0, 500),
            title_medium: TextStyle::new(16.0, 24.0, 500),
            title_small: TextStyle::new(14.0, 20.0, 500),
            body_large: TextStyle::new(16.0, 24.0, 400),
            body_medium: TextStyle::new(14.0, 20.0, 400),
            body_small: TextStyle::new(12.0, 16.0, 400),
            label_large: TextStyle::new(14.0, 20.0, 500),
            label_medium: TextStyle::new(12.0, 16.0, 500),
            label_small: TextStyle::new(11.0, 16.0, 500),
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self::new()
    }
}
