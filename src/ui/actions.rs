//! Action 枚举定义 (Intent)
//!
//! 键盘与鼠标事件转化为明确的语义化 Action

use crossterm::event::KeyEvent;

use super::state::{Control, Tab};

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTab(Tab),

    // 焦点
    Focus(Control),
    FocusNext,
    FocusPrev,
    Cancel, // Esc: 先清除焦点，再关闭提示

    /// 按下按钮或切换复选框
    Activate(Control),

    // 文本编辑
    Edit(KeyEvent),
    Paste(String),

    // 滑块
    NudgeSlider(f32),
    SetSlider(f32),

    /// 内容区滚动的行数，负数向上
    Scroll(i32),
}
