//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::time::Instant;

use tui_textarea::TextArea;

use crate::config::AnimationConfig;
use crate::kit::interaction::{HitMap, Pointer};
use crate::kit::widgets::{AlertVariant, ButtonVariant};

/// 标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Components,
    Form,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Components, Tab::Form, Tab::Settings];

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Components => "Components",
            Tab::Form => "Form",
            Tab::Settings => "Settings",
        }
    }
}

/// 可交互控件的持久身份，跨帧不变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Tab(Tab),
    Demo(ButtonVariant),
    Name,
    Email,
    Message,
    Reset,
    Submit,
    Checkbox(usize),
    Slider,
}

impl Control {
    pub fn is_editor(self) -> bool {
        matches!(self, Control::Name | Control::Email | Control::Message)
    }

    /// 只显示一行的输入框，内容中不能出现换行
    pub fn is_single_line(self) -> bool {
        matches!(self, Control::Name | Control::Email)
    }
}

/// 演示按钮: 外观、文字、点击后的提示级别与内容
pub const DEMO_BUTTONS: [(ButtonVariant, &str, AlertVariant, &str); 6] = [
    (
        ButtonVariant::Primary,
        "Primary",
        AlertVariant::Info,
        "Primary button clicked!",
    ),
    (
        ButtonVariant::Secondary,
        "Secondary",
        AlertVariant::Success,
        "Secondary action performed",
    ),
    (
        ButtonVariant::Outline,
        "Outline",
        AlertVariant::Warning,
        "Outline button pressed",
    ),
    (
        ButtonVariant::Ghost,
        "Ghost",
        AlertVariant::Info,
        "Ghost button clicked",
    ),
    (
        ButtonVariant::Danger,
        "Danger",
        AlertVariant::Error,
        "Danger! This is a destructive action",
    ),
    (
        ButtonVariant::Success,
        "Success",
        AlertVariant::Success,
        "Success! Operation completed",
    ),
];

pub const CHECKBOX_LABELS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// 当前显示的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: AlertVariant,
}

/// 应用状态
pub struct App {
    pub name: TextArea<'static>,
    pub email: TextArea<'static>,
    pub message: TextArea<'static>,
    pub toggles: [bool; 3],
    pub slider: f32,
    pub tab: Tab,
    pub progress: f32,
    pub notification: Option<Notification>,
    pub form_submitted: bool,
    pub last_tick: Instant,
    pub animation: AnimationConfig,

    pub focus: Option<Control>,
    /// 焦点变化后需要滚动到可见位置
    pub follow_focus: bool,
    pub pointer: Pointer<Control>,
    /// 上一帧记录的控件区域
    pub hits: HitMap<Control>,
    pub scroll: u16,
}

fn editor(text: &str) -> TextArea<'static> {
    TextArea::new(vec![text.to_string()])
}

impl App {
    /// 创建新的应用实例
    pub fn new(animation: AnimationConfig, now: Instant) -> Self {
        Self {
            name: editor("John Doe"),
            email: editor("john@example.com"),
            message: editor(
                "This is a sample message to demonstrate the multi-line text editor component.",
            ),
            toggles: [false; 3],
            slider: 0.5,
            tab: Tab::Components,
            progress: 0.0,
            notification: None,
            form_submitted: false,
            last_tick: now,
            animation,
            focus: None,
            follow_focus: false,
            pointer: Pointer::new(),
            hits: HitMap::new(),
            scroll: 0,
        }
    }

    pub fn editor_mut(&mut self, control: Control) -> Option<&mut TextArea<'static>> {
        match control {
            Control::Name => Some(&mut self.name),
            Control::Email => Some(&mut self.email),
            Control::Message => Some(&mut self.message),
            _ => None,
        }
    }

    pub fn email_text(&self) -> String {
        self.email.lines().join("\n")
    }

    /// 非空且不含 '@' 的邮箱视为无效，每帧重新计算
    pub fn email_has_error(&self) -> bool {
        let text = self.email_text();
        !text.is_empty() && !text.contains('@')
    }

    /// 键盘焦点顺序: 标签栏，然后是当前标签页中的控件
    pub fn focus_order(&self) -> Vec<Control> {
        let mut order: Vec<Control> = Tab::ALL.iter().map(|&tab| Control::Tab(tab)).collect();
        match self.tab {
            Tab::Components => {
                order.extend(DEMO_BUTTONS.iter().map(|(variant, ..)| Control::Demo(*variant)))
            }
            Tab::Form => order.extend([
                Control::Name,
                Control::Email,
                Control::Message,
                Control::Reset,
                Control::Submit,
            ]),
            Tab::Settings => {
                order.extend((0..CHECKBOX_LABELS.len()).map(Control::Checkbox));
                order.push(Control::Slider);
            }
        }
        order
    }
}
