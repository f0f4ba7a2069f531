//! 业务逻辑处理 (Update/Dispatch)
//!
//! 事件阶段的 dispatch 与计时阶段的进度推进

use std::time::Instant;

use tracing::{debug, info};
use tui_textarea::{Input, TextArea};

use super::actions::Action;
use super::input::is_line_break;
use super::state::{App, Control, DEMO_BUTTONS, Notification, Tab};
use crate::kit::widgets::{AlertVariant, ButtonVariant};

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SelectTab(tab) => self.select_tab(tab),

            Action::Focus(control) => self.set_focus(Some(control)),
            Action::FocusNext => self.move_focus(1),
            Action::FocusPrev => self.move_focus(-1),
            Action::Cancel => self.cancel(),

            Action::Activate(control) => self.activate(control),

            Action::Edit(key) => {
                if self.focus_is_single_line() && is_line_break(&key) {
                    return;
                }
                if let Some(editor) = self.focused_editor() {
                    editor.input(Input::from(key));
                }
            }
            Action::Paste(text) => {
                let text = if self.focus_is_single_line() {
                    flatten_lines(&text)
                } else {
                    text
                };
                if let Some(editor) = self.focused_editor() {
                    editor.insert_str(text);
                }
            }

            Action::NudgeSlider(delta) => self.set_slider(self.slider + delta),
            Action::SetSlider(value) => self.set_slider(value),

            Action::Scroll(rows) => self.scroll_by(rows),
        }
    }

    // ============ 计时 ============

    /// 进度动画: 距上次推进至少一个间隔时才推进，与帧率无关
    pub fn tick(&mut self, now: Instant) {
        if now.saturating_duration_since(self.last_tick) < self.animation.tick_interval() {
            return;
        }
        if !self.form_submitted && self.progress < self.animation.ceiling {
            self.progress = (self.progress + self.animation.step).clamp(0.0, 1.0);
        }
        self.last_tick = now;
    }

    // ============ 控件 ============

    pub fn activate(&mut self, control: Control) {
        match control {
            Control::Tab(tab) => self.select_tab(tab),
            Control::Demo(variant) => self.press_demo(variant),
            Control::Reset => self.reset_form(),
            Control::Submit => self.submit_form(),
            Control::Checkbox(index) => {
                if let Some(toggle) = self.toggles.get_mut(index) {
                    *toggle = !*toggle;
                }
            }
            Control::Name | Control::Email | Control::Message | Control::Slider => {
                self.set_focus(Some(control))
            }
        }
    }

    /// 切换标签页，重复选择同一页不产生任何变化
    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab == tab {
            return;
        }
        debug!(from = ?self.tab, to = ?tab, "select tab");
        self.tab = tab;
        self.scroll = 0;
        if self.focus.is_some_and(|focus| !matches!(focus, Control::Tab(_))) {
            self.focus = None;
        }
    }

    pub fn press_demo(&mut self, variant: ButtonVariant) {
        if let Some((_, _, level, message)) = DEMO_BUTTONS.iter().find(|(v, ..)| *v == variant) {
            self.notify(*level, message);
        }
    }

    pub fn reset_form(&mut self) {
        self.name = TextArea::default();
        self.email = TextArea::default();
        self.message = TextArea::default();
        self.toggles = [false; 3];
        self.form_submitted = false;
        self.progress = 0.0;
        self.notify(AlertVariant::Info, "Form reset");
    }

    pub fn submit_form(&mut self) {
        self.form_submitted = true;
        self.progress = 1.0;
        info!(
            name = %self.name.lines().join(" "),
            email = %self.email_text(),
            "form submitted"
        );
        self.notify(AlertVariant::Success, "Form submitted successfully!");
    }

    pub fn notify(&mut self, level: AlertVariant, message: &str) {
        debug!(?level, message, "notification");
        self.notification = Some(Notification {
            message: message.to_string(),
            level,
        });
    }

    pub fn set_slider(&mut self, value: f32) {
        if !value.is_nan() {
            self.slider = value.clamp(0.0, 1.0);
        }
    }

    // ============ 焦点 ============

    fn focus_is_single_line(&self) -> bool {
        self.focus.is_some_and(Control::is_single_line)
    }

    fn focused_editor(&mut self) -> Option<&mut TextArea<'static>> {
        let control = self.focus?;
        self.editor_mut(control)
    }

    pub fn set_focus(&mut self, focus: Option<Control>) {
        if self.focus != focus {
            self.focus = focus;
            self.follow_focus = focus.is_some();
        }
    }

    /// 按焦点顺序循环移动
    pub fn move_focus(&mut self, step: isize) {
        let order = self.focus_order();
        let len = order.len() as isize;
        let next = match self.focus.and_then(|f| order.iter().position(|c| *c == f)) {
            Some(current) => (current as isize + step).rem_euclid(len),
            None if step >= 0 => 0,
            None => len - 1,
        };
        self.set_focus(order.get(next as usize).copied());
    }

    /// Esc: 有焦点时清除焦点，否则关闭提示
    pub fn cancel(&mut self) {
        if self.focus.is_some() {
            self.set_focus(None);
        } else {
            self.notification = None;
        }
    }

    // ============ 滚动 ============

    /// 上界在绘制时按内容高度截断
    pub fn scroll_by(&mut self, rows: i32) {
        let next = (i32::from(self.scroll) + rows).clamp(0, i32::from(u16::MAX));
        self.scroll = u16::try_from(next).unwrap_or(u16::MAX);
        self.follow_focus = false;
    }
}

/// 单行输入框粘贴时换行替换为空格
fn flatten_lines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
