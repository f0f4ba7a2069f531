//! 输入事件映射 (Input -> Action)
//!
//! 将按键与鼠标事件转换为 Action

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Position;

use super::actions::Action;
use super::state::{App, Control, Tab};
use crate::kit::interaction::{HitMap, PointerEvent};
use crate::kit::widgets::Slider;

/// 方向键调整滑块的步长
pub const SLIDER_STEP: f32 = 0.05;
/// PageUp / PageDown 滚动的行数
pub const PAGE_ROWS: i32 = 10;
/// 滚轮一格滚动的行数
pub const WHEEL_ROWS: i32 = 3;

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: Option<Control>, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::F(n @ 1..=3) => return Tab::from_index(usize::from(n - 1)).map(Action::SelectTab),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        KeyCode::Esc => return Some(Action::Cancel),
        KeyCode::PageUp => return Some(Action::Scroll(-PAGE_ROWS)),
        KeyCode::PageDown => return Some(Action::Scroll(PAGE_ROWS)),
        _ => {}
    }

    match focus {
        Some(control) if control.is_editor() => match key.code {
            // 单行输入框中换行键跳到下一个控件
            _ if control.is_single_line() && is_line_break(&key) => Some(Action::FocusNext),
            _ => Some(Action::Edit(key)),
        },
        Some(Control::Slider) => match key.code {
            KeyCode::Left => Some(Action::NudgeSlider(-SLIDER_STEP)),
            KeyCode::Right => Some(Action::NudgeSlider(SLIDER_STEP)),
            KeyCode::Home => Some(Action::SetSlider(0.0)),
            KeyCode::End => Some(Action::SetSlider(1.0)),
            _ => scroll_key(key.code),
        },
        Some(control) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate(control)),
            _ => scroll_key(key.code),
        },
        None => scroll_key(key.code),
    }
}

/// Enter 以及编辑器同样视为换行的 Ctrl-M / Ctrl-J
pub fn is_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn scroll_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up => Some(Action::Scroll(-1)),
        KeyCode::Down => Some(Action::Scroll(1)),
        _ => None,
    }
}

/// 命中测试后的指针事件对应的 Action
pub fn pointer_actions(event: PointerEvent<Control>, hits: &HitMap<Control>) -> Vec<Action> {
    match event {
        PointerEvent::Pressed(Control::Slider, position) => vec![
            Action::Focus(Control::Slider),
            Action::SetSlider(slider_value_at(hits, position)),
        ],
        PointerEvent::Pressed(control, _) if control.is_editor() => vec![Action::Focus(control)],
        PointerEvent::Pressed(..) => Vec::new(),
        PointerEvent::Dragged(Control::Slider, position) => {
            vec![Action::SetSlider(slider_value_at(hits, position))]
        }
        PointerEvent::Dragged(..) => Vec::new(),
        PointerEvent::Clicked(control) if control.is_editor() || control == Control::Slider => {
            Vec::new()
        }
        PointerEvent::Clicked(control) => vec![Action::Activate(control)],
        PointerEvent::Wheel(delta) => vec![Action::Scroll(i32::from(delta) * WHEEL_ROWS)],
    }
}

fn slider_value_at(hits: &HitMap<Control>, position: Position) -> f32 {
    hits.rect_of(Control::Slider)
        .map(|track| Slider::fraction_at(track, position.x))
        .unwrap_or_default()
}

/// 处理一个平台事件
pub fn handle_event(app: &mut App, event: &Event) {
    let actions = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            get_action(app.focus, *key).into_iter().collect()
        }
        Event::Mouse(mouse) => match app.pointer.handle(mouse, &app.hits) {
            Some(pointer) => pointer_actions(pointer, &app.hits),
            None => Vec::new(),
        },
        Event::Paste(text) => vec![Action::Paste(text.clone())],
        _ => Vec::new(),
    };

    for action in actions {
        app.dispatch(action);
    }
}
