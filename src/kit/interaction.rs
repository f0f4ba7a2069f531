//! 指针交互
//!
//! 构建阶段把每个可交互控件的屏幕区域记录到 [`HitMap`]，
//! 下一帧的事件阶段用它对鼠标事件做命中测试。控件身份由调用方的 `K` 提供，
//! 跨帧保持不变。

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// 一帧内所有可交互控件的区域，后记录者在上层
#[derive(Debug, Clone)]
pub struct HitMap<K> {
    regions: Vec<(K, Rect)>,
}

impl<K> Default for HitMap<K> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq> HitMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn push(&mut self, key: K, rect: Rect) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((key, rect));
        }
    }

    /// 命中测试，返回最上层的控件
    pub fn hit(&self, position: Position) -> Option<K> {
        self.regions
            .iter()
            .rev()
            .find(|(_, rect)| contains(*rect, position))
            .map(|(key, _)| *key)
    }

    pub fn rect_of(&self, key: K) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, rect)| *rect)
    }

    /// 只在 `start` 之后记录的区域中查找
    pub fn rect_of_since(&self, start: usize, key: K) -> Option<Rect> {
        self.regions
            .get(start..)?
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, rect)| *rect)
    }

    /// 把 `start` 之后记录的区域从离屏坐标平移到屏幕坐标，并裁剪到 `clip`
    pub fn translate_from(&mut self, start: usize, dx: i32, dy: i32, clip: Rect) {
        let mut kept = Vec::with_capacity(self.regions.len());
        for (i, (key, rect)) in self.regions.drain(..).enumerate() {
            if i < start {
                kept.push((key, rect));
                continue;
            }
            if let Some(moved) = offset(rect, dx, dy) {
                let visible = moved.intersection(clip);
                if visible.width > 0 && visible.height > 0 {
                    kept.push((key, visible));
                }
            }
        }
        self.regions = kept;
    }
}

fn contains(rect: Rect, p: Position) -> bool {
    p.x >= rect.x
        && p.y >= rect.y
        && u32::from(p.x) < u32::from(rect.x) + u32::from(rect.width)
        && u32::from(p.y) < u32::from(rect.y) + u32::from(rect.height)
}

/// 平移矩形，左上角被推出坐标系时截掉越界部分
fn offset(rect: Rect, dx: i32, dy: i32) -> Option<Rect> {
    let shift = |origin: u16, len: u16, d: i32| -> Option<(u16, u16)> {
        let start = i32::from(origin) + d;
        let end = start + i32::from(len);
        if end <= 0 {
            return None;
        }
        let clipped = start.max(0);
        let start = u16::try_from(clipped).ok()?;
        let len = u16::try_from(end - clipped).ok()?;
        Some((start, len))
    };
    let (x, width) = shift(rect.x, rect.width, dx)?;
    let (y, height) = shift(rect.y, rect.height, dy)?;
    Some(Rect::new(x, y, width, height))
}

/// 指针事件经命中测试后的语义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent<K> {
    /// 左键在控件上按下
    Pressed(K, Position),
    /// 按住左键拖动，`K` 为按下时的控件
    Dragged(K, Position),
    /// 在同一控件上按下并松开
    Clicked(K),
    /// 滚轮，负数向上
    Wheel(i16),
}

/// 指针状态: 位置、悬停控件、按下的控件
#[derive(Debug, Clone)]
pub struct Pointer<K> {
    position: Option<Position>,
    hovered: Option<K>,
    pressed: Option<K>,
}

impl<K> Default for Pointer<K> {
    fn default() -> Self {
        Self {
            position: None,
            hovered: None,
            pressed: None,
        }
    }
}

impl<K: Copy + PartialEq> Pointer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<K> {
        self.hovered
    }

    /// 上一帧的区域刷新后重新计算悬停控件
    pub fn refresh_hover(&mut self, hits: &HitMap<K>) {
        self.hovered = self.position.and_then(|p| hits.hit(p));
    }

    pub fn handle(&mut self, event: &MouseEvent, hits: &HitMap<K>) -> Option<PointerEvent<K>> {
        let position = Position::new(event.column, event.row);
        self.position = Some(position);
        self.hovered = hits.hit(position);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = self.hovered;
                self.pressed.map(|key| PointerEvent::Pressed(key, position))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.pressed.map(|key| PointerEvent::Dragged(key, position))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.pressed.take()?;
                (self.hovered == Some(pressed)).then_some(PointerEvent::Clicked(pressed))
            }
            MouseEventKind::ScrollUp => Some(PointerEvent::Wheel(-1)),
            MouseEventKind::ScrollDown => Some(PointerEvent::Wheel(1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Id {
        Back,
        Front,
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn hits() -> HitMap<Id> {
        let mut hits = HitMap::new();
        hits.push(Id::Back, Rect::new(0, 0, 20, 10));
        hits.push(Id::Front, Rect::new(5, 5, 4, 2));
        hits
    }

    #[test]
    fn test_hit_prefers_topmost() {
        let hits = hits();
        assert_eq!(hits.hit(Position::new(6, 5)), Some(Id::Front));
        assert_eq!(hits.hit(Position::new(1, 1)), Some(Id::Back));
        assert_eq!(hits.hit(Position::new(20, 0)), None);
        assert_eq!(hits.rect_of(Id::Front), Some(Rect::new(5, 5, 4, 2)));
    }

    #[test]
    fn test_empty_rect_is_ignored() {
        let mut hits = HitMap::new();
        hits.push(Id::Back, Rect::new(3, 3, 0, 5));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_click_requires_press_and_release_on_same_control() {
        let hits = hits();
        let mut pointer = Pointer::new();

        let down = pointer.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 6, 5), &hits);
        assert_eq!(down, Some(PointerEvent::Pressed(Id::Front, Position::new(6, 5))));
        let up = pointer.handle(&mouse(MouseEventKind::Up(MouseButton::Left), 7, 6), &hits);
        assert_eq!(up, Some(PointerEvent::Clicked(Id::Front)));
        assert_eq!(pointer.pressed, None);

        pointer.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 6, 5), &hits);
        let up = pointer.handle(&mouse(MouseEventKind::Up(MouseButton::Left), 1, 1), &hits);
        assert_eq!(up, None);
    }

    #[test]
    fn test_drag_reports_pressed_control() {
        let hits = hits();
        let mut pointer = Pointer::new();
        pointer.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 6, 5), &hits);
        let drag = pointer.handle(&mouse(MouseEventKind::Drag(MouseButton::Left), 15, 8), &hits);
        assert_eq!(drag, Some(PointerEvent::Dragged(Id::Front, Position::new(15, 8))));
    }

    #[test]
    fn test_hover_and_wheel() {
        let hits = hits();
        let mut pointer = Pointer::new();
        let moved = pointer.handle(&mouse(MouseEventKind::Moved, 6, 6), &hits);
        assert_eq!(moved, None);
        assert_eq!(pointer.hovered(), Some(Id::Front));

        let wheel = pointer.handle(&mouse(MouseEventKind::ScrollDown, 1, 1), &hits);
        assert_eq!(wheel, Some(PointerEvent::Wheel(1)));
        assert_eq!(pointer.hovered(), Some(Id::Back));
    }

    #[test]
    fn test_translate_from_clips_to_viewport() {
        let mut hits = HitMap::new();
        hits.push(Id::Back, Rect::new(0, 0, 5, 1));
        hits.push(Id::Front, Rect::new(0, 2, 10, 3));
        hits.push(Id::Back, Rect::new(0, 30, 10, 3));

        // 离屏内容向上滚动 3 行后放到 (2, 4) 开始、高 5 行的视口中
        hits.translate_from(1, 2, 4 - 3, Rect::new(2, 4, 10, 5));

        assert_eq!(hits.len(), 2);
        assert_eq!(hits.rect_of(Id::Front), Some(Rect::new(2, 4, 10, 2)));
        assert_eq!(hits.hit(Position::new(0, 0)), Some(Id::Back));
    }
}
