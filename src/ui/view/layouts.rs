//! 布局辅助

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 自上而下依次分配行的纵向容器
pub struct Column {
    area: Rect,
    used: u16,
}

impl Column {
    pub fn new(area: Rect) -> Self {
        Self { area, used: 0 }
    }

    /// 取出接下来的 `height` 行，超出容器的部分被截掉
    pub fn take(&mut self, height: u16) -> Rect {
        let y = self.area.y.saturating_add(self.used);
        let available = self.area.height.saturating_sub(self.used);
        self.used = self.used.saturating_add(height);
        Rect::new(self.area.x, y, self.area.width, height.min(available))
    }

    pub fn gap(&mut self, rows: u16) {
        self.used = self.used.saturating_add(rows);
    }
}

/// 从左到右排列固定宽度的子区域，列间留 `gap` 列
pub fn row(area: Rect, widths: &[u16], gap: u16) -> Vec<Rect> {
    let mut x = area.x;
    let right = area.right();
    widths
        .iter()
        .map(|&width| {
            let width = width.min(right.saturating_sub(x));
            let rect = Rect::new(x, area.y, width, area.height);
            x = x.saturating_add(width).saturating_add(gap).min(right);
            rect
        })
        .collect()
}

/// 两个等宽子区域，中间留 `gap` 列
pub fn split_even(area: Rect, gap: u16) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(gap),
            Constraint::Fill(1),
        ])
        .split(area);
    [chunks[0], chunks[2]]
}
