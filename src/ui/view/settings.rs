//! Settings 标签页: 复选框与滑块

use ratatui::{layout::Rect, widgets::Widget};

use super::components::{Canvas, card_height, take_card};
use super::layouts::Column;
use crate::kit::UiKit;
use crate::kit::palette::Swatch;
use crate::kit::widgets::Slider;
use crate::ui::state::{App, CHECKBOX_LABELS, Control};

fn checkbox_rows(kit: &UiKit) -> u16 {
    1 + kit.space_rows(kit.spacing.small) + CHECKBOX_LABELS.len() as u16
}

fn slider_rows(kit: &UiKit) -> u16 {
    1 + kit.space_rows(kit.spacing.small) + Slider::HEIGHT + 1
}

fn content_rows(kit: &UiKit) -> u16 {
    let medium = kit.space_rows(kit.spacing.medium);
    1 + medium
        + card_height(kit, checkbox_rows(kit))
        + medium
        + card_height(kit, slider_rows(kit))
}

/// 内容总高度
pub fn height(kit: &UiKit, _app: &App) -> u16 {
    card_height(kit, content_rows(kit))
}

pub fn draw(canvas: &mut Canvas<'_, '_>, app: &App, area: Rect) {
    let kit = canvas.kit;
    let medium = kit.space_rows(kit.spacing.medium);
    let mut column = Column::new(area);
    let mut card = take_card(canvas, &mut column, content_rows(kit));

    canvas.heading(card.take(1), "Settings");
    card.gap(medium);
    draw_checkboxes(canvas, &mut card, &app.toggles);
    card.gap(medium);
    draw_slider(canvas, &mut card, app.slider);
}

fn draw_checkboxes(canvas: &mut Canvas<'_, '_>, column: &mut Column, toggles: &[bool; 3]) {
    let kit = canvas.kit;
    let mut card = take_card(canvas, column, checkbox_rows(kit));

    canvas.text(
        card.take(1),
        "Checkbox Options",
        kit.typography.title_medium,
        Swatch::TextPrimary,
    );
    card.gap(kit.space_rows(kit.spacing.small));
    for (i, (label, checked)) in CHECKBOX_LABELS.iter().zip(toggles).enumerate() {
        let control = Control::Checkbox(i);
        let checkbox = kit
            .checkbox(*label, *checked)
            .hovered(canvas.cues.is_hovered(control))
            .focused(canvas.cues.is_focused(control));
        let row = card.take(1);
        let rect = Rect::new(row.x, row.y, checkbox.measure().width.min(row.width), row.height);
        checkbox.render(rect, canvas.buf);
        canvas.hits.push(control, rect);
    }
}

fn draw_slider(canvas: &mut Canvas<'_, '_>, column: &mut Column, value: f32) {
    let kit = canvas.kit;
    let mut card = take_card(canvas, column, slider_rows(kit));

    canvas.text(
        card.take(1),
        "Slider Control",
        kit.typography.title_medium,
        Swatch::TextPrimary,
    );
    card.gap(kit.space_rows(kit.spacing.small));
    let track = card.take(Slider::HEIGHT);
    kit.slider(value)
        .hovered(canvas.cues.is_hovered(Control::Slider))
        .focused(canvas.cues.is_focused(Control::Slider))
        .render(track, canvas.buf);
    canvas.hits.push(Control::Slider, track);

    canvas.text(
        card.take(1),
        &format!("Value: {value:.2}"),
        kit.typography.body_medium,
        Swatch::TextSecondary,
    );
}
