//! Form 标签页: 联系表单

use ratatui::{layout::Rect, widgets::Widget};

use super::components::{Canvas, card_height, take_card};
use super::layouts::{Column, split_even};
use crate::kit::UiKit;
use crate::kit::metrics::Dp;
use crate::kit::palette::Swatch;
use crate::kit::widgets::{ButtonVariant, Divider, Input};
use crate::ui::state::{App, Control};

/// 多行输入框的最小高度
const MESSAGE_MIN_HEIGHT: Dp = Dp(100.0);

fn content_rows(kit: &UiKit, has_error: bool) -> u16 {
    let s = &kit.spacing;
    let tiny = kit.space_rows(s.tiny);
    let medium = kit.space_rows(s.medium);
    let field = 1 + tiny + Input::SINGLE_LINE_HEIGHT;

    let header = 2 + kit.space_rows(s.small);
    let divider = medium * 2 + Divider::HEIGHT;
    let name = field;
    let email = medium + field + if has_error { tiny + 1 } else { 0 };
    let message = medium + 1 + tiny + kit.space_rows(MESSAGE_MIN_HEIGHT);
    let actions = kit.space_rows(s.large) + 3;
    header + divider + name + email + message + actions
}

/// 内容总高度
pub fn height(kit: &UiKit, app: &App) -> u16 {
    card_height(kit, content_rows(kit, app.email_has_error()))
}

pub fn draw(canvas: &mut Canvas<'_, '_>, app: &mut App, area: Rect) {
    let kit = canvas.kit;
    let s = &kit.spacing;
    let t = &kit.typography;
    let has_error = app.email_has_error();
    let mut column = Column::new(area);
    let mut card = take_card(canvas, &mut column, content_rows(kit, has_error));

    canvas.heading(card.take(1), "Contact Form");
    card.gap(kit.space_rows(s.small));
    canvas.text(
        card.take(1),
        "Fill out the form below to get in touch",
        t.body_medium,
        Swatch::TextSecondary,
    );

    card.gap(kit.space_rows(s.medium));
    kit.divider().render(card.take(Divider::HEIGHT), canvas.buf);
    card.gap(kit.space_rows(s.medium));

    field(canvas, &mut card, app, Control::Name, "Name", "Enter your full name", false);

    card.gap(kit.space_rows(s.medium));
    field(
        canvas,
        &mut card,
        app,
        Control::Email,
        "Email",
        "your.email@example.com",
        has_error,
    );
    if has_error {
        card.gap(kit.space_rows(s.tiny));
        canvas.text(
            card.take(1),
            "Please enter a valid email address",
            t.label_small,
            Swatch::Error,
        );
    }

    card.gap(kit.space_rows(s.medium));
    canvas.text(card.take(1), "Message", t.label_medium, Swatch::TextPrimary);
    card.gap(kit.space_rows(s.tiny));
    let rect = card.take(kit.space_rows(MESSAGE_MIN_HEIGHT));
    editor(canvas, app, Control::Message, rect, "Type your message here...", false);

    card.gap(kit.space_rows(s.large));
    let [reset, submit] = split_even(card.take(3), kit.space_cols(s.medium));
    canvas.button(reset, Control::Reset, "Clear Form", ButtonVariant::Outline);
    canvas.button(submit, Control::Submit, "Send Message", ButtonVariant::Primary);
}

/// 标签 + 单行输入框
fn field(
    canvas: &mut Canvas<'_, '_>,
    card: &mut Column,
    app: &mut App,
    control: Control,
    label: &str,
    hint: &'static str,
    has_error: bool,
) {
    let kit = canvas.kit;
    canvas.text(card.take(1), label, kit.typography.label_medium, Swatch::TextPrimary);
    card.gap(kit.space_rows(kit.spacing.tiny));
    let rect = card.take(Input::SINGLE_LINE_HEIGHT);
    editor(canvas, app, control, rect, hint, has_error);
}

fn editor(
    canvas: &mut Canvas<'_, '_>,
    app: &mut App,
    control: Control,
    rect: Rect,
    hint: &'static str,
    has_error: bool,
) {
    let focused = canvas.cues.is_focused(control);
    if let Some(editor) = app.editor_mut(control) {
        canvas
            .kit
            .input(editor, hint, has_error)
            .focused(focused)
            .render(rect, canvas.buf);
        canvas.hits.push(control, rect);
    }
}
