//! Components 标签页: 提示、排版、按钮、徽标与进度

use ratatui::{layout::Rect, widgets::Widget};

use super::components::{Canvas, card_height, take_card};
use super::layouts::{self, Column};
use crate::kit::UiKit;
use crate::kit::palette::Swatch;
use crate::kit::widgets::{Alert, BadgeVariant, ButtonVariant, ProgressBar};
use crate::ui::state::{App, Control, DEMO_BUTTONS, Notification};

const BADGES: [(&str, BadgeVariant); 5] = [
    ("Default", BadgeVariant::Default),
    ("Active", BadgeVariant::Success),
    ("Pending", BadgeVariant::Warning),
    ("Failed", BadgeVariant::Error),
    ("New", BadgeVariant::Info),
];

#[derive(Clone, Copy)]
enum Section {
    Notification,
    Typography,
    Buttons,
    Badges,
    Progress,
}

fn sections(app: &App) -> Vec<Section> {
    let mut sections = Vec::with_capacity(5);
    if app.notification.is_some() {
        sections.push(Section::Notification);
    }
    sections.extend([
        Section::Typography,
        Section::Buttons,
        Section::Badges,
        Section::Progress,
    ]);
    sections
}

fn alert<'a>(kit: &'a UiKit, notification: &'a Notification) -> Alert<'a> {
    kit.alert("Notification", notification.message.as_str(), notification.level)
}

fn content_rows(kit: &UiKit, section: Section) -> u16 {
    let medium = kit.space_rows(kit.spacing.medium);
    match section {
        Section::Notification => 0,
        Section::Typography => 4 + kit.space_rows(kit.spacing.large) + medium * 2,
        Section::Buttons => 1 + (medium + 3) * 3,
        Section::Badges => 2 + medium,
        Section::Progress => 3 + medium + kit.space_rows(kit.spacing.small),
    }
}

fn section_height(kit: &UiKit, app: &App, section: Section) -> u16 {
    match (section, &app.notification) {
        (Section::Notification, Some(notification)) => alert(kit, notification).height(),
        (Section::Notification, None) => 0,
        _ => card_height(kit, content_rows(kit, section)),
    }
}

/// 内容总高度
pub fn height(kit: &UiKit, app: &App) -> u16 {
    let gap = kit.space_rows(kit.spacing.medium);
    let sections = sections(app);
    let body: u16 = sections.iter().map(|&s| section_height(kit, app, s)).sum();
    let gaps = gap * sections.len().saturating_sub(1) as u16;
    body + gaps + bottom_space(kit)
}

fn bottom_space(kit: &UiKit) -> u16 {
    kit.space_rows(kit.spacing.medium)
}

pub fn draw(canvas: &mut Canvas<'_, '_>, app: &App, area: Rect) {
    let kit = canvas.kit;
    let gap = kit.space_rows(kit.spacing.medium);
    let mut column = Column::new(area);

    for (i, section) in sections(app).into_iter().enumerate() {
        if i > 0 {
            column.gap(gap);
        }
        match section {
            Section::Notification => {
                if let Some(notification) = &app.notification {
                    let alert = alert(kit, notification);
                    let rect = column.take(alert.height());
                    alert.render(rect, canvas.buf);
                }
            }
            Section::Typography => draw_typography(canvas, &mut column),
            Section::Buttons => draw_buttons(canvas, &mut column),
            Section::Badges => draw_badges(canvas, &mut column),
            Section::Progress => draw_progress(canvas, &mut column, app.progress),
        }
    }
}

fn draw_typography(canvas: &mut Canvas<'_, '_>, column: &mut Column) {
    let kit = canvas.kit;
    let t = &kit.typography;
    let mut card = take_card(canvas, column, content_rows(kit, Section::Typography));

    canvas.heading(card.take(1), "Typography");
    card.gap(kit.space_rows(kit.spacing.large));
    canvas.text(card.take(1), "Display Small", t.display_small, Swatch::TextPrimary);
    card.gap(kit.space_rows(kit.spacing.medium));
    canvas.text(card.take(1), "Headline Small", t.headline_small, Swatch::TextPrimary);
    card.gap(kit.space_rows(kit.spacing.medium));
    canvas.text(
        card.take(1),
        "Body Medium - Standard text for most content",
        t.body_medium,
        Swatch::TextPrimary,
    );
}

fn draw_buttons(canvas: &mut Canvas<'_, '_>, column: &mut Column) {
    let kit = canvas.kit;
    let mut card = take_card(canvas, column, content_rows(kit, Section::Buttons));

    canvas.heading(card.take(1), "Buttons");
    // 每行两个: 基础、轮廓、状态
    for pair in DEMO_BUTTONS.chunks(2) {
        card.gap(kit.space_rows(kit.spacing.medium));
        let buttons: Vec<(Control, &str, ButtonVariant)> = pair
            .iter()
            .map(|(variant, label, ..)| (Control::Demo(*variant), *label, *variant))
            .collect();
        canvas.button_row(card.take(3), &buttons);
    }
}

fn draw_badges(canvas: &mut Canvas<'_, '_>, column: &mut Column) {
    let kit = canvas.kit;
    let mut card = take_card(canvas, column, content_rows(kit, Section::Badges));

    canvas.heading(card.take(1), "Badges");
    card.gap(kit.space_rows(kit.spacing.medium));
    let row = card.take(1);
    let badges: Vec<_> = BADGES
        .iter()
        .map(|(text, variant)| kit.badge(*text, *variant))
        .collect();
    let widths: Vec<u16> = badges.iter().map(|b| b.measure().width).collect();
    let gap = kit.space_cols(kit.spacing.small);
    for (rect, badge) in layouts::row(row, &widths, gap).into_iter().zip(badges) {
        badge.render(rect, canvas.buf);
    }
}

fn draw_progress(canvas: &mut Canvas<'_, '_>, column: &mut Column, progress: f32) {
    let kit = canvas.kit;
    let mut card = take_card(canvas, column, content_rows(kit, Section::Progress));

    canvas.heading(card.take(1), "Progress");
    card.gap(kit.space_rows(kit.spacing.medium));
    let bar = kit.progress_bar(progress);
    let percent = format!("{:.0}%", bar.fraction() * 100.0);
    bar.render(card.take(ProgressBar::HEIGHT), canvas.buf);
    card.gap(kit.space_rows(kit.spacing.small));
    canvas.text(
        card.take(1),
        &percent,
        kit.typography.body_medium,
        Swatch::TextSecondary,
    );
}
