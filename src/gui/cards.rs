use eframe::egui::{
    self,
    CornerRadius,
    Frame,
    Margin,
    RichText,
    Sense,
    Stroke,
    Ui,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    session::Session,
    theme::Theme,
};
use crate::core::{
    Catalog,
    SubjectRecord,
};

const CARD_WIDTH: f32 = 280.0;
const CARD_HEIGHT: f32 = 320.0;

pub fn subject_cards(
    ui: &mut Ui,
    catalog: &Catalog,
    session: &Session,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(20.0, 20.0);
        for subject in catalog.subjects() {
            subject_card(ui, subject, session, theme, actions);
        }
    });
}

fn subject_card(
    ui: &mut Ui,
    subject: &SubjectRecord,
    session: &Session,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let accent = theme.tag_color(ui.ctx(), subject.color_tag);
    let flipped = session.is_flipped(&subject.name);
    let fill = if flipped { accent.gamma_multiply(0.3) } else { accent.gamma_multiply(0.2) };

    Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, accent.gamma_multiply(0.6)))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.set_min_height(CARD_HEIGHT);
            ui.vertical(|ui| {
                if flipped {
                    card_back(ui, subject, theme);
                } else {
                    card_front(ui, subject, session, theme, actions);
                }

                ui.add_space(12.0);
                let hint = if flipped { "Click to flip back" } else { "Click to flip for details" };
                let response = ui
                    .vertical_centered(|ui| {
                        ui.add(
                            egui::Label::new(RichText::new(hint).small().color(theme.comment(ui.ctx())))
                                .sense(Sense::click()),
                        )
                    })
                    .inner
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                if response.clicked() {
                    actions.push(UiAction::FlipCard(subject.name.clone()));
                }
            });
        });
}

fn card_front(
    ui: &mut Ui,
    subject: &SubjectRecord,
    session: &Session,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.horizontal(|ui| {
        ui.label(theme.title(ui.ctx(), &subject.name).size(22.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Derived from the bookmark set on every frame, never cached on the card
            let bookmarked = session.is_bookmarked(&subject.name);
            let (text, tooltip) = if bookmarked {
                (RichText::new("🔖").color(theme.yellow(ui.ctx())), "Remove bookmark")
            } else {
                (RichText::new("🔖").color(theme.comment(ui.ctx())), "Bookmark")
            };
            let button = egui::Button::new(text).selected(bookmarked);
            if ui.add(button).on_hover_text(tooltip).clicked() {
                actions.push(UiAction::ToggleBookmark(subject.name.clone()));
            }
        });
    });

    ui.add_space(12.0);
    score_bar(ui, "MBBS Overlap:", subject.overlap_score, theme.blue(ui.ctx()));
    score_bar(ui, "Scoring:", subject.scoring_potential, theme.green(ui.ctx()));

    ui.add_space(16.0);
    Frame::new()
        .fill(ui.visuals().faint_bg_color.gamma_multiply(0.6))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(&subject.suitability_note);
        });
}

fn card_back(ui: &mut Ui, subject: &SubjectRecord, theme: &Theme) {
    ui.label(theme.title(ui.ctx(), &subject.name).size(22.0));
    ui.add_space(8.0);

    detail(ui, theme, "✅ Why it suits you:", &subject.suitability_note);
    detail(ui, theme, "⚠ Challenges:", &subject.challenges_note);
    detail(ui, theme, "📚 Syllabus Size:", subject.syllabus_size.label());

    ui.label(theme.heading(ui.ctx(), "📈 Scoring Potential:"));
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        let filled = subject.star_rating();
        for i in 0..5 {
            let star = if i < filled {
                RichText::new("★").color(theme.yellow(ui.ctx()))
            } else {
                RichText::new("☆").color(theme.comment(ui.ctx()))
            };
            ui.label(star.size(16.0));
        }
    });
}

fn detail(ui: &mut Ui, theme: &Theme, heading: &str, body: &str) {
    ui.label(theme.heading(ui.ctx(), heading));
    ui.label(body);
    ui.add_space(6.0);
}

pub fn score_bar(ui: &mut Ui, label: &str, value: u8, color: egui::Color32) {
    ui.horizontal(|ui| {
        if !label.is_empty() {
            ui.small(label);
        }
        ui.add(
            egui::ProgressBar::new(f32::from(value) / 100.0)
                .desired_width(110.0)
                .desired_height(8.0)
                .fill(color),
        );
        ui.small(RichText::new(format!("{}%", value)).strong());
    });
}
