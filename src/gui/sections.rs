use eframe::egui::{
    self,
    Align,
    CornerRadius,
    Frame,
    Margin,
    RichText,
    Ui,
};

use super::{
    actions::{
        ActionQueue,
        Section,
        UiAction,
    },
    theme::Theme,
};
use crate::core::catalog::{
    MORE_SUBJECTS,
    STRENGTHS,
};

pub fn section_heading(ui: &mut Ui, theme: &Theme, title: &str) -> egui::Response {
    ui.add_space(48.0);
    let response = ui
        .vertical_centered(|ui| ui.label(theme.title(ui.ctx(), title).size(32.0)))
        .inner;
    ui.add_space(24.0);
    response
}

pub fn hero(ui: &mut Ui, theme: &Theme, scroll_here: bool, actions: &mut ActionQueue) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        let headline = ui.label(theme.title(ui.ctx(), "Lamiah, Let's Find Your").size(44.0));
        if scroll_here {
            headline.scroll_to_me(Some(Align::Min));
        }
        ui.label(
            RichText::new("Perfect Optional Subject!")
                .size(44.0)
                .strong()
                .color(theme.orange(ui.ctx())),
        );
        ui.add_space(16.0);
        ui.label(
            RichText::new("Tailored for your MBBS background. Designed for your dreams.")
                .size(20.0)
                .color(theme.comment(ui.ctx())),
        );
        ui.add_space(24.0);

        let begin = egui::Button::new(RichText::new("Let's Begin! 🚀").size(18.0).strong())
            .corner_radius(CornerRadius::same(24))
            .min_size(egui::vec2(200.0, 48.0));
        if ui.add(begin).clicked() {
            actions.push(UiAction::ScrollTo(Section::Quiz));
        }
    });
}

pub fn foundation(ui: &mut Ui, theme: &Theme) {
    section_heading(ui, theme, "Your Medical Foundation");
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(
                "You've mastered human anatomy, but now it's time to master India's governance too!",
            )
            .size(18.0),
        );
    });
    ui.add_space(24.0);

    ui.columns(STRENGTHS.len(), |columns| {
        for (ui, strength) in columns.iter_mut().zip(STRENGTHS.iter()) {
            Frame::new()
                .fill(theme.card_fill(ui.ctx()))
                .corner_radius(CornerRadius::same(12))
                .inner_margin(Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(strength.icon).size(36.0));
                        ui.add_space(8.0);
                        ui.label(theme.title(ui.ctx(), strength.title).size(20.0));
                        ui.label(RichText::new(strength.description).color(theme.comment(ui.ctx())));
                    });
                });
        }
    });
}

pub fn more_options(ui: &mut Ui, theme: &Theme) {
    section_heading(ui, theme, "Explore More Options");

    egui::Grid::new("more_options").num_columns(4).spacing([16.0, 16.0]).show(ui, |ui| {
        for (i, name) in MORE_SUBJECTS.iter().enumerate() {
            Frame::new()
                .fill(theme.card_fill(ui.ctx()))
                .corner_radius(CornerRadius::same(8))
                .inner_margin(Margin::same(14))
                .show(ui, |ui| {
                    ui.set_width(180.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(*name).strong());
                    });
                });
            if i % 4 == 3 {
                ui.end_row();
            }
        }
    });
}

/// The icons bob only when `animate` is set; otherwise they sit still and no repaint is
/// requested.
pub fn footer(ui: &mut Ui, theme: &Theme, animate: bool, actions: &mut ActionQueue) {
    ui.add_space(48.0);
    ui.separator();
    ui.add_space(24.0);

    ui.vertical_centered(|ui| {
        // Gentle bob, a quarter cycle apart
        let time = if animate { ui.input(|i| i.time) as f32 } else { 0.5 };
        ui.horizontal(|ui| {
            let icons = ["📚", "🎓", "🏆"];
            ui.add_space(((ui.available_width() - 3.0 * 60.0) / 2.0).max(0.0));
            for (i, icon) in icons.iter().enumerate() {
                let offset = ((time * std::f32::consts::PI) - i as f32 * 0.6).sin().abs() * 10.0;
                ui.vertical(|ui| {
                    ui.add_space(10.0 - offset);
                    ui.label(RichText::new(*icon).size(36.0));
                });
            }
        });
        if animate {
            ui.ctx().request_repaint();
        }

        ui.add_space(16.0);
        ui.label(
            theme
                .title(
                    ui.ctx(),
                    "Remember Lamiah, choosing the right optional is the first step in your UPSC success.",
                )
                .size(24.0),
        );
        ui.label(
            RichText::new("Your medical background gives you a unique advantage. Use it wisely!")
                .size(18.0),
        );
        ui.add_space(16.0);
        let ready = egui::Button::new(
            RichText::new("Ready to choose? Let's begin your preparation! 🚀").size(16.0),
        )
        .fill(theme.yellow(ui.ctx()))
        .corner_radius(CornerRadius::same(24));
        if ui.add(ready).clicked() {
            actions.push(UiAction::ScrollTo(Section::Quiz));
        }

        ui.add_space(24.0);
        ui.small(RichText::new("Made with ❤ for Lamiah's UPSC journey").color(theme.comment(ui.ctx())));
        ui.small(
            RichText::new("🎯 Easter Egg: You're destined for greatness, Dr. Lamiah! 🎯")
                .color(theme.comment(ui.ctx())),
        );
        ui.add_space(24.0);
    });
}

pub fn scroll_to_top_button(ctx: &egui::Context, actions: &mut ActionQueue) {
    egui::Area::new(egui::Id::new("scroll_to_top"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
        .show(ctx, |ui| {
            let button = egui::Button::new(RichText::new("⏶").size(20.0))
                .corner_radius(CornerRadius::same(20))
                .min_size(egui::vec2(40.0, 40.0));
            if ui.add(button).on_hover_text("Back to top").clicked() {
                actions.push(UiAction::ScrollTo(Section::Top));
            }
        });
}
