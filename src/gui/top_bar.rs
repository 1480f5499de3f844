use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    session::Session,
    theme::Theme,
};

pub const APP_TITLE: &str = "Lamiah's UPSC Journey";

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, session: &Session, theme: &Theme, actions: &mut ActionQueue) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(theme.title(ctx, APP_TITLE).size(20.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_bookmark_count(ui, session, theme);
                    ui.add_space(8.0);

                    let (icon, tooltip) = if session.dark_mode() {
                        ("☀", "Switch to light mode")
                    } else {
                        ("🌙", "Switch to dark mode")
                    };
                    if ui.button(icon).on_hover_text(tooltip).clicked() {
                        actions.push(UiAction::ToggleDarkMode);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn show_bookmark_count(ui: &mut egui::Ui, session: &Session, theme: &Theme) {
        let count = session.bookmark_count();
        let color =
            if count > 0 { theme.yellow(ui.ctx()) } else { ui.visuals().weak_text_color() };

        let response = ui.small(egui::RichText::new(format!("Bookmarked: {}", count)).color(color));
        if count > 0 {
            response.on_hover_ui(|ui| {
                for name in session.bookmarks().iter() {
                    ui.label(name);
                }
            });
        }
    }
}
