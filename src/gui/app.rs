use eframe::egui;
use log::info;

use super::{
    actions::{
        ActionQueue,
        Section,
    },
    cards::subject_cards,
    comparison::comparison_table,
    error_modal::ErrorModal,
    particles::Particles,
    quiz_panel::quiz_panel,
    sections,
    session::Session,
    theme::{
        apply_dark_mode,
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        Catalog,
        GuideError,
    },
    persistence::AppConfig,
};

pub struct GuideApp {
    // Data
    catalog: Catalog,

    // UI State
    session: Session,
    theme: Theme,
    particles: Option<Particles>,

    // Modals
    error_modal: ErrorModal,
}

impl GuideApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        config_error: Option<GuideError>,
    ) -> Self {
        let theme = Theme::twilight();
        set_theme(&cc.egui_ctx, &theme);
        apply_dark_mode(&cc.egui_ctx, config.dark_mode);
        cc.egui_ctx.set_zoom_factor(config.zoom_factor);

        let mut error_modal = ErrorModal::new();
        if let Some(e) = &config_error {
            error_modal.show_error(
                "Configuration",
                "The configuration file could not be read, so defaults are in use.",
                Some(e),
            );
        }

        let catalog = Catalog::builtin();
        info!("Loaded {} subjects", catalog.len());

        Self {
            catalog,
            session: Session::new(config.dark_mode),
            theme,
            particles: config.particles.then(Particles::new),
            error_modal,
        }
    }
}

impl eframe::App for GuideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_dark_mode(ctx, self.session.dark_mode());

        let mut actions = ActionQueue::new();
        let scroll_target = self.session.take_scroll_target();

        TopBar::show(ctx, &self.session, &self.theme, &mut actions);

        let catalog = &self.catalog;
        let session = &self.session;
        let theme = &self.theme;
        let particles = self.particles.as_ref();

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(particles) = particles {
                particles.paint(ui, theme);
            }

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.set_max_width(ui.available_width().min(1280.0));

                sections::hero(ui, theme, scroll_target == Some(Section::Top), &mut actions);
                sections::foundation(ui, theme);

                sections::section_heading(ui, theme, "Top Recommended Subjects");
                subject_cards(ui, catalog, session, theme, &mut actions);

                sections::more_options(ui, theme);

                let quiz_heading = sections::section_heading(ui, theme, "Find Your Perfect Match");
                if scroll_target == Some(Section::Quiz) {
                    quiz_heading.scroll_to_me(Some(egui::Align::Min));
                }
                quiz_panel(ui, session, theme, &mut actions);

                sections::section_heading(ui, theme, "Subject Comparison");
                comparison_table(ui, catalog, session, theme, &mut actions);

                sections::footer(ui, theme, particles.is_some(), &mut actions);
            });
        });

        sections::scroll_to_top_button(ctx, &mut actions);
        self.error_modal.show(ctx);

        if !actions.is_empty() {
            self.session.apply_all(actions.drain());
        }
    }
}
