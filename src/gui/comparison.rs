use eframe::egui::{
    self,
    RichText,
    Sense,
    Ui,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    cards::score_bar,
    session::Session,
    theme::Theme,
};
use crate::core::{
    Catalog,
    SortDirection,
    SortKey,
    SortState,
};

const ROW_HEIGHT: f32 = 32.0;

pub fn comparison_table(
    ui: &mut Ui,
    catalog: &Catalog,
    session: &Session,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let sort_state = session.sort_state();
    let rows = session.sorted_subjects(catalog);

    TableBuilder::new(ui)
        .id_salt("comparison_table")
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(200.0))
        .column(Column::auto().at_least(200.0))
        .column(Column::remainder().at_least(100.0))
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.label(theme.heading(ui.ctx(), "Subject"));
            });
            header.col(|ui| sortable_header(ui, theme, sort_state, SortKey::ScoringPotential, actions));
            header.col(|ui| sortable_header(ui, theme, sort_state, SortKey::OverlapScore, actions));
            header.col(|ui| {
                ui.label(theme.heading(ui.ctx(), "Syllabus Size"));
            });
        })
        .body(|mut body| {
            for subject in rows {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(&subject.name).strong());
                    });
                    row.col(|ui| {
                        score_bar(ui, "", subject.scoring_potential, theme.green(ui.ctx()));
                    });
                    row.col(|ui| {
                        score_bar(ui, "", subject.overlap_score, theme.blue(ui.ctx()));
                    });
                    row.col(|ui| {
                        ui.label(subject.syllabus_size.label());
                    });
                });
            }
        });
}

fn sortable_header(
    ui: &mut Ui,
    theme: &Theme,
    sort_state: SortState,
    key: SortKey,
    actions: &mut ActionQueue,
) {
    let is_active = sort_state.key == key;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;

        let title = key.title();
        let response = ui
            .add(egui::Label::new(theme.heading(ui.ctx(), title)).sense(Sense::click()))
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_ui(|ui| {
                if is_active {
                    let direction_text = match sort_state.direction {
                        SortDirection::Ascending => "ascending",
                        SortDirection::Descending => "descending",
                    };
                    ui.horizontal(|ui| {
                        ui.label("Sorted by");
                        ui.label(RichText::new(title).color(ui.visuals().hyperlink_color).strong());
                        ui.label("in");
                        ui.label(RichText::new(direction_text).color(ui.visuals().warn_fg_color));
                        ui.label("order");
                    });
                } else {
                    ui.label(format!("Sort by {}", title));
                }
            });

        if response.clicked() {
            actions.push(UiAction::SortBy(key));
        }

        if is_active {
            ui.label(RichText::new(sort_state.direction.arrow()).color(theme.orange(ui.ctx())));
        }
    });
}
