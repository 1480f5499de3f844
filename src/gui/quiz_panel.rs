use eframe::egui::{
    self,
    CornerRadius,
    Frame,
    Margin,
    RichText,
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
    QuizStep,
    Recommendation,
};

pub fn quiz_panel(ui: &mut Ui, session: &Session, theme: &Theme, actions: &mut ActionQueue) {
    let quiz = session.quiz();

    ui.vertical_centered(|ui| {
        ui.set_max_width(720.0);
        match quiz.step() {
            QuizStep::AwaitingAnswer(index) => {
                let Some(question) = quiz.current_question() else {
                    return;
                };

                ui.small(
                    RichText::new(format!("Question {} of {}", index + 1, quiz.question_count()))
                        .color(theme.comment(ui.ctx())),
                );
                ui.add_space(4.0);
                ui.label(theme.title(ui.ctx(), question.prompt).size(22.0));
                ui.add_space(16.0);

                egui::Grid::new(("quiz_options", index))
                    .num_columns(2)
                    .spacing([16.0, 16.0])
                    .show(ui, |ui| {
                        for (i, option) in question.options.iter().enumerate() {
                            let button =
                                egui::Button::new(RichText::new(*option).size(16.0))
                                    .min_size(egui::vec2(300.0, 44.0));
                            if ui.add(button).clicked() {
                                actions.push(UiAction::AnswerQuiz(option.to_string()));
                            }
                            if i % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
            }
            QuizStep::Completed(recommendation) => {
                recommendation_view(ui, recommendation, theme, actions);
            }
        }
    });
}

fn recommendation_view(
    ui: &mut Ui,
    recommendation: Recommendation,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.label(RichText::new("🎉").size(48.0));
    ui.add_space(8.0);
    ui.label(theme.title(ui.ctx(), "Your Top 2 Matches:").size(26.0));
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        // Centre the pair within the available width
        let pair_width = 2.0 * 200.0 + ui.spacing().item_spacing.x;
        ui.add_space(((ui.available_width() - pair_width) / 2.0).max(0.0));

        let fills = [theme.purple(ui.ctx()), theme.pink(ui.ctx())];
        for (subject, fill) in recommendation.subjects().iter().zip(fills) {
            Frame::new()
                .fill(fill)
                .corner_radius(CornerRadius::same(8))
                .inner_margin(Margin::same(14))
                .show(ui, |ui| {
                    ui.set_width(172.0);
                    ui.vertical_centered(|ui| {
                        let name = RichText::new(*subject).strong().size(18.0);
                        ui.label(name.color(egui::Color32::WHITE));
                    });
                });
        }
    });

    ui.add_space(16.0);
    if ui.link("Retake quiz").clicked() {
        actions.push(UiAction::RestartQuiz);
    }
}
