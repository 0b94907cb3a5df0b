use crate::PrepApp;
use crate::ui::helpers::difficulty_badge;
use egui::{CentralPanel, Context, RichText, ScrollArea, Sense};

pub fn ui_exercise_list(app: &mut PrepApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.add_space(12.0);
        ui.heading("Preparación de entrevistas técnicas");
        ui.label(
            RichText::new("Practica ejercicios de código habituales en entrevistas técnicas")
                .weak(),
        );
        ui.add_space(12.0);

        if !app.message.is_empty() {
            ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW));
            ui.add_space(8.0);
        }

        let cards = app.exercise_cards();
        let card_w = 280.0;
        let mut clicked = None;

        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for card in &cards {
                    let response = egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::symmetric(12, 10))
                        .show(ui, |ui| {
                            ui.set_width(card_w);
                            ui.set_height(150.0);
                            ui.vertical(|ui| {
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(card.title_label()).strong());
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Min),
                                        |ui| difficulty_badge(ui, card.difficulty),
                                    );
                                });
                                ui.label(RichText::new(&card.category).weak());
                                ui.add_space(4.0);
                                ui.add(egui::Label::new(truncate(&card.summary, 140)).wrap());
                                ui.add_space(4.0);
                                ui.separator();
                                ui.label(RichText::new(card.attempts_label()).small().weak());
                            });
                        })
                        .response
                        .interact(Sense::click())
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if response.clicked() {
                        clicked = Some(card.id.clone());
                    }
                }
            });
        });

        if let Some(id) = clicked {
            app.select_exercise(&id);
        }
    });
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
