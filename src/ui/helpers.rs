// src/ui/helpers.rs
use crate::model::Difficulty;
use egui::{Color32, RichText, Ui};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Easy => Color32::from_rgb(34, 197, 94),
        Difficulty::Medium => Color32::from_rgb(234, 179, 8),
        Difficulty::Hard => Color32::from_rgb(239, 68, 68),
    }
}

pub fn difficulty_badge(ui: &mut Ui, difficulty: Difficulty) {
    ui.label(
        RichText::new(difficulty.label())
            .color(difficulty_color(difficulty))
            .small()
            .strong(),
    );
}

/// Pinta una descripción (Markdown) con el visor de commonmark
pub fn rich_description(ui: &mut Ui, cache: &mut CommonMarkCache, markdown: &str) {
    CommonMarkViewer::new().show(ui, cache, markdown);
}

/// Bloque de código / salida de sólo lectura en monoespaciada
pub fn code_block(ui: &mut Ui, text: &str) {
    egui::Frame::default()
        .fill(ui.visuals().extreme_bg_color)
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).monospace());
        });
}
