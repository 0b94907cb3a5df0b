use crate::PrepApp;
use crate::model::AppState;
use crate::ui::helpers::difficulty_color;
use egui::{Button, Context, RichText, ScrollArea, Ui, Visuals};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

pub fn top_panel(app: &mut PrepApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.heading("📖 For Loop Prep");
            if app.state == AppState::Exercise && ui.button("⬅ Volver a los ejercicios").clicked() {
                app.go_back();
            }
            if app.tracker.persistence_degraded() {
                ui.label(
                    RichText::new("⚠ No se pudo guardar el progreso")
                        .color(egui::Color32::YELLOW),
                )
                .on_hover_text("El progreso sigue en memoria durante esta sesión");
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀Modo claro").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Barra lateral: buscador, categorías, lista filtrada y progreso
pub fn sidebar(app: &mut PrepApp, ctx: &Context) {
    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut app.search)
                        .hint_text("Buscar ejercicios...")
                        .desired_width(ui.available_width() - 28.0),
                );
                if ui.small_button("✖").on_hover_text("Limpiar búsqueda").clicked() {
                    app.clear_search();
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new("Categorías").strong());
            // Precomputar para no mantener el borrow de app en el bucle
            let categories = app.category_counts();
            for category in &categories {
                let label = format!("{}  ({})", category.name, category.count);
                if ui.add(Button::new(label).frame(false)).clicked() {
                    app.filter_by_category(&category.name);
                }
            }

            ui.separator();
            ui.label(RichText::new("Ejercicios").strong());
            let entries = app.sidebar_entries();
            let mut clicked = None;
            ScrollArea::vertical()
                .max_height(ui.available_height() - 40.0)
                .show(ui, |ui| {
                    if entries.is_empty() {
                        ui.label(RichText::new("Sin resultados").italics());
                    }
                    for entry in &entries {
                        ui.horizontal(|ui| {
                            let title = if entry.completed {
                                format!("✅ {}", entry.title)
                            } else {
                                entry.title.clone()
                            };
                            if ui
                                .add(Button::new(title).frame(false))
                                .on_hover_text(entry.tooltip())
                                .clicked()
                            {
                                clicked = Some(entry.id.clone());
                            }
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(
                                    RichText::new(entry.difficulty.label())
                                        .small()
                                        .color(difficulty_color(entry.difficulty)),
                                );
                            });
                        });
                    }
                });
            if let Some(id) = clicked {
                app.select_exercise(&id);
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                let summary = app.progress_summary();
                ui.add_space(6.0);
                ui.label(RichText::new(summary.attempts_label()).small().weak());
                ui.label(RichText::new(summary.label()).small());
                ui.separator();
            });
        });
}

/// Editor de entrada con ancho fijo
pub fn code_editor_input(
    ui: &mut Ui,
    id: &str,
    width: f32,
    rows: usize,
    fontsize: f32,
    syntax: Syntax,
    text: &mut String,
    max_height: f32,
) {
    ScrollArea::vertical()
        .id_salt(id)
        .max_height(max_height)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(fontsize)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(syntax)
                .with_numlines(true)
                .vscroll(false)
                .show(ui, text);
        });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
    enabled: bool,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(enabled, Button::new(left_label).min_size(egui::vec2(btn_w, 36.0)))
            .clicked();
        clicked_right = ui
            .add_enabled(enabled, Button::new(right_label).min_size(egui::vec2(btn_w, 36.0)))
            .clicked();
    });
    (clicked_left, clicked_right)
}
