use crate::PrepApp;
use crate::code_utils::{js_syntax, reference_search_url};
use crate::model::SideTab;
use crate::ui::helpers::{code_block, difficulty_badge, rich_description};
use crate::ui::layout::{code_editor_input, two_button_row};
use egui::{Button, CentralPanel, Context, RichText, ScrollArea};

/// Clics de este frame; se aplican al terminar de pintar
#[derive(Default)]
struct Clicks {
    run: bool,
    test: bool,
    use_solution: bool,
    reset: bool,
    next_step: bool,
    previous_step: bool,
    search: bool,
}

pub fn ui_exercise(app: &mut PrepApp, ctx: &Context) {
    let Some(exercise) = app.current_exercise().cloned() else {
        app.go_back();
        return;
    };
    let now = ctx.input(|i| i.time);
    let mut clicks = Clicks::default();
    let message = app.message.clone();
    let cache = &mut app.cm_cache;
    let Some(session) = app.session.as_mut() else {
        return;
    };
    let busy = session.is_busy();

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            // ----------- CABECERA -----------
            ui.add_space(8.0);
            ui.heading(&exercise.title);
            ui.horizontal(|ui| {
                ui.label(RichText::new(&exercise.category).strong());
                difficulty_badge(ui, exercise.difficulty);
            });
            ui.add_space(8.0);

            ui.columns(2, |cols| {
                let (left, right) = cols.split_at_mut(1);
                let left = &mut left[0];
                let right = &mut right[0];

                // ----------- ENUNCIADO + EDITOR -----------
                egui::Frame::group(left.style()).show(left, |ui| {
                    ui.label(RichText::new("Descripción del problema").heading());
                    ui.add_space(4.0);
                    rich_description(ui, cache, &exercise.description);
                    if !exercise.examples.is_empty() {
                        ui.add_space(6.0);
                        ui.label(RichText::new("Ejemplos:").strong());
                        for example in &exercise.examples {
                            code_block(ui, example);
                            ui.add_space(4.0);
                        }
                    }
                });

                left.add_space(10.0);
                egui::Frame::group(left.style()).show(left, |ui| {
                    ui.label(RichText::new("Editor de código").heading());
                    ui.label(RichText::new("Escribe tu solución debajo").weak());
                    let width = ui.available_width();
                    code_editor_input(
                        ui,
                        "code_editor",
                        width,
                        20,
                        14.0,
                        js_syntax(),
                        &mut session.code,
                        420.0,
                    );

                    if busy || !session.output.is_empty() {
                        ui.add_space(6.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("Salida:").strong());
                            if busy {
                                ui.spinner();
                            }
                        });
                        ScrollArea::vertical()
                            .id_salt("output")
                            .max_height(200.0)
                            .show(ui, |ui| code_block(ui, &session.output));
                    }

                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        let steps_label = if session.tab == SideTab::Steps {
                            "Ocultar pasos"
                        } else {
                            "Mostrar pasos"
                        };
                        if ui.button(steps_label).clicked() {
                            session.tab = match session.tab {
                                SideTab::Steps => SideTab::Reference,
                                SideTab::Reference => SideTab::Steps,
                            };
                        }
                        clicks.use_solution = ui.button("Usar solución").clicked();
                        clicks.reset = ui.button("↩ Restablecer").clicked();
                    });
                    let (run, test) = two_button_row(ui, width, "▶ Ejecutar", "✔ Probar", !busy);
                    clicks.run = run;
                    clicks.test = test;

                    if !message.is_empty() {
                        ui.label(&message);
                    }
                });

                // ----------- PESTAÑAS LATERALES -----------
                right.horizontal(|ui| {
                    ui.selectable_value(&mut session.tab, SideTab::Steps, "Paso a paso");
                    ui.selectable_value(&mut session.tab, SideTab::Reference, "Referencia");
                });
                right.separator();

                match session.tab {
                    SideTab::Steps => {
                        let steps = exercise.steps();
                        egui::Frame::group(right.style()).show(right, |ui| {
                            ui.label(RichText::new("Pasos de la solución").heading());
                            let Some(step) = steps.get(session.step) else {
                                ui.label("Este ejercicio no tiene solución paso a paso.");
                                return;
                            };
                            ui.label(
                                RichText::new(format!("Paso {} de {}", session.step + 1, steps.len()))
                                    .weak(),
                            );
                            ui.add_space(6.0);
                            ui.label(RichText::new(&step.title).strong());
                            ui.add_space(4.0);
                            rich_description(ui, cache, &step.content);
                            if let Some(code) = &step.code {
                                code_block(ui, code);
                            }
                            ui.add_space(8.0);
                            ui.horizontal(|ui| {
                                clicks.previous_step = ui
                                    .add_enabled(session.step > 0, Button::new("Anterior"))
                                    .clicked();
                                clicks.next_step = ui
                                    .add_enabled(
                                        session.step + 1 < steps.len(),
                                        Button::new("Siguiente paso ⏭"),
                                    )
                                    .clicked();
                            });
                        });
                    }
                    SideTab::Reference => {
                        egui::Frame::group(right.style()).show(right, |ui| {
                            ui.label(RichText::new("Búsqueda de referencia").heading());
                            ui.label(RichText::new("Consulta documentación y ejemplos").weak());
                            ui.add_space(6.0);
                            ui.horizontal(|ui| {
                                let response = ui.add(
                                    egui::TextEdit::singleline(&mut session.search_query)
                                        .hint_text("Buscar ayuda en Google...")
                                        .desired_width(ui.available_width() - 36.0),
                                );
                                let enter = response.lost_focus()
                                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
                                clicks.search = ui.button("🔍").clicked() || enter;
                            });
                            ui.add_space(6.0);

                            if session.search_results.is_empty() {
                                ui.label(
                                    RichText::new(
                                        "Busca en Google documentación y ejemplos que te ayuden a resolver el ejercicio.",
                                    )
                                    .weak(),
                                );
                            } else if let Some(url) = reference_search_url(&session.search_query) {
                                ui.label(RichText::new("Resultados:").strong());
                                for result in &session.search_results {
                                    ui.hyperlink_to(result, &url);
                                }
                            }
                        });
                    }
                }
            });
        });
    });

    // Aplicar los clics fuera del borrow de la sesión
    if clicks.use_solution {
        app.use_solution();
    }
    if clicks.reset {
        app.reset_code();
    }
    if clicks.previous_step {
        app.previous_step();
    }
    if clicks.next_step {
        app.next_step();
    }
    if clicks.run {
        app.run_code(now);
    }
    if clicks.test {
        app.test_code(now);
    }
    if clicks.search {
        if let Some(url) = app.reference_search() {
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }
    }
}
