mod helpers;
pub mod layout;
pub mod views;

use crate::app::PrepApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, sidebar, top_panel};
use std::time::Duration;

impl App for PrepApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Resolver la ejecución simulada cuando vence el retardo
        let now = ctx.input(|i| i.time);
        self.poll_evaluation(now);
        if let Some(remaining) = self.pending_remaining(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(remaining.min(0.25)));
        }

        top_panel(self, ctx);
        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);
        sidebar(self, ctx);

        match self.state {
            AppState::ExerciseList => views::exercise_list::ui_exercise_list(self, ctx),
            AppState::Exercise => views::exercise::ui_exercise(self, ctx),
        }
    }

    // El progreso ya se guarda en cada cambio; aquí sólo se reescribe
    // al cerrar o en el autoguardado de eframe.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.tracker.flush();
    }
}
