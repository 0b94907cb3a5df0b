use forloop_prep::PrepApp;
use forloop_prep::config::Config;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use forloop_prep::config::APP_NAME;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let app = PrepApp::from_config(config).map_err(|err| {
        log::error!("no se pudo cargar el catálogo: {err}");
        eframe::Error::AppCreation(Box::new(err))
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("sin documento: no se puede arrancar");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("falta el canvas 'the_canvas_id'");
            return;
        };

        let app = match PrepApp::from_config(Config::from_env()) {
            Ok(app) => app,
            Err(err) => {
                log::error!("no se pudo cargar el catálogo: {err}");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(app))),
            )
            .await;
        if let Err(err) = result {
            log::error!("fallo al arrancar eframe: {err:?}");
        }
    });
}
