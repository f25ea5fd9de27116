use kinder_quest::{AppError, KinderApp};
use kinder_quest::config::AppConfig;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kinder_quest=info")),
        )
        .init();

    let app = match AppConfig::load().map_err(AppError::from).and_then(|c| KinderApp::new(&c)) {
        Ok(app) => app,
        Err(e) => {
            log::error!("cannot start: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions::default();
    let title = app.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            // fotos de los alumnos por URL
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log::error!("canvas #the_canvas_id not found");
            return;
        };

        let app = match AppConfig::load().map_err(AppError::from).and_then(|c| KinderApp::new(&c)) {
            Ok(app) => app,
            Err(e) => {
                log::error!("cannot start: {e}");
                return;
            }
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    egui_extras::install_image_loaders(&cc.egui_ctx);
                    Ok(Box::new(app))
                }),
            )
            .await;
        if let Err(e) = started {
            log::error!("failed to start eframe: {e:?}");
        }
    });
}
