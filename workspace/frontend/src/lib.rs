use yew::prelude::*;

mod components;
pub mod api_client;
pub mod feedback;
pub mod settings;

use components::predict_form::PredictForm;
use feedback::toast::ToastProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <main class="min-h-screen bg-base-200 p-6">
                <div class="max-w-3xl mx-auto space-y-6">
                    <h1 class="text-3xl font-bold">{"Stock Price Forecast"}</h1>
                    <p class="text-sm text-gray-500">
                        {"Enter the last 60 closing prices and pick a model to forecast the coming days."}
                    </p>
                    <PredictForm />
                </div>
            </main>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Stockcast Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Prediction endpoint: {}", settings.predict_endpoint);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
