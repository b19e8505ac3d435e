use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod api_client;
pub mod chart;
pub mod common;
pub mod hooks;
pub mod settings;

use components::stockinfo::StockInfo;

const DEFAULT_TICKER: &str = "AAPL";

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/detail/:symbol")]
    Detail { symbol: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            html! { <StockInfo ticker_symbol={DEFAULT_TICKER.to_string()} /> }
        }
        Route::Detail { symbol } => {
            html! { <StockInfo ticker_symbol={symbol} /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <h1>{"404 Not Found"}</h1> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== InvesTalk Frontend Application Starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
