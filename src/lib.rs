pub mod assets;
pub mod carousel;
pub mod config;
pub mod data;
pub mod detail;
pub mod filter;
pub mod loader;
pub mod query;
pub mod reconciler;
pub mod sorting;
pub mod storage;
pub mod views;

use views::award_detail::AwardDetailPage;
use views::awards::AwardsPage;
use views::game_detail::GameDetailPage;
use views::games::GamesPage;
use views::home::HomePage;
use views::nav::NavBar;
use wasm_bindgen::prelude::wasm_bindgen;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/games")]
    Games,
    #[at("/games/:id")]
    GameDetail { id: String },
    #[at("/awards")]
    Awards,
    #[at("/awards/:id")]
    AwardDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Games => html! { <GamesPage /> },
        Route::GameDetail { id } => html! { <GameDetailPage id={id} /> },
        Route::Awards => html! { <AwardsPage /> },
        Route::AwardDetail { id } => html! { <AwardDetailPage id={id} /> },
        Route::NotFound => html! {
            <main>
                <p>{ "Página no encontrada." }</p>
                <Link<Route> to={Route::Home}>{ "Volver al inicio" }</Link<Route>>
            </main>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <NavBar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
