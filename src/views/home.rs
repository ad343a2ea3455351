use super::carousel::HomeCarousel;
use super::hooks::use_collection;
use crate::carousel::shuffled_featured;
use crate::config::{AWARDS_PATH, GAMES_PATH};
use crate::data::{Award, Catalog, Game};
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let games = use_collection::<Game>(GAMES_PATH);
    let awards = use_collection::<Award>(AWARDS_PATH);
    let loading = games.is_loading() || awards.is_loading();

    // One shuffle per loaded data set.
    let featured = {
        let (games, awards) = (games.clone(), awards.clone());
        use_memo((games.loaded_len(), awards.loaded_len()), move |_| {
            let catalog = Catalog {
                games: games.items(),
                awards: awards.items(),
                tags: &[],
            };
            shuffled_featured(&catalog, &mut rand::thread_rng())
        })
    };

    html! {
        <main>
            <section class="hero">
                <div class="hero-inner">
                    <h1>{ "MJDA — Melhores Jogos Do Ano" }</h1>
                    <p>{ "Premios de Videojuegos. Celebramos innovación, arte y diseño — descubre los mejores juegos nominados este año." }</p>
                </div>
            </section>

            <section class="home-carousel-wrap">
                if loading {
                    <div class="hero-placeholder">{ "Cargando carrusel..." }</div>
                } else {
                    <HomeCarousel items={featured.clone()} />
                }
            </section>
        </main>
    }
}
