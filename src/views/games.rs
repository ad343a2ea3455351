use super::cards::{GameCard, GameTile};
use super::controls::ListingControls;
use super::hooks::{use_collection, use_listing};
use crate::config::{GAMES_PATH, TAGS_PATH};
use crate::data::{Catalog, Game, Tag};
use crate::filter::filter_entities;
use crate::query::{ScreenKind, ViewMode};
use crate::reconciler::UserAction;
use crate::sorting::sort_entities;
use crate::Route;
use yew::prelude::*;

#[function_component(GamesPage)]
pub fn games_page() -> Html {
    let games = use_collection::<Game>(GAMES_PATH);
    let tags = use_collection::<Tag>(TAGS_PATH);
    let listing = use_listing(ScreenKind::Games, Route::Games);

    let catalog = Catalog {
        games: games.items(),
        awards: &[],
        tags: tags.items(),
    };
    let filter = &listing.state.filter;
    let matched = filter_entities(catalog.games, filter);
    let ordered = sort_entities(&matched, filter.sort);

    let results = if games.is_loading() {
        html! { <p class="muted">{ "Cargando juegos…" }</p> }
    } else if ordered.is_empty() {
        let on_clear = {
            let dispatch = listing.dispatch.clone();
            Callback::from(move |_: MouseEvent| dispatch.emit(UserAction::Clear))
        };
        html! {
            <div class="empty-state">
                <p class="muted">{ "Ningún juego coincide con los filtros." }</p>
                if filter.has_criteria() {
                    <button class="clear" onclick={on_clear}>{ "Limpiar filtros" }</button>
                }
            </div>
        }
    } else {
        match listing.state.view {
            ViewMode::List => html! {
                <div class="games-grid list">
                    { for ordered.iter().map(|game| html! {
                        <div key={game.id.clone()} class="game-wrapper">
                            <GameCard
                                id={game.id.clone()}
                                name={game.name.clone()}
                                cover={game.cover.clone()}
                                icon={game.icon.clone()}
                                synopsis={game.synopsis.clone()}
                                tags={catalog.tag_labels(*game).into_iter().map(str::to_string).collect::<Vec<_>>()} />
                        </div>
                    }) }
                </div>
            },
            ViewMode::Grid => html! {
                <div class="games-grid grid">
                    { for ordered.iter().map(|game| html! {
                        <div key={game.id.clone()} class="game-wrapper">
                            <GameTile id={game.id.clone()} name={game.name.clone()} cover={game.cover.clone()} />
                        </div>
                    }) }
                </div>
            },
        }
    };

    html! {
        <main>
            <h1>{ "Todos los Juegos" }</h1>
            <ListingControls
                state={listing.state.clone()}
                on_action={listing.dispatch.clone()}
                placeholder="Buscar juegos…"
                tags={(!tags.is_loading()).then(|| tags.items().to_vec())} />
            if !games.is_loading() {
                <p class="muted results-count">{ format!("{} de {} juegos", ordered.len(), catalog.games.len()) }</p>
            }
            { results }
        </main>
    }
}
