use super::cards::{AwardCard, AwardTile, NomineeLink};
use super::controls::ListingControls;
use super::hooks::{use_collection, use_listing};
use crate::config::{AWARDS_PATH, GAMES_PATH};
use crate::data::{Award, Catalog, Game};
use crate::filter::filter_entities;
use crate::query::{ScreenKind, ViewMode};
use crate::sorting::sort_entities;
use crate::Route;
use yew::prelude::*;

#[function_component(AwardsPage)]
pub fn awards_page() -> Html {
    let awards = use_collection::<Award>(AWARDS_PATH);
    let games = use_collection::<Game>(GAMES_PATH);
    let listing = use_listing(ScreenKind::Awards, Route::Awards);

    let catalog = Catalog {
        games: games.items(),
        awards: awards.items(),
        tags: &[],
    };
    let filter = &listing.state.filter;
    let matched = filter_entities(catalog.awards, filter);
    let ordered = sort_entities(&matched, filter.sort);

    let nominee_links = |award: &Award| -> Vec<NomineeLink> {
        award
            .nominees
            .iter()
            .map(|id| NomineeLink {
                id: id.clone(),
                name: catalog.game_name(id).to_string(),
            })
            .collect()
    };

    let results = if awards.is_loading() {
        html! { <p class="muted">{ "Cargando premios…" }</p> }
    } else if ordered.is_empty() {
        html! { <p class="muted">{ "Ningún premio coincide con la búsqueda." }</p> }
    } else {
        match listing.state.view {
            ViewMode::List => html! {
                <div class="awards-list">
                    { for ordered.iter().map(|award| html! {
                        <AwardCard
                            key={award.id.clone()}
                            id={award.id.clone()}
                            name={award.name.clone()}
                            cover={award.cover.clone()}
                            icon={award.icon.clone()}
                            trophy={award.trophy.clone()}
                            description={award.description.clone()}
                            nominees={nominee_links(*award)} />
                    }) }
                </div>
            },
            ViewMode::Grid => html! {
                <div class="games-grid grid">
                    { for ordered.iter().map(|award| html! {
                        <div key={award.id.clone()} class="game-wrapper">
                            <AwardTile
                                id={award.id.clone()}
                                name={award.name.clone()}
                                cover={award.cover.clone()}
                                icon={award.icon.clone()}
                                trophy={award.trophy.clone()} />
                        </div>
                    }) }
                </div>
            },
        }
    };

    html! {
        <main>
            <h1>{ "Premios" }</h1>
            <ListingControls
                state={listing.state.clone()}
                on_action={listing.dispatch.clone()}
                placeholder="Buscar premios…" />
            { results }
        </main>
    }
}
