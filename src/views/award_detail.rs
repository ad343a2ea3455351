use super::cards::GameTile;
use super::hooks::use_collection;
use crate::config::{AWARDS_PATH, GAMES_PATH};
use crate::data::{Award, Catalog, Game};
use crate::detail::AwardDetail;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AwardDetailProps {
    pub id: AttrValue,
}

#[function_component(AwardDetailPage)]
pub fn award_detail_page(props: &AwardDetailProps) -> Html {
    let awards = use_collection::<Award>(AWARDS_PATH);
    let games = use_collection::<Game>(GAMES_PATH);

    if awards.is_loading() {
        return html! { <main><p class="muted">{ "Cargando premio…" }</p></main> };
    }

    let catalog = Catalog {
        games: games.items(),
        awards: awards.items(),
        tags: &[],
    };
    let Some(award) = AwardDetail::build(&catalog, &props.id) else {
        return html! { <main><p>{ "Premio no encontrado." }</p></main> };
    };

    let cover_style = award
        .cover_src
        .as_ref()
        .map(|src| format!("background-image: url({});", src));

    html! {
        <main class="game-detail">
            <div class="detail-hero">
                <div class="detail-cover" style={cover_style}>
                    <div class="detail-title-box">
                        if let Some(icon) = &award.icon_src {
                            <img src={icon.clone()} alt={format!("Icono de {}", award.name)} class="detail-icon" />
                        }
                        <h1>{ &award.name }</h1>
                    </div>
                    if let Some(trophy) = &award.trophy_src {
                        <div class="award-trophy" style={format!("background-image: url({});", trophy)} aria-hidden="true"></div>
                    }
                </div>
            </div>

            <div class="detail-body">
                if let Some(description) = &award.description {
                    <p class="synopsis">{ description }</p>
                }

                <section class="awards-section">
                    <h2>{ "Nominados" }</h2>
                    if games.is_loading() {
                        <p class="muted">{ "Cargando nominados…" }</p>
                    } else if award.nominees.is_empty() {
                        <p class="muted">{ "No hay juegos nominados para este premio." }</p>
                    } else {
                        <div class="games-grid grid">
                            { for award.nominees.iter().map(|nominee| html! {
                                <div key={nominee.id.clone()} class="game-wrapper">
                                    <GameTile id={nominee.id.clone()} name={nominee.name.clone()} cover={nominee.cover.clone()} />
                                </div>
                            }) }
                        </div>
                    }
                </section>
            </div>
        </main>
    }
}
