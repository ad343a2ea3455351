use super::cards::AwardTile;
use super::hooks::use_collection;
use crate::config::{AWARDS_PATH, GAMES_PATH, TAGS_PATH};
use crate::data::{Award, Catalog, Game, Tag};
use crate::detail::GameDetail;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GameDetailProps {
    pub id: AttrValue,
}

#[function_component(GameDetailPage)]
pub fn game_detail_page(props: &GameDetailProps) -> Html {
    let games = use_collection::<Game>(GAMES_PATH);
    let tags = use_collection::<Tag>(TAGS_PATH);
    let awards = use_collection::<Award>(AWARDS_PATH);

    if games.is_loading() {
        return html! { <main><p class="muted">{ "Cargando juego…" }</p></main> };
    }

    let catalog = Catalog {
        games: games.items(),
        awards: awards.items(),
        tags: tags.items(),
    };
    let Some(game) = GameDetail::build(&catalog, &props.id) else {
        return html! { <main><p>{ "Juego no encontrado." }</p></main> };
    };

    let cover_style = game
        .cover_src
        .as_ref()
        .map(|src| format!("background-image: url({});", src));

    html! {
        <main class="game-detail">
            <div class="detail-hero">
                <div class="detail-cover" style={cover_style}>
                    <div class="detail-title-box">
                        if let Some(icon) = &game.icon_src {
                            <img src={icon.clone()} alt={format!("Icono de {}", game.name)} class="detail-icon" />
                        }
                        <h1>{ &game.name }</h1>
                    </div>
                </div>
            </div>

            <div class="detail-body">
                if let Some(synopsis) = &game.synopsis {
                    <p class="synopsis">{ synopsis }</p>
                }

                <div class="tags-row">
                    { for game.tag_labels.iter().map(|label| html! { <span key={label.clone()} class="tag">{ label }</span> }) }
                </div>

                <div class="detail-gallery">
                    { for game.gallery.iter().enumerate().map(|(index, src)| html! {
                        <div key={index} class="gallery-item" style={format!("background-image: url({});", src)}></div>
                    }) }
                </div>

                <section class="awards-section">
                    <h2>{ "Premios en los que está nominado" }</h2>
                    if game.nominated_in.is_empty() {
                        <p class="muted">{ "No está nominado en ninguna categoría." }</p>
                    } else {
                        <div class="games-grid grid">
                            { for game.nominated_in.iter().map(|award| html! {
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
                    }
                </section>
            </div>
        </main>
    }
}
