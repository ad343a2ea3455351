use crate::assets::{background_style, display_image};
use crate::carousel::FeaturedGame;
use crate::config::TILE_MAX_NOMINATIONS;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GameCardProps {
    pub id: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub cover: Option<String>,
    #[prop_or_default]
    pub icon: Option<String>,
    #[prop_or_default]
    pub synopsis: Option<String>,
    #[prop_or_default]
    pub tags: Vec<String>,
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let cover = background_style(display_image(props.cover.as_deref(), props.icon.as_deref(), None));
    let title_id = format!("game-title-{}", props.id);

    html! {
        <Link<Route> to={Route::GameDetail { id: props.id.to_string() }} classes={classes!("game-card-link")}>
            <article class="game-card" aria-labelledby={title_id.clone()}>
                <div class="game-card-cover" style={cover}></div>
                <div class="game-card-body">
                    <h3 id={title_id}>{ &props.name }</h3>
                    if let Some(synopsis) = &props.synopsis {
                        <p class="muted">{ synopsis }</p>
                    }
                    <div class="tags-row">
                        { for props.tags.iter().map(|tag| html! { <span key={tag.clone()} class="tag">{ tag }</span> }) }
                    </div>
                </div>
            </article>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct GameTileProps {
    pub id: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub cover: Option<String>,
}

#[function_component(GameTile)]
pub fn game_tile(props: &GameTileProps) -> Html {
    html! {
        <Link<Route> to={Route::GameDetail { id: props.id.to_string() }} classes={classes!("game-tile")}>
            <div class="game-tile-cover" style={background_style(props.cover.as_deref())}></div>
            <span class="game-tile-name">{ &props.name }</span>
        </Link<Route>>
    }
}

#[derive(Clone, PartialEq)]
pub struct NomineeLink {
    pub id: String,
    pub name: String,
}

#[derive(Properties, PartialEq)]
pub struct AwardCardProps {
    pub id: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub cover: Option<String>,
    #[prop_or_default]
    pub icon: Option<String>,
    #[prop_or_default]
    pub trophy: Option<String>,
    #[prop_or_default]
    pub description: Option<String>,
    #[prop_or_default]
    pub nominees: Vec<NomineeLink>,
}

#[function_component(AwardCard)]
pub fn award_card(props: &AwardCardProps) -> Html {
    let title_id = format!("award-title-{}", props.id);

    html! {
        <article class="award-card" aria-labelledby={title_id.clone()}>
            <Link<Route> to={Route::AwardDetail { id: props.id.to_string() }} classes={classes!("award-card-left")}>
                if let Some(style) = background_style(props.cover.as_deref()) {
                    <div class="award-cover" {style}></div>
                }
                if let Some(style) = background_style(props.icon.as_deref()) {
                    <div class="award-icon" {style} aria-hidden="true"></div>
                }
                if let Some(style) = background_style(props.trophy.as_deref()) {
                    <div class="award-trophy" {style} aria-hidden="true"></div>
                }
            </Link<Route>>
            <div class="award-card-right">
                <h3 id={title_id}>
                    <Link<Route> to={Route::AwardDetail { id: props.id.to_string() }}>{ &props.name }</Link<Route>>
                </h3>
                if let Some(description) = &props.description {
                    <p class="muted">{ description }</p>
                }
                <div class="nominees">
                    { for props.nominees.iter().map(|nominee| html! {
                        <div key={nominee.id.clone()} class="nominee">
                            <Link<Route> to={Route::GameDetail { id: nominee.id.clone() }}>{ &nominee.name }</Link<Route>>
                        </div>
                    }) }
                </div>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct AwardTileProps {
    pub id: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub cover: Option<String>,
    #[prop_or_default]
    pub icon: Option<String>,
    #[prop_or_default]
    pub trophy: Option<String>,
}

#[function_component(AwardTile)]
pub fn award_tile(props: &AwardTileProps) -> Html {
    let image = display_image(
        props.cover.as_deref(),
        props.icon.as_deref(),
        props.trophy.as_deref(),
    );

    html! {
        <Link<Route> to={Route::AwardDetail { id: props.id.to_string() }} classes={classes!("game-tile", "award-tile")}>
            <div class="game-tile-cover" style={background_style(image)}></div>
            <span class="game-tile-name">{ &props.name }</span>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeaturedTileProps {
    pub item: FeaturedGame,
}

/// Wide tile used by the home carousel: cover, synopsis and a few
/// nomination badges.
#[function_component(FeaturedTile)]
pub fn featured_tile(props: &FeaturedTileProps) -> Html {
    let item = &props.item;
    let heading_id = format!("gtex-{}", item.id);

    html! {
        <Link<Route> to={Route::GameDetail { id: item.id.clone() }} classes={classes!("gtex-link")}>
            <article class="game-tile-extended" aria-labelledby={heading_id.clone()}>
                <div class="gtex-left">
                    <div class="gtex-cover" style={background_style(item.cover.as_deref())}></div>
                </div>
                <div class="gtex-right">
                    <h3 id={heading_id}>{ &item.title }</h3>
                    if let Some(synopsis) = &item.synopsis {
                        <p class="gtex-synopsis">{ synopsis }</p>
                    }
                    if !item.nominations.is_empty() {
                        <div class="gtex-nominees">
                            { for item.nominations.iter().take(TILE_MAX_NOMINATIONS).map(|nomination| {
                                let badge = display_image(None, nomination.icon.as_deref(), nomination.trophy.as_deref());
                                html! {
                                    <span key={nomination.award_id.clone()}
                                        class="gtex-nominee"
                                        title={nomination.name.clone()}
                                        aria-label={format!("Nominado a {}", nomination.name)}>
                                        <span style={background_style(badge)}></span>
                                    </span>
                                }
                            }) }
                        </div>
                    }
                </div>
            </article>
        </Link<Route>>
    }
}
