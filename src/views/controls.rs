use crate::data::Tag;
use crate::filter::SortMode;
use crate::query::{ListingState, ViewMode};
use crate::reconciler::UserAction;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ListingControlsProps {
    pub state: ListingState,
    pub on_action: Callback<UserAction>,
    pub placeholder: AttrValue,
    /// Tag chips to offer; `None` on screens without a tag filter.
    #[prop_or_default]
    pub tags: Option<Vec<Tag>>,
}

#[function_component(ListingControls)]
pub fn listing_controls(props: &ListingControlsProps) -> Html {
    let filter = &props.state.filter;

    let on_input = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_action.emit(UserAction::SetQuery(input.value()));
        })
    };

    let on_sort = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            on_action.emit(UserAction::SetSort(SortMode::parse(&select.value())));
        })
    };

    let on_clear = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(UserAction::Clear))
    };

    let view_button = |view: ViewMode, label: &'static str| {
        let on_action = props.on_action.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_action.emit(UserAction::SetView(view)));
        let active = props.state.view == view;
        html! {
            <button class={classes!("toggle", active.then_some("active"))} {onclick}>{ label }</button>
        }
    };

    let sort_option = |sort: SortMode, label: &'static str| {
        html! {
            <option value={sort.as_str()} selected={filter.sort == sort}>{ label }</option>
        }
    };

    let tag_chips = match &props.tags {
        Some(tags) if !tags.is_empty() => html! {
            <div class="tag-filter">
                { for tags.iter().map(|tag| {
                    let id = tag.id.clone();
                    let selected = filter.tags.contains(&tag.id);
                    let on_action = props.on_action.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        on_action.emit(UserAction::ToggleTag(id.clone()))
                    });
                    html! {
                        <button key={tag.id.clone()}
                            class={classes!("tag", "tag-chip", selected.then_some("selected"))}
                            aria-pressed={selected.to_string()}
                            {onclick}>
                            { &tag.name }
                        </button>
                    }
                }) }
            </div>
        },
        _ => html! {},
    };

    html! {
        <div class="games-controls">
            <input class="search" type="search"
                placeholder={props.placeholder.clone()}
                value={filter.query.clone()}
                oninput={on_input} />
            <select class="sort" onchange={on_sort}>
                { sort_option(SortMode::AlphaAsc, "A → Z") }
                { sort_option(SortMode::AlphaDesc, "Z → A") }
                { sort_option(SortMode::None, "Sin orden") }
            </select>
            <button class="clear" onclick={on_clear} disabled={props.state.filter.is_default()}>
                { "Limpiar" }
            </button>
            <div class="view-toggle">
                { view_button(ViewMode::List, "Lista") }
                { view_button(ViewMode::Grid, "Grid") }
            </div>
            { tag_chips }
        </div>
    }
}
