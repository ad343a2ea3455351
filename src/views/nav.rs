use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct NavItemProps {
    to: Route,
    label: AttrValue,
}

/// Link that gets an `active` class while its route is the current one.
#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let current = use_route::<Route>();
    let active = match (&props.to, current.as_ref()) {
        (Route::Home, Some(Route::Home)) => true,
        (Route::Games, Some(Route::Games | Route::GameDetail { .. })) => true,
        (Route::Awards, Some(Route::Awards | Route::AwardDetail { .. })) => true,
        _ => false,
    };

    html! {
        <Link<Route> to={props.to.clone()} classes={classes!("nav-link", active.then_some("active"))}>
            { props.label.clone() }
        </Link<Route>>
    }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <header class="nav">
            <div class="nav-inner">
                <div class="brand">
                    <Link<Route> to={Route::Home} classes={classes!("brand-link")}>
                        <div class="brand-text">
                            <span class="brand-title">{ "MJDA" }</span>
                            <span class="brand-subtitle">{ "Melhores Jogos Do Ano" }</span>
                        </div>
                    </Link<Route>>
                </div>
                <nav class="nav-links">
                    <NavItem to={Route::Home} label="Inicio" />
                    <NavItem to={Route::Games} label="Todos los Juegos" />
                    <NavItem to={Route::Awards} label="Premios" />
                </nav>
            </div>
        </header>
    }
}
