use super::cards::FeaturedTile;
use crate::carousel::{Carousel, FeaturedGame};
use crate::config::CAROUSEL_AUTOPLAY_MS;
use gloo_timers::callback::Interval;
use log::debug;
use std::rc::Rc;
use yew::prelude::*;

pub enum CarouselAction {
    Next,
    Prev,
    Tick,
    Pause(bool),
    Resize(usize),
    Swipe { start_x: f64, end_x: f64 },
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::Tick => next.tick(),
            CarouselAction::Pause(paused) => next.set_paused(paused),
            CarouselAction::Resize(len) => next.resize(len),
            CarouselAction::Swipe { start_x, end_x } => {
                if let Some(swipe) = next.swipe(start_x, end_x) {
                    debug!("Carousel swipe {:?} -> {}", swipe, next.index());
                }
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeCarouselProps {
    pub items: Rc<Vec<FeaturedGame>>,
}

#[function_component(HomeCarousel)]
pub fn home_carousel(props: &HomeCarouselProps) -> Html {
    let len = props.items.len();
    let carousel = use_reducer_eq(|| Carousel::with_random_start(len, &mut rand::thread_rng()));
    let touch_start = use_mut_ref(|| None::<f64>);

    {
        let carousel = carousel.clone();
        use_effect_with(len, move |len| {
            if carousel.len() != *len {
                carousel.dispatch(CarouselAction::Resize(*len));
            }
        });
    }

    {
        let carousel = carousel.clone();
        let paused = carousel.is_paused();
        use_effect_with((len, paused), move |(len, paused)| {
            let interval = (!*paused && *len > 1).then(|| {
                Interval::new(CAROUSEL_AUTOPLAY_MS, move || {
                    carousel.dispatch(CarouselAction::Tick)
                })
            });
            move || drop(interval)
        });
    }

    if len == 0 {
        return html! {};
    }

    let dispatch_on_click = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            carousel.dispatch(action());
        })
    };
    let go_prev = dispatch_on_click(|| CarouselAction::Prev);
    let go_next = dispatch_on_click(|| CarouselAction::Next);

    let on_key = {
        let carousel = carousel.clone();
        Callback::from(move |event: KeyboardEvent| match event.key().as_str() {
            "ArrowLeft" => {
                event.prevent_default();
                carousel.dispatch(CarouselAction::Prev);
            }
            "ArrowRight" => {
                event.prevent_default();
                carousel.dispatch(CarouselAction::Next);
            }
            _ => {}
        })
    };

    let on_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Pause(true)))
    };
    let on_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Pause(false)))
    };

    let on_touch_start = {
        let touch_start = touch_start.clone();
        Callback::from(move |event: TouchEvent| {
            *touch_start.borrow_mut() = event.touches().get(0).map(|t| t.client_x() as f64);
        })
    };
    let on_touch_end = {
        let carousel = carousel.clone();
        Callback::from(move |event: TouchEvent| {
            let start = touch_start.borrow_mut().take();
            let end = event.changed_touches().get(0).map(|t| t.client_x() as f64);
            if let (Some(start_x), Some(end_x)) = (start, end) {
                carousel.dispatch(CarouselAction::Swipe { start_x, end_x });
            }
        })
    };

    let index = carousel.index();
    let strip_style = format!(
        "width: {}%; transform: translateX({:.4}%); transition: transform 450ms cubic-bezier(.2,.9,.2,1);",
        len * 100,
        carousel.offset_percent()
    );

    html! {
        <div class="home-carousel"
            tabindex="0"
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
            onkeydown={on_key}>
            <div class="carousel-controls">
                <button type="button" aria-label="Prev" aria-controls="home-carousel-slides"
                    class="carousel-btn prev" onclick={go_prev}>{ "‹" }</button>
                <button type="button" aria-label="Next" aria-controls="home-carousel-slides"
                    class="carousel-btn next" onclick={go_next}>{ "›" }</button>
            </div>
            <div id="home-carousel-slides" class="slides" role="region"
                aria-roledescription="carousel" aria-label="Juegos destacados">
                <div class="slides-inner" style={strip_style}>
                    { for props.items.iter().enumerate().map(|(slide, item)| html! {
                        <div key={item.id.clone()} class="slide" aria-hidden={(slide != index).to_string()}>
                            <div class="slide-content">
                                <div class="slide-item">
                                    <FeaturedTile item={item.clone()} />
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
