use gloo_timers::callback::Interval;
use log::{debug, warn};
use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::config::MOTION;
use crate::data::properties::SportsProperty;
use crate::motion::carousel::AutoCarousel;

#[derive(Properties, PartialEq)]
pub struct SportsCarouselProps {
    pub items: &'static [SportsProperty],
}

pub enum Msg {
    Tick,
    Enter(usize),
    Leave,
}

/// Grid of partner properties where one item at a time is highlighted.
/// The highlight advances on a timer and follows the pointer while hovering.
pub struct SportsCarousel {
    controller: Option<AutoCarousel<Interval>>,
}

impl SportsCarousel {
    fn interval(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(MOTION.carousel_interval_ms, move || link.send_message(Msg::Tick))
    }
}

impl Component for SportsCarousel {
    type Message = Msg;
    type Properties = SportsCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut controller = AutoCarousel::new(ctx.props().items.len());
        match controller.as_mut() {
            Some(c) => c.start(|| Self::interval(ctx)),
            None => warn!("sports carousel has no items, auto-advance disabled"),
        }
        Self { controller }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(controller) = self.controller.as_mut() else {
            return false;
        };
        match msg {
            Msg::Tick => {
                controller.tick();
            }
            Msg::Enter(index) => controller.pointer_enter(index),
            Msg::Leave => controller.pointer_leave(|| Self::interval(ctx)),
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(controller) = self.controller.as_mut() {
            controller.teardown();
            debug!("sports carousel torn down, {} timers live", controller.live_timers());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let active = self.controller.as_ref().map(|c| c.active_index());

        html! {
            <div class="sports-carousel">
                {
                    ctx.props().items.iter().enumerate().map(|(i, item)| {
                        let is_active = active == Some(i);
                        let (scale, filter) = if is_active {
                            ("scale(1.1)", "grayscale(0%) brightness(1) opacity(1)")
                        } else {
                            ("scale(1)", "grayscale(80%) brightness(0.9) opacity(0.7)")
                        };
                        html! {
                            <div
                                key={item.name}
                                class={classes!("sports-carousel-item", is_active.then_some("active"))}
                                style={format!("transform: {}; transition: transform 0.3s ease;", scale)}
                                onmouseenter={ctx.link().callback(move |_| Msg::Enter(i))}
                                onmouseleave={ctx.link().callback(|_| Msg::Leave)}
                            >
                                <div style={format!("filter: {}; transition: filter 0.3s ease;", filter)}>
                                    <LazyImage src={item.logo} alt={format!("{} logo", item.name)} />
                                </div>
                                <span class="sports-carousel-label">{ item.name }</span>
                                <span class="sports-carousel-sport">{ item.sport }</span>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        }
    }
}
