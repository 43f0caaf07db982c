use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::components::sports_carousel::SportsCarousel;
use crate::data::properties::PROPERTIES;

#[function_component(Partners)]
pub fn partners() -> Html {
    html! {
        <section id="partners" class="partners">
            <SectionHeading title="Trusted by" subtitle="Sports properties we have partnered with" />
            <SportsCarousel items={PROPERTIES} />
        </section>
    }
}
