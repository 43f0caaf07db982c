use yew::prelude::*;

use crate::components::gradient_button::{GradientButton, Variant};
use crate::components::stat_counter::StatCounter;
use crate::hooks::use_parallax;

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    use_parallax(section.clone());

    html! {
        <section id="hero" class="hero dark-section" ref={section}>
            <div class="hero-content">
                <h1 class="hero-title">
                    {"Innovation that moves "}
                    <span class="gradient-text">{"sport"}</span>
                    {" forward"}
                </h1>
                <p class="hero-subtitle">
                    {"We help teams, leagues and athletes turn data, technology and fan engagement into a lasting competitive edge."}
                </p>
                <div class="hero-actions">
                    <GradientButton href={"#contact"}>{"Start a conversation"}</GradientButton>
                    <GradientButton href={"#case-studies"} variant={Variant::Outline}>{"See our results"}</GradientButton>
                </div>
                <div class="hero-stats">
                    <StatCounter target="94" suffix="%" label="Client retention" />
                    <StatCounter target="150" suffix="+" label="Projects delivered" />
                    <StatCounter target="28" label="Sports properties" />
                    <StatCounter target="12" duration_ms={1500.0} label="Countries" />
                </div>
            </div>
        </section>
    }
}
