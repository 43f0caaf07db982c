use yew::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::lazy_image::LazyImage;
use crate::components::section_heading::{Alignment, SectionHeading};
use crate::data::expertise::EXPERTISE;
use crate::hooks::use_parallax;

#[function_component(Expertise)]
pub fn expertise() -> Html {
    let section = use_node_ref();
    use_parallax(section.clone());

    html! {
        <section id="expertise" class="expertise dark-section" ref={section}>
            <SectionHeading
                title="Our expertise"
                subtitle="Deep specialisms, applied to the business of sport"
                alignment={Alignment::Left}
            />
            <div class="expertise-grid">
                {
                    EXPERTISE.iter().enumerate().map(|(i, area)| html! {
                        <GlassCard key={area.id} delay={i as f64 * 0.1} interactive={false}>
                            <LazyImage src={area.image} alt={area.title} class="expertise-image" />
                            <h3>{area.title}</h3>
                            <p>{area.description}</p>
                            <div class="proficiency">
                                <div class="proficiency-bar" style={format!("width: {}%;", area.proficiency)} />
                                <span>{format!("{}%", area.proficiency)}</span>
                            </div>
                            <ul class="applications">
                                { for area.applications.iter().map(|app| html! { <li>{*app}</li> }) }
                            </ul>
                        </GlassCard>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
