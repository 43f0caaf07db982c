use yew::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::section_heading::SectionHeading;
use crate::config::MOTION;
use crate::data::services::{self, ServiceCategory, SERVICES};
use crate::hooks::{use_node_refs, use_reveal_group};

/// Service offering grouped into three tabs. The category columns reveal
/// together as one group.
#[function_component(Services)]
pub fn services_section() -> Html {
    let active = use_state(|| ServiceCategory::Digital);
    let column_refs = use_node_refs(ServiceCategory::ALL.len());
    let revealed = use_reveal_group((*column_refs).clone(), MOTION.reveal);

    let tabs = ServiceCategory::ALL.iter().map(|&category| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(category))
        };
        html! {
            <button
                class={classes!("service-tab", (*active == category).then_some("active"))}
                {onclick}
            >
                {category.title()}
            </button>
        }
    });

    let columns = ServiceCategory::ALL.iter().enumerate().map(|(i, &category)| {
        let hidden = *active != category;
        html! {
            <div
                ref={column_refs[i].clone()}
                class={classes!(
                    "service-column",
                    "reveal-on-scroll",
                    revealed.is_revealed(i).then_some("revealed"),
                    hidden.then_some("hidden")
                )}
            >
                {
                    services::in_category(category).enumerate().map(|(j, service)| html! {
                        <GlassCard key={service.id} delay={j as f64 * 0.1}>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </GlassCard>
                    }).collect::<Html>()
                }
            </div>
        }
    });

    html! {
        <section id="services" class="services">
            <SectionHeading
                title="What we do"
                subtitle={format!("{} services across three practices", SERVICES.len())}
            />
            <div class="service-tabs">{ for tabs }</div>
            { for columns }
        </section>
    }
}
