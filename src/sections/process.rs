use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::data::process::PROCESS;

#[function_component(Process)]
pub fn process() -> Html {
    let open = use_state(|| None::<u8>);

    html! {
        <section id="process" class="process">
            <SectionHeading title="How we work" subtitle="Five phases from first conversation to measured impact" />
            <ol class="process-steps">
                {
                    PROCESS.iter().enumerate().map(|(i, step)| {
                        let expanded = *open == Some(step.id);
                        let onclick = {
                            let open = open.clone();
                            let id = step.id;
                            Callback::from(move |_: MouseEvent| {
                                open.set(if *open == Some(id) { None } else { Some(id) });
                            })
                        };
                        html! {
                            <li key={step.id as usize} class="process-step">
                                <Reveal delay={i as f64 * 0.15}>
                                    <button class="process-header" aria-expanded={expanded.to_string()} {onclick}>
                                        <span class="step-number">{format!("{:02}", step.id)}</span>
                                        <h3>{step.title}</h3>
                                    </button>
                                    <p>{step.description}</p>
                                    if expanded {
                                        <div class="sub-steps">
                                            {
                                                step.sub_steps.iter().map(|sub| html! {
                                                    <div class="sub-step">
                                                        <h4>{sub.title}</h4>
                                                        <p>{sub.description}</p>
                                                    </div>
                                                }).collect::<Html>()
                                            }
                                        </div>
                                    }
                                </Reveal>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ol>
        </section>
    }
}
