use yew::prelude::*;

use crate::components::animated_quote::AnimatedQuote;
use crate::components::case_study_chart::CaseStudyChart;
use crate::components::glass_card::GlassCard;
use crate::components::lazy_image::LazyImage;
use crate::components::section_heading::SectionHeading;
use crate::components::stat_counter::StatCounter;
use crate::data::case_studies::{self, CaseStudy, CATEGORIES};
use crate::motion::improvement::{format_improvement, improvement};

#[derive(Properties, PartialEq)]
struct DetailProps {
    study: &'static CaseStudy,
}

#[function_component(CaseStudyDetail)]
fn case_study_detail(props: &DetailProps) -> Html {
    let study = props.study;
    let metric_index = use_state(|| 0usize);
    let metric = study.metrics.get(*metric_index).or(study.metrics.first());

    html! {
        <div class="case-study-detail">
            <div class="case-study-header">
                <LazyImage src={study.image} alt={study.title} class="case-study-image" />
                <div>
                    <span class="case-study-meta">{format!("{} · {}", study.sport, study.category)}</span>
                    <h3>{study.title}</h3>
                    <p class="case-study-client">{study.client}</p>
                </div>
            </div>
            <div class="case-study-body">
                <div>
                    <h4>{"Challenge"}</h4>
                    <p>{study.challenge}</p>
                    <h4>{"Solution"}</h4>
                    <p>{study.solution}</p>
                </div>
                <ol class="milestones">
                    {
                        study.milestones.iter().map(|m| html! {
                            <li>
                                <span class="milestone-date">{m.date}</span>
                                <strong>{m.title}</strong>
                                <p>{m.description}</p>
                            </li>
                        }).collect::<Html>()
                    }
                </ol>
            </div>
            <div class="case-study-results">
                <table class="metrics">
                    <thead>
                        <tr><th>{"Metric"}</th><th>{"Before"}</th><th>{"After"}</th><th>{"Change"}</th></tr>
                    </thead>
                    <tbody>
                        {
                            study.metrics.iter().enumerate().map(|(i, m)| {
                                let onclick = {
                                    let metric_index = metric_index.clone();
                                    Callback::from(move |_: MouseEvent| metric_index.set(i))
                                };
                                let change = format_improvement(improvement(m.before, m.after, m.lower_is_better));
                                html! {
                                    <tr class={classes!((*metric_index == i).then_some("selected"))} {onclick}>
                                        <td>{m.name}</td>
                                        <td>{m.before.to_string()}</td>
                                        <td>{m.after.to_string()}</td>
                                        <td>{change}</td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
                if let Some(m) = metric {
                    <CaseStudyChart
                        metric={m.name}
                        before={m.before}
                        after={m.after}
                        lower_is_better={m.lower_is_better}
                    />
                }
                <StatCounter target={study.roi_percent.to_string()} suffix="%" label="Return on investment" />
            </div>
            <AnimatedQuote
                text={study.testimonial.quote}
                author={format!("{}, {}", study.testimonial.author, study.testimonial.position)}
            />
        </div>
    }
}

#[function_component(CaseStudies)]
pub fn case_studies_section() -> Html {
    let category = use_state(|| "All");
    let selected = use_state(|| case_studies::CASE_STUDIES.first().map(|s| s.id));

    let visible = case_studies::in_category(*category);
    let detail = (*selected)
        .and_then(case_studies::find)
        .filter(|study| visible.iter().any(|v| v.id == study.id))
        .or_else(|| visible.first().copied());

    let filters = CATEGORIES.iter().map(|&name| {
        let onclick = {
            let category = category.clone();
            Callback::from(move |_: MouseEvent| category.set(name))
        };
        html! {
            <button class={classes!("filter", (*category == name).then_some("active"))} {onclick}>
                {name}
            </button>
        }
    });

    html! {
        <section id="case-studies" class="case-studies">
            <SectionHeading title="Results" subtitle="Measured outcomes from recent engagements" />
            <div class="case-study-filters">{ for filters }</div>
            <div class="case-study-cards">
                {
                    if visible.is_empty() {
                        html! { <p class="empty">{"No case studies in this category yet."}</p> }
                    } else {
                        visible.iter().enumerate().map(|(i, study)| {
                            let id = study.id;
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_: MouseEvent| selected.set(Some(id)))
                            };
                            html! {
                                <GlassCard key={id} delay={i as f64 * 0.1} {onclick}>
                                    <span class="case-study-meta">{study.sport}</span>
                                    <h3>{study.title}</h3>
                                    <p>{study.client}</p>
                                </GlassCard>
                            }
                        }).collect::<Html>()
                    }
                }
            </div>
            if let Some(study) = detail {
                <CaseStudyDetail key={study.id} {study} />
            }
        </section>
    }
}
