use gloo_console::log;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::gradient_button::GradientButton;
use crate::components::section_heading::SectionHeading;
use crate::contact::{self, ContactForm, Field, SubmissionState, BUDGETS, ORGANIZATION_TYPES, SERVICE_TYPES, TIMELINES};

/// Current value of whichever form control fired `e`.
fn control_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

fn select(label: &'static str, options: &'static [&'static str], value: &str, required: bool, onchange: Callback<Event>) -> Html {
    html! {
        <label class="form-field">
            <span>{label}{ if required { " *" } else { "" } }</span>
            <select {onchange} {required}>
                <option value="" selected={value.is_empty()} disabled={required}>{"Select..."}</option>
                {
                    options.iter().map(|&option| html! {
                        <option value={option} selected={value == option}>{option}</option>
                    }).collect::<Html>()
                }
            </select>
        </label>
    }
}

#[function_component(Contact)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let state = use_state(SubmissionState::default);

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = control_value(&e) {
                let mut next = (*form).clone();
                next.set(field, value);
                form.set(next);
            }
        })
    };
    let on_text = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = control_value(&e) {
                let mut next = (*form).clone();
                next.set(field, value);
                form.set(next);
            }
        })
    };
    let on_newsletter = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                let mut next = (*form).clone();
                next.newsletter = input.checked();
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.is_submitting {
                return;
            }
            let mut next = (*state).clone();
            if let Err(err) = form.validate() {
                next.reject(&err);
                state.set(next);
                return;
            }
            next.begin();
            state.set(next.clone());

            let payload = (*form).clone();
            let state = state.clone();
            spawn_local(async move {
                let result = contact::submit(&payload).await;
                match &result {
                    Ok(()) => log!("Contact form sent"),
                    Err(e) => log!("Contact form failed:", e.to_string()),
                }
                next.finish(result);
                state.set(next);
            });
        })
    };

    let send_another = {
        let form = form.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(ContactForm::default());
            let mut next = (*state).clone();
            next.reset();
            state.set(next);
        })
    };

    let body = if state.submitted {
        html! {
            <div class="thank-you">
                <h3>{"Thank you!"}</h3>
                <p>{"Your message has been received. A member of our team will be in touch within one business day."}</p>
                <GradientButton onclick={send_another}>{"Send another message"}</GradientButton>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" {onsubmit} novalidate={true}>
                <div class="form-row">
                    <label class="form-field">
                        <span>{"Name *"}</span>
                        <input type="text" value={form.name.clone()} oninput={on_text(Field::Name)} required={true} />
                    </label>
                    <label class="form-field">
                        <span>{"Email *"}</span>
                        <input type="email" value={form.email.clone()} oninput={on_text(Field::Email)} required={true} />
                    </label>
                </div>
                <div class="form-row">
                    <label class="form-field">
                        <span>{"Organization *"}</span>
                        <input type="text" value={form.organization.clone()} oninput={on_text(Field::Organization)} required={true} />
                    </label>
                    { select("Organization type", ORGANIZATION_TYPES, &form.organization_type, true, on_field(Field::OrganizationType)) }
                </div>
                <div class="form-row">
                    { select("Service of interest", SERVICE_TYPES, &form.service_type, true, on_field(Field::ServiceType)) }
                    { select("Budget", BUDGETS, &form.budget, false, on_field(Field::Budget)) }
                    { select("Timeline", TIMELINES, &form.timeline, false, on_field(Field::Timeline)) }
                </div>
                <label class="form-field">
                    <span>{"Message *"}</span>
                    <textarea rows="5" value={form.message.clone()} oninput={on_text(Field::Message)} required={true} />
                </label>
                <label class="form-checkbox">
                    <input type="checkbox" checked={form.newsletter} onchange={on_newsletter} />
                    <span>{"Keep me updated with insights and news"}</span>
                </label>
                if let Some(error) = &state.error {
                    <p class="form-error" role="alert">{error.clone()}</p>
                }
                <GradientButton kind="submit" disabled={state.is_submitting}>
                    { if state.is_submitting { "Sending..." } else { "Send message" } }
                </GradientButton>
            </form>
        }
    };

    html! {
        <section id="contact" class="contact">
            <SectionHeading title="Let's talk" subtitle="Tell us where you want to go. We'll show you how to get there." />
            <GlassCard interactive={false}>
                { body }
            </GlassCard>
        </section>
    }
}
