use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::config::SiteConfig;
use crate::submission::{
    Command, LeadField, LeadSink, SimulatedSink, SubmissionError, SubmissionMachine,
    SubmissionState, Timer,
};
use crate::timer_slot::TimerSlot;

/// Carries out the commands the machine hands back and mirrors its state into
/// the component. One pending timeout at a time, kept in a `TimerSlot`.
#[derive(Clone)]
struct FormDriver {
    machine: Rc<RefCell<SubmissionMachine>>,
    pending: Rc<RefCell<TimerSlot<Timeout>>>,
    sink: Rc<dyn LeadSink>,
    state: UseStateHandle<SubmissionState>,
    error: UseStateHandle<Option<String>>,
}

impl FormDriver {
    fn sync(&self) {
        let machine = self.machine.borrow();
        self.state.set(machine.state());
        self.error.set(machine.last_error().map(|e| e.to_string()));
    }

    fn submit(&self) {
        let result = self.machine.borrow_mut().submit();
        match result {
            Ok(command) => {
                if let Some(snapshot) = self.machine.borrow().snapshot() {
                    debug!("Captured lead snapshot (attempt {})", snapshot.attempt);
                }
                self.sync();
                self.run(command);
            }
            Err(SubmissionError::InFlight(state)) => {
                debug!("Submit ignored, form is {}", state);
            }
            Err(e) => {
                warn!("Submit rejected: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    fn fire(&self, timer: Timer) {
        let next = self.machine.borrow_mut().timer_elapsed(timer, self.sink.as_ref());
        self.sync();
        match next {
            Some(command) => self.run(command),
            None => {
                self.pending.borrow_mut().cancel();
            }
        }
    }

    fn run(&self, command: Command) {
        match command {
            Command::Schedule { timer, after_ms } => {
                let driver = self.clone();
                let handle = Timeout::new(after_ms, move || driver.fire(timer));
                self.pending.borrow_mut().arm(handle);
            }
            Command::Redirect(url) => {
                self.pending.borrow_mut().cancel();
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().set_href(&url) {
                        error!("Redirect to {} failed: {:?}", url, e);
                    }
                }
            }
        }
    }
}

fn field_value(e: &InputEvent) -> Option<String> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let machine = use_mut_ref(|| SubmissionMachine::new(&config));
    let pending = use_mut_ref(TimerSlot::<Timeout>::default);
    let state = use_state_eq(|| SubmissionState::Idle);
    let error = use_state_eq(|| None::<String>);

    // Cancel whatever timer is still armed when the form goes away.
    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if pending.borrow_mut().cancel() {
                        debug!("Lead form unmounted with a pending timer, cancelled");
                    }
                }
            },
            (),
        );
    }

    let driver = FormDriver {
        machine: machine.clone(),
        pending,
        sink: Rc::new(SimulatedSink),
        state: state.clone(),
        error: error.clone(),
    };

    let onsubmit = {
        let driver = driver.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            driver.submit();
        })
    };

    let on_field = |field: LeadField| {
        let machine = machine.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = field_value(&e) {
                machine.borrow_mut().update(field, value);
            }
        })
    };

    let submitting = *state == SubmissionState::Submitting;
    let button_label = match *state {
        SubmissionState::Submitting => "Encrypting Data...",
        SubmissionState::Failed => "Retry Transmission",
        _ => "Request Assessment",
    };

    html! {
        <section id="assessment" class="section assessment">
            <div class="assessment__glow"></div>
            <div class="container container--wide">
                <div class="split split--center">
                    <ScrollReveal>
                        <h6 class="badge-premium">{"Secure Assessment Diagnostics"}</h6>
                        <h2 class="section-title section-title--xl">
                            {"FIND YOUR"}<br />{"BIGGEST"}<br />
                            <span class="accent">{"BOTTLENECK."}</span>
                        </h2>
                        <p class="lead-copy">
                            {"Book a factory automation assessment. We'll identify exactly where coordination friction is breaking your scale."}
                        </p>
                    </ScrollReveal>

                    <ScrollReveal delay_ms={200}>
                        <div class="glass-card form-card">
                            <div class="form-card__glow"></div>
                            {
                                if *state == SubmissionState::Success {
                                    html! {
                                        <div class="form-success">
                                            <div class="form-success__badge">{"✓"}</div>
                                            <h3>{"Transmission Success"}</h3>
                                            <p class="mono">{"Routing to project bridge..."}</p>
                                        </div>
                                    }
                                } else {
                                    html! {
                                        <form onsubmit={onsubmit} class="lead-form">
                                            <div class="field">
                                                <label class="mono field__label">{"Director Name"}</label>
                                                <input
                                                    required=true
                                                    class="form-input"
                                                    placeholder="Your Full Name"
                                                    oninput={on_field(LeadField::Name)}
                                                />
                                            </div>
                                            <div class="field-row">
                                                <div class="field">
                                                    <label class="mono field__label">{"Work Email"}</label>
                                                    <input
                                                        required=true
                                                        type="email"
                                                        class="form-input"
                                                        placeholder="name@factory.com"
                                                        oninput={on_field(LeadField::Email)}
                                                    />
                                                </div>
                                                <div class="field">
                                                    <label class="mono field__label">{"Direct Phone"}</label>
                                                    <input
                                                        required=true
                                                        type="tel"
                                                        class="form-input"
                                                        placeholder="+1 000 000 0000"
                                                        oninput={on_field(LeadField::Phone)}
                                                    />
                                                </div>
                                            </div>
                                            <div class="field">
                                                <label class="mono field__label">{"Primary Constraint"}</label>
                                                <textarea
                                                    required=true
                                                    class="form-input form-input--area"
                                                    placeholder="Describe your biggest operational bottleneck..."
                                                    oninput={on_field(LeadField::PainDescription)}
                                                ></textarea>
                                            </div>
                                            {
                                                if let Some(message) = (*error).as_ref() {
                                                    html! {
                                                        <div class="form-error" role="alert">{message}</div>
                                                    }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                            <button type="submit" disabled={submitting} class="btn-premium btn-block">
                                                {button_label}
                                            </button>
                                        </form>
                                    }
                                }
                            }
                        </div>
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}
