use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::logo::StrataiLogo;
use crate::components::navbar::Navbar;
use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{
    stagger, CATEGORIES, FOOTER_LINKS, HERO_BULLETS, IDEAL_PARTNER, INCOMPATIBLE, PAIN_POINTS,
    PILLARS, PROCESS_STEPS,
};
use crate::scroll::{jump_to, Anchor};

fn jump_callback(anchor: Anchor) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        jump_to(anchor);
    })
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="container hero__inner">
                <ScrollReveal>
                    <div class="hero__badge">
                        <span class="badge-premium">{"Industrial OS / v2.5.0 Deployment"}</span>
                    </div>
                    <h1 class="hero__title">
                        <span class="text-reveal">{"AI-POWERED"}</span>
                        <span class="orange-gradient">{"SYSTEMS."}</span>
                    </h1>
                    <p class="hero__subtitle">
                        {"Custom operational brains for production, procurement, and planning — built for reliability and real-world factory constraints."}
                    </p>
                    <div class="hero__bullets">
                        { for HERO_BULLETS.iter().map(|(icon, text)| html! {
                            <div class="hero__bullet" key={*text}>
                                <span class="icon">{*icon}</span>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                    <div class="hero__actions">
                        <button class="btn-premium btn-large" onclick={jump_callback(Anchor::Assessment)}>
                            {"Book Assessment"}
                        </button>
                        <button class="btn-outline btn-large" onclick={jump_callback(Anchor::Problem)}>
                            {"See How It Works"}
                            <span class="chevron">{"›"}</span>
                        </button>
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}

#[function_component(ProblemSection)]
fn problem_section() -> Html {
    html! {
        <section id="problem" class="section">
            <div class="container container--wide split">
                <ScrollReveal>
                    <h2 class="section-title">
                        {"THE REAL PAIN ISN'T"}<br />{"TECHNOLOGY."}<br />
                        <span class="muted">{"IT'S COORDINATION."}</span>
                    </h2>
                    <div class="rule"></div>
                    <p class="lead-copy">
                        {"Production data in one system, planning in another, procurement in Excel. These are not people problems. They are system design failures."}
                    </p>
                </ScrollReveal>
                <div class="stack">
                    { for PAIN_POINTS.iter().enumerate().map(|(i, item)| html! {
                        <ScrollReveal key={item.title} delay_ms={stagger(i, 100)}>
                            <div class="protocol">
                                <span class="mono accent">{format!("PROTOCOL 0{}", i + 1)}</span>
                                <h4>{item.title}</h4>
                                <p>{item.desc}</p>
                            </div>
                        </ScrollReveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(SolutionSection)]
fn solution_section() -> Html {
    html! {
        <section class="section section--dim">
            <div class="container">
                <ScrollReveal class="centered">
                    <h6 class="badge-premium">{"The Orchestration Layer"}</h6>
                    <h2 class="section-title">
                        {"AN OPERATIONAL BRAIN"}<br />
                        <span class="orange-gradient">{"FOR YOUR FACTORY."}</span>
                    </h2>
                    <p class="lead-copy centered">
                        {"We don't replace your ERP. We build the automation layer that orchestrates it. n8n + AI Agents become the central control center."}
                    </p>
                </ScrollReveal>
                <div class="grid grid--3">
                    { for PILLARS.iter().enumerate().map(|(i, card)| html! {
                        <ScrollReveal key={card.title} delay_ms={stagger(i, 150)} class="full-height">
                            <div class="glass-card pillar">
                                <div class="pillar__icon">{card.icon}</div>
                                <h4>{card.title}</h4>
                                <p>{card.desc}</p>
                                <div class="pillar__more">{"Deploy Protocol ↗"}</div>
                            </div>
                        </ScrollReveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(AutomationGrid)]
fn automation_grid() -> Html {
    html! {
        <section id="use-cases" class="section">
            <div class="container container--wide">
                <ScrollReveal>
                    <h2 class="section-title section-title--xl">
                        {"WHAT WE"}<br /><span class="muted">{"AUTOMATE."}</span>
                    </h2>
                    <div class="hairline"></div>
                </ScrollReveal>
                <div class="grid grid--4 grid--flush">
                    { for CATEGORIES.iter().enumerate().map(|(i, category)| html! {
                        <ScrollReveal key={category.title} delay_ms={stagger(i, 100)} class="category">
                            <h4 class="accent">{category.title}</h4>
                            <ul>
                                { for category.points.iter().map(|point| html! {
                                    <li key={*point}><span class="dot"></span>{*point}</li>
                                }) }
                            </ul>
                        </ScrollReveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Intermission)]
fn intermission() -> Html {
    html! {
        <section class="section intermission">
            <div class="intermission__glow"></div>
            <ScrollReveal>
                <h3 class="intermission__title">
                    {"WE DON'T AUTOMATE CHAOS."}<br />
                    <span class="accent">{"WE FIX THE SYSTEM FIRST."}</span>
                </h3>
                <div class="mono intermission__caption">
                    {"The Industrial Systems Engineering Mandate"}
                </div>
            </ScrollReveal>
        </section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    html! {
        <section class="section section--darker">
            <div class="container container--wide">
                <ScrollReveal class="centered">
                    <h2 class="section-title section-title--xl">
                        {"HOW WE"}<br /><span class="muted">{"OPERATE."}</span>
                    </h2>
                </ScrollReveal>
                <div class="grid grid--4">
                    { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                        <ScrollReveal key={step.title} delay_ms={stagger(i, 150)} class="step">
                            <div class="mono step__number">{format!("0{}", i + 1)}</div>
                            <h4 class="accent">{step.title}</h4>
                            <p>{step.desc}</p>
                        </ScrollReveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(SelectionFilter)]
fn selection_filter() -> Html {
    html! {
        <section class="section section--bordered">
            <div class="container">
                <div class="grid grid--2">
                    <ScrollReveal>
                        <div class="glass-card fit-card fit-card--ideal">
                            <div class="fit-card__icon accent">{"◎"}</div>
                            <h4>{"IDEAL PARTNER:"}</h4>
                            <ul>
                                { for IDEAL_PARTNER.iter().map(|item| html! {
                                    <li key={*item}><span class="dot dot--accent"></span>{*item}</li>
                                }) }
                            </ul>
                        </div>
                    </ScrollReveal>
                    <ScrollReveal delay_ms={200}>
                        <div class="glass-card fit-card fit-card--incompatible">
                            <div class="fit-card__icon">{"⚠"}</div>
                            <h4>{"INCOMPATIBLE:"}</h4>
                            <ul>
                                { for INCOMPATIBLE.iter().map(|item| html! {
                                    <li key={*item}><span class="dot"></span>{*item}</li>
                                }) }
                            </ul>
                        </div>
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container container--wide footer__inner">
                <div class="footer__about">
                    <StrataiLogo />
                    <p>
                        {"Industrial AI Systems Engineering for modern manufacturers. We build high-reliability operational brains for ambitious factories worldwide."}
                    </p>
                </div>
                <div class="footer__meta">
                    <div class="footer__links">
                        { for FOOTER_LINKS.iter().map(|link| html! {
                            <span key={*link}>{*link}</span>
                        }) }
                    </div>
                    <p class="footer__stamp">{"EST. 2024 / PROTOCOL ALPHA / v2.5.0"}</p>
                    <p class="footer__copy">{"© Stratai.io // Systems Engineering Deployment"}</p>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start at the top on first mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing">
            <Navbar />
            <Hero />
            <ProblemSection />
            <SolutionSection />
            <AutomationGrid />
            <Intermission />
            <Process />
            <SelectionFilter />
            <LeadForm />
            <Footer />
        </div>
    }
}
