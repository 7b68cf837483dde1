use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::config::AppConfig;
use crate::lifecycle::{use_reveal_on_mount, CounterLatch};
use crate::social_proof::{load_social_proof, SocialProof};

const PAIN_POINTS: &[&str] = &[
    "too tight in the shoulders and hips",
    "too loose during swings and landings",
    "uncomfortable when stretching, sprinting, or fully extending",
];

/// (icon class, animation target, label) for each counter, in display order.
fn counter_items(proof: &SocialProof) -> [(&'static str, u32, &'static str); 3] {
    let targets = proof.display_targets();
    [
        ("icon-users", targets.athletes_count, "Athletes Trust RAZE"),
        ("icon-globe", targets.countries_count, "Countries Worldwide"),
        ("icon-clock", targets.waitlist_count, "On the Waitlist"),
    ]
}

#[derive(Properties, PartialEq)]
struct SocialProofStripProps {
    proof: SocialProof,
    visible: bool,
    active: bool,
}

#[function_component(SocialProofStrip)]
fn social_proof_strip(props: &SocialProofStripProps) -> Html {
    let items = counter_items(&props.proof);

    html! {
        <section class={classes!("social-proof-section", props.visible.then(|| "animate-fade-in"))}>
            <div class="social-proof-container">
                {
                    for items.iter().enumerate().map(|(i, (icon, end, label))| html! {
                        <>
                            {
                                if i > 0 {
                                    html! { <div class="social-proof-divider" /> }
                                } else {
                                    html! {}
                                }
                            }
                            <div class="social-proof-item">
                                <div class="social-proof-icon">
                                    <i class={*icon}></i>
                                </div>
                                <div class="social-proof-content">
                                    <span class="social-proof-number">
                                        <AnimatedCounter end={*end} suffix="+" active={props.active} />
                                    </span>
                                    <span class="social-proof-label">{*label}</span>
                                </div>
                            </div>
                        </>
                    })
                }
            </div>
            <p class="social-proof-tagline">
                {"Join the growing community of gymnasts who train with RAZE"}
            </p>
        </section>
    }
}

fn brand_values(visible: bool) -> Html {
    let reveal = |delay: Option<&'static str>| {
        visible.then(|| classes!("animate-fade-in-up", delay))
    };

    html! {
        <section class="brand-values-section">
            <h2 class="brand-values-title">{"WHAT WE STAND FOR"}</h2>
            <div class="brand-values-grid">
                <div class={classes!("brand-value-card", reveal(None))}>
                    <div class="brand-value-icon">
                        <i class="icon-target"></i>
                    </div>
                    <h3>{"Athletes First"}</h3>
                    <p>{"Every design decision starts with performance. We build for the athlete, not the mannequin."}</p>
                </div>
                <div class={classes!("brand-value-card", reveal(Some("delay-100")))}>
                    <div class="brand-value-icon">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" width="28" height="28">
                            <path d="M12 2L2 7l10 5 10-5-10-5z"/>
                            <path d="M2 17l10 5 10-5"/>
                            <path d="M2 12l10 5 10-5"/>
                        </svg>
                    </div>
                    <h3>{"Quality Over Quantity"}</h3>
                    <p>{"We release fewer pieces, but each one is obsessively refined. No filler, no fast fashion."}</p>
                </div>
                <div class={classes!("brand-value-card", reveal(Some("delay-200")))}>
                    <div class="brand-value-icon">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" width="28" height="28">
                            <circle cx="12" cy="12" r="10"/>
                            <path d="M12 6v6l4 2"/>
                        </svg>
                    </div>
                    <h3>{"Built to Last"}</h3>
                    <p>{"Our gear is designed to survive thousands of training sessions. Durability is non-negotiable."}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::from_build_env);
    let visible = use_reveal_on_mount();
    let social_proof = use_state_eq(SocialProof::default);
    let latch = use_state_eq(CounterLatch::default);

    // Single fetch per page activation
    {
        let social_proof = social_proof.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    social_proof.set(load_social_proof(&config).await);
                });
                || ()
            },
            (),
        );
    }

    {
        let latch = latch.clone();
        use_effect_with_deps(
            move |&(visible, athletes_count)| {
                let next = latch.observe(visible, athletes_count);
                if next != *latch {
                    if next.is_triggered() {
                        info!("Starting social proof counters");
                    }
                    latch.set(next);
                }
                || ()
            },
            (visible, social_proof.athletes_count),
        );
    }

    html! {
        <div class="about-page">
            <style>{ABOUT_CSS}</style>
            <div class="about-container">
                <div class="about-hero-section">
                    <h1 class="about-main-title">{"ABOUT RAZE"}</h1>
                    <p class="about-subtitle">{"Built by Discipline. Made to Move."}</p>
                </div>

                <SocialProofStrip
                    proof={*social_proof}
                    visible={visible}
                    active={latch.is_triggered()}
                />

                <div class="about-content">
                    <section class="about-story-section">
                        <p class="about-lead-text">
                            {"Most sportswear is designed to look good — not to move properly."}
                        </p>
                        <p class="about-paragraph">
                            {"As gymnasts, we understand how frustrating it feels when clothing holds you back during real training:"}
                        </p>
                        <ul class="about-pain-points">
                            { for PAIN_POINTS.iter().map(|point| html! { <li>{*point}</li> }) }
                        </ul>
                        <p class="about-paragraph about-mission">
                            {"That's why RAZE was created — performance clothing designed for full range of movement, so athletes can train comfortably and focus on execution, not adjusting their outfit."}
                        </p>
                    </section>

                    { brand_values(visible) }

                    <section class="about-gallery-section">
                        <h2 class="about-gallery-title">{"RAZE IN MOTION"}</h2>
                        <div class="about-gallery-grid about-gallery-two">
                            <div class={classes!("about-gallery-item", "about-gallery-main", visible.then(|| "animate-fade-in-up"))}>
                                <img
                                    src="/images/athletes/mag_athlete.jpg"
                                    alt="Male gymnast training - athletic performance"
                                    class="about-gallery-image"
                                    data-testid="about-image-main"
                                />
                                <span class="about-image-label">{"Men's Athletic Gymnastics"}</span>
                            </div>
                            <div class="about-gallery-item">
                                <img
                                    src="/images/athletes/wag_athlete.jpg"
                                    alt="Female gymnast training - athletic performance"
                                    class="about-gallery-image"
                                    data-testid="about-image-lifestyle"
                                />
                                <span class="about-image-label">{"Women's Athletic Gymnastics"}</span>
                            </div>
                        </div>
                    </section>

                    <section class="about-cta-section">
                        <div class="about-cta-content">
                            <p class="about-cta-text">{"Train with purpose. Move with confidence."}</p>
                            <a href="/products" class="about-cta-button">
                                {"Shop Collection"}
                                <i class="icon-arrow-right"></i>
                            </a>
                        </div>
                    </section>
                </div>
            </div>
        </div>
    }
}

const ABOUT_CSS: &str = r#"
    .about-page {
        min-height: 100vh;
        background: #0a0a0a;
        color: #f5f5f5;
        padding: 6rem 1.5rem 4rem;
    }
    .about-container {
        max-width: 1100px;
        margin: 0 auto;
    }
    .about-hero-section {
        text-align: center;
        margin-bottom: 3rem;
    }
    .about-main-title {
        font-size: 3rem;
        letter-spacing: 0.2em;
        margin: 0;
    }
    .about-subtitle {
        color: #aaa;
        font-size: 1.2rem;
    }
    .social-proof-section,
    .brand-value-card,
    .about-gallery-main {
        opacity: 0;
    }
    .social-proof-container {
        display: flex;
        justify-content: center;
        align-items: center;
        gap: 2rem;
        flex-wrap: wrap;
    }
    .social-proof-item {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .social-proof-content {
        display: flex;
        flex-direction: column;
    }
    .social-proof-number {
        font-size: 2rem;
        font-weight: 700;
        font-variant-numeric: tabular-nums;
    }
    .social-proof-label {
        color: #999;
        font-size: 0.9rem;
    }
    .social-proof-divider {
        width: 1px;
        height: 48px;
        background: rgba(255, 255, 255, 0.15);
    }
    .social-proof-tagline {
        text-align: center;
        color: #bbb;
        margin-top: 1.5rem;
    }
    .brand-values-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
    }
    .brand-value-card {
        padding: 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 12px;
    }
    .about-gallery-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1rem;
    }
    .about-gallery-image {
        width: 100%;
        border-radius: 12px;
        object-fit: cover;
    }
    .about-cta-section {
        text-align: center;
        margin-top: 4rem;
    }
    .about-cta-button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.9rem 2rem;
        background: #f5f5f5;
        color: #0a0a0a;
        text-decoration: none;
        font-weight: 600;
        border-radius: 999px;
    }
    @keyframes aboutFadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes aboutFadeInUp {
        from { opacity: 0; transform: translateY(24px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .animate-fade-in {
        animation: aboutFadeIn 0.8s ease-out forwards;
    }
    .animate-fade-in-up {
        animation: aboutFadeInUp 0.8s ease-out forwards;
    }
    .delay-100 { animation-delay: 0.1s; }
    .delay-200 { animation-delay: 0.2s; }
    @media (max-width: 768px) {
        .social-proof-divider { display: none; }
        .about-gallery-grid { grid-template-columns: 1fr; }
    }
"#;
