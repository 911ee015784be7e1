//! The single landing page: hero, countdown, roadmap, meme gallery,
//! tokenomics cards, call-to-action band and footer.

use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::countdown::CountdownTimer;
use crate::components::exploding_button::ExplodingButton;
use crate::components::icon::Icon;
use crate::config;

struct Milestone {
    phase: &'static str,
    title: &'static str,
    desc: &'static str,
    icon: &'static str,
    completed: bool,
}

const MILESTONES: [Milestone; 4] = [
    Milestone {
        phase: "PHASE 1",
        title: "Launch & GM",
        desc: "Token launch, initial liquidity, and GM to all degens!",
        icon: "rocket",
        completed: true,
    },
    Milestone {
        phase: "PHASE 2",
        title: "Meme Galleries",
        desc: "Sponge meme gallery release, WAGMI community growth",
        icon: "flame",
        completed: true,
    },
    Milestone {
        phase: "PHASE 3",
        title: "CEX Listings",
        desc: "When lambo? Major exchange listings and partnerships",
        icon: "trending-up",
        completed: false,
    },
    Milestone {
        phase: "PHASE 4",
        title: "To The Moon",
        desc: "Global domination, NFT collection, and beyond!",
        icon: "moon",
        completed: false,
    },
];

struct MemeCard {
    title: &'static str,
    icon: &'static str,
    color: &'static str,
}

const MEME_CARDS: [MemeCard; 6] = [
    MemeCard {
        title: "WAGMI Energy",
        icon: "flame",
        color: "#fde047",
    },
    MemeCard {
        title: "HODL Mode",
        icon: "moon",
        color: "#fdba74",
    },
    MemeCard {
        title: "When Lambo?",
        icon: "zap",
        color: "#fcd34d",
    },
    MemeCard {
        title: "Based Degen",
        icon: "star",
        color: "#facc15",
    },
    MemeCard {
        title: "Buy The Dip",
        icon: "skull",
        color: "#fb923c",
    },
    MemeCard {
        title: "To The Moon",
        icon: "gem",
        color: "#fbbf24",
    },
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "fire",
        title: "BURN MECHANISM",
        desc: "50% supply burned to the ground! 🔥 Bye bye jeeters!",
    },
    Feature {
        icon: "users",
        title: "COMMUNITY OWNED",
        desc: "LP burned, contract renounced. True degen ownership! 🦍",
    },
    Feature {
        icon: "crown",
        title: "MEME UTILITY",
        desc: "Utility is being a meme. Best use case in crypto! 👑",
    },
];

const SOCIALS: [(&str, &str); 4] = [
    ("twitter", config::TWITTER_URL),
    ("github", config::GITHUB_URL),
    ("disc", config::DISCORD_URL),
    ("globe", config::WEBSITE_URL),
];

const FOOTER_TAGS: [&str; 5] = ["GM", "WAGMI", "HODL", "BASED", "DEGEN"];

fn hero(on_ape_in: Callback<MouseEvent>) -> Html {
    html! {
        <section class="hero">
            <div class="container hero-inner">
                <h1 class="hero-title">{ config::TOKEN_TICKER }</h1>
                <p class="hero-tagline">{ "TO THE MOON! 🚀" }</p>
                <p class="hero-pitch">
                    { "The most based memecoin on the block. GM degens, WAGMI!" }
                    <br />
                    <span class="hero-pitch-sub">{ "Ape in now or ngmi..." }</span>
                </p>
                <div class="hero-actions">
                    <ExplodingButton class={classes!("cta-ape")} onclick={on_ape_in}>
                        { "APE IN! 🦍" }
                    </ExplodingButton>
                    <button class="sketchy-box-alt dip-button">{ "BUY THE DIP 📉" }</button>
                </div>
                <div class="hero-mascot">
                    <div>
                        <Icon name="flame" size={64} />
                        <span class="hero-mascot-label">{ "SWAG" }</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn countdown_section() -> Html {
    html! {
        <section class="countdown-section">
            <div class="container">
                <div class="sketchy-box countdown-card">
                    <h2>{ "NEXT PUMP INCOMING! 📈" }</h2>
                    <p class="countdown-blurb">
                        { "When lambo? Soon... very soon... HODL tight degens! 🚀" }
                    </p>
                    <CountdownTimer />
                    <p class="wagmi-stamp">{ "WAGMI! 🔥" }</p>
                </div>
            </div>
        </section>
    }
}

fn milestone_row(index: usize, milestone: &Milestone) -> Html {
    let reverse = index % 2 == 1;
    html! {
        <div key={milestone.phase} class={classes!("milestone-row", reverse.then_some("reverse"))}>
            <div class="milestone-copy">
                <div class="milestone-card sketchy-box-alt">
                    <div class="milestone-head">
                        <span class="phase-pill">{ milestone.phase }</span>
                        if milestone.completed {
                            <span class="done-badge">{ "DONE!" }</span>
                        }
                    </div>
                    <h3>{ milestone.title }</h3>
                    <p>{ milestone.desc }</p>
                </div>
            </div>
            <div class="milestone-node">
                <Icon name={milestone.icon} size={32} />
            </div>
            <div class="milestone-spacer"></div>
        </div>
    }
}

fn roadmap_section() -> Html {
    html! {
        <section id="roadmap" class="roadmap-section">
            <div class="container">
                <div class="roadmap-header">
                    <h2>{ "THE ROADMAP 🗺️" }</h2>
                    <p>{ "Our journey to Valhalla! Based timeline for degens 📍" }</p>
                </div>
                <div class="roadmap-track">
                    <svg class="roadmap-path" viewBox="0 0 16 600" preserveAspectRatio="none">
                        <path
                            d="M 8 0 Q 4 100 8 200 Q 12 300 8 400 Q 4 500 8 600"
                            stroke="#78350f"
                            stroke-width="8"
                            fill="none"
                            stroke-linecap="round"
                        />
                    </svg>
                    <div class="milestones">
                        { for MILESTONES.iter().enumerate().map(|(i, m)| milestone_row(i, m)) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn meme_section() -> Html {
    html! {
        <section id="memes" class="meme-section">
            <div class="container">
                <div class="meme-header">
                    <h2>{ "MEME GALLERY 🎨" }</h2>
                    <p>{ "Sponge-worthy memes from the community. GM! Post your best WAGMI moments!" }</p>
                </div>
                <div class="meme-grid">
                    { for MEME_CARDS.iter().map(|card| html! {
                        <div key={card.title} class="meme-card" style={format!("background: {};", card.color)}>
                            <div class="meme-face">
                                <div>
                                    <Icon name={card.icon} size={48} />
                                    <p class="meme-title">{ card.title }</p>
                                </div>
                            </div>
                            <div class="meme-overlay">
                                <span>{ "SWAG! 🚀" }</span>
                            </div>
                            <div class="sponge-dots"></div>
                        </div>
                    }) }
                </div>
                <div class="meme-submit">
                    <ExplodingButton class={classes!("cta-submit")}>
                        { "Submit Your Meme 📤" }
                    </ExplodingButton>
                </div>
            </div>
        </section>
    }
}

fn features_section() -> Html {
    html! {
        <section class="features-section">
            <div class="container">
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div key={feature.title} class="sketchy-box feature-card">
                            <Icon name={feature.icon} size={64} />
                            <h3>{ feature.title }</h3>
                            <p>{ feature.desc }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn cta_section() -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-backdrop"></div>
            <div class="container cta-inner">
                <h2>
                    { "WHAT ARE YOU" }
                    <br />
                    { "WAITING FOR? 🚀" }
                </h2>
                <p class="cta-pitch">
                    { "Join the Ponki revolution! Ape in now!" }
                    <br />
                    <span>{ "When lambo? SOON! 🚗🌙" }</span>
                </p>
                <div class="cta-actions">
                    <ExplodingButton class={classes!("cta-buy")}>
                        { format!("BUY {} 💎", config::TOKEN_TICKER) }
                    </ExplodingButton>
                    <a class="telegram-button" href={config::TELEGRAM_URL}>{ "Join Telegram 💬" }</a>
                </div>
                <div class="social-row">
                    { for SOCIALS.iter().map(|(icon, url)| html! {
                        <a key={*icon} class="social-link" href={*url} target="_blank" rel="noopener noreferrer">
                            <Icon name={*icon} size={28} />
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn footer() -> Html {
    let year = Utc::now().year();
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-brand">
                    <Icon name="flame" size={32} />
                    <span>{ config::TOKEN_NAME }</span>
                </div>
                <p class="footer-legal">
                    { format!("© {year} Ponki Coin. All rights reserved. Not financial advice, DYOR!") }
                </p>
                <div class="footer-tags">
                    { for FOOTER_TAGS.iter().map(|tag| html! {
                        <span key={*tag}>{ *tag }</span>
                    }) }
                </div>
                <p class="footer-note">{ "Made with 🔥 by the Ponki community. To the moon! 🚀🌙" }</p>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Raised by the hero button so the app shell can rain confetti over
    /// the whole viewport.
    pub on_ape_in: Callback<MouseEvent>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <>
            { hero(props.on_ape_in.clone()) }
            { countdown_section() }
            { roadmap_section() }
            { meme_section() }
            { features_section() }
            { cta_section() }
            { footer() }
            <style>
                {r#"
                /* hero */
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 1rem 5rem;
                    overflow: hidden;
                }
                .hero-inner {
                    text-align: center;
                    position: relative;
                    z-index: 1;
                }
                .hero-title {
                    font-family: 'Permanent Marker', cursive;
                    font-size: clamp(4rem, 12vw, 8rem);
                    color: #78350f;
                    transform: rotate(-2deg);
                    margin-bottom: 1rem;
                }
                .hero-tagline {
                    display: inline-block;
                    font-family: 'Permanent Marker', cursive;
                    font-size: clamp(1.75rem, 5vw, 3rem);
                    color: #fef08a;
                    background: #78350f;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    margin-bottom: 2rem;
                    animation: tagline-wiggle 2s ease-in-out infinite;
                }
                @keyframes tagline-wiggle {
                    0%, 100% { transform: rotate(2deg); }
                    25% { transform: rotate(7deg); }
                    75% { transform: rotate(-3deg); }
                }
                .hero-pitch {
                    font-size: clamp(1.25rem, 3vw, 1.5rem);
                    font-weight: 700;
                    color: #78350f;
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                }
                .hero-pitch-sub {
                    color: #92400e;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    align-items: center;
                }
                .cta-ape {
                    font-size: clamp(1.75rem, 4vw, 2.25rem);
                    padding: 1.5rem 3rem;
                    background: #ef4444;
                    color: #ffffff;
                    border-color: #7f1d1d;
                }
                .cta-ape:hover {
                    background: #f87171;
                }
                .dip-button {
                    padding: 1rem 2rem;
                    font-family: 'Permanent Marker', cursive;
                    font-size: clamp(1.25rem, 3vw, 1.5rem);
                    color: #78350f;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .dip-button:hover {
                    transform: scale(1.05);
                }
                .dip-button:active {
                    transform: scale(0.95);
                }
                .hero-mascot {
                    position: absolute;
                    right: clamp(1rem, 8vw, 5rem);
                    top: 50%;
                    width: clamp(8rem, 16vw, 12rem);
                    height: clamp(8rem, 16vw, 12rem);
                    background: #fde047;
                    border: 4px solid #78350f;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    color: #78350f;
                    box-shadow: 8px 8px 0px 0px #78350f;
                    animation: mascot-bob 4s ease-in-out infinite;
                }
                .hero-mascot-label {
                    display: block;
                    font-family: 'Permanent Marker', cursive;
                    margin-top: 0.5rem;
                }
                @keyframes mascot-bob {
                    0%, 100% { transform: translateY(0) rotate(0deg); }
                    25% { transform: translateY(-30px) rotate(10deg); }
                    75% { transform: translateY(-15px) rotate(-10deg); }
                }

                /* countdown */
                .countdown-section {
                    position: relative;
                    padding: 5rem 1rem;
                }
                .countdown-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 3rem;
                    text-align: center;
                }
                .countdown-card h2 {
                    font-family: 'Permanent Marker', cursive;
                    font-size: clamp(2rem, 6vw, 3rem);
                    color: #78350f;
                    margin-bottom: 0.5rem;
                }
                .countdown-blurb {
                    color: #92400e;
                    font-weight: 700;
                    font-size: 1.125rem;
                    margin-bottom: 2rem;
                }
                .wagmi-stamp {
                    display: inline-block;
                    margin-top: 2rem;
                    font-family: 'Permanent Marker', cursive;
                    font-size: 1.5rem;
                    color: #dc2626;
                    background: #fef08a;
                    padding: 0.75rem 1.5rem;
                    border: 4px solid #dc2626;
                    border-radius: 0.5rem;
                    animation: stamp-shake 0.5s ease-in-out infinite;
                }
                @keyframes stamp-shake {
                    0%, 100% { transform: translateX(-5px) rotate(1deg); }
                    50% { transform: translateX(5px) rotate(1deg); }
                }

                /* roadmap */
                .roadmap-section {
                    position: relative;
                    padding: 5rem 1rem;
                    overflow: hidden;
                }
                .roadmap-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .roadmap-header h2 {
                    font-family: 'Permanent Marker', cursive;
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    color: #78350f;
                    margin-bottom: 1rem;
                }
                .roadmap-header p {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #92400e;
                }
                .roadmap-track {
                    position: relative;
                    padding: 3rem 1rem;
                }
                .roadmap-path {
                    position: absolute;
                    left: 50%;
                    top: 0;
                    height: 100%;
                    width: 2rem;
                    transform: translateX(-50%);
                    z-index: 0;
                }
                .roadmap-path path {
                    stroke-dasharray: 620;
                    stroke-dashoffset: 620;
                    animation: draw-path 2s ease-in-out forwards;
                }
                @keyframes draw-path {
                    to { stroke-dashoffset: 0; }
                }
                .milestones {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                }
                .milestone-row {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                }
                .milestone-row.reverse {
                    flex-direction: row-reverse;
                }
                .milestone-copy {
                    width: 50%;
                    text-align: right;
                }
                .milestone-row.reverse .milestone-copy {
                    text-align: left;
                }
                .milestone-card {
                    display: inline-block;
                    padding: 1.5rem;
                    max-width: 24rem;
                    text-align: left;
                    transform: rotate(1deg);
                    transition: transform 0.2s ease;
                }
                .milestone-row.reverse .milestone-card {
                    transform: rotate(-1deg);
                }
                .milestone-card:hover {
                    transform: rotate(3deg) scale(1.02);
                }
                .milestone-row.reverse .milestone-card:hover {
                    transform: rotate(-3deg) scale(1.02);
                }
                .milestone-head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.5rem;
                }
                .phase-pill {
                    display: inline-block;
                    font-family: 'Permanent Marker', cursive;
                    font-size: 1.25rem;
                    color: #78350f;
                    background: #fef08a;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    transform: rotate(-2deg);
                }
                .done-badge {
                    background: #22c55e;
                    color: #ffffff;
                    padding: 0.25rem 0.5rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                .milestone-card h3 {
                    font-family: 'Permanent Marker', cursive;
                    font-size: 1.75rem;
                    color: #78350f;
                    margin-bottom: 0.5rem;
                }
                .milestone-card p {
                    color: #92400e;
                    font-weight: 700;
                }
                .milestone-node {
                    width: 5rem;
                    height: 5rem;
                    flex-shrink: 0;
                    background: #facc15;
                    border: 4px solid #78350f;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #78350f;
                    z-index: 2;
                    transition: transform 0.5s ease;
                }
                .milestone-node:hover {
                    transform: scale(1.2) rotate(360deg);
                }
                .milestone-spacer {
                    width: 50%;
                }
                @media (max-width: 768px) {
                    .milestone-copy, .milestone-spacer {
                        width: auto;
                    }
                    .milestone-spacer {
                        display: none;
                    }
                }

                /* meme gallery */
                .meme-section {
                    position: relative;
                    padding: 5rem 1rem;
                }
                .meme-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .meme-header h2 {
                    font-family: 'Permanent Marker', cursive;
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    color: #78350f;
                    margin-bottom: 1rem;
                }
                .meme-header p {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #92400e;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .meme-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1.5rem;
                }
                @media (min-width: 768px) {
                    .meme-grid {
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                    }
                }
                .meme-card {
                    position: relative;
                    aspect-ratio: 1 / 1;
                    border: 4px solid #78350f;
                    border-radius: 1rem;
                    overflow: hidden;
                    cursor: pointer;
                    box-shadow: 6px 6px 0px 0px #78350f;
                    transform: rotate(2deg);
                    transition: transform 0.2s ease;
                }
                .meme-card:nth-child(even) {
                    transform: rotate(-2deg);
                }
                .meme-card:hover {
                    transform: rotate(0deg) scale(1.05);
                    z-index: 10;
                }
                .meme-face {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    text-align: center;
                    color: #78350f;
                }
                .meme-title {
                    font-family: 'Permanent Marker', cursive;
                    font-size: 1.25rem;
                    color: #78350f;
                    margin-top: 0.5rem;
                }
                .meme-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(120, 53, 15, 0.8);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.2s ease;
                }
                .meme-overlay span {
                    font-family: 'Permanent Marker', cursive;
                    font-size: 1.5rem;
                    color: #ffffff;
                    transform: scale(0);
                    transition: transform 0.2s ease;
                }
                .meme-card:hover .meme-overlay {
                    opacity: 1;
                }
                .meme-card:hover .meme-overlay span {
                    transform: scale(1);
                }
                .sponge-dots {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                    pointer-events: none;
                    background-image:
                        radial-gradient(circle at 20% 20%, #78350f 2px, transparent 2px),
                        radial-gradient(circle at 80% 80%, #78350f 2px, transparent 2px);
                    background-size: 20px 20px;
                }
                .meme-submit {
                    text-align: center;
                    margin-top: 3rem;
                }
                .cta-submit {
                    font-size: 1.5rem;
                }

                /* features */
                .features-section {
                    padding: 5rem 1rem;
                }
                .feature-grid {
                    display: grid;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .feature-grid {
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                    }
                }
                .feature-card {
                    padding: 2rem;
                    text-align: center;
                    color: #78350f;
                    transition: transform 0.2s ease;
                }
                .feature-card:hover {
                    transform: scale(1.05) rotate(3deg);
                }
                .feature-card:nth-child(even):hover {
                    transform: scale(1.05) rotate(-3deg);
                }
                .feature-card h3 {
                    font-family: 'Permanent Marker', cursive;
                    font-size: 1.5rem;
                    color: #78350f;
                    margin: 1rem 0 0.75rem;
                }
                .feature-card p {
                    color: #92400e;
                    font-weight: 700;
                }

                /* call to action */
                .cta-section {
                    position: relative;
                    padding: 5rem 1rem;
                    overflow: hidden;
                }
                .cta-backdrop {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(45deg, #fbbf24, #f59e0b, #fbbf24);
                    background-size: 200% 200%;
                    animation: cta-sheen 3s ease infinite;
                }
                @keyframes cta-sheen {
                    0%, 100% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                }
                .cta-inner {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                }
                .cta-inner h2 {
                    font-family: 'Permanent Marker', cursive;
                    font-size: clamp(3rem, 10vw, 6rem);
                    color: #78350f;
                    margin-bottom: 1.5rem;
                    animation: cta-pulse 2s ease-in-out infinite;
                }
                @keyframes cta-pulse {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.05); }
                }
                .cta-pitch {
                    font-size: clamp(1.5rem, 4vw, 1.875rem);
                    font-weight: 700;
                    color: #78350f;
                    margin-bottom: 2rem;
                }
                .cta-pitch span {
                    color: #b91c1c;
                }
                .cta-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    align-items: center;
                }
                .cta-buy {
                    font-size: clamp(1.75rem, 4vw, 2.25rem);
                    padding: 1.5rem 3rem;
                    background: #22c55e;
                    color: #ffffff;
                    border-color: #14532d;
                }
                .cta-buy:hover {
                    background: #4ade80;
                }
                .telegram-button {
                    display: inline-block;
                    padding: 1rem 2rem;
                    font-family: 'Permanent Marker', cursive;
                    font-size: 1.25rem;
                    color: #ffffff;
                    background: #60a5fa;
                    border: 4px solid #1e3a8a;
                    border-radius: 1rem;
                    box-shadow: 6px 6px 0px 0px #1e3a8a;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }
                .telegram-button:hover {
                    transform: scale(1.05);
                }
                .social-row {
                    margin-top: 3rem;
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }
                .social-link {
                    width: 3.5rem;
                    height: 3.5rem;
                    background: #78350f;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #facc15;
                    transition: transform 0.3s ease;
                }
                .social-link:hover {
                    transform: scale(1.2) rotate(360deg);
                }

                /* footer */
                .site-footer {
                    background: #78350f;
                    color: #facc15;
                    padding: 3rem 1rem;
                    text-align: center;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }
                .footer-brand span {
                    font-family: 'Permanent Marker', cursive;
                    font-size: 1.875rem;
                }
                .footer-legal {
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .footer-tags {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    font-family: 'Permanent Marker', cursive;
                    font-size: 0.875rem;
                }
                .footer-tags span {
                    background: #facc15;
                    color: #78350f;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                }
                .footer-note {
                    margin-top: 1.5rem;
                    color: #fef08a;
                }
                "#}
            </style>
        </>
    }
}
