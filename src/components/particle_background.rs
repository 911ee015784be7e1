//! Fixed backdrop of slow-drifting translucent dots behind the page.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::components::effects::{background_batch, FloatingDot};

#[function_component(ParticleBackground)]
pub fn particle_background() -> Html {
    let dots = use_state(|| {
        let mut rng = SmallRng::from_entropy();
        background_batch(&mut rng)
    });

    html! {
        <div class="particle-background">
            { for dots.iter().map(|dot: &FloatingDot| {
                let style = format!(
                    "left: {:.1}%; top: {:.1}%; width: {:.0}px; height: {:.0}px; animation-duration: {:.1}s;",
                    dot.x, dot.y, dot.size, dot.size, dot.duration,
                );
                html! {
                    <div key={dot.id.to_string()} class="floating-dot" style={style}></div>
                }
            }) }
            <style>
                {r#"
                .particle-background {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: 0;
                }
                .floating-dot {
                    position: absolute;
                    border-radius: 9999px;
                    background: rgba(253, 224, 71, 0.3);
                    animation-name: dot-drift;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }
                @keyframes dot-drift {
                    0%, 100% {
                        transform: translate(0, 0);
                    }
                    50% {
                        transform: translate(25px, -100px);
                    }
                }
                "#}
            </style>
        </div>
    }
}
