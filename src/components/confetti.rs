//! Full-screen confetti overlay. Mounted fresh for every celebration; each
//! mount rolls one batch of pieces that fly from the viewport center to
//! random resting spots and stay there until the overlay is taken down.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::components::effects::{confetti_batch, ConfettiPiece, Viewport};

#[derive(Properties, PartialEq)]
pub struct ConfettiOverlayProps {
    /// Batch number, folded into every piece id. The parent remounts the
    /// overlay with a new value to replace the batch wholesale.
    pub seq: u32,
}

fn viewport() -> Viewport {
    web_sys::window()
        .and_then(|window| {
            let width = window.inner_width().ok()?.as_f64()?;
            let height = window.inner_height().ok()?.as_f64()?;
            // Hidden frames can report zero; the builder needs a real area.
            (width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
                .then(|| Viewport::new(width, height))
        })
        .unwrap_or_else(Viewport::fallback)
}

#[function_component(ConfettiOverlay)]
pub fn confetti_overlay(props: &ConfettiOverlayProps) -> Html {
    let seq = props.seq;
    let pieces = use_state(move || {
        let mut rng = SmallRng::from_entropy();
        confetti_batch(seq, viewport(), &mut rng)
    });

    html! {
        <div class="confetti-overlay">
            { for pieces.iter().map(|piece: &ConfettiPiece| {
                let style = format!(
                    "--x: {:.1}px; --y: {:.1}px; --spin: {:.1}deg; --scale: {:.2}; background: {};",
                    piece.x, piece.y, piece.rotation, piece.scale, piece.color,
                );
                html! {
                    <div key={piece.id.to_string()} class="confetti-piece" style={style}></div>
                }
            }) }
            <style>
                {r#"
                .confetti-overlay {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: 50;
                }
                .confetti-piece {
                    position: absolute;
                    left: 0;
                    top: 0;
                    width: 1rem;
                    height: 1rem;
                    border-radius: 9999px;
                    animation: confetti-fly 1s ease-out forwards;
                }
                @keyframes confetti-fly {
                    from {
                        transform: translate(50vw, 50vh) scale(0);
                    }
                    to {
                        transform: translate(var(--x), var(--y)) rotate(var(--spin)) scale(var(--scale));
                    }
                }
                "#}
            </style>
        </div>
    }
}
