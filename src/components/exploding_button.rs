//! Button that sprays a radial burst of particles on every click, then
//! forwards the click to its caller.

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::components::effects::{explosion_batch, Particle};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ExplodingButtonProps {
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(ExplodingButton)]
pub fn exploding_button(props: &ExplodingButtonProps) -> Html {
    let particles = use_state(Vec::<Particle>::new);
    let seq = use_mut_ref(|| 0u32);
    let rng = use_mut_ref(SmallRng::from_entropy);
    let clear_timer = use_mut_ref(|| None::<Timeout>);

    let on_click = {
        let particles = particles.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            let batch = {
                let mut seq = seq.borrow_mut();
                *seq += 1;
                explosion_batch(*seq, &mut *rng.borrow_mut())
            };
            particles.set(batch);

            // Replacing the handle drops the previous timer, so a clear
            // scheduled by an earlier click can't cut a fresh burst short.
            let clear = {
                let particles = particles.clone();
                Timeout::new(config::EXPLOSION_CLEAR_MS, move || {
                    particles.set(Vec::new());
                })
            };
            *clear_timer.borrow_mut() = Some(clear);

            onclick.emit(event);
        })
    };

    html! {
        <div class="exploding-button-wrap">
            <button class={classes!("sketchy-button", props.class.clone())} onclick={on_click}>
                { for props.children.iter() }
            </button>
            { for particles.iter().map(|particle: &Particle| {
                let style = format!(
                    "--dx: {:.1}px; --dy: {:.1}px; background: {};",
                    particle.angle.cos() * 100.0,
                    particle.angle.sin() * 100.0,
                    particle.color,
                );
                html! {
                    <div key={particle.id.to_string()} class="burst-particle" style={style}></div>
                }
            }) }
        </div>
    }
}
