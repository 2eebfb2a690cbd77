use log::warn;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::canvas::ParticleEffect;
use crate::config::ParticleConfig;

#[derive(Properties, PartialEq)]
pub struct ParticleCanvasProps {
    pub config: ParticleConfig,
}

/// Full-viewport canvas of drifting particles. Renders an empty canvas when
/// no 2d context is available.
#[function_component(ParticleCanvas)]
pub fn particle_canvas(props: &ParticleCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let config = props.config.clone();
        use_effect_with_deps(
            move |_| {
                let effect = match ParticleEffect::start(canvas_ref.cast::<HtmlCanvasElement>(), &config) {
                    Ok(effect) => Some(effect),
                    Err(e) => {
                        warn!("Particle effect disabled: {}", e);
                        None
                    }
                };
                move || {
                    if let Some(effect) = effect {
                        effect.dispose();
                    }
                }
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="hero-particles" aria-hidden="true" />
    }
}
