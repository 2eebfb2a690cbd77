use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::anim::frame_loop::AnimationLoop;
use crate::anim::timeline::{EntrancePhase, EntranceTimeline, RevealState};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub state: RevealState,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in a block that sits at `state`'s opacity and offset.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    html! {
        <div class={props.class.clone()} style={props.state.style()}>
            { for props.children.iter() }
        </div>
    }
}

/// Entrance clock for `timeline`: returns the current phase and the seconds
/// elapsed since the entrance started, pinned to the total once complete.
///
/// Frames drive the interpolation while entering; a timeout ends the
/// entrance even when frames are throttled.
#[hook]
pub fn use_entrance(timeline: EntranceTimeline) -> (EntrancePhase, f64) {
    let total = timeline.total_duration();
    let phase = use_state(|| EntrancePhase::Mounted);
    let elapsed = use_state(|| 0.0_f64);

    {
        let phase = phase.clone();
        use_mount(move || phase.set(EntrancePhase::Entering));
    }

    {
        let phase_handle = phase.clone();
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |phase| {
                let mut guards = None;
                match phase {
                    EntrancePhase::Entering => {
                        let mut started: Option<f64> = None;
                        let clock = AnimationLoop::start(move |timestamp| {
                            let start = *started.get_or_insert(timestamp);
                            let seconds = (timestamp - start) / 1000.0;
                            elapsed.set(seconds);
                            timeline.phase_at(seconds) != EntrancePhase::Complete
                        });
                        let clock = match clock {
                            Ok(clock) => Some(clock),
                            Err(e) => {
                                warn!("Entrance will jump to its end: {}", e);
                                None
                            }
                        };
                        let done = {
                            let phase_handle = phase_handle.clone();
                            Timeout::new((total.max(0.0) * 1000.0).ceil() as u32, move || {
                                phase_handle.set(EntrancePhase::Complete);
                            })
                        };
                        guards = Some((clock, done));
                    }
                    EntrancePhase::Complete => {
                        debug!("Entrance complete");
                        phase_handle.set(EntrancePhase::Idle);
                    }
                    EntrancePhase::Mounted | EntrancePhase::Idle => {}
                }
                move || drop(guards)
            },
            *phase,
        );
    }

    let t = if (*phase).is_animating() {
        (*elapsed).min(total)
    } else {
        total
    };
    (*phase, t)
}
