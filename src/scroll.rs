use log::warn;
use yew::prelude::*;

use crate::dom::{self, EventListener};

/// How far the page has scrolled through a container, in [0, 1].
///
/// An unmeasured or zero-height container reports 0, as does any offset that
/// is negative or not a number.
pub fn scroll_progress(offset: f64, container_height: Option<f64>) -> f64 {
    let height = match container_height {
        Some(height) if height > 0.0 && height.is_finite() => height,
        _ => return 0.0,
    };
    if !(offset > 0.0) {
        return 0.0;
    }
    (offset / height).min(1.0)
}

/// Downward translation of the hero in vh for a given progress.
pub fn parallax_offset_vh(progress: f64, max_vh: f64) -> f64 {
    if !progress.is_finite() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) * max_vh
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Live vertical scroll offset of the page, updated on every `scroll` event.
#[hook]
pub fn use_scroll_offset() -> f64 {
    let offset = use_state(current_scroll_y);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::document().and_then(|document| {
                    EventListener::new(&document, "scroll", move |_| {
                        offset.set(current_scroll_y());
                    })
                });
                let listener = match listener {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        warn!("Scroll tracking disabled: {}", e);
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    *offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, Some(800.0), 0.0)]
    #[case(200.0, Some(800.0), 0.25)]
    #[case(800.0, Some(800.0), 1.0)]
    #[case(5000.0, Some(800.0), 1.0)]
    #[case(-40.0, Some(800.0), 0.0)]
    #[case(300.0, Some(0.0), 0.0)]
    #[case(300.0, None, 0.0)]
    #[case(f64::NAN, Some(800.0), 0.0)]
    #[case(300.0, Some(f64::INFINITY), 0.0)]
    fn progress(#[case] offset: f64, #[case] height: Option<f64>, #[case] expected: f64) {
        assert_eq!(scroll_progress(offset, height), expected);
    }

    #[test]
    fn progress_stays_in_unit_interval() {
        for height in [1.0, 37.5, 600.0, 1000.0] {
            for step in 0..200 {
                let offset = step as f64 * 13.7;
                let p = scroll_progress(offset, Some(height));
                assert!((0.0..=1.0).contains(&p));
                assert_eq!(p, (offset / height).min(1.0));
            }
        }
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.5, 10.0)]
    #[case(1.0, 20.0)]
    #[case(3.0, 20.0)]
    #[case(f64::NAN, 0.0)]
    fn parallax(#[case] progress: f64, #[case] expected_vh: f64) {
        assert_eq!(parallax_offset_vh(progress, 20.0), expected_vh);
    }

    #[test]
    fn scroll_to_container_height_translates_full_distance() {
        let height = Some(900.0);
        assert_eq!(parallax_offset_vh(scroll_progress(0.0, height), 20.0), 0.0);
        assert_eq!(parallax_offset_vh(scroll_progress(900.0, height), 20.0), 20.0);
        assert_eq!(parallax_offset_vh(scroll_progress(2400.0, height), 20.0), 20.0);
    }
}
