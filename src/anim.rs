//! Hand-rolled motion: easing curves, springs, tweens and the frame loop
//! that drives them.

pub mod easing;
pub mod frame_loop;
pub mod spring;
pub mod timeline;
