#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use portfolio_hero::anim::frame_loop::{active_frame_loops, AnimationLoop};
use portfolio_hero::canvas::ParticleEffect;
use portfolio_hero::components::hero::{HeroVariant, LandingHero, LandingHeroProps};
use portfolio_hero::config::{ParticleConfig, SiteConfig};
use portfolio_hero::dom::{self, active_listener_count, viewport_size, EventListener};
use portfolio_hero::error::HeroError;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn new_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn context_of(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap()
}

const MARKER: [u8; 4] = [255, 0, 0, 255];

fn paint_marker(context: &CanvasRenderingContext2d) {
    context.set_fill_style_str("rgb(255, 0, 0)");
    context.fill_rect(0.0, 0.0, 2.0, 2.0);
}

fn corner_pixel(context: &CanvasRenderingContext2d) -> [u8; 4] {
    let data = context.get_image_data(0.0, 0.0, 1.0, 1.0).unwrap().data().0;
    [data[0], data[1], data[2], data[3]]
}

fn dispatch(target: &web_sys::EventTarget, name: &str) {
    target.dispatch_event(&Event::new(name).unwrap()).unwrap();
}

async fn next_frames(count: u32) {
    gloo_timers::future::TimeoutFuture::new(count * 20).await;
}

#[wasm_bindgen_test]
fn listener_fires_until_dropped() {
    let document = web_sys::window().unwrap().document().unwrap();
    let baseline = active_listener_count();
    let hits = Rc::new(Cell::new(0));

    let listener = {
        let hits = hits.clone();
        EventListener::new(&document, "scroll", move |_| hits.set(hits.get() + 1)).unwrap()
    };
    assert_eq!(active_listener_count(), baseline + 1);
    dispatch(&document, "scroll");
    assert_eq!(hits.get(), 1);

    drop(listener);
    assert_eq!(active_listener_count(), baseline);
    dispatch(&document, "scroll");
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn missing_canvas_does_not_start() {
    let err = ParticleEffect::start(None, &ParticleConfig::default()).err();
    assert!(matches!(err, Some(HeroError::CanvasUnavailable)));
}

#[wasm_bindgen_test]
fn effect_sizes_canvas_to_viewport_and_follows_resizes() {
    let window = web_sys::window().unwrap();
    let canvas = new_canvas();
    let baseline = active_listener_count();

    let effect = ParticleEffect::start(Some(canvas.clone()), &ParticleConfig::default()).unwrap();
    let (width, height) = viewport_size(&window).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (width, height));
    assert_eq!(active_listener_count(), baseline + 1);

    canvas.set_width(1);
    canvas.set_height(1);
    dispatch(&window, "resize");
    assert_eq!((canvas.width(), canvas.height()), (width, height));

    effect.dispose();
    assert_eq!(active_listener_count(), baseline);

    canvas.set_width(1);
    dispatch(&window, "resize");
    assert_eq!(canvas.width(), 1);
}

#[wasm_bindgen_test]
async fn frame_loop_stops_when_tick_declines() {
    let ticks = Rc::new(Cell::new(0));
    let frame_loop = {
        let ticks = ticks.clone();
        AnimationLoop::start(move |_| {
            ticks.set(ticks.get() + 1);
            ticks.get() < 3
        })
        .unwrap()
    };

    next_frames(25).await;
    assert_eq!(ticks.get(), 3);
    assert!(!frame_loop.is_running());
}

#[wasm_bindgen_test]
async fn dropped_frame_loop_never_ticks() {
    let ticks = Rc::new(Cell::new(0));
    let frame_loop = {
        let ticks = ticks.clone();
        AnimationLoop::start(move |_| {
            ticks.set(ticks.get() + 1);
            true
        })
        .unwrap()
    };
    drop(frame_loop);

    next_frames(5).await;
    assert_eq!(ticks.get(), 0);
}

#[wasm_bindgen_test]
async fn disposed_effect_stops_drawing() {
    let canvas = new_canvas();
    let context = context_of(&canvas);
    let loops = active_frame_loops();
    let effect = ParticleEffect::start(Some(canvas), &ParticleConfig::default()).unwrap();
    assert_eq!(active_frame_loops(), loops + 1);

    // a running field clears the whole canvas every frame
    paint_marker(&context);
    next_frames(3).await;
    assert!(effect.is_running());
    assert_ne!(corner_pixel(&context), MARKER);

    effect.dispose();
    assert_eq!(active_frame_loops(), loops);
    paint_marker(&context);
    next_frames(5).await;
    assert_eq!(corner_pixel(&context), MARKER);
}

#[wasm_bindgen_test]
async fn unmounted_hero_releases_listeners_and_frame_loops() {
    let window = web_sys::window().unwrap();
    let document = dom::document().unwrap();
    let listeners = active_listener_count();
    let loops = active_frame_loops();

    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    let props = LandingHeroProps {
        variant: HeroVariant::Particles,
        site: Rc::new(SiteConfig::default()),
    };
    let app = yew::Renderer::<LandingHero>::with_root_and_props(root, props).render();
    next_frames(3).await;

    // document scroll plus window resize
    assert_eq!(active_listener_count(), listeners + 2);
    // particle redraw plus the entrance clock
    assert_eq!(active_frame_loops(), loops + 2);

    app.destroy();
    next_frames(3).await;
    assert_eq!(active_listener_count(), listeners);
    assert_eq!(active_frame_loops(), loops);

    dispatch(&document, "scroll");
    dispatch(&window, "resize");
    next_frames(3).await;
    assert_eq!(active_listener_count(), listeners);
    assert_eq!(active_frame_loops(), loops);
}

#[wasm_bindgen_test]
async fn simple_hero_registers_only_the_scroll_listener() {
    let document = dom::document().unwrap();
    let listeners = active_listener_count();

    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    let props = LandingHeroProps {
        variant: HeroVariant::Simple,
        site: Rc::new(SiteConfig::default()),
    };
    let app = yew::Renderer::<LandingHero>::with_root_and_props(root, props).render();
    next_frames(3).await;
    assert_eq!(active_listener_count(), listeners + 1);

    app.destroy();
    next_frames(3).await;
    assert_eq!(active_listener_count(), listeners);
}
