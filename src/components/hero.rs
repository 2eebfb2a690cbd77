use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::anim::easing::Easing;
use crate::anim::spring::use_spring;
use crate::anim::timeline::{EntranceTimeline, GradientLoop, Motion};
use crate::components::particle_canvas::ParticleCanvas;
use crate::components::reveal::{use_entrance, Reveal};
use crate::config::{EntranceConfig, SiteConfig};
use crate::content::{BioSegment, CtaButton};
use crate::scroll::{parallax_offset_vh, scroll_progress, use_scroll_offset};

/// Greeting, heading, title, bio, buttons
const ITEM_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeroVariant {
    /// Particle canvas plus blurred gradient overlay
    #[default]
    Particles,
    Simple,
}

impl HeroVariant {
    pub fn has_particles(self) -> bool {
        self == HeroVariant::Particles
    }
}

fn default_site() -> Rc<SiteConfig> {
    Rc::new(SiteConfig::load())
}

#[derive(Properties, PartialEq)]
pub struct LandingHeroProps {
    #[prop_or_default]
    pub variant: HeroVariant,
    #[prop_or_else(default_site)]
    pub site: Rc<SiteConfig>,
}

/// Fade of the wrapper the staggered items live in.
const CONTAINER_FADE_SECS: f64 = 0.3;

/// The staggered timeline plus the accents of the elements nested in it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroTimeline {
    pub timeline: EntranceTimeline,
    pub container: usize,
    pub greeting: usize,
    pub title: usize,
    pub bio: usize,
    pub buttons: usize,
    pub overlay: usize,
}

impl HeroTimeline {
    pub fn new(config: &EntranceConfig) -> Self {
        let mut timeline = EntranceTimeline::new(config, ITEM_COUNT);
        let container = timeline.add_accent(Motion::fade(0.0, CONTAINER_FADE_SECS));
        let greeting = timeline.add_accent(Motion::fade(0.2, 0.3));
        let title = timeline.add_accent(Motion::slide(0.5, 0.7, -20.0, 0.0));
        let bio = timeline.add_accent(Motion::fade(0.8, 0.8));
        let buttons = timeline.add_accent(Motion::slide(1.2, 0.5, 0.0, 20.0));
        let overlay = timeline.add_accent(Motion::fade(0.0, config.item_duration));
        Self {
            timeline,
            container,
            greeting,
            title,
            bio,
            buttons,
            overlay,
        }
    }
}

fn render_bio(segments: &[BioSegment]) -> Html {
    html! {
        <>
            { for segments.iter().map(|segment| match segment {
                BioSegment::Text(text) => Html::from(text.clone()),
                BioSegment::Skill(skill) => html! { <span class="hero-skill">{skill.clone()}</span> },
            }) }
        </>
    }
}

fn render_button(button: &CtaButton) -> Html {
    let class = button.style.class();
    match &button.href {
        Some(href) => html! {
            <a href={href.clone()} class={class}>{button.label.clone()}</a>
        },
        None => html! {
            <button type="button" class={class}>{button.label.clone()}</button>
        },
    }
}

#[function_component(LandingHero)]
pub fn landing_hero(props: &LandingHeroProps) -> Html {
    let LandingHeroProps { variant, site } = props;
    let motion = &site.motion;
    let content = &site.content;

    let section_ref = use_node_ref();
    let scroll_y = use_scroll_offset();
    let container_height = section_ref
        .cast::<Element>()
        .map(|section| section.client_height() as f64);
    let progress = scroll_progress(scroll_y, container_height);
    let translate_vh = use_spring(
        parallax_offset_vh(progress, motion.parallax_max_vh),
        motion.spring.clone(),
    );

    let hero_timeline = use_memo(HeroTimeline::new, motion.entrance.clone());
    let (_, t) = use_entrance(hero_timeline.timeline.clone());
    let timeline = &hero_timeline.timeline;
    let item = |index: usize| timeline.item_state(index, t);
    let accent = |index: usize| timeline.accent_state(index, t);

    let heading_sweep = GradientLoop::new(motion.heading_gradient_secs, Easing::Linear);
    let overlay_sweep = GradientLoop::new(motion.overlay_gradient_secs, Easing::Linear);

    html! {
        <section
            ref={section_ref}
            class="hero-section"
            style={format!("transform: translateY({:.3}vh);", translate_vh)}
        >
            {
                if variant.has_particles() {
                    html! {
                        <>
                            <ParticleCanvas config={motion.particles.clone()} />
                            <div
                                class="hero-overlay"
                                style={format!(
                                    "opacity: {:.3}; animation: {};",
                                    0.2 * accent(hero_timeline.overlay).opacity,
                                    overlay_sweep.css_animation("hero-gradient-sweep")
                                )}
                            />
                        </>
                    }
                } else {
                    html! {}
                }
            }
            <div class="hero-body">
                <Reveal state={accent(hero_timeline.container)} class={classes!("hero-inner")}>
                    <Reveal state={item(0)} class={classes!("hero-greeting")}>
                        <span style={accent(hero_timeline.greeting).style()}>
                            {content.greeting.clone()}
                        </span>
                    </Reveal>
                    <Reveal state={item(1)}>
                        <h1
                            class="hero-name"
                            style={format!("animation: {};", heading_sweep.css_animation("hero-gradient-sweep"))}
                        >
                            {content.name.clone()}
                        </h1>
                    </Reveal>
                    <Reveal state={item(2)}>
                        <span class="hero-title" style={accent(hero_timeline.title).style()}>
                            {content.title.clone()}
                        </span>
                    </Reveal>
                    <Reveal state={item(3)} class={classes!("hero-bio-block")}>
                        <p class="hero-bio" style={accent(hero_timeline.bio).style()}>
                            { render_bio(&content.bio) }
                        </p>
                    </Reveal>
                    <Reveal state={item(4)} class={classes!("hero-cta-block")}>
                        <div class="hero-cta-row" style={accent(hero_timeline.buttons).style()}>
                            { for content.buttons.iter().map(render_button) }
                        </div>
                    </Reveal>
                </Reveal>
            </div>
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        pointer-events: none;
                        min-height: calc(100vh - 200px);
                        max-height: 1000px;
                        padding: 0 1.5rem;
                        will-change: transform;
                    }
                    .hero-particles {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        opacity: 0.3;
                        z-index: -1;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(270deg, #ff6b6b, #4ecdc4, #45b7d1, #96ceb4, #feca57, #ff9ff3, #54a0ff);
                        background-size: 400% 400%;
                        filter: blur(60px);
                    }
                    @keyframes hero-gradient-sweep {
                        from { background-position: 0% 50%; }
                        to { background-position: 100% 50%; }
                    }
                    .hero-body {
                        position: relative;
                        width: 100%;
                        z-index: 10;
                    }
                    .hero-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .hero-greeting {
                        margin-bottom: 0.5rem;
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: #3f3f46;
                    }
                    .hero-name {
                        margin: 0;
                        padding-bottom: 0.5rem;
                        font-size: 3.75rem;
                        font-weight: 700;
                        background: linear-gradient(90deg, #6366f1, #8b5cf6, #ec4899, #f59e0b, #ef4444);
                        background-size: 300% 300%;
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-title {
                        display: inline-block;
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #27272a;
                    }
                    .hero-bio-block {
                        margin-top: 2rem;
                        max-width: 48rem;
                    }
                    .hero-bio {
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: #3f3f46;
                    }
                    .hero-skill {
                        display: inline-block;
                        font-weight: 600;
                        color: #6366f1;
                        pointer-events: auto;
                        transition: transform 0.2s ease;
                    }
                    .hero-skill:hover {
                        transform: scale(1.05);
                    }
                    .hero-cta-block {
                        margin-top: 3rem;
                        pointer-events: auto;
                    }
                    .hero-cta-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .hero-cta {
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        text-decoration: none;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-cta:active {
                        transform: scale(0.95);
                    }
                    .hero-cta-primary {
                        border: none;
                        color: white;
                        background: linear-gradient(to right, #6366f1, #9333ea);
                    }
                    .hero-cta-primary:hover {
                        box-shadow: 0 10px 25px -10px rgba(99, 102, 241, 0.5);
                    }
                    .hero-cta-secondary {
                        border: 1px solid #d1d5db;
                        color: #374151;
                        background: transparent;
                    }
                    .hero-cta-secondary:hover {
                        box-shadow: 0 10px 25px -10px rgba(0, 0, 0, 0.1);
                    }
                    @media (prefers-color-scheme: dark) {
                        .hero-greeting, .hero-bio { color: #d4d4d8; }
                        .hero-title { color: #f4f4f5; }
                        .hero-cta-secondary { border-color: #4b5563; color: #d1d5db; }
                    }
                    @media (min-width: 640px) {
                        .hero-section { padding: 0 3.5rem; }
                        .hero-name { font-size: 4.5rem; }
                        .hero-bio { font-size: 1.25rem; }
                    }
                    @media (min-width: 768px) {
                        .hero-section {
                            padding: 0 5rem;
                            height: calc(100vh - 200px);
                            min-height: max-content;
                        }
                        .hero-name { font-size: 6rem; }
                        .hero-title { font-size: 2.25rem; }
                        .hero-bio { font-size: 1.5rem; }
                    }
                    @media (min-width: 1280px) {
                        .hero-name { font-size: 8rem; }
                    }
                "#}
            </style>
        </section>
    }
}
