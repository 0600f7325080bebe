use yew::prelude::*;

use crate::anchors::SectionAnchor;
use crate::components::badge::Badge;
use crate::components::icon::{icon_view, Icon};
use crate::components::reveal::{RevealHeading, HERO_ENTRANCE};
use crate::components::scene::Scene;
use crate::components::stat::stat_cards;
use crate::config;
use crate::content::{HERO_BADGE, HERO_HIGHLIGHT, HERO_PITCH, HERO_STATS, HERO_TAGLINE};
use crate::scroll::scroll_callback;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={SectionAnchor::Hero.id()} class="relative">
            <div class="mx-auto max-w-7xl px-4 pt-16 pb-8 grid lg:grid-cols-2 gap-8 items-center">
                <div class="relative z-10">
                    <Badge text={HERO_BADGE} />
                    <RevealHeading
                        animation={HERO_ENTRANCE}
                        class="mt-4 text-4xl md:text-6xl font-extrabold tracking-tight leading-tight"
                    >
                        { HERO_TAGLINE }
                        {" "}
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-blue-600">{ HERO_HIGHLIGHT }</span>
                        {" 🪙"}
                    </RevealHeading>
                    <p class="mt-4 text-slate-600 text-lg">{ HERO_PITCH }</p>
                    <div id={SectionAnchor::Cta.id()} class="mt-6 flex flex-col sm:flex-row gap-3">
                        <a href={config::EARLY_ACCESS_HREF} class="inline-flex items-center justify-center gap-2 rounded-full bg-gradient-to-r from-indigo-600 to-blue-600 px-6 py-3 text-white font-semibold shadow-lg hover:opacity-95">
                            {"Join the Waitlist"}
                            { icon_view(Icon::ArrowRight, "h-5 w-5") }
                        </a>
                        <button onclick={scroll_callback(SectionAnchor::Pillars)} class="inline-flex items-center justify-center gap-2 rounded-full bg-white/70 px-6 py-3 text-slate-900 font-semibold shadow ring-1 ring-white/50 backdrop-blur hover:bg-white">
                            {"Explore Features"}
                        </button>
                    </div>
                    <div class="mt-8 grid grid-cols-3 gap-3 max-w-md">
                        { stat_cards(&HERO_STATS) }
                    </div>
                </div>

                <div class="relative h-[360px] sm:h-[420px] md:h-[520px] lg:h-[560px] w-full">
                    <Scene url={config::HERO_SCENE_URL} />
                </div>
            </div>
        </section>
    }
}
