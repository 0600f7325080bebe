use yew::prelude::*;

use crate::anchors::SectionAnchor;
use crate::components::bullets::bullet_list;
use crate::components::stat::stat_cards;
use crate::content::{PLAY_POINTS, PLAY_STATS};
use crate::scroll::scroll_callback;

// Dummy trading, copy only
#[function_component(Play)]
pub fn play() -> Html {
    html! {
        <section id={SectionAnchor::Play.id()} class="relative">
            <div class="mx-auto max-w-7xl px-4 py-16 grid lg:grid-cols-2 gap-10 items-center">
                <div class="order-2 lg:order-1">
                    <h3 class="text-2xl md:text-3xl font-bold">{"Play with ₹1,00,000 Virtual Cash"}</h3>
                    <p class="mt-3 text-slate-600">
                        {"Learn markets by doing — without risk. Build a mock portfolio, try strategies, and understand how compounding works."}
                    </p>
                    { bullet_list(&PLAY_POINTS) }
                    <div class="mt-6 flex gap-3">
                        <button onclick={scroll_callback(SectionAnchor::Community)} class="rounded-full bg-slate-900 text-white px-5 py-2.5 text-sm font-semibold">
                            {"Join Challenges"}
                        </button>
                        <button onclick={scroll_callback(SectionAnchor::Pillars)} class="rounded-full bg-white/70 px-5 py-2.5 text-sm font-semibold shadow ring-1 ring-white/50">
                            {"Learn More"}
                        </button>
                    </div>
                </div>
                <div class="order-1 lg:order-2">
                    <div class="rounded-3xl bg-white/60 p-2 shadow ring-1 ring-white/40">
                        <div class="rounded-2xl bg-gradient-to-br from-indigo-600/10 to-blue-600/10 p-6">
                            <div class="grid grid-cols-3 gap-3">
                                { stat_cards(&PLAY_STATS) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
