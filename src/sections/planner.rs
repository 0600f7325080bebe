use yew::prelude::*;

use crate::anchors::SectionAnchor;
use crate::components::stat::stat_cards;
use crate::content::{PLANNER_CHECKLIST, PLANNER_STATS};

#[function_component(Planner)]
pub fn planner() -> Html {
    html! {
        <section id={SectionAnchor::Planner.id()} class="mx-auto max-w-7xl px-4 py-16">
            <div class="rounded-3xl bg-white/60 p-8 shadow ring-1 ring-white/40 backdrop-blur">
                <div class="grid lg:grid-cols-3 gap-8 items-center">
                    <div class="lg:col-span-2">
                        <h3 class="text-2xl md:text-3xl font-bold">{"Salary Planner that actually vibes 💸"}</h3>
                        <p class="mt-3 text-slate-600">
                            {"Track inflows and outflows, spot spending patterns, and get smart suggestions to hit your saving goals."}
                        </p>
                        <div class="mt-6 grid sm:grid-cols-3 gap-3">
                            { stat_cards(&PLANNER_STATS) }
                        </div>
                    </div>
                    <div class="lg:col-span-1">
                        <div class="rounded-2xl border border-dashed border-slate-200 p-6 text-sm text-slate-600">
                            <p class="font-semibold text-slate-800">{"What you’ll get"}</p>
                            <ul class="mt-2 space-y-1">
                                { for PLANNER_CHECKLIST.iter().map(|item| html! { <li key={*item}>{ format!("✅ {}", item) }</li> }) }
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
