use yew::prelude::*;

use crate::anchors::SectionAnchor;
use crate::components::bullets::bullet_list;
use crate::components::stat::stat_cards;
use crate::content::{INSURANCE_POINTS, INSURANCE_STATS};

#[function_component(Insurance)]
pub fn insurance() -> Html {
    html! {
        <section id={SectionAnchor::Insurance.id()} class="mx-auto max-w-7xl px-4 py-16">
            <div class="rounded-3xl bg-gradient-to-br from-amber-50 to-orange-50 p-8 ring-1 ring-orange-100">
                <div class="grid lg:grid-cols-2 gap-10 items-center">
                    <div>
                        <h3 class="text-2xl md:text-3xl font-bold">{"Insurance 101 — Protect what matters 🛡️"}</h3>
                        <p class="mt-3 text-slate-700">
                            {"Learn the basics of health, term, and motor insurance. Connect with IRDAI-licensed advisors via a compliant referral model."}
                        </p>
                        { bullet_list(&INSURANCE_POINTS) }
                    </div>
                    <div>
                        <div class="grid sm:grid-cols-3 gap-3">
                            { stat_cards(&INSURANCE_STATS) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
