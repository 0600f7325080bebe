use yew::prelude::*;

use crate::anchors::SectionAnchor;
use crate::components::feature::feature_cards;
use crate::config;
use crate::content::MENTOR_CARDS;

#[function_component(Mentor)]
pub fn mentor() -> Html {
    html! {
        <section id={SectionAnchor::Mentor.id()} class="mx-auto max-w-7xl px-4 py-16">
            <div class="grid lg:grid-cols-2 gap-10 items-center">
                <div>
                    <h3 class="text-2xl md:text-3xl font-bold">{"Learn 1:1 from Verified Mentors 👩‍🏫"}</h3>
                    <p class="mt-3 text-slate-600">
                        {"Book educational sessions with vetted finance coaches. No stock tips, only learning and clarity."}
                    </p>
                    <div class="mt-6 flex gap-3">
                        <a href={config::EARLY_ACCESS_HREF} class="rounded-full bg-gradient-to-r from-indigo-600 to-blue-600 text-white px-5 py-2.5 text-sm font-semibold shadow">
                            {"Find a Mentor"}
                        </a>
                        <a href={config::BE_MENTOR_HREF} class="rounded-full bg-white/70 px-5 py-2.5 text-sm font-semibold shadow ring-1 ring-white/50">
                            {"Become a Mentor"}
                        </a>
                    </div>
                </div>
                <div>
                    <div class="rounded-3xl bg-white/60 p-6 shadow ring-1 ring-white/40">
                        <div class="grid sm:grid-cols-2 gap-4">
                            { feature_cards(&MENTOR_CARDS) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
