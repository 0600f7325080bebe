use yew::prelude::*;

use crate::anchors::SectionAnchor;
use crate::components::badge::Badge;
use crate::components::feature::feature_cards;
use crate::content::{PILLARS, PILLARS_BADGE};

#[function_component(Pillars)]
pub fn pillars() -> Html {
    html! {
        <section id={SectionAnchor::Pillars.id()} class="mx-auto max-w-7xl px-4 py-16">
            <div class="mb-8 flex items-center justify-between">
                <h2 class="text-2xl md:text-3xl font-bold">{"Core Pillars"}</h2>
                <Badge text={PILLARS_BADGE} />
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                { feature_cards(&PILLARS) }
            </div>
        </section>
    }
}
