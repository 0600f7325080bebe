use yew::prelude::*;

use crate::anchors::SectionAnchor;
use crate::components::badge::Badge;
use crate::components::feature::feature_cards;
use crate::content::{COMMUNITY_BADGE, COMMUNITY_CARDS};

#[function_component(Community)]
pub fn community() -> Html {
    html! {
        <section id={SectionAnchor::Community.id()} class="mx-auto max-w-7xl px-4 py-16">
            <div class="flex items-center justify-between mb-8">
                <h3 class="text-2xl md:text-3xl font-bold">{"Community & Challenges"}</h3>
                <Badge text={COMMUNITY_BADGE} />
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                { feature_cards(&COMMUNITY_CARDS) }
            </div>
        </section>
    }
}
