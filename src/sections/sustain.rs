use yew::prelude::*;

use crate::components::bullets::bullet_list;
use crate::content::{SAFETY_POINTS, SUSTAIN_POINTS};

fn panel(title: &'static str, points: &[&'static str]) -> Html {
    html! {
        <div class="rounded-3xl bg-white/60 p-8 shadow ring-1 ring-white/40">
            <h4 class="text-xl font-bold">{ title }</h4>
            { bullet_list(points) }
        </div>
    }
}

/// Revenue model and compliance notes. Not a nav target.
#[function_component(Sustain)]
pub fn sustain() -> Html {
    html! {
        <section class="mx-auto max-w-7xl px-4 pb-20">
            <div class="grid lg:grid-cols-2 gap-10">
                { panel("How we sustain", &SUSTAIN_POINTS) }
                { panel("Compliance & Safety", &SAFETY_POINTS) }
            </div>
        </section>
    }
}
