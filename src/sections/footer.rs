use yew::prelude::*;

use crate::components::icon::{icon_view, Icon};
use crate::config;
use crate::content::{DISCLAIMER, VISION};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="border-t border-white/50 bg-white/60 backdrop-blur">
            <div class="mx-auto max-w-7xl px-4 py-10 grid md:grid-cols-2 gap-6 items-center">
                <div>
                    <p class="text-sm text-slate-600">{ VISION }</p>
                    <p class="mt-3 text-xs text-slate-500">{ DISCLAIMER }</p>
                </div>
                <div class="md:justify-self-end">
                    <a href={config::EARLY_ACCESS_HREF} class="inline-flex items-center gap-2 rounded-full bg-slate-900 px-5 py-3 text-white text-sm font-semibold shadow hover:bg-slate-800">
                        {"Get Early Access"}
                        { icon_view(Icon::Phone, "h-4 w-4") }
                    </a>
                </div>
            </div>
        </footer>
    }
}
