use yew::prelude::*;

use crate::anchors::{HEADER_CTA, NAV_LINKS};
use crate::components::icon::{icon_view, Icon};
use crate::config;
use crate::scroll::scroll_callback;

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <header class="sticky top-0 z-40 w-full border-b border-white/40 bg-white/60 backdrop-blur supports-[backdrop-filter]:bg-white/60">
            <div class="mx-auto max-w-7xl px-4 py-3 flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <div class="h-8 w-8 rounded-xl bg-gradient-to-br from-indigo-600 to-blue-600 shadow-sm" />
                    <span class="text-lg font-extrabold tracking-tight">{ config::BRAND_NAME }</span>
                    <span class="ml-2 text-xs rounded-full bg-indigo-600/10 text-indigo-700 px-2 py-0.5">{ config::BRAND_REGION }</span>
                </div>
                <nav class="hidden md:flex items-center gap-6 text-sm">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <button key={link.label} onclick={scroll_callback(link.anchor)} class="hover:text-indigo-600">
                            { link.label }
                        </button>
                    }) }
                </nav>
                <div class="flex items-center gap-3">
                    <button onclick={scroll_callback(HEADER_CTA.anchor)} class="inline-flex items-center gap-2 rounded-full bg-slate-900 px-4 py-2 text-white text-sm font-semibold shadow hover:bg-slate-800">
                        { HEADER_CTA.label }
                        { icon_view(Icon::ArrowRight, "h-4 w-4") }
                    </button>
                </div>
            </div>
        </header>
    }
}
