use yew::prelude::*;

use crate::components::icon::{icon_view, Icon};

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub text: AttrValue,
}

pub fn badge_view(text: &str) -> Html {
    html! {
        <span class="inline-flex items-center gap-1 rounded-full px-3 py-1 text-xs font-medium bg-white/60 text-slate-700 shadow-sm ring-1 ring-white/40 backdrop-blur">
            { icon_view(Icon::Sparkles, "h-3.5 w-3.5 text-indigo-600") }
            {" "}
            { text }
        </span>
    }
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    badge_view(&props.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_same_markup() {
        assert!(badge_view("For education only") == badge_view("For education only"));
        assert!(badge_view("For education only") != badge_view("Something else"));
    }
}
