use yew::prelude::*;

use crate::components::icon::icon_view;
use crate::content::DisplayCard;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub card: DisplayCard,
}

pub fn feature_view(card: &DisplayCard) -> Html {
    html! {
        <div class="group rounded-2xl bg-white/60 p-6 shadow ring-1 ring-white/40 backdrop-blur transition hover:-translate-y-1 hover:shadow-lg">
            <div class="mb-4 inline-flex rounded-xl bg-gradient-to-br from-indigo-600 to-blue-600 p-3 text-white shadow-sm">
                { icon_view(card.icon, "h-6 w-6") }
            </div>
            <h3 class="text-lg font-semibold text-slate-800">{ card.title }</h3>
            <p class="mt-2 text-slate-600 text-sm leading-relaxed">{ card.description }</p>
        </div>
    }
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    feature_view(&props.card)
}

/// Renders a row of cards, one `FeatureCard` each.
pub fn feature_cards(cards: &[DisplayCard]) -> Html {
    cards
        .iter()
        .map(|card| html! { <FeatureCard key={card.title} card={*card} /> })
        .collect::<Html>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{COMMUNITY_CARDS, PILLARS};

    #[test]
    fn rendering_is_repeatable() {
        for card in PILLARS.iter().chain(&COMMUNITY_CARDS) {
            assert!(feature_view(card) == feature_view(card));
        }
    }

    #[test]
    fn different_cards_render_differently() {
        assert!(feature_view(&PILLARS[0]) != feature_view(&PILLARS[1]));
    }
}
