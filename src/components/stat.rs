use yew::prelude::*;

use crate::content::Stat;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
}

pub fn stat_view(stat: &Stat) -> Html {
    html! {
        <div class="rounded-xl bg-white/60 p-4 text-center shadow ring-1 ring-white/40 backdrop-blur">
            <div class="text-2xl font-bold text-slate-900">{ stat.value }</div>
            <div class="text-xs text-slate-600">{ stat.label }</div>
        </div>
    }
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    stat_view(&props.stat)
}

pub fn stat_cards(stats: &[Stat]) -> Html {
    stats
        .iter()
        .map(|stat| html! { <StatCard key={stat.label} stat={*stat} /> })
        .collect::<Html>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HERO_STATS;

    #[test]
    fn rendering_is_repeatable() {
        for stat in &HERO_STATS {
            assert!(stat_view(stat) == stat_view(stat));
        }
    }

    #[test]
    fn value_and_label_both_matter() {
        let a = Stat { label: "Risk", value: "Zero" };
        let b = Stat { label: "Risk", value: "Low" };
        assert!(stat_view(&a) != stat_view(&b));
    }
}
