use yew::prelude::*;

/// `• point` list used by the play, insurance and sustain blocks.
pub fn bullet_list(points: &[&'static str]) -> Html {
    html! {
        <ul class="mt-4 space-y-2 text-slate-700 text-sm">
            { for points.iter().map(|point| html! { <li key={*point}>{ format!("• {}", point) }</li> }) }
        </ul>
    }
}
