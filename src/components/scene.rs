use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SceneProps {
    pub url: AttrValue,
}

/// Interactive 3D scene. `<spline-viewer>` is a web component registered by
/// the viewer script in `index.html`; we only hand it the scene URL.
#[function_component(Scene)]
pub fn scene(props: &SceneProps) -> Html {
    html! {
        <div class="absolute inset-0 rounded-3xl overflow-hidden shadow-xl ring-1 ring-white/40 bg-white/40 backdrop-blur">
            <spline-viewer url={props.url.clone()} style="width: 100%; height: 100%;"></spline-viewer>
            // Highlight overlay, doesn't take pointer events
            <div class="pointer-events-none absolute inset-0 bg-gradient-to-t from-white/0 via-white/0 to-white/20" />
        </div>
    }
}
