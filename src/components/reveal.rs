use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Gives the browser one frame to paint the initial state before the
/// transition starts.
const START_DELAY_MS: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub opacity: f32,
    pub y_px: f32,
}

/// A one-shot fade/slide. The interpolation is left to CSS transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceAnimation {
    pub initial: MotionState,
    pub target: MotionState,
    pub duration_ms: u32,
}

pub const HERO_ENTRANCE: EntranceAnimation = EntranceAnimation {
    initial: MotionState { opacity: 0.0, y_px: 20.0 },
    target: MotionState { opacity: 1.0, y_px: 0.0 },
    duration_ms: 600,
};

impl EntranceAnimation {
    pub fn style(&self, revealed: bool) -> String {
        let state = if revealed { self.target } else { self.initial };
        format!(
            "opacity: {}; transform: translateY({}px); transition: opacity {ms}ms ease-out, transform {ms}ms ease-out;",
            state.opacity,
            state.y_px,
            ms = self.duration_ms,
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealHeadingProps {
    pub animation: EntranceAnimation,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(RevealHeading)]
pub fn reveal_heading(props: &RevealHeadingProps) -> Html {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(START_DELAY_MS, move || revealed.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <h1 class={props.class.clone()} style={props.animation.style(*revealed)}>
            { for props.children.iter() }
        </h1>
    }
}
