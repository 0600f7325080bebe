use yew::prelude::*;

use crate::anchors::PageSection;
use crate::sections::{
    community::Community, footer::Footer, hero::Hero, insurance::Insurance, mentor::Mentor,
    nav::Nav, pillars::Pillars, planner::Planner, play::Play, sustain::Sustain,
};

fn section_view(section: PageSection) -> Html {
    match section {
        PageSection::Hero => html! { <Hero /> },
        PageSection::Pillars => html! { <Pillars /> },
        PageSection::Play => html! { <Play /> },
        PageSection::Planner => html! { <Planner /> },
        PageSection::Mentor => html! { <Mentor /> },
        PageSection::Insurance => html! { <Insurance /> },
        PageSection::Community => html! { <Community /> },
        PageSection::Sustain => html! { <Sustain /> },
        PageSection::Footer => html! { <Footer /> },
    }
}

#[function_component(Page)]
pub fn page() -> Html {
    html! {
        <div class="min-h-screen bg-[radial-gradient(ellipse_at_top_right,_var(--tw-gradient-stops))] from-indigo-50 via-sky-50 to-white text-slate-800">
            <Nav />
            { for PageSection::ALL.iter().map(|section| section_view(*section)) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::header_links;

    async fn render_page() -> String {
        yew::ServerRenderer::<Page>::new()
            .hydratable(false)
            .render()
            .await
    }

    /// Something only the given block renders.
    fn marker(section: PageSection) -> &'static str {
        match section {
            PageSection::Hero => r#"id="hero""#,
            PageSection::Pillars => r#"id="pillars""#,
            PageSection::Play => r#"id="play""#,
            PageSection::Planner => r#"id="planner""#,
            PageSection::Mentor => r#"id="mentor""#,
            PageSection::Insurance => r#"id="insurance""#,
            PageSection::Community => r#"id="community""#,
            PageSection::Sustain => "How we sustain",
            PageSection::Footer => "<footer",
        }
    }

    #[tokio::test]
    async fn every_header_link_target_is_rendered_once() {
        let html = render_page().await;
        for link in header_links() {
            let attr = format!(r#"id="{}""#, link.anchor.id());
            assert_eq!(html.matches(&attr).count(), 1, "{} -> {}", link.label, attr);
        }
    }

    #[tokio::test]
    async fn renders_nine_blocks_in_order() {
        let html = render_page().await;
        let mut last = 0;
        for section in PageSection::ALL {
            let found = html[last..]
                .find(marker(section))
                .unwrap_or_else(|| panic!("{:?} missing or out of order", section));
            last += found + marker(section).len();
        }
    }

    #[tokio::test]
    async fn nav_comes_before_hero() {
        let html = render_page().await;
        let nav = html.find("<header").unwrap();
        let hero = html.find(marker(PageSection::Hero)).unwrap();
        assert!(nav < hero);
    }
}
