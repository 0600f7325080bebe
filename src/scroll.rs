use log::debug;
use web_sys::{window, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::Callback;

use crate::anchors::SectionAnchor;

/// Something the viewport can be asked to scroll to.
pub trait ScrollTarget {
    fn scroll_into_view_smooth(&self);
}

/// Finds page elements by their identifier.
pub trait ElementLocator {
    type Element: ScrollTarget;

    fn find_by_identifier(&self, id: &str) -> Option<Self::Element>;
}

pub struct ScrollNavigator<L> {
    locator: L,
}

impl<L: ElementLocator> ScrollNavigator<L> {
    pub fn new(locator: L) -> Self {
        Self { locator }
    }

    /// Smooth-scrolls the element with `id` to the top of the viewport.
    /// A missing element is ignored.
    pub fn scroll_to(&self, id: &str) {
        match self.locator.find_by_identifier(id) {
            Some(element) => {
                debug!("Scrolling to section '{}'", id);
                element.scroll_into_view_smooth();
            }
            None => debug!("No section with id '{}', ignoring", id),
        }
    }

    pub fn scroll_to_anchor(&self, anchor: SectionAnchor) {
        self.scroll_to(anchor.id());
    }
}

/// Looks elements up in the live browser document.
pub struct DocumentLocator;

impl ElementLocator for DocumentLocator {
    type Element = Element;

    fn find_by_identifier(&self, id: &str) -> Option<Element> {
        window()?.document()?.get_element_by_id(id)
    }
}

impl ScrollTarget for Element {
    #[allow(deprecated)]
    fn scroll_into_view_smooth(&self) {
        let mut options = ScrollIntoViewOptions::new();
        options
            .behavior(ScrollBehavior::Smooth)
            .block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn scroll_to(anchor: SectionAnchor) {
    ScrollNavigator::new(DocumentLocator).scroll_to_anchor(anchor);
}

/// Click handler for buttons that jump to a section.
pub fn scroll_callback(anchor: SectionAnchor) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to(anchor);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::{header_links, PageSection, HEADER_CTA, NAV_LINKS};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeElement {
        id: String,
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl ScrollTarget for FakeElement {
        fn scroll_into_view_smooth(&self) {
            self.requests.borrow_mut().push(self.id.clone());
        }
    }

    struct FakeDocument {
        ids: Vec<&'static str>,
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl FakeDocument {
        fn with_ids(ids: Vec<&'static str>) -> Self {
            Self { ids, requests: Rc::new(RefCell::new(Vec::new())) }
        }

        /// A document holding every anchor the page renders.
        fn rendered_page() -> Self {
            Self::with_ids(
                PageSection::ALL
                    .iter()
                    .flat_map(|section| section.anchors())
                    .map(|anchor| anchor.id())
                    .collect(),
            )
        }
    }

    impl ElementLocator for &FakeDocument {
        type Element = FakeElement;

        fn find_by_identifier(&self, id: &str) -> Option<FakeElement> {
            self.ids.iter().any(|known| *known == id).then(|| FakeElement {
                id: id.to_string(),
                requests: self.requests.clone(),
            })
        }
    }

    #[test]
    fn existing_section_gets_one_scroll_request() {
        let document = FakeDocument::with_ids(vec!["hero", "pillars"]);
        ScrollNavigator::new(&document).scroll_to("pillars");
        assert_eq!(*document.requests.borrow(), vec!["pillars".to_string()]);
    }

    #[test]
    fn missing_section_is_ignored() {
        let document = FakeDocument::with_ids(vec!["hero"]);
        ScrollNavigator::new(&document).scroll_to("nowhere");
        assert!(document.requests.borrow().is_empty());
    }

    #[test]
    fn repeated_requests_are_all_forwarded() {
        let document = FakeDocument::rendered_page();
        let navigator = ScrollNavigator::new(&document);
        navigator.scroll_to("play");
        navigator.scroll_to("mentor");
        assert_eq!(
            *document.requests.borrow(),
            vec!["play".to_string(), "mentor".to_string()]
        );
    }

    #[test]
    fn pillars_link_scrolls_to_pillars() {
        let document = FakeDocument::rendered_page();
        let link = NAV_LINKS.iter().find(|l| l.label == "Pillars").unwrap();
        ScrollNavigator::new(&document).scroll_to_anchor(link.anchor);
        assert_eq!(*document.requests.borrow(), vec!["pillars".to_string()]);
    }

    #[test]
    fn early_access_button_scrolls_to_cta() {
        let document = FakeDocument::rendered_page();
        assert_eq!(HEADER_CTA.label, "Get Early Access");
        ScrollNavigator::new(&document).scroll_to_anchor(HEADER_CTA.anchor);
        assert_eq!(*document.requests.borrow(), vec!["cta".to_string()]);
    }

    #[test]
    fn every_header_link_lands_somewhere() {
        for link in header_links() {
            let document = FakeDocument::rendered_page();
            ScrollNavigator::new(&document).scroll_to_anchor(link.anchor);
            assert_eq!(document.requests.borrow().len(), 1, "{}", link.label);
        }
    }
}
