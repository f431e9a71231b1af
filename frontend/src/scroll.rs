use log::debug;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Named regions the page buttons can jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Problem,
    Assessment,
}

impl Anchor {
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Problem => "problem",
            Anchor::Assessment => "assessment",
        }
    }
}

pub trait AnchorRegistry {
    type Region;

    fn lookup(&self, id: &str) -> Option<Self::Region>;
    fn scroll_into_view(&self, region: &Self::Region);
}

impl AnchorRegistry for Document {
    type Region = Element;

    fn lookup(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }

    fn scroll_into_view(&self, region: &Element) {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        options.block(ScrollLogicalPosition::Start);
        region.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Scroll `id` into view. Unknown ids are a no-op; returns whether a region
/// was found.
pub fn jump_to_id<R: AnchorRegistry>(registry: &R, id: &str) -> bool {
    match registry.lookup(id) {
        Some(region) => {
            registry.scroll_into_view(&region);
            true
        }
        None => {
            debug!("No region with id '{}', ignoring jump", id);
            false
        }
    }
}

pub fn jump_to(anchor: Anchor) -> bool {
    match web_sys::window().and_then(|window| window.document()) {
        Some(document) => jump_to_id(&document, anchor.id()),
        None => false,
    }
}

/// Whether the page has scrolled strictly past `threshold_px`.
pub fn scrolled_past(offset_y: f64, threshold_px: f64) -> bool {
    offset_y > threshold_px
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        regions: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn with(regions: Vec<&'static str>) -> Self {
            Self {
                regions,
                scrolled_to: RefCell::new(Vec::new()),
            }
        }
    }

    impl AnchorRegistry for FakePage {
        type Region = String;

        fn lookup(&self, id: &str) -> Option<String> {
            self.regions
                .iter()
                .find(|region| **region == id)
                .map(|region| region.to_string())
        }

        fn scroll_into_view(&self, region: &String) {
            self.scrolled_to.borrow_mut().push(region.clone());
        }
    }

    #[test]
    fn scrolls_to_known_anchor() {
        let page = FakePage::with(vec!["problem", "assessment"]);
        assert!(jump_to_id(&page, Anchor::Assessment.id()));
        assert_eq!(*page.scrolled_to.borrow(), vec!["assessment".to_string()]);
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let page = FakePage::with(vec!["problem"]);
        assert!(!jump_to_id(&page, "pricing"));
        assert!(page.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn anchor_ids_match_section_ids() {
        assert_eq!(Anchor::Problem.id(), "problem");
        assert_eq!(Anchor::Assessment.id(), "assessment");
    }

    #[test]
    fn scrolled_past_is_strict() {
        assert!(!scrolled_past(0.0, 20.0));
        assert!(!scrolled_past(20.0, 20.0));
        assert!(scrolled_past(20.5, 20.0));
    }
}
