use crate::domain::model::{
    ContactSubmission, ElementId, IntersectionEntry, ObserverOptions, ScrollRequest,
};
use crate::utils::error::Result;

/// Host document and viewport.
pub trait Document {
    fn element_by_id(&self, id: &str) -> Option<ElementId>;
    /// Vertical offset of the element from the top of the document.
    fn offset_top(&self, element: ElementId) -> f64;
    /// Elements matching any selector, in document order, each at most once.
    fn query_selector_all(&self, selectors: &[String]) -> Vec<ElementId>;
    fn add_class(&mut self, element: ElementId, class: &str);
    fn has_class(&self, element: ElementId, class: &str) -> bool;
    fn scroll_to(&mut self, request: ScrollRequest);
    fn open_window(&mut self, url: &str, target: &str, features: &str);
}

/// Push side of the viewport-intersection watcher.
pub trait IntersectionSource {
    /// Pending entries for `watched` elements: one for each element seen for
    /// the first time, then one whenever its intersecting state flips.
    fn take_intersection_changes(
        &mut self,
        watched: &[ElementId],
        options: &ObserverOptions,
    ) -> Vec<IntersectionEntry>;
}

/// Where accepted contact submissions are handed off.
pub trait ContactChannel {
    fn deliver(&self, submission: &ContactSubmission) -> Result<()>;
}

/// User-visible notices (the browser's alert box).
pub trait Alerts {
    fn alert(&mut self, message: &str);
}
