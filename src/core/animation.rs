use crate::domain::model::{ElementId, IntersectionEntry, ObserverOptions, SubscriptionHandle};
use crate::domain::ports::Document;
use std::collections::{BTreeMap, HashSet};

pub const DEFAULT_REVEAL_CLASS: &str = "fade-in-up";

pub fn default_animated_selectors() -> Vec<String> {
    [".skill-category", ".project-card", ".stat", ".about-text"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Watches elements and adds the reveal class the first time each one
/// intersects the viewport. Elements stay registered for the observer's
/// lifetime.
#[derive(Debug)]
pub struct RevealObserver {
    options: ObserverOptions,
    reveal_class: String,
    subscriptions: BTreeMap<ElementId, SubscriptionHandle>,
    revealed: HashSet<ElementId>,
    next_handle: u64,
}

impl RevealObserver {
    pub fn new(options: ObserverOptions, reveal_class: impl Into<String>) -> Self {
        Self {
            options,
            reveal_class: reveal_class.into(),
            subscriptions: BTreeMap::new(),
            revealed: HashSet::new(),
            next_handle: 0,
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn reveal_class(&self) -> &str {
        &self.reveal_class
    }

    /// Registering an element twice returns the original handle.
    pub fn register(&mut self, element: ElementId) -> SubscriptionHandle {
        if let Some(handle) = self.subscriptions.get(&element) {
            return *handle;
        }
        let handle = SubscriptionHandle(self.next_handle);
        self.next_handle += 1;
        self.subscriptions.insert(element, handle);
        handle
    }

    /// Registered elements in document order.
    pub fn watched(&self) -> Vec<ElementId> {
        self.subscriptions.keys().copied().collect()
    }

    pub fn is_revealed(&self, element: ElementId) -> bool {
        self.revealed.contains(&element)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Watcher callback. Entry order is irrelevant; each reveal is independent.
    /// Returns how many elements were revealed by this batch.
    pub fn on_intersections<D>(&mut self, entries: &[IntersectionEntry], document: &mut D) -> usize
    where
        D: Document + ?Sized,
    {
        let mut newly_revealed = 0;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if !self.subscriptions.contains_key(&entry.target) {
                continue;
            }
            if !document.has_class(entry.target, &self.reveal_class) {
                document.add_class(entry.target, &self.reveal_class);
            }
            if self.revealed.insert(entry.target) {
                newly_revealed += 1;
                tracing::debug!(
                    "Revealed element {:?} (ratio {:.2})",
                    entry.target,
                    entry.intersection_ratio
                );
            }
        }
        newly_revealed
    }
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new(ObserverOptions::default(), DEFAULT_REVEAL_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ScrollRequest;
    use std::collections::{BTreeSet, HashMap};

    #[derive(Default)]
    struct ClassList {
        classes: HashMap<ElementId, BTreeSet<String>>,
        add_calls: usize,
    }

    impl Document for ClassList {
        fn element_by_id(&self, _id: &str) -> Option<ElementId> {
            None
        }
        fn offset_top(&self, _element: ElementId) -> f64 {
            0.0
        }
        fn query_selector_all(&self, _selectors: &[String]) -> Vec<ElementId> {
            Vec::new()
        }
        fn add_class(&mut self, element: ElementId, class: &str) {
            self.add_calls += 1;
            self.classes
                .entry(element)
                .or_default()
                .insert(class.to_string());
        }
        fn has_class(&self, element: ElementId, class: &str) -> bool {
            self.classes
                .get(&element)
                .is_some_and(|set| set.contains(class))
        }
        fn scroll_to(&mut self, _request: ScrollRequest) {}
        fn open_window(&mut self, _url: &str, _target: &str, _features: &str) {}
    }

    fn entry(id: usize, is_intersecting: bool) -> IntersectionEntry {
        IntersectionEntry {
            target: ElementId(id),
            is_intersecting,
            intersection_ratio: if is_intersecting { 0.5 } else { 0.0 },
        }
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut observer = RevealObserver::default();
        let first = observer.register(ElementId(3));
        let second = observer.register(ElementId(7));
        assert_ne!(first, second);
        assert_eq!(observer.register(ElementId(3)), first);
        assert_eq!(observer.watched(), vec![ElementId(3), ElementId(7)]);
    }

    #[test]
    fn test_only_intersecting_registered_elements_are_revealed() {
        let mut observer = RevealObserver::default();
        let mut doc = ClassList::default();
        observer.register(ElementId(1));
        observer.register(ElementId(2));

        let revealed =
            observer.on_intersections(&[entry(1, true), entry(2, false), entry(9, true)], &mut doc);

        assert_eq!(revealed, 1);
        assert!(doc.has_class(ElementId(1), "fade-in-up"));
        assert!(!doc.has_class(ElementId(2), "fade-in-up"));
        assert!(!doc.has_class(ElementId(9), "fade-in-up"));
    }

    #[test]
    fn test_reveal_twice_has_no_extra_effect() {
        let mut observer = RevealObserver::default();
        let mut doc = ClassList::default();
        observer.register(ElementId(1));

        assert_eq!(observer.on_intersections(&[entry(1, true)], &mut doc), 1);
        assert_eq!(observer.on_intersections(&[entry(1, true)], &mut doc), 0);

        assert_eq!(doc.add_calls, 1);
        assert_eq!(doc.classes[&ElementId(1)].len(), 1);
        assert_eq!(observer.revealed_count(), 1);
    }

    #[test]
    fn test_leaving_viewport_keeps_reveal() {
        let mut observer = RevealObserver::default();
        let mut doc = ClassList::default();
        observer.register(ElementId(4));

        observer.on_intersections(&[entry(4, true)], &mut doc);
        observer.on_intersections(&[entry(4, false)], &mut doc);

        assert!(observer.is_revealed(ElementId(4)));
        assert!(doc.has_class(ElementId(4), "fade-in-up"));
    }
}
