use crate::core::content::ContentStore;
use crate::domain::model::{
    ElementId, IntersectionEntry, ObserverOptions, ScrollBehavior, ScrollRequest,
};
use crate::domain::ports::{Document, IntersectionSource};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub top: f64,
    pub height: f64,
}

impl Element {
    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.classes.contains(class)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenedWindow {
    pub url: String,
    pub target: String,
    pub features: String,
}

/// In-memory page with a vertical viewport. Elements are laid out in one
/// column; only the vertical axis takes part in intersection.
#[derive(Debug, Clone)]
pub struct HeadlessDocument {
    elements: Vec<Element>,
    viewport_height: f64,
    scroll_y: f64,
    scroll_history: Vec<ScrollRequest>,
    opened_windows: Vec<OpenedWindow>,
    last_reported: HashMap<ElementId, bool>,
}

// Section layout used by `for_site`, in px.
const HERO_HEIGHT: f64 = 720.0;
const SECTION_PADDING: f64 = 96.0;
const ABOUT_TEXT_HEIGHT: f64 = 320.0;
const STAT_HEIGHT: f64 = 120.0;
const CATEGORY_CARD_HEIGHT: f64 = 420.0;
const PROJECT_CARD_HEIGHT: f64 = 460.0;
const CONTACT_HEIGHT: f64 = 640.0;

impl HeadlessDocument {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            elements: Vec::new(),
            viewport_height: viewport_height.max(0.0),
            scroll_y: 0.0,
            scroll_history: Vec::new(),
            opened_windows: Vec::new(),
            last_reported: HashMap::new(),
        }
    }

    /// Builds the page skeleton for `content`: hero, about (text and three
    /// stats), one card per skill category, one card per project, contact.
    pub fn for_site(content: &ContentStore, viewport_height: f64) -> Self {
        let mut doc = Self::new(viewport_height);
        let mut y = 0.0;

        doc.push(Some("home"), &["hero"], y, HERO_HEIGHT);
        y += HERO_HEIGHT;

        let about_height = SECTION_PADDING * 2.0 + ABOUT_TEXT_HEIGHT + STAT_HEIGHT;
        doc.push(Some("about"), &["section"], y, about_height);
        doc.push(None, &["about-text"], y + SECTION_PADDING, ABOUT_TEXT_HEIGHT);
        for _ in 0..3 {
            doc.push(None, &["stat"], y + SECTION_PADDING + ABOUT_TEXT_HEIGHT, STAT_HEIGHT);
        }
        y += about_height;

        let categories = content.skill_categories().len() as f64;
        let skills_height = SECTION_PADDING * 2.0 + categories * CATEGORY_CARD_HEIGHT;
        doc.push(Some("skills"), &["section"], y, skills_height);
        for i in 0..content.skill_categories().len() {
            let top = y + SECTION_PADDING + i as f64 * CATEGORY_CARD_HEIGHT;
            doc.push(None, &["skill-category"], top, CATEGORY_CARD_HEIGHT);
        }
        y += skills_height;

        let projects = content.projects().len() as f64;
        let projects_height = SECTION_PADDING * 2.0 + projects * PROJECT_CARD_HEIGHT;
        doc.push(Some("projects"), &["section"], y, projects_height);
        for i in 0..content.projects().len() {
            let top = y + SECTION_PADDING + i as f64 * PROJECT_CARD_HEIGHT;
            doc.push(None, &["project-card"], top, PROJECT_CARD_HEIGHT);
        }
        y += projects_height;

        doc.push(Some("contact"), &["section"], y, CONTACT_HEIGHT);
        doc
    }

    pub fn push(&mut self, id: Option<&str>, classes: &[&str], top: f64, height: f64) -> ElementId {
        self.elements.push(Element {
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            top,
            height: height.max(0.0),
        });
        ElementId(self.elements.len() - 1)
    }

    pub fn element(&self, element: ElementId) -> Option<&Element> {
        self.elements.get(element.0)
    }

    pub fn document_height(&self) -> f64 {
        self.elements
            .iter()
            .map(|e| e.top + e.height)
            .fold(0.0, f64::max)
    }

    fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn scroll_history(&self) -> &[ScrollRequest] {
        &self.scroll_history
    }

    pub fn opened_windows(&self) -> &[OpenedWindow] {
        &self.opened_windows
    }

    /// Elements that carry `class`, in document order.
    pub fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        (0..self.elements.len())
            .map(ElementId)
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    /// Visible fraction of `element` within the viewport adjusted by the
    /// root margin.
    pub fn intersection_ratio(&self, element: ElementId, options: &ObserverOptions) -> f64 {
        let Some(el) = self.element(element) else {
            return 0.0;
        };
        let root_top = self.scroll_y - options.root_margin.top;
        let root_bottom = self.scroll_y + self.viewport_height + options.root_margin.bottom;
        if root_bottom <= root_top {
            return 0.0;
        }

        let visible = (el.top + el.height).min(root_bottom) - el.top.max(root_top);
        if el.height == 0.0 {
            // Zero-height elements count as fully visible while inside the root.
            return if el.top >= root_top && el.top <= root_bottom { 1.0 } else { 0.0 };
        }
        (visible / el.height).clamp(0.0, 1.0)
    }
}

impl Document for HeadlessDocument {
    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(ElementId)
    }

    fn offset_top(&self, element: ElementId) -> f64 {
        self.element(element).map(|e| e.top).unwrap_or(0.0)
    }

    fn query_selector_all(&self, selectors: &[String]) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| selectors.iter().any(|s| e.matches(s)))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(el) = self.elements.get_mut(element.0) {
            el.classes.insert(class.to_string());
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.element(element)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        // smooth 只影響動畫，不影響終點
        let target = request.top.clamp(0.0, self.max_scroll());
        if request.behavior == ScrollBehavior::Smooth {
            tracing::debug!("Smooth scroll {} -> {}", self.scroll_y, target);
        }
        self.scroll_y = target;
        self.scroll_history.push(request);
    }

    fn open_window(&mut self, url: &str, target: &str, features: &str) {
        self.opened_windows.push(OpenedWindow {
            url: url.to_string(),
            target: target.to_string(),
            features: features.to_string(),
        });
    }
}

impl IntersectionSource for HeadlessDocument {
    fn take_intersection_changes(
        &mut self,
        watched: &[ElementId],
        options: &ObserverOptions,
    ) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();
        for &target in watched {
            let ratio = self.intersection_ratio(target, options);
            let is_intersecting = ratio > 0.0 && ratio >= options.threshold;
            let previous = self.last_reported.insert(target, is_intersecting);
            if previous != Some(is_intersecting) {
                entries.push(IntersectionEntry {
                    target,
                    is_intersecting,
                    intersection_ratio: ratio,
                });
            }
        }
        entries
    }
}
