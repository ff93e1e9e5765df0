use crate::core::animation::{default_animated_selectors, RevealObserver, DEFAULT_REVEAL_CLASS};
use crate::core::contact::ContactForm;
use crate::core::content::ContentStore;
use crate::core::navigation::{self, DEFAULT_NAV_HEIGHT};
use crate::domain::model::{
    ContactDraft, ContactField, IntersectionEntry, ObserverOptions, Project, ScrollRequest,
    SkillCategory, SubmitOutcome, RESUME_PLACEHOLDER_NOTICE,
};
use crate::domain::ports::{Alerts, ContactChannel, Document, IntersectionSource};
use crate::utils::error::Result;
use std::time::Duration;

/// Behavior knobs of the page, resolved from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub nav_height: f64,
    pub observer: ObserverOptions,
    pub reveal_class: String,
    pub animated_selectors: Vec<String>,
    /// Wait before registering animated elements when the host has no
    /// post-render hook.
    pub registration_delay: Duration,
    pub resume_url: Option<String>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            nav_height: DEFAULT_NAV_HEIGHT,
            observer: ObserverOptions::default(),
            reveal_class: DEFAULT_REVEAL_CLASS.to_string(),
            animated_selectors: default_animated_selectors(),
            registration_delay: Duration::from_millis(100),
            resume_url: None,
        }
    }
}

/// Everything the page template binds to.
pub struct PortfolioViewModel<D, C, A> {
    content: ContentStore,
    settings: ViewSettings,
    form: ContactForm,
    observer: Option<RevealObserver>,
    document: D,
    channel: C,
    alerts: A,
}

impl<D, C, A> PortfolioViewModel<D, C, A>
where
    D: Document + IntersectionSource,
    C: ContactChannel,
    A: Alerts,
{
    pub fn new(content: ContentStore, settings: ViewSettings, document: D, channel: C, alerts: A) -> Self {
        Self {
            content,
            settings,
            form: ContactForm::new(),
            observer: None,
            document,
            channel,
            alerts,
        }
    }

    pub fn title(&self) -> &str {
        self.content.title()
    }

    pub fn skill_categories(&self) -> &[SkillCategory] {
        self.content.skill_categories()
    }

    pub fn projects(&self) -> &[Project] {
        self.content.projects()
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    // --- contact form ---

    pub fn draft(&self) -> &ContactDraft {
        self.form.draft()
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.is_valid()
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let outcome = self.form.submit(&self.channel, &mut self.alerts)?;
        if outcome.is_submitted() {
            tracing::info!("📨 Contact form submitted");
        }
        Ok(outcome)
    }

    // --- navigation ---

    pub fn scroll_to_section(&mut self, section_id: &str) -> Option<ScrollRequest> {
        navigation::scroll_to_section(&mut self.document, section_id, self.settings.nav_height)
    }

    pub fn open_external_link(&mut self, url: &str) -> Result<()> {
        navigation::open_external_link(&mut self.document, url)
    }

    /// Opens the configured resume, or shows a placeholder notice when none is set.
    pub fn download_resume(&mut self) -> Result<()> {
        match self.settings.resume_url.clone() {
            Some(url) => self.open_external_link(&url),
            None => {
                self.alerts.alert(RESUME_PLACEHOLDER_NOTICE);
                Ok(())
            }
        }
    }

    // --- scroll animations ---

    /// Creates the reveal watcher if it does not exist yet.
    pub fn init_watcher(&mut self) -> &mut RevealObserver {
        let settings = &self.settings;
        self.observer.get_or_insert_with(|| {
            RevealObserver::new(settings.observer, settings.reveal_class.clone())
        })
    }

    /// Post-render hook: registers every element matching the animated
    /// selectors. Returns how many elements are watched afterwards.
    pub fn after_render(&mut self) -> usize {
        let targets = self
            .document
            .query_selector_all(&self.settings.animated_selectors);
        let observer = self.init_watcher();
        for element in targets {
            observer.register(element);
        }
        let watched = observer.watched().len();
        tracing::debug!("Watching {} animated elements", watched);
        watched
    }

    /// For hosts without a post-render hook: create the watcher, wait for the
    /// registration delay so the markup exists, then register.
    pub async fn initialize_animations(&mut self) -> usize {
        self.init_watcher();
        if !self.settings.registration_delay.is_zero() {
            tokio::time::sleep(self.settings.registration_delay).await;
        }
        self.after_render()
    }

    /// Watcher callback entry point.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) -> usize {
        match self.observer.as_mut() {
            Some(observer) => observer.on_intersections(entries, &mut self.document),
            None => 0,
        }
    }

    /// Pulls pending intersection changes from the host and applies them.
    pub fn pump(&mut self) -> usize {
        let Some(observer) = self.observer.as_mut() else {
            return 0;
        };
        let entries = self
            .document
            .take_intersection_changes(&observer.watched(), observer.options());
        if entries.is_empty() {
            return 0;
        }
        observer.on_intersections(&entries, &mut self.document)
    }

    pub fn observer(&self) -> Option<&RevealObserver> {
        self.observer.as_ref()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Host-side access, e.g. for user scrolling that bypasses navigation.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn alerts(&self) -> &A {
        &self.alerts
    }
}
