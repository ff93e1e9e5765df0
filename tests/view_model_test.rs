use portfolio_site::core::contact::ContactForm;
use portfolio_site::core::content::ContentStore;
use portfolio_site::domain::model::{
    ContactDraft, ContactField, ElementId, IntersectionEntry, SubmitOutcome,
    MISSING_FIELDS_NOTICE, RESUME_PLACEHOLDER_NOTICE, SUBMITTED_NOTICE,
};
use portfolio_site::domain::ports::Document;
use portfolio_site::{
    HeadlessDocument, LogContactChannel, PortfolioViewModel, RecordingAlerts, ViewSettings,
};
use std::time::Duration;

type TestViewModel = PortfolioViewModel<HeadlessDocument, LogContactChannel, RecordingAlerts>;

fn view_model_with(settings: ViewSettings, viewport_height: f64) -> TestViewModel {
    let content = ContentStore::default();
    let document = HeadlessDocument::for_site(&content, viewport_height);
    PortfolioViewModel::new(
        content,
        settings,
        document,
        LogContactChannel,
        RecordingAlerts::default(),
    )
}

fn view_model() -> TestViewModel {
    view_model_with(
        ViewSettings {
            registration_delay: Duration::ZERO,
            ..ViewSettings::default()
        },
        900.0,
    )
}

fn fill(vm: &mut TestViewModel, name: &str, email: &str, subject: &str, message: &str) {
    vm.set_field(ContactField::Name, name);
    vm.set_field(ContactField::Email, email);
    vm.set_field(ContactField::Subject, subject);
    vm.set_field(ContactField::Message, message);
}

#[test]
fn test_content_is_exposed_unmodified() {
    let vm = view_model();

    assert_eq!(vm.title(), "Alex Johnson Portfolio");
    assert!(!vm.skill_categories().is_empty());
    assert!(vm.skill_categories().iter().all(|c| !c.skills.is_empty()));
    assert!(!vm.projects().is_empty());
    assert!(vm
        .projects()
        .iter()
        .all(|p| !p.title.is_empty() && !p.technologies.is_empty()));
    assert_eq!(vm.skill_categories(), ContentStore::default().skill_categories());
}

#[test]
fn test_draft_starts_empty() {
    let vm = view_model();
    assert_eq!(vm.draft(), &ContactDraft::default());
    assert!(!vm.is_form_valid());
}

#[test]
fn test_empty_submission_shows_notice_and_keeps_draft() {
    let mut vm = view_model();

    let outcome = vm.submit().unwrap();

    assert!(matches!(outcome, SubmitOutcome::MissingFields(ref f) if f.len() == 4));
    assert_eq!(vm.alerts().last(), Some(MISSING_FIELDS_NOTICE));
    assert_eq!(vm.draft(), &ContactDraft::default());
}

#[test]
fn test_one_missing_field_blocks_submission() {
    for missing in ContactField::ALL {
        let mut vm = view_model();
        fill(&mut vm, "Test User", "test@example.com", "Test Subject", "Test Message");
        vm.set_field(missing, "");
        let before = vm.draft().clone();

        assert!(!vm.is_form_valid(), "{} empty should be invalid", missing);
        let outcome = vm.submit().unwrap();

        assert_eq!(outcome, SubmitOutcome::MissingFields(vec![missing]));
        assert_eq!(vm.draft(), &before);
    }
}

#[test]
fn test_valid_submission_resets_draft() {
    let mut vm = view_model();
    fill(&mut vm, "Test User", "test@example.com", "Test Subject", "Test Message");
    assert!(vm.is_form_valid());

    let outcome = vm.submit().unwrap();

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(vm.alerts().messages(), &[SUBMITTED_NOTICE.to_string()]);
    assert_eq!(vm.draft(), &ContactDraft::default());
}

#[test]
fn test_whitespace_only_fields_are_accepted() {
    let mut vm = view_model();
    fill(&mut vm, " ", " ", " ", " ");

    assert!(vm.is_form_valid());
    assert!(vm.submit().unwrap().is_submitted());
}

#[test]
fn test_no_email_syntax_check() {
    let mut form = ContactForm::new();
    form.set_field(ContactField::Name, "x");
    form.set_field(ContactField::Email, "not-an-email");
    form.set_field(ContactField::Subject, "x");
    form.set_field(ContactField::Message, "x");
    assert!(form.is_valid());
}

#[test]
fn test_scroll_to_section_offsets_for_nav_bar() {
    let mut vm = view_model();
    let skills = vm.document().element_by_id("skills").unwrap();
    let skills_top = vm.document().offset_top(skills);

    let request = vm.scroll_to_section("skills").unwrap();

    assert_eq!(request.top, skills_top - 80.0);
    assert_eq!(vm.document().scroll_y(), skills_top - 80.0);
    assert_eq!(vm.document().scroll_history().len(), 1);
}

#[test]
fn test_scroll_to_first_section_clamps_at_top() {
    let mut vm = view_model();

    let request = vm.scroll_to_section("home").unwrap();

    assert_eq!(request.top, -80.0);
    assert_eq!(vm.document().scroll_y(), 0.0);
}

#[test]
fn test_scroll_to_missing_section_is_noop() {
    let mut vm = view_model();

    assert!(vm.scroll_to_section("nonexistent-id").is_none());
    assert!(vm.document().scroll_history().is_empty());
    assert_eq!(vm.document().scroll_y(), 0.0);
}

#[test]
fn test_custom_nav_height() {
    let mut vm = view_model_with(
        ViewSettings {
            nav_height: 0.0,
            registration_delay: Duration::ZERO,
            ..ViewSettings::default()
        },
        900.0,
    );
    let contact = vm.document().element_by_id("contact").unwrap();
    let top = vm.document().offset_top(contact);

    assert_eq!(vm.scroll_to_section("contact").unwrap().top, top);
}

#[test]
fn test_open_external_link_uses_new_window() {
    let mut vm = view_model();

    vm.open_external_link("https://github.com/alexjohnson/portfolio")
        .unwrap();

    let opened = vm.document().opened_windows();
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].url, "https://github.com/alexjohnson/portfolio");
    assert_eq!(opened[0].target, "_blank");
    assert_eq!(opened[0].features, "noopener,noreferrer");
}

#[test]
fn test_open_external_link_rejects_bad_urls() {
    let mut vm = view_model();

    assert!(vm.open_external_link("javascript:alert(1)").is_err());
    assert!(vm.open_external_link("").is_err());
    assert!(vm.document().opened_windows().is_empty());
}

#[test]
fn test_download_resume_without_url_shows_placeholder() {
    let mut vm = view_model();

    vm.download_resume().unwrap();

    assert_eq!(vm.alerts().last(), Some(RESUME_PLACEHOLDER_NOTICE));
    assert!(vm.document().opened_windows().is_empty());
}

#[test]
fn test_download_resume_opens_configured_url() {
    let mut vm = view_model_with(
        ViewSettings {
            resume_url: Some("https://cdn.example.com/resume.pdf".to_string()),
            ..ViewSettings::default()
        },
        900.0,
    );

    vm.download_resume().unwrap();

    assert_eq!(
        vm.document().opened_windows()[0].url,
        "https://cdn.example.com/resume.pdf"
    );
    assert!(vm.alerts().messages().is_empty());
}

#[test]
fn test_callback_before_watcher_exists_is_ignored() {
    let mut vm = view_model();
    let entry = IntersectionEntry {
        target: ElementId(0),
        is_intersecting: true,
        intersection_ratio: 1.0,
    };

    assert_eq!(vm.on_intersections(&[entry]), 0);
    assert_eq!(vm.pump(), 0);
    assert!(vm.observer().is_none());
}

#[test]
fn test_initialize_animations_on_blocking_executor() {
    let mut vm = view_model();

    let watched = tokio_test::block_on(vm.initialize_animations());

    assert_eq!(watched, 13);
    assert!(vm.observer().is_some());
}
