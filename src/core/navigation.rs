use crate::domain::model::{ScrollBehavior, ScrollRequest};
use crate::domain::ports::Document;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;

/// Height of the fixed navigation bar.
pub const DEFAULT_NAV_HEIGHT: f64 = 80.0;

pub const EXTERNAL_LINK_TARGET: &str = "_blank";
pub const EXTERNAL_LINK_FEATURES: &str = "noopener,noreferrer";

/// Smooth-scrolls so the section sits just below the navigation bar.
/// Unknown ids are ignored. Returns the requested scroll, if any.
pub fn scroll_to_section<D>(document: &mut D, section_id: &str, nav_height: f64) -> Option<ScrollRequest>
where
    D: Document + ?Sized,
{
    let Some(element) = document.element_by_id(section_id) else {
        tracing::debug!("No section with id '{}', ignoring", section_id);
        return None;
    };

    let request = ScrollRequest {
        top: document.offset_top(element) - nav_height,
        behavior: ScrollBehavior::Smooth,
    };
    tracing::debug!("Scrolling to '{}' at {}", section_id, request.top);
    document.scroll_to(request);
    Some(request)
}

/// Opens `url` in a new browsing context without an opener reference.
pub fn open_external_link<D>(document: &mut D, url: &str) -> Result<()>
where
    D: Document + ?Sized,
{
    validate_url("url", url)?;
    tracing::info!("Opening external link {}", url);
    document.open_window(url, EXTERNAL_LINK_TARGET, EXTERNAL_LINK_FEATURES);
    Ok(())
}
