//! College-scoped route paths and full-page redirects.
//!
//! Every route lives under a `/{college}` prefix; the helpers here build
//! those paths so pages never format them by hand.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// `/{college}/faculty`, the faculty landing page.
#[must_use]
pub fn faculty_home(college: &str) -> String {
    format!("/{}/faculty", college.trim_matches('/'))
}

/// Full page load of `href` (leaves the SPA, like a server redirect).
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn redirect(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                log::error!("redirect to {href} failed: {e:?}");
            }
        }
    }
}
