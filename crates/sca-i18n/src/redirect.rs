//! Root redirect
//!
//! The unqualified root `/` never renders a page. It is replaced by the
//! home of the detected (or default) locale so it does not stay in history.

use crate::resolver::{LanguagePreference, LocaleResolver};
use crate::routing::Navigator;
use crate::Locale;
use tracing::debug;

/// Locale the root redirects to for the given preference
pub fn resolve_root_redirect(browser_preference: Option<&str>) -> Locale {
    LocaleResolver::default().resolve(None, browser_preference)
}

/// Redirect target for `locale`: `/{code}`
pub fn root_redirect_target(locale: Locale) -> String {
    format!("/{}", locale.short_code())
}

/// Replace the current root entry with the detected locale's home.
///
/// Returns the target navigated to.
pub fn redirect_root<N, P>(navigator: &mut N, preference: &P) -> String
where
    N: Navigator + ?Sized,
    P: LanguagePreference + ?Sized,
{
    redirect_root_with(&LocaleResolver::default(), navigator, preference)
}

/// Same as [`redirect_root`] with a configured resolver
pub fn redirect_root_with<N, P>(resolver: &LocaleResolver, navigator: &mut N, preference: &P) -> String
where
    N: Navigator + ?Sized,
    P: LanguagePreference + ?Sized,
{
    let preferred = preference.preferred_language();
    let locale = resolver.resolve(None, preferred.as_deref());
    let target = root_redirect_target(locale);

    debug!(preference = ?preferred, "Redirecting root to {}", target);
    navigator.replace(&target);
    target
}
