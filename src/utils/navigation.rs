use web_sys::window;

/// Forced navigation, used when the app must leave the current view
/// regardless of router state (e.g. after a 401).
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Full-page navigation through `window.location`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        let Some(win) = window() else {
            log::warn!("⚠️ No window available, cannot navigate to {}", path);
            return;
        };
        if let Err(e) = win.location().set_href(path) {
            log::error!("❌ Navigation to {} failed: {:?}", path, e);
        }
    }
}
