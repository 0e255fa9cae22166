use web_sys::window;

/// Full-page navigation
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Assigns `window.location.href`
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        let Some(window) = window() else {
            log::error!("navigate({}): no window", path);
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::error!("navigate({}) failed: {:?}", path, e);
        }
    }
}
