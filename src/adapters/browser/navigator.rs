//! `Navigator` over `window.location`.

use web_sys::Window;

use crate::ports::Navigator;

pub struct WindowNavigator {
    window: Window,
}

impl WindowNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for WindowNavigator {
    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            tracing::warn!("Navigation to {} failed: {:?}", url, e);
        }
    }
}
