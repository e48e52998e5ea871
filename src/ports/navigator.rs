//! Navigator port - full-page navigation.

/// Port for sending the reader to another URL.
///
/// Navigation replaces the page; there is nothing to return and the browser
/// reports its own failures.
pub trait Navigator {
    fn navigate(&self, url: &str);
}
