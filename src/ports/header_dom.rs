//! HeaderDom port - the slice of the page the selector touches.
//!
//! The page must provide an empty container element (`version-selector`)
//! and the site title element (`site-title`). Adapters are built with the
//! element ids; the domain only sees these operations.

use crate::domain::foundation::RenderError;
use crate::domain::version::SelectOption;

/// Callback invoked with the chosen option value when the selection changes.
pub type ChangeHandler = Box<dyn Fn(&str)>;

/// Port for rendering the version dropdown into the page header.
pub trait HeaderDom {
    /// Builds a select control from `options`, tags it with `css_class`,
    /// registers `on_change` and appends it to the container.
    fn install_select(
        &self,
        options: &[SelectOption],
        css_class: &str,
        on_change: ChangeHandler,
    ) -> Result<(), RenderError>;

    /// Returns true if the title's parent element carries `class`.
    fn title_parent_has_class(&self, class: &str) -> Result<bool, RenderError>;

    /// Computed CSS height of the title element, if the page reports one.
    fn title_height(&self) -> Result<Option<String>, RenderError>;

    /// Sets the container's inline CSS height.
    fn set_container_height(&self, height: &str) -> Result<(), RenderError>;

    /// Moves the container to directly follow the title element.
    fn place_container_after_title(&self) -> Result<(), RenderError>;
}
