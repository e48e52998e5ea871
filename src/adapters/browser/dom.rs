//! `HeaderDom` over the live document.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlOptionElement, HtmlSelectElement, Window};

use crate::domain::foundation::RenderError;
use crate::domain::version::SelectOption;
use crate::ports::{ChangeHandler, HeaderDom};

fn dom_error(e: JsValue) -> RenderError {
    RenderError::Dom(format!("{:?}", e))
}

/// Header DOM bound to the container and title element ids.
pub struct BrowserHeaderDom {
    window: Window,
    document: Document,
    container_id: String,
    title_id: String,
}

impl BrowserHeaderDom {
    pub fn new(
        window: Window,
        document: Document,
        container_id: impl Into<String>,
        title_id: impl Into<String>,
    ) -> Self {
        Self {
            window,
            document,
            container_id: container_id.into(),
            title_id: title_id.into(),
        }
    }

    fn element(&self, id: &str) -> Result<Element, RenderError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| RenderError::MissingElement(id.to_string()))
    }

    fn container(&self) -> Result<Element, RenderError> {
        self.element(&self.container_id)
    }

    fn title(&self) -> Result<Element, RenderError> {
        self.element(&self.title_id)
    }

    fn build_select(
        &self,
        options: &[SelectOption],
        css_class: &str,
    ) -> Result<HtmlSelectElement, RenderError> {
        let select: HtmlSelectElement = self
            .document
            .create_element("select")
            .map_err(dom_error)?
            .dyn_into()
            .map_err(|_| RenderError::Dom("created element is not a <select>".to_string()))?;

        if !css_class.is_empty() {
            select.class_list().add_1(css_class).map_err(dom_error)?;
        }

        for option in options {
            let element = HtmlOptionElement::new_with_text_and_value_and_default_selected_and_selected(
                &option.label,
                &option.value,
                false,
                option.selected,
            )
            .map_err(dom_error)?;
            select
                .add_with_html_option_element(&element)
                .map_err(dom_error)?;
        }

        Ok(select)
    }
}

impl HeaderDom for BrowserHeaderDom {
    fn install_select(
        &self,
        options: &[SelectOption],
        css_class: &str,
        on_change: ChangeHandler,
    ) -> Result<(), RenderError> {
        let container = self.container()?;
        let select = self.build_select(options, css_class)?;

        let target = select.clone();
        let listener = Closure::<dyn Fn(Event)>::new(move |_event: Event| {
            on_change(&target.value());
        });
        select
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        // The listener lives as long as the page.
        listener.forget();

        container.append_child(&select).map_err(dom_error)?;
        Ok(())
    }

    fn title_parent_has_class(&self, class: &str) -> Result<bool, RenderError> {
        Ok(self
            .title()?
            .parent_element()
            .is_some_and(|parent| parent.class_list().contains(class)))
    }

    fn title_height(&self) -> Result<Option<String>, RenderError> {
        let title = self.title()?;
        let style = match self.window.get_computed_style(&title).map_err(dom_error)? {
            Some(style) => style,
            None => return Ok(None),
        };
        let height = style.get_property_value("height").map_err(dom_error)?;
        Ok(Some(height).filter(|h| !h.is_empty()))
    }

    fn set_container_height(&self, height: &str) -> Result<(), RenderError> {
        let container: HtmlElement = self
            .container()?
            .dyn_into()
            .map_err(|_| RenderError::Dom("container is not an HTML element".to_string()))?;
        container
            .style()
            .set_property("height", height)
            .map_err(dom_error)
    }

    fn place_container_after_title(&self) -> Result<(), RenderError> {
        let container = self.container()?;
        let title = self.title()?;
        let parent = title
            .parent_node()
            .ok_or_else(|| RenderError::Dom("title has no parent".to_string()))?;
        let next = title.next_element_sibling();

        parent
            .insert_before(&container, next.as_deref())
            .map_err(dom_error)?;
        Ok(())
    }
}
