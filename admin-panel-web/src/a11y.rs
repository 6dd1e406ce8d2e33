// Accessibility helpers
use web_sys::Element;

/// Mark a region busy while its content is being replaced
///
/// Assistive technology holds off announcing changes inside an element with
/// `aria-busy="true"` until the attribute is cleared.
pub fn set_busy(element: &Element, busy: bool) {
    let _ = if busy {
        element.set_attribute("aria-busy", "true")
    } else {
        element.remove_attribute("aria-busy")
    };
}

/// Update a live region status for screen readers
///
/// Updates the text content of the element with `region_id` if present.
pub fn set_status(region_id: &str, msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(region_id))
    {
        node.set_text_content(Some(msg));
    }
}
