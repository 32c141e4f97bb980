//! Delegated click handling for favorite buttons.
//!
//! A single listener on the document catches every click; clicks landing
//! inside an element matching [`BUTTON_SELECTOR`] trigger a toggle request
//! and the button's [`FAVORITE_CLASS`] follows the server's answer. Clicks
//! anywhere else are ignored. Transport failures are logged and swallowed,
//! leaving the button untouched.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Element, Event, EventTarget};

use crate::query;
use crate::utils::{document, AsyncLoader};

pub const BUTTON_CLASS: &str = "fav-btn";
pub const BUTTON_SELECTOR: &str = ".fav-btn";
pub const ID_ATTRIBUTE: &str = "data-fav-id";
pub const FAVORITE_CLASS: &str = "is-fav";

/// Resolve the favorite button a click landed on, walking up from the
/// event target. `None` when the click was outside any favorite button.
fn button_for_target(target: Option<EventTarget>) -> Option<Element> {
    target?
        .dyn_into::<Element>()
        .ok()?
        .closest(BUTTON_SELECTOR)
        .ok()
        .flatten()
}

/// Attach the delegated listener to the document. Call once at startup.
pub fn attach() {
    // One loader per button id: a second click on the same button aborts
    // the toggle still in flight, so the latest click wins.
    let loaders: Rc<RefCell<HashMap<String, AsyncLoader>>> =
        Rc::new(RefCell::new(HashMap::new()));

    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Some(button) = button_for_target(event.target()) else {
            return;
        };

        debug!("favorite button clicked");

        // An absent id attribute still produces a request with an empty
        // id parameter; the endpoint owns that decision.
        let id = button.get_attribute(ID_ATTRIBUTE).unwrap_or_default();
        debug!("favorite id = {:?}", id);

        let mut loaders = loaders.borrow_mut();
        let loader = loaders.entry(id.clone()).or_default();
        loader.load(async move {
            match query::toggle_favorite(&id).await {
                Ok(true) => button.class_list().add_1(FAVORITE_CLASS).unwrap_throw(),
                Ok(false) => button.class_list().remove_1(FAVORITE_CLASS).unwrap_throw(),
                Err(err) => {
                    error!("toggle favorite failed: {:#}", err);
                }
            }
        });
    }) as Box<dyn FnMut(_)>);

    document()
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .unwrap_throw();

    closure.forget();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod test {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fav_button(id: &str) -> Element {
        let button = document().create_element("button").unwrap_throw();
        button.set_class_name("fav-btn");
        button.set_attribute(ID_ATTRIBUTE, id).unwrap_throw();
        button
    }

    #[wasm_bindgen_test]
    fn click_on_button_resolves_to_itself() {
        let button = fav_button("42");
        let target = EventTarget::from(button.clone());

        let resolved = button_for_target(Some(target)).unwrap_throw();
        assert_eq!(
            resolved.get_attribute(ID_ATTRIBUTE).as_deref(),
            Some("42")
        );
    }

    #[wasm_bindgen_test]
    fn click_inside_button_resolves_to_ancestor() {
        let button = fav_button("a b");
        let icon = document().create_element("span").unwrap_throw();
        button.append_child(&icon).unwrap_throw();

        let resolved = button_for_target(Some(EventTarget::from(icon))).unwrap_throw();
        assert_eq!(
            resolved.get_attribute(ID_ATTRIBUTE).as_deref(),
            Some("a b")
        );
    }

    #[wasm_bindgen_test]
    fn click_outside_any_button_resolves_to_none() {
        let div = document().create_element("div").unwrap_throw();
        assert!(button_for_target(Some(EventTarget::from(div))).is_none());
    }

    #[wasm_bindgen_test]
    fn missing_target_resolves_to_none() {
        assert!(button_for_target(None).is_none());
    }
}
