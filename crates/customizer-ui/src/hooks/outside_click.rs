//! Outside-click dismissal for popover-style panels.
//!
//! # Design
//! - The window listener exists only while the panel is open; dropping the
//!   effect's guard detaches it on close and on unmount.
//! - The close callback is read through a ref refreshed every render so the
//!   listener never fires a stale closure.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

/// Emit `on_close` when a pointer press lands outside `root` while `is_open`.
#[hook]
pub(crate) fn use_outside_click_close(root: NodeRef, is_open: bool, on_close: Callback<()>) {
    let latest = use_mut_ref(|| on_close.clone());
    *latest.borrow_mut() = on_close;

    use_effect_with_deps(
        move |is_open: &bool| {
            let guard = is_open.then(|| {
                EventListener::new(&gloo::utils::window(), "mousedown", move |event| {
                    let Some(root) = root.cast::<Node>() else {
                        return;
                    };
                    let target = event
                        .target()
                        .and_then(|target| target.dyn_into::<Node>().ok());
                    if !root.contains(target.as_ref()) {
                        let on_close = latest.borrow().clone();
                        on_close.emit(());
                    }
                })
            });
            move || drop(guard)
        },
        is_open,
    );
}
