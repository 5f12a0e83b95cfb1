//! Cross-model event binding.
//!
//! [`add_listener`] binds a handler to any [`EventTarget`], whichever of the
//! three registration styles it supports:
//!
//! | Style | Registration | Event passed to handlers |
//! |-------|--------------|--------------------------|
//! | W3C | `add_event_listener(type, ..)` | has `target` |
//! | Attach | `attach_event("on" + type, ..)` | only `src_element` |
//! | Inline | `on<type>` handler slot | only `src_element` |

pub mod event;
pub mod target;

pub use event::{Event, Handler, NodeId};
pub use target::{Element, EventTarget, ListenerModel, Registration};

use std::rc::Rc;

/// Bind `handler` to `event_name` on `target` and report whether it was
/// bound.
///
/// Tries `add_event_listener` first (forwarding `bubble` as its third
/// argument), then `attach_event`, whose answer is returned as is. Targets
/// with neither get the handler in their inline slot; an existing inline
/// handler is kept and runs before the new one.
///
/// The handler always sees `event.target` (filled from `src_element` when
/// the target did not set it) and `current_target` set to the bound node.
///
/// # Example
/// ```
/// use lucida::events::{add_listener, Element, Event, ListenerModel};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut button = Element::new(1, ListenerModel::InlineOnly);
/// let clicks = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&clicks);
/// assert!(add_listener(&mut button, "click", Rc::new(move |_: &mut Event| {
///     counter.set(counter.get() + 1);
/// }), false));
///
/// button.dispatch("click");
/// assert_eq!(clicks.get(), 1);
/// ```
pub fn add_listener(
    target: &mut dyn EventTarget,
    event_name: &str,
    handler: Handler,
    bubble: bool,
) -> bool {
    let node = target.node_id();
    let wrapped: Handler = Rc::new(move |event: &mut Event| {
        if event.target.is_none() {
            event.target = event.src_element;
        }
        event.current_target = Some(node);
        handler(event);
    });

    match target.add_event_listener(event_name, Rc::clone(&wrapped), bubble) {
        Registration::Bound => return true,
        Registration::Refused => return false,
        Registration::Unsupported => {}
    }

    let on_event = format!("on{}", event_name);
    match target.attach_event(&on_event, Rc::clone(&wrapped)) {
        Registration::Bound => return true,
        Registration::Refused => return false,
        Registration::Unsupported => {}
    }

    let combined: Handler = match target.inline_handler(&on_event) {
        Some(previous) => Rc::new(move |event: &mut Event| {
            previous(event);
            wrapped(event);
        }),
        None => wrapped,
    };
    target.set_inline_handler(&on_event, combined);
    true
}
