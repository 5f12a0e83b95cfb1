use crate::events::event::{Event, Handler, NodeId};
use std::collections::HashMap;

/// Outcome of asking a target to register a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Bound,
    /// The target has the capability but declined the handler.
    Refused,
    /// The target lacks the capability.
    Unsupported,
}

/// Something handlers can be bound to.
///
/// Targets expose up to three registration styles. The W3C
/// `addEventListener` and the `attachEvent` styles are optional; the inline
/// `on<event>` handler slot is always present.
pub trait EventTarget {
    fn node_id(&self) -> NodeId;

    /// W3C style registration, keyed by bare event type (`"click"`).
    fn add_event_listener(
        &mut self,
        _event_type: &str,
        _handler: Handler,
        _use_capture: bool,
    ) -> Registration {
        Registration::Unsupported
    }

    /// `attachEvent` style registration, keyed by `"on" + type`.
    fn attach_event(&mut self, _on_event: &str, _handler: Handler) -> Registration {
        Registration::Unsupported
    }

    /// Current inline handler for `"on" + type`.
    fn inline_handler(&self, on_event: &str) -> Option<Handler>;

    fn set_inline_handler(&mut self, on_event: &str, handler: Handler);
}

/// Which registration styles an [`Element`] supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerModel {
    /// `addEventListener`, plus inline handlers.
    Standard,
    /// `attachEvent`, plus inline handlers.
    Attach,
    /// Inline `on<event>` handlers only.
    InlineOnly,
}

#[derive(Clone)]
struct Listener {
    capture: bool,
    handler: Handler,
}

#[derive(Default, Clone)]
struct ListenerStore {
    map: HashMap<String, Vec<Listener>>,
}

impl ListenerStore {
    fn add(&mut self, event: &str, listener: Listener) {
        self.map.entry(event.to_string()).or_default().push(listener);
    }

    fn get(&self, event: &str, capture: bool) -> Vec<Handler> {
        self.map
            .get(event)
            .map(|listeners| {
                listeners
                    .iter()
                    .filter(|listener| listener.capture == capture)
                    .map(|listener| listener.handler.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }
}

/// A single element with one of the three listener models.
pub struct Element {
    id: NodeId,
    model: ListenerModel,
    listeners: ListenerStore,
    inline: HashMap<String, Handler>,
}

impl Element {
    pub fn new(id: NodeId, model: ListenerModel) -> Self {
        Self {
            id,
            model,
            listeners: ListenerStore::default(),
            inline: HashMap::new(),
        }
    }

    pub fn model(&self) -> ListenerModel {
        self.model
    }

    /// Handlers registered through `addEventListener` or `attachEvent`.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Fire `event_type` on this element and return the event after every
    /// handler ran.
    ///
    /// Standard elements run capture listeners, then bubble listeners.
    /// Attach elements run their attached handlers and dispatch a legacy
    /// event without `target`. The inline handler runs last.
    pub fn dispatch(&self, event_type: &str) -> Event {
        let on_event = format!("on{}", event_type);
        let mut event = match self.model {
            ListenerModel::Standard => Event::new(event_type, self.id),
            ListenerModel::Attach | ListenerModel::InlineOnly => {
                Event::legacy(event_type, self.id)
            }
        };

        let registered = match self.model {
            ListenerModel::Standard => {
                let mut handlers = self.listeners.get(event_type, true);
                handlers.extend(self.listeners.get(event_type, false));
                handlers
            }
            ListenerModel::Attach => self.listeners.get(&on_event, false),
            ListenerModel::InlineOnly => Vec::new(),
        };

        for handler in registered {
            handler(&mut event);
        }
        if let Some(handler) = self.inline.get(&on_event) {
            handler(&mut event);
        }

        event
    }
}

impl EventTarget for Element {
    fn node_id(&self) -> NodeId {
        self.id
    }

    fn add_event_listener(
        &mut self,
        event_type: &str,
        handler: Handler,
        use_capture: bool,
    ) -> Registration {
        if self.model != ListenerModel::Standard {
            return Registration::Unsupported;
        }
        self.listeners.add(
            event_type,
            Listener {
                capture: use_capture,
                handler,
            },
        );
        Registration::Bound
    }

    fn attach_event(&mut self, on_event: &str, handler: Handler) -> Registration {
        if self.model != ListenerModel::Attach {
            return Registration::Unsupported;
        }
        if !on_event.starts_with("on") {
            return Registration::Refused;
        }
        self.listeners.add(
            on_event,
            Listener {
                capture: false,
                handler,
            },
        );
        Registration::Bound
    }

    fn inline_handler(&self, on_event: &str) -> Option<Handler> {
        self.inline.get(on_event).cloned()
    }

    fn set_inline_handler(&mut self, on_event: &str, handler: Handler) {
        self.inline.insert(on_event.to_string(), handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(log: &Rc<RefCell<Vec<String>>>, label: &str) -> Handler {
        let log = Rc::clone(log);
        let label = label.to_string();
        Rc::new(move |_event: &mut Event| log.borrow_mut().push(label.clone()))
    }

    #[test]
    fn test_standard_capture_runs_before_bubble() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut element = Element::new(1, ListenerModel::Standard);
        element.add_event_listener("click", recorder(&log, "bubble"), false);
        element.add_event_listener("click", recorder(&log, "capture"), true);
        element.set_inline_handler("onclick", recorder(&log, "inline"));

        let event = element.dispatch("click");
        assert_eq!(*log.borrow(), ["capture", "bubble", "inline"]);
        assert_eq!(event.target, Some(1));
    }

    #[test]
    fn test_models_reject_foreign_styles() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut standard = Element::new(1, ListenerModel::Standard);
        let mut attach = Element::new(2, ListenerModel::Attach);
        let mut inline = Element::new(3, ListenerModel::InlineOnly);

        assert_eq!(
            standard.attach_event("onclick", recorder(&log, "x")),
            Registration::Unsupported
        );
        assert_eq!(
            attach.add_event_listener("click", recorder(&log, "x"), false),
            Registration::Unsupported
        );
        assert_eq!(
            inline.add_event_listener("click", recorder(&log, "x"), false),
            Registration::Unsupported
        );
        assert_eq!(
            inline.attach_event("onclick", recorder(&log, "x")),
            Registration::Unsupported
        );
    }

    #[test]
    fn test_attach_dispatch_is_legacy() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut element = Element::new(7, ListenerModel::Attach);
        assert_eq!(
            element.attach_event("onload", recorder(&log, "attached")),
            Registration::Bound
        );
        assert_eq!(
            element.attach_event("load", recorder(&log, "bad")),
            Registration::Refused
        );

        let event = element.dispatch("load");
        assert_eq!(*log.borrow(), ["attached"]);
        assert_eq!(event.target, None);
        assert_eq!(event.src_element, Some(7));
    }

    #[test]
    fn test_other_event_types_do_not_fire() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut element = Element::new(1, ListenerModel::Standard);
        element.add_event_listener("click", recorder(&log, "click"), false);
        element.dispatch("keyup");
        assert!(log.borrow().is_empty());
        assert_eq!(element.listener_count(), 1);
    }
}
