use std::rc::Rc;

/// Identifies an event target.
pub type NodeId = usize;

/// A callback bound to an event target.
pub type Handler = Rc<dyn Fn(&mut Event)>;

/// The event object handed to handlers.
///
/// Standard dispatch fills `target`; legacy dispatch only fills
/// `src_element`. Handlers registered through
/// [`add_listener`](crate::events::add_listener) always see `target` set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_type: String,
    pub target: Option<NodeId>,
    pub src_element: Option<NodeId>,
    /// The node the running handler was registered on.
    pub current_target: Option<NodeId>,
    pub default_prevented: bool,
}

impl Event {
    /// An event as a standards-compliant target dispatches it.
    pub fn new(event_type: impl Into<String>, target: NodeId) -> Self {
        Self {
            event_type: event_type.into(),
            target: Some(target),
            src_element: Some(target),
            current_target: None,
            default_prevented: false,
        }
    }

    /// An event as a legacy target dispatches it: no `target`, only
    /// `src_element`.
    pub fn legacy(event_type: impl Into<String>, src_element: NodeId) -> Self {
        Self {
            target: None,
            ..Self::new(event_type, src_element)
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
