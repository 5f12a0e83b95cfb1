//! Analytics iframe injection.
//!
//! The analytics provider, its cross-domain linker, and the DOM are external
//! collaborators modelled as traits. [`IframeInjector`] wires them together:
//! once the provider hands over a tracker, the target URL is decorated by the
//! linker and a borderless iframe is appended to a container.

use crate::base::error::LucidaError;
use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Cross-domain linker: appends the tracking parameters to a URL.
pub trait Linker {
    /// With `use_anchor`, parameters go in the fragment instead of the query.
    fn decorate(&self, url: &str, use_anchor: bool) -> String;
}

/// A ready tracker handed out by the provider.
pub trait Tracker {
    fn linker(&self) -> Rc<dyn Linker>;
}

pub type TrackerCallback = Box<dyn FnOnce(&dyn Tracker)>;

/// The analytics command queue. `ready` may run the callback immediately
/// or once the provider has loaded.
pub trait AnalyticsProvider {
    fn ready(&self, callback: TrackerCallback);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iframe {
    pub src: String,
    pub frame_border: u8,
}

impl Iframe {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            frame_border: 0,
        }
    }
}

/// The part of the DOM iframes are appended to.
pub trait IframeHost {
    fn append_iframe(&mut self, container_id: &str, iframe: Iframe) -> Result<(), LucidaError>;
}

/// An [`IframeHost`] holding named containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    containers: HashMap<String, Vec<Iframe>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.entry(id.into()).or_default();
        self
    }

    /// Iframes in container `id`, in append order.
    pub fn iframes(&self, id: &str) -> Option<&[Iframe]> {
        self.containers.get(id).map(Vec::as_slice)
    }
}

impl IframeHost for Document {
    fn append_iframe(&mut self, container_id: &str, iframe: Iframe) -> Result<(), LucidaError> {
        self.containers
            .get_mut(container_id)
            .ok_or_else(|| LucidaError::container_not_found(container_id))?
            .push(iframe);
        Ok(())
    }
}

/// Injects decorated iframes, creating the linker only once.
#[derive(Default)]
pub struct IframeInjector {
    linker: Rc<OnceCell<Rc<dyn Linker>>>,
}

impl IframeInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tracker has already supplied the linker.
    pub fn has_linker(&self) -> bool {
        self.linker.get().is_some()
    }

    /// Queue the injection of `url` into `container_id`.
    ///
    /// Runs whenever `provider` calls back. Failures at that point cannot
    /// reach the caller and are logged.
    pub fn inject<H: IframeHost + 'static>(
        &self,
        provider: &dyn AnalyticsProvider,
        host: Rc<RefCell<H>>,
        container_id: &str,
        url: &str,
        use_anchor: bool,
    ) {
        let linker = Rc::clone(&self.linker);
        let container_id = container_id.to_string();
        let url = url.to_string();

        provider.ready(Box::new(move |tracker: &dyn Tracker| {
            let linker = linker.get_or_init(|| tracker.linker());
            let iframe = Iframe::new(linker.decorate(&url, use_anchor));
            tracing::debug!(container = %container_id, src = %iframe.src, "injecting iframe");

            if let Err(e) = host.borrow_mut().append_iframe(&container_id, iframe) {
                tracing::warn!(container = %container_id, error = %e, "iframe injection failed");
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct ParamLinker;

    impl Linker for ParamLinker {
        fn decorate(&self, url: &str, use_anchor: bool) -> String {
            let sep = if use_anchor {
                '#'
            } else if url.contains('?') {
                '&'
            } else {
                '?'
            };
            format!("{}{}_gl=abc", url, sep)
        }
    }

    struct CountingTracker {
        created: Rc<Cell<usize>>,
    }

    impl Tracker for CountingTracker {
        fn linker(&self) -> Rc<dyn Linker> {
            self.created.set(self.created.get() + 1);
            Rc::new(ParamLinker)
        }
    }

    /// Runs callbacks immediately.
    struct ImmediateProvider {
        created: Rc<Cell<usize>>,
    }

    impl AnalyticsProvider for ImmediateProvider {
        fn ready(&self, callback: TrackerCallback) {
            callback(&CountingTracker {
                created: Rc::clone(&self.created),
            });
        }
    }

    /// Holds callbacks until `flush`.
    #[derive(Default)]
    struct QueuedProvider {
        queue: RefCell<Vec<TrackerCallback>>,
    }

    impl QueuedProvider {
        fn flush(&self) {
            let tracker = CountingTracker {
                created: Rc::new(Cell::new(0)),
            };
            for callback in self.queue.borrow_mut().drain(..) {
                callback(&tracker);
            }
        }
    }

    impl AnalyticsProvider for QueuedProvider {
        fn ready(&self, callback: TrackerCallback) {
            self.queue.borrow_mut().push(callback);
        }
    }

    #[test]
    fn test_inject_decorates_and_appends() {
        let created = Rc::new(Cell::new(0));
        let provider = ImmediateProvider {
            created: Rc::clone(&created),
        };
        let document = Rc::new(RefCell::new(Document::new().with_container("frames")));
        let injector = IframeInjector::new();

        injector.inject(&provider, Rc::clone(&document), "frames", "https://a.example/x", false);
        injector.inject(&provider, Rc::clone(&document), "frames", "https://a.example/y?q=1", true);

        let document = document.borrow();
        let iframes = document.iframes("frames").unwrap();
        assert_eq!(
            iframes,
            [
                Iframe::new("https://a.example/x?_gl=abc"),
                Iframe::new("https://a.example/y?q=1#_gl=abc"),
            ]
        );
        assert!(iframes.iter().all(|f| f.frame_border == 0));
        assert_eq!(created.get(), 1);
        assert!(injector.has_linker());
    }

    #[test]
    fn test_missing_container_is_not_fatal() {
        let provider = ImmediateProvider {
            created: Rc::new(Cell::new(0)),
        };
        let document = Rc::new(RefCell::new(Document::new()));
        IframeInjector::new().inject(
            &provider,
            Rc::clone(&document),
            "nope",
            "https://a.example",
            false,
        );
        assert_eq!(document.borrow().iframes("nope"), None);
    }

    #[test]
    fn test_deferred_provider() {
        let provider = QueuedProvider::default();
        let document = Rc::new(RefCell::new(Document::new().with_container("frames")));
        let injector = IframeInjector::new();

        injector.inject(&provider, Rc::clone(&document), "frames", "https://a.example", false);
        assert_eq!(document.borrow().iframes("frames").unwrap().len(), 0);
        assert!(!injector.has_linker());

        provider.flush();
        assert_eq!(document.borrow().iframes("frames").unwrap().len(), 1);
    }

    #[test]
    fn test_document_append_unknown_container() {
        let mut document = Document::new();
        assert_eq!(
            document.append_iframe("x", Iframe::new("about:blank")),
            Err(LucidaError::container_not_found("x"))
        );
    }
}
