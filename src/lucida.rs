//! The `Lucida` facade: one instance of each manager for a document.

use crate::analytics::{AnalyticsProvider, IframeHost, IframeInjector};
use crate::base::config::LucidaConfig;
use crate::cookies::jar::DocumentCookieJar;
use crate::cookies::manager::CookieManager;
use crate::cookies::store::CookieStore;
use crate::events::{self, EventTarget, Handler};
use crate::querystring::QueryStringManager;
use crate::strings::StringManager;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use url::Url;

/// Owns the managers for one document.
///
/// Create it once at startup and pass references to the code that needs it.
pub struct Lucida {
    pub cookie: CookieManager,
    pub string: StringManager,
    pub query_string: QueryStringManager,
    config: LucidaConfig,
    iframes: IframeInjector,
}

impl Lucida {
    /// Default configuration over an existing cookie store.
    pub fn new(store: Arc<dyn CookieStore>, location: &Url) -> Self {
        Self::with_config(store, location, LucidaConfig::default())
    }

    pub fn with_config(store: Arc<dyn CookieStore>, location: &Url, config: LucidaConfig) -> Self {
        Self {
            cookie: CookieManager::with_default_path(store, config.default_cookie_path.clone()),
            string: StringManager::new(config.debug),
            query_string: QueryStringManager::from_location(location),
            iframes: IframeInjector::new(),
            config,
        }
    }

    /// Backed by a fresh [`DocumentCookieJar`] for `location`.
    ///
    /// # Example
    /// ```
    /// use lucida::base::config::LucidaConfig;
    /// use lucida::cookies::manager::CookieOptions;
    /// use lucida::lucida::Lucida;
    /// use url::Url;
    ///
    /// let location = Url::parse("https://shop.example.com/list?page=2").unwrap();
    /// let lucida = Lucida::for_document(&location, LucidaConfig::default());
    ///
    /// assert_eq!(lucida.query_string.get_value("page", None)?.as_deref(), Some("2"));
    /// lucida.cookie.set("cart", "3 items", CookieOptions::new())?;
    /// assert_eq!(lucida.cookie.get("cart").as_deref(), Some("3 items"));
    /// assert_eq!(lucida.string.sanitize("Prêt à porter", true)?, "pret_a_porter");
    /// # Ok::<(), lucida::base::error::LucidaError>(())
    /// ```
    pub fn for_document(location: &Url, config: LucidaConfig) -> Self {
        let jar = Arc::new(DocumentCookieJar::new(location.clone()));
        Self::with_config(jar, location, config)
    }

    pub fn config(&self) -> &LucidaConfig {
        &self.config
    }

    pub fn is_debug(&self) -> bool {
        self.config.debug
    }

    /// See [`events::add_listener`].
    pub fn add_listener(
        &self,
        target: &mut dyn EventTarget,
        event_name: &str,
        handler: Handler,
        bubble: bool,
    ) -> bool {
        events::add_listener(target, event_name, handler, bubble)
    }

    /// Append a linker-decorated iframe for `url` to `container_id` once the
    /// analytics provider is ready. The linker is shared by every call made
    /// through this instance.
    pub fn add_iframe<H: IframeHost + 'static>(
        &self,
        provider: &dyn AnalyticsProvider,
        host: Rc<RefCell<H>>,
        container_id: &str,
        url: &str,
        use_anchor: bool,
    ) {
        self.iframes.inject(provider, host, container_id, url, use_anchor);
    }
}
