//! Query-string parsing.
//!
//! [`QueryStringManager`] captures the document's search string (`?a=b&c=d`)
//! at construction and parses it, or any string passed in, into a
//! [`QueryMap`].

use crate::base::error::LucidaError;
use crate::encoding::decode_pairs;
use std::collections::HashMap;
use url::Url;

/// Parameter name to decoded value.
pub type QueryMap = HashMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryStringManager {
    query: String,
}

impl QueryStringManager {
    /// Use `search` (with or without its leading `?`) as the default input.
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            query: search.into(),
        }
    }

    /// Capture the search string of `location` the way `location.search`
    /// reports it: `"?..."`, or empty when the query is missing or empty.
    pub fn from_location(location: &Url) -> Self {
        let query = match location.query() {
            Some(q) if !q.is_empty() => format!("?{}", q),
            _ => String::new(),
        };
        Self::new(query)
    }

    /// The captured default input.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Parse `query_string`, or the captured default when `None`.
    ///
    /// One leading `?` is stripped. Keys are kept as written; values are
    /// decoded with `decodeURIComponent` semantics.
    ///
    /// # Example
    /// ```
    /// use lucida::querystring::QueryStringManager;
    ///
    /// let qs = QueryStringManager::default();
    /// let object = qs.to_object(Some("?x=1&y=hello%20world"))?;
    /// assert_eq!(object["x"], "1");
    /// assert_eq!(object["y"], "hello world");
    /// # Ok::<(), lucida::base::error::LucidaError>(())
    /// ```
    pub fn to_object(&self, query_string: Option<&str>) -> Result<QueryMap, LucidaError> {
        let query_string = query_string.unwrap_or(&self.query);
        let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
        decode_pairs(query_string, "&")
    }

    /// Value of `param`, or `None` when it is absent.
    pub fn get_value(
        &self,
        param: &str,
        query_string: Option<&str>,
    ) -> Result<Option<String>, LucidaError> {
        Ok(self.to_object(query_string)?.remove(param))
    }
}
