//! String helpers: trimming, slug sanitization and global replacement.

pub mod fold;

use crate::base::error::LucidaError;
use fold::Patterns;
use serde_json::Value;

/// Pure string functions. The only state is whether failures are logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringManager {
    debug: bool,
}

impl StringManager {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    pub fn trim_right<'a>(&self, s: &'a str) -> &'a str {
        s.trim_end()
    }

    pub fn trim_left<'a>(&self, s: &'a str) -> &'a str {
        s.trim_start()
    }

    pub fn trim<'a>(&self, s: &'a str) -> &'a str {
        s.trim()
    }

    /// Turn `s` into a lowercase, accent-folded slug.
    ///
    /// Steps: trim, lowercase, whitespace runs to `_`, fold the characters of
    /// [`fold::FOLD_TABLE`]. With `only_word_character`, anything outside
    /// `[a-z0-9-]` also becomes `_` and runs of `_` collapse to one.
    ///
    /// # Example
    /// ```
    /// use lucida::strings::StringManager;
    ///
    /// let strings = StringManager::default();
    /// assert_eq!(strings.sanitize("  Héllo World!  ", false)?, "hello_world!");
    /// assert_eq!(strings.sanitize("  Héllo World!  ", true)?, "hello_world_");
    /// # Ok::<(), lucida::base::error::LucidaError>(())
    /// ```
    pub fn sanitize(&self, s: &str, only_word_character: bool) -> Result<String, LucidaError> {
        let patterns =
            Patterns::get().map_err(|e| self.report(LucidaError::sanitize(e.to_string())))?;

        let lowered = self.trim(s).to_lowercase();
        let collapsed = patterns.whitespace.replace_all(&lowered, " ");
        let mut slug = patterns.whitespace.replace_all(&collapsed, "_").into_owned();

        for (class, base) in &patterns.folds {
            slug = class.replace_all(&slug, *base).into_owned();
        }

        if only_word_character {
            slug = patterns.non_word.replace_all(&slug, "_").into_owned();
            slug = patterns.underscores.replace_all(&slug, "_").into_owned();
        }

        Ok(slug)
    }

    /// [`sanitize`](Self::sanitize) for dynamically typed input.
    ///
    /// Anything but a string yields an empty slug (logged when debug is on)
    /// instead of an error.
    pub fn sanitize_value(
        &self,
        value: &Value,
        only_word_character: bool,
    ) -> Result<String, LucidaError> {
        match value {
            Value::String(s) => self.sanitize(s, only_word_character),
            other => {
                self.report(LucidaError::InvalidInput {
                    kind: type_of(other),
                });
                Ok(String::new())
            }
        }
    }

    /// Replace every non-overlapping occurrence of `token`, left to right.
    ///
    /// A replacement containing `token` is not rescanned. An empty `token`
    /// leaves `s` unchanged.
    pub fn replace_all(&self, s: &str, token: &str, new_token: &str) -> String {
        if token.is_empty() {
            return s.to_string();
        }
        s.replace(token, new_token)
    }

    fn report(&self, err: LucidaError) -> LucidaError {
        if self.debug {
            tracing::error!(error = %err, "sanitize failed");
        }
        err
    }
}

/// Name of the JSON type as `typeof` reports it.
fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
    }
}
