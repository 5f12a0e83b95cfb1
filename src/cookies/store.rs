/// The ambient cookie store of a document (`document.cookie`).
///
/// Reads return every cookie visible to the document as one `"; "`-joined
/// string of `name=value` pairs. Writes take a single
/// `name=value; attr=...` line and, like the browser setter, never fail:
/// a line the store refuses is simply not stored.
pub trait CookieStore: Send + Sync {
    fn cookie_string(&self) -> String;

    fn set_cookie_string(&self, line: &str);
}
