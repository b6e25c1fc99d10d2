/// Read-only view of the pieces of an inbound request the detection logic
/// needs.  The host owns the real request object; this borrows from it for
/// the duration of one resolution call and is never stored.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    /// Request path, e.g. `/api/dog` or `/`.
    pub path: &'a str,
    /// Raw User-Agent header text; may be empty or malformed.
    pub user_agent: &'a str,
}

impl<'a> RequestContext<'a> {
    pub fn new(path: &'a str, user_agent: &'a str) -> Self {
        Self { path, user_agent }
    }
}
