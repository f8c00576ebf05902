use serde_json::Value;

/// State shared by every step of one top-level match.
#[derive(Debug, Clone, Copy)]
pub struct MatchCtx<'a> {
    /// The document passed to the top-level call. References resolve against it.
    pub root: &'a Value,
}

impl<'a> MatchCtx<'a> {
    pub fn new(root: &'a Value) -> Self {
        MatchCtx { root }
    }
}
