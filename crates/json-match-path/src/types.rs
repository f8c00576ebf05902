//! Path AST.

/// A single selector inside a path segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Member access: `.name`, `['name']`
    Name(String),
    /// Array element access: `[0]`, `[-1]`
    Index(isize),
    /// Array slice: `[start:end:step]`
    Slice {
        start: Option<isize>,
        end: Option<isize>,
        step: Option<isize>,
    },
    /// Every child: `.*`, `[*]`
    Wildcard,
}

/// One step of a path, holding one or more selectors (`['a','b']` has two).
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub selectors: Vec<Selector>,
    /// Recursive descent (`..`).
    pub recursive: bool,
}

impl PathSegment {
    pub fn new(selectors: Vec<Selector>, recursive: bool) -> Self {
        Self {
            selectors,
            recursive,
        }
    }
}

/// A parsed path expression, rooted at `$`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonPath {
    pub segments: Vec<PathSegment>,
}

impl JsonPath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}
