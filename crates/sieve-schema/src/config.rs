/// How a container's `errmsg` treats the failure of a nested value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrmsgPolicy {
    /// The container's `errmsg` replaces the nested message entirely.
    #[default]
    Replace,
    /// The nested message is kept after the container's `errmsg`:
    /// `"<errmsg>: <nested message>"`.
    Prefix,
}

/// Validation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path label of the root value in diagnostics.
    pub root_label: String,
    pub nested_errmsg: ErrmsgPolicy,
    /// Maximum nesting depth of validated values; `None` is unbounded.
    pub max_depth: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_label: "Top-level".to_string(),
            nested_errmsg: ErrmsgPolicy::Replace,
            max_depth: None,
        }
    }
}
