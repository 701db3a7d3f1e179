/// Tunables for a [`WidgetTree`](crate::WidgetTree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    /// Scan the parent's store for the child before every insertion.
    ///
    /// [`set_parent`](crate::WidgetTree::set_parent) refuses a repeated parent
    /// from the child's back-reference either way; turning this off only skips
    /// the linear scan.
    pub check_duplicate_children: bool,
    /// Debug labels longer than this many characters are cut and get `...` appended.
    pub max_debug_label_len: usize,
    /// Spaces per tree level in dumps.
    pub dump_indent_width: usize,
    /// Append the backend handle to every widget description, not just dump lines.
    pub log_backend_handles: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            check_duplicate_children: true,
            max_debug_label_len: 50,
            dump_indent_width: 4,
            log_backend_handles: false,
        }
    }
}
