//! Shortcut marker handling for labels.
//!
//! Labels mark their keyboard shortcut with `&` (`"&Cancel"` binds Alt+C).
//! A doubled marker `&&` stands for a literal ampersand.

/// Character marking the shortcut key in a label.
pub const SHORTCUT_MARKER: char = '&';

/// Remove shortcut markers, keeping escaped literal ampersands.
///
/// ```
/// use arbor_widget::shortcut::clean_shortcut_string;
///
/// assert_eq!(clean_shortcut_string("&Save && Quit"), "Save & Quit");
/// ```
pub fn clean_shortcut_string(label: &str) -> String {
    let mut cleaned = String::with_capacity(label.len());
    let mut chars = label.chars().peekable();

    while let Some(c) = chars.next() {
        if c != SHORTCUT_MARKER {
            cleaned.push(c);
        } else if chars.peek() == Some(&SHORTCUT_MARKER) {
            chars.next();
            cleaned.push(SHORTCUT_MARKER);
        }
    }

    cleaned
}
