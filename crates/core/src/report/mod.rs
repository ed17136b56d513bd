//! Report builders and renderers
//!
//! Each report is built in two pure steps: `build_*` classifies and
//! normalizes the wire records into a serializable report, `render_*` turns
//! that report into Discord-flavored text. Rendered text always ends with a
//! newline.

pub mod pairings;
pub mod participants;
pub mod standings;

/// Title line framed with loudspeaker emoji.
pub(crate) fn headline(title: &str) -> String {
    format!(":loudspeaker: **{title}** :loudspeaker:\n\n")
}
