/*!
 * STJ document handling.
 *
 * - `root`: resolves the wrapped or bare root into one canonical payload
 * - `model`: typed, read-only view of that payload
 */

pub mod model;
pub mod root;

pub use model::{Metadata, Segment, Source, Speaker, StjDocument, Style, Timestamp, Transcript, Word};
pub use root::{resolve_root, DocumentRoot};
