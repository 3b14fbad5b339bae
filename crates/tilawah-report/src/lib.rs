//! tilawah-report - Results views and report rendering.
//!
//! Everything a reciter or examiner reads about one evaluation is built from
//! a [`ResultsView`]: the JSON served over HTTP, the self-contained HTML
//! report, and the plain-text summary printed by the CLI.

pub mod html;
pub mod text;
pub mod view;

pub use view::{report_filename, ResultsView, VerseView};
