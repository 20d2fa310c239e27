//! Release feed records and selection rules.
//!
//! - [`entities::ReleaseRecord`] - one published release and its assets
//! - [`selector::ReleaseSelector`] - picks the releases each track installs

pub mod entities;
pub mod selector;
