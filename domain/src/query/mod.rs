//! Query input: the editable draft, the submitted query, and image media.

pub mod draft;
pub mod media;
#[allow(clippy::module_inception)]
pub mod query;
