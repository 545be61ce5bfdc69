//! Custom request extractors.

mod list_params;
mod validated_json;

pub use list_params::ListParams;
pub use validated_json::ValidatedJson;
