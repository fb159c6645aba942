mod summary;
pub mod views;

pub use summary::{format_pct, hab_assessment_view, hazard_index};
