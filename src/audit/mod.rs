pub mod dtos;
pub mod handlers;
pub mod orchestrator;

pub use orchestrator::{Auditor, ads_txt_url, parse_target};
