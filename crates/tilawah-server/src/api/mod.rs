//! HTTP API handlers

pub mod catalogue;
pub mod error;
pub mod health;
pub mod lookup;
pub mod profile;
pub mod results;

pub use catalogue::get_catalogue;
pub use error::ApiError;
pub use health::health_routes;
pub use lookup::lookup_code;
pub use profile::bind_profile;
pub use results::{download_results, get_results, results_page};
