pub mod app_state;
pub mod focus;
pub mod submission;
pub mod validation;

pub use app_state::AppState;
