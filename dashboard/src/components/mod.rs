//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod activity_list;
mod header;
mod signup_form;
mod toast;

pub use activity_list::ActivityList;
pub use header::Header;
pub use signup_form::SignupForm;
pub use toast::Toast;
