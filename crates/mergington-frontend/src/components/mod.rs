//! UI components of the activities landing page.

pub mod activity_card;
pub mod signup_form;
pub mod status_banner;

pub use activity_card::*;
pub use signup_form::*;
pub use status_banner::*;
