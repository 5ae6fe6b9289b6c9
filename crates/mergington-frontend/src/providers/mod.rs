//! Services shared by the landing page components.

pub mod api;
