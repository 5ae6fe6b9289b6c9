//! Backend services for the activity directory.
//!
//! The directory lives in process memory only. [`ActivityService`] is the
//! seam handlers talk to; [`ActivityServiceInMemory`] is the implementation the
//! server runs with.

pub mod activities;

pub use activities::*;
