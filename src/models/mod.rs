//! Data models for the FoodBridge application.
//!
//! These models match the frontend TypeScript interfaces for seamless interoperability.

mod donation;
mod ngo_request;

pub use donation::*;
pub use ngo_request::*;
