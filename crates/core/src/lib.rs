//! # SlotCast Core
//!
//! Domain types and the booking workflow for SlotCast. Storage, the social
//! hub and the HTTP surface live in sibling crates and plug in through the
//! traits in [`ports`].

pub mod calendar;
pub mod errors;
pub mod mock;
pub mod models;
pub mod ports;
pub mod window;
pub mod workflow;
