//! # SlotCast Hub
//!
//! Client for the social hub that owns user profiles, and a notification
//! sink decorator that mirrors booking notifications as casts.

pub mod client;
pub mod config;
pub mod models;
pub mod sink;

pub use client::{HubClient, HubError};
pub use config::HubConfig;
pub use sink::CastingNotificationSink;
