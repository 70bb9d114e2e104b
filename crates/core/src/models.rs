pub mod meeting;
pub mod notification;
pub mod time_slot;

/// Numeric social-network account identifier (FID).
pub type UserId = u64;
