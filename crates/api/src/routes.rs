pub mod booking;
pub mod health;
pub mod meetings;
pub mod notifications;
pub mod profiles;
