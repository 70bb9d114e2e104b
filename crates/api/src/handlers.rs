pub mod booking;
pub mod meetings;
pub mod notifications;
pub mod profiles;
