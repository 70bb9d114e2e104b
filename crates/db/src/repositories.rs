pub mod meeting;
pub mod notification;
