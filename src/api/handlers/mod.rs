pub mod admin;
pub mod availability;
pub mod booking;
pub mod comment;
pub mod health;
pub mod package;
