pub mod comment;
pub mod package;
pub mod reservation;
