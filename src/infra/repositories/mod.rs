pub mod postgres_comment_repo;
pub mod postgres_reservation_repo;
pub mod sqlite_comment_repo;
pub mod sqlite_reservation_repo;
