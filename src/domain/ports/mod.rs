use crate::domain::models::{comment::Comment, reservation::Reservation};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError>;
    /// All reservations, newest first.
    async fn list(&self) -> Result<Vec<Reservation>, AppError>;
    /// Every reservation on the day regardless of status (admin day view).
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>, AppError>;
    async fn update(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    /// Confirmed reservations only; the optimistic re-check before a write.
    async fn is_slot_occupied(&self, date: NaiveDate, slot: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: &Comment) -> Result<Comment, AppError>;
    /// All comments, newest first.
    async fn list(&self) -> Result<Vec<Comment>, AppError>;
    async fn update_text(&self, id: &str, text: &str) -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
