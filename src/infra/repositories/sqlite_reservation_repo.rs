use crate::domain::models::reservation::{Reservation, STATUS_CONFIRMED};
use crate::domain::ports::ReservationRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

pub struct SqliteReservationRepo {
    pool: SqlitePool,
}

impl SqliteReservationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepo {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (id, package_type, space, guest_count, event_date, time_slot, extras, total_price, deposit_paid, customer_name, customer_email, customer_phone, notes, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&reservation.id).bind(&reservation.package_type).bind(&reservation.space).bind(reservation.guest_count)
            .bind(reservation.event_date).bind(&reservation.time_slot).bind(&reservation.extras).bind(reservation.total_price)
            .bind(reservation.deposit_paid).bind(&reservation.customer_name).bind(&reservation.customer_email)
            .bind(&reservation.customer_phone).bind(&reservation.notes).bind(&reservation.status).bind(reservation.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE event_date = ? ORDER BY time_slot ASC",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET package_type=?, space=?, guest_count=?, event_date=?, time_slot=?, extras=?, total_price=?, deposit_paid=?, customer_name=?, customer_email=?, customer_phone=?, notes=?, status=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&reservation.package_type).bind(&reservation.space).bind(reservation.guest_count)
            .bind(reservation.event_date).bind(&reservation.time_slot).bind(&reservation.extras)
            .bind(reservation.total_price).bind(reservation.deposit_paid).bind(&reservation.customer_name)
            .bind(&reservation.customer_email).bind(&reservation.customer_phone).bind(&reservation.notes)
            .bind(&reservation.status).bind(&reservation.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reservation not found".into()));
        }
        Ok(())
    }

    async fn is_slot_occupied(&self, date: NaiveDate, slot: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            "SELECT COUNT(*) as count FROM reservations WHERE event_date = ? AND time_slot = ? AND status = ?",
        )
        .bind(date)
        .bind(slot)
        .bind(STATUS_CONFIRMED)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count") > 0)
    }
}
