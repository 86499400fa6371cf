#[tokio::main]
async fn main() {
    garden_booking_backend::run().await;
}
