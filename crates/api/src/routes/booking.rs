use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/booking-window",
            get(handlers::booking::booking_window),
        )
        .route(
            "/api/hosts/:host_id/slots",
            get(handlers::booking::get_slots),
        )
        .route("/api/bookings", post(handlers::booking::create_booking))
}
