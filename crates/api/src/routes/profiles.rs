use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/profiles", get(handlers::profiles::search_profiles))
        .route("/api/profiles/:fid", get(handlers::profiles::get_profile))
}
