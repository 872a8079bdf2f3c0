use rocket::get;
use rocket::serde::json::Json;
use serde::Serialize;
use shared::constant::HEALTH_STATUS_MESSAGE;

#[derive(Serialize, Debug)]
pub struct HealthStatus {
    pub status: &'static str,
}

#[get("/health")]
pub fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: HEALTH_STATUS_MESSAGE,
    })
}
