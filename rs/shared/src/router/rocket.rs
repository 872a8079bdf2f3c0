use rocket::serde::json::{json, Json, Value};
use rocket::{catch, catchers, http::Status, options, routes, Build, Request, Rocket, Route};

use crate::connections::openai::provider::CompletionConnection;

use super::config::ServerConfig;
use super::cors::Cors;

pub fn build_rocket(
    config: &ServerConfig,
    completion: CompletionConnection,
    routes: Vec<Route>,
) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.address))
        .merge(("port", config.port));
    rocket::custom(figment)
        .attach(completion)
        .attach(Cors)
        .mount("/", routes)
        .mount("/", routes![preflight])
        .register("/", catchers![not_found, internal_error, default_error])
}

// browsers send this before a cross-origin POST with a JSON body
#[options("/<_..>")]
fn preflight() -> Status {
    Status::NoContent
}

#[catch(404)]
fn not_found(request: &Request) -> Json<Value> {
    Json(json!({
        "error": format!("Route {} {} not found", request.method(), request.uri())
    }))
}

#[catch(500)]
fn internal_error() -> Json<Value> {
    Json(json!({ "error": "Internal Server Error. Please try again later." }))
}

#[catch(default)]
fn default_error(status: Status, _request: &Request) -> Json<Value> {
    Json(json!({ "error": status.reason_lossy() }))
}
