use rocket::{http::Status, request::FromRequest, State};

use super::provider::CompletionConnection;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CompletionConnection {
    type Error = ();

    async fn from_request(
        request: &'r rocket::Request<'_>,
    ) -> rocket::request::Outcome<Self, Self::Error> {
        request
            .guard::<&State<CompletionConnection>>()
            .await
            .map(|connection| connection.inner().clone())
            .map_error(|_| (Status::InternalServerError, ()))
    }
}

#[rocket::async_trait]
impl rocket::fairing::Fairing for CompletionConnection {
    fn info(&self) -> rocket::fairing::Info {
        rocket::fairing::Info {
            name: "Chat completion provider",
            kind: rocket::fairing::Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: rocket::Rocket<rocket::Build>) -> rocket::fairing::Result {
        Ok(rocket.manage(self.clone()))
    }
}
