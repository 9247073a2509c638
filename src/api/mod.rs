mod routes;

pub use routes::routes;

use log::error;
use rocket::http::Status;
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use rocket::{catch, catchers, Build, Catcher, Request, Rocket};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::MovieError;
use crate::service::MovieService;

/// Error body, `{"detail": "..."}`
#[derive(Debug, Deserialize, Serialize)]
pub struct Detail {
    pub detail: String,
}

impl MovieError {
    pub fn status(&self) -> Status {
        match self {
            MovieError::YearNotFound | MovieError::MovieNotFound { .. } => Status::NotFound,
            MovieError::YearExists => Status::BadRequest,
            _ => Status::InternalServerError,
        }
    }

    /// True for errors caused by the request rather than by the server
    pub fn is_client_error(&self) -> bool {
        self.status().code < 500
    }
}

impl<'r> Responder<'r, 'static> for MovieError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if !self.is_client_error() {
            error!("{} {} failed: {}", request.method(), request.uri(), self);
        }

        status::Custom(
            status,
            Json(Detail {
                detail: self.to_string(),
            }),
        )
        .respond_to(request)
    }
}

#[catch(default)]
fn default_catcher(status: Status, _request: &Request<'_>) -> status::Custom<Json<Detail>> {
    status::Custom(
        status,
        Json(Detail {
            detail: status.reason().unwrap_or("Unknown Error").to_string(),
        }),
    )
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

/// Mount the movie API on `rocket` with `service` as managed state
pub fn mount(rocket: Rocket<Build>, service: MovieService) -> Rocket<Build> {
    rocket
        .manage(service)
        .mount("/movies", routes())
        .register("/", catchers())
}

/// Rocket instance with Rocket's default configuration
pub fn rocket(service: MovieService) -> Rocket<Build> {
    mount(rocket::build(), service)
}

/// Rocket instance bound to the address and port from `config`
pub fn rocket_with_config(config: &AppConfig, service: MovieService) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.address.clone()))
        .merge(("port", config.port));

    mount(rocket::custom(figment), service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status() {
        assert_eq!(MovieError::YearNotFound.status(), Status::NotFound);
        assert_eq!(MovieError::YearExists.status(), Status::BadRequest);
        assert_eq!(
            MovieError::MovieNotFound {
                name: "Dune".to_string()
            }
            .status(),
            Status::NotFound
        );
        assert_eq!(
            MovieError::Selector("bad".to_string()).status(),
            Status::InternalServerError
        );
    }

    #[test]
    fn test_client_errors_follow_status() {
        assert!(MovieError::YearNotFound.is_client_error());
        assert!(MovieError::YearExists.is_client_error());
        assert!(MovieError::MovieNotFound {
            name: "Dune".to_string()
        }
        .is_client_error());
        assert!(!MovieError::Selector("..".to_string()).is_client_error());
        assert!(!MovieError::Storage(std::io::Error::other("disk full")).is_client_error());
    }
}
