use rocket::serde::json::Json;
use rocket::{delete, get, post, put, routes, Route, State};

use crate::error::MovieError;
use crate::model::{MovieCollection, MovieRecord};
use crate::service::MovieService;

#[get("/")]
async fn get_movies(service: &State<MovieService>) -> Result<Json<MovieCollection>, MovieError> {
    service.list_all().await.map(Json)
}

#[get("/<year>")]
async fn get_movies_by_year(
    service: &State<MovieService>,
    year: i32,
) -> Result<Json<Vec<MovieRecord>>, MovieError> {
    service.list_year(year).await.map(Json)
}

#[post("/<year>")]
async fn add_movies_by_year(
    service: &State<MovieService>,
    year: i32,
) -> Result<Json<Vec<MovieRecord>>, MovieError> {
    service.add_year(year).await.map(Json)
}

#[put("/<year>")]
async fn update_movies_by_year(
    service: &State<MovieService>,
    year: i32,
) -> Result<Json<Vec<MovieRecord>>, MovieError> {
    service.replace_year(year).await.map(Json)
}

#[delete("/<year>/<name>")]
async fn delete_movie(
    service: &State<MovieService>,
    year: i32,
    name: &str,
) -> Result<Json<MovieRecord>, MovieError> {
    service.delete_movie(year, name).await.map(Json)
}

pub fn routes() -> Vec<Route> {
    routes![
        get_movies,
        get_movies_by_year,
        add_movies_by_year,
        update_movies_by_year,
        delete_movie
    ]
}
