//! Entity CRUD routes. Each entity gets POST/GET on its collection (with and
//! without trailing slash) and GET/PUT/DELETE on `/:id`.

use crate::handlers::entity::{create, delete, list, read, update};
use crate::handlers::links::{educators_of_institution, institutions_of_educator, link, unlink};
use crate::handlers::student_answer::list_by_device;
use crate::model::{AnswerOption, Educator, Entity, Institution, Lecture, Question, StudentAnswer};
use crate::state::AppState;
use axum::{routing::get, Router};

fn crud_routes<E: Entity>() -> Router<AppState> {
    let collection = format!("/{}", E::PATH);
    Router::new()
        .route(&collection, get(list::<E>).post(create::<E>))
        .route(&format!("{}/", collection), get(list::<E>).post(create::<E>))
        .route(
            &format!("{}/:id", collection),
            get(read::<E>).put(update::<E>).delete(delete::<E>),
        )
}

pub fn entity_routes() -> Router<AppState> {
    Router::new()
        .merge(crud_routes::<Institution>())
        .merge(crud_routes::<Educator>())
        .merge(crud_routes::<Lecture>())
        .merge(crud_routes::<Question>())
        .merge(crud_routes::<AnswerOption>())
        .merge(crud_routes::<StudentAnswer>())
        .route("/student-answers/device/:device_id", get(list_by_device))
        .route("/institutions/:id/educators", get(educators_of_institution))
        .route("/educators/:id/institutions", get(institutions_of_educator))
        .route(
            "/educators/:id/institutions/:institution_id",
            axum::routing::put(link).delete(unlink),
        )
}
