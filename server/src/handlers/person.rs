use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::domain::types::Person;
use crate::error::HolocronServiceError;
use crate::handlers::{OkEnvelope, ok};
use crate::state::AppState;
use crate::usecase::person::{GetPeopleUseCase, GetPersonUseCase};

#[derive(Serialize)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub height: String,
    pub hair_color: String,
    pub eye_color: String,
    pub birth_year: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        PersonResponse {
            id: person.id,
            name: person.name,
            gender: person.gender,
            height: person.height,
            hair_color: person.hair_color,
            eye_color: person.eye_color,
            birth_year: person.birth_year,
        }
    }
}

// ── GET /people ──────────────────────────────────────────────────────────────

pub async fn get_people(
    State(state): State<AppState>,
) -> Result<Json<OkEnvelope<Vec<PersonResponse>>>, HolocronServiceError> {
    let uc = GetPeopleUseCase {
        repo: state.person_repo(),
    };
    let people = uc.execute().await?;
    Ok(ok(people.into_iter().map(PersonResponse::from).collect()))
}

// ── GET /people/{id} ─────────────────────────────────────────────────────────

pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<Json<OkEnvelope<PersonResponse>>, HolocronServiceError> {
    let uc = GetPersonUseCase {
        repo: state.person_repo(),
    };
    let person = uc.execute(person_id).await?;
    Ok(ok(PersonResponse::from(person)))
}
