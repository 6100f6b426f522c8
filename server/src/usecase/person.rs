use crate::domain::repository::PersonRepository;
use crate::domain::types::Person;
use crate::error::HolocronServiceError;

// ── GetPeople ────────────────────────────────────────────────────────────────

pub struct GetPeopleUseCase<R: PersonRepository> {
    pub repo: R,
}

impl<R: PersonRepository> GetPeopleUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Person>, HolocronServiceError> {
        self.repo.list().await
    }
}

// ── GetPerson ────────────────────────────────────────────────────────────────

pub struct GetPersonUseCase<R: PersonRepository> {
    pub repo: R,
}

impl<R: PersonRepository> GetPersonUseCase<R> {
    pub async fn execute(&self, person_id: i32) -> Result<Person, HolocronServiceError> {
        self.repo
            .find_by_id(person_id)
            .await?
            .ok_or(HolocronServiceError::PersonNotFound(person_id))
    }
}
