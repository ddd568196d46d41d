use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::ports::incoming::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceError, ListExperiencesUseCase,
    UpdateExperienceUseCase,
};
use super::ports::outgoing::{
    ExperienceData, ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
};

pub struct ExperienceService {
    repository: Arc<dyn ExperienceRepository + Send + Sync>,
}

impl ExperienceService {
    pub fn new(repository: Arc<dyn ExperienceRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

fn map_err(e: ExperienceRepositoryError) -> ExperienceError {
    match e {
        ExperienceRepositoryError::NotFound => ExperienceError::NotFound,
        ExperienceRepositoryError::DatabaseError(msg) => ExperienceError::RepositoryError(msg),
    }
}

#[async_trait]
impl ListExperiencesUseCase for ExperienceService {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ExperienceError> {
        self.repository.list_all().await.map_err(map_err)
    }
}

#[async_trait]
impl CreateExperienceUseCase for ExperienceService {
    async fn execute(
        &self,
        owner: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceError> {
        let order_index = self.repository.count_for(owner).await.map_err(map_err)? as i32;
        self.repository
            .insert(owner, data, order_index)
            .await
            .map_err(map_err)
    }
}

#[async_trait]
impl UpdateExperienceUseCase for ExperienceService {
    async fn execute(
        &self,
        owner: Uuid,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceError> {
        self.repository.update(owner, id, data).await.map_err(map_err)
    }
}

#[async_trait]
impl DeleteExperienceUseCase for ExperienceService {
    async fn execute(&self, owner: Uuid, id: Uuid) -> Result<(), ExperienceError> {
        self.repository.delete(owner, id).await.map_err(map_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    struct StubRepo {
        rows: Mutex<Vec<ExperienceRecord>>,
        fail: bool,
    }

    fn record(owner: Uuid, company: &str, order_index: i32) -> ExperienceRecord {
        ExperienceRecord {
            id: Uuid::new_v4(),
            user_id: owner,
            company: company.to_string(),
            position: "Engineer".to_string(),
            duration: "2022 - 2024".to_string(),
            location: None,
            description: "Shipped things".to_string(),
            technologies: vec![],
            experience_type: Some("work".to_string()),
            color: None,
            order_index,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn data(company: &str) -> ExperienceData {
        ExperienceData {
            company: company.to_string(),
            position: "Engineer".to_string(),
            duration: "2024".to_string(),
            location: None,
            description: "Shipped more things".to_string(),
            technologies: vec!["Rust".to_string()],
            experience_type: None,
            color: None,
        }
    }

    #[async_trait]
    impl ExperienceRepository for StubRepo {
        async fn list_all(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
            if self.fail {
                return Err(ExperienceRepositoryError::DatabaseError("down".into()));
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn count_for(&self, owner: Uuid) -> Result<u64, ExperienceRepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.user_id == owner)
                .count() as u64)
        }

        async fn insert(
            &self,
            owner: Uuid,
            data: ExperienceData,
            order_index: i32,
        ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
            let mut rec = record(owner, &data.company, order_index);
            rec.technologies = data.technologies;
            self.rows.lock().unwrap().push(rec.clone());
            Ok(rec)
        }

        async fn update(
            &self,
            owner: Uuid,
            id: Uuid,
            data: ExperienceData,
        ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id && r.user_id == owner)
                .ok_or(ExperienceRepositoryError::NotFound)?;
            row.company = data.company;
            Ok(row.clone())
        }

        async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), ExperienceRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| !(r.id == id && r.user_id == owner));
            if rows.len() == before {
                return Err(ExperienceRepositoryError::NotFound);
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn create_appends_after_existing_rows() {
        let owner = Uuid::new_v4();
        let service = ExperienceService::new(Arc::new(StubRepo {
            rows: Mutex::new(vec![record(owner, "Acme", 0)]),
            fail: false,
        }));

        let created = CreateExperienceUseCase::execute(&service, owner, data("Globex"))
            .await
            .unwrap();
        assert_eq!(created.order_index, 1);
    }

    #[tokio::test]
    async fn list_surfaces_repository_failure() {
        let service = ExperienceService::new(Arc::new(StubRepo {
            rows: Mutex::new(vec![]),
            fail: true,
        }));

        let err = ListExperiencesUseCase::execute(&service).await.unwrap_err();
        assert!(matches!(err, ExperienceError::RepositoryError(_)));
    }

    #[tokio::test]
    async fn delete_of_unknown_row_is_not_found() {
        let service = ExperienceService::new(Arc::new(StubRepo {
            rows: Mutex::new(vec![]),
            fail: false,
        }));

        let err = DeleteExperienceUseCase::execute(&service, Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err, ExperienceError::NotFound);
    }
}
