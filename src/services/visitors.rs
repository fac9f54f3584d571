//! Visitor check-in service

use std::sync::Arc;

use validator::Validate;

use crate::{error::AppResult, models::NewVisitor, store::RecordStore};

pub struct VisitorsService {
    store: Arc<dyn RecordStore>,
}

impl VisitorsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validate and record a check-in. Geolocation is opportunistic:
    /// missing coordinates never block the insert. On failure the
    /// caller keeps the submitted fields so the visitor can retry.
    pub async fn check_in(&self, visitor: NewVisitor) -> AppResult<()> {
        visitor.validate()?;

        self.store.insert_record(&visitor).await?;
        tracing::info!(
            name = %visitor.name,
            college = %visitor.college,
            located = visitor.latitude.is_some() && visitor.longitude.is_some(),
            "visitor checked in"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::store::MockRecordStore;

    fn visitor() -> NewVisitor {
        NewVisitor {
            name: "Amy".into(),
            mobile_number: "0123456789".into(),
            college: "SIT".into(),
            person_to_meet: "Dr. Rao".into(),
            purpose_of_visit: "Campus tour".into(),
            comment_feedback: None,
            latitude: None,
            longitude: None,
        }
    }

    #[tokio::test]
    async fn check_in_without_coordinates_still_inserts() {
        let mut store = MockRecordStore::new();
        store
            .expect_insert_record()
            .times(1)
            .returning(|_| Ok(()));
        let service = VisitorsService::new(Arc::new(store));
        service.check_in(visitor()).await.unwrap();
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_the_store() {
        let mut store = MockRecordStore::new();
        store.expect_insert_record().times(0);
        let service = VisitorsService::new(Arc::new(store));

        let mut bad = visitor();
        bad.mobile_number = "123".into();
        assert!(matches!(
            service.check_in(bad).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn store_failure_surfaces_to_the_caller() {
        let mut store = MockRecordStore::new();
        store
            .expect_insert_record()
            .returning(|_| Err(AppError::Store("insert failed".into())));
        let service = VisitorsService::new(Arc::new(store));
        assert!(service.check_in(visitor()).await.is_err());
    }
}
