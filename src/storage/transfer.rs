//! Submission handoff between the coordinator, the store and navigation

use super::{StorageError, TransferStore};
use crate::state::{ErrorMap, FormCoordinator, Navigator, SubmittedRecord, View};

/// Result of a submit attempt that did not fail on storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was stored and the view did not change
    Rejected(ErrorMap),
    /// The record was stored and the confirmation view is active
    Transferred(SubmittedRecord),
}

/// Submit the form, store the record, then show the confirmation view.
///
/// A storage failure leaves the view unchanged and is returned to the caller.
pub async fn submit_and_transfer<S, N>(
    coordinator: &mut FormCoordinator,
    store: &S,
    navigator: &mut N,
) -> Result<SubmitOutcome, StorageError>
where
    S: TransferStore + ?Sized,
    N: Navigator + ?Sized,
{
    let record = match coordinator.submit() {
        Ok(record) => record,
        Err(errors) => {
            tracing::info!(error_count = errors.len(), "submission rejected");
            return Ok(SubmitOutcome::Rejected(errors));
        }
    };

    store.save(&record).await?;
    tracing::info!("submission stored");
    navigator.go_to(View::Confirmation);
    Ok(SubmitOutcome::Transferred(record))
}

/// Fetch the record for the confirmation view, sending the user back to the
/// entry view when nothing was submitted
pub async fn load_confirmation<S, N>(
    store: &S,
    navigator: &mut N,
) -> Result<Option<SubmittedRecord>, StorageError>
where
    S: TransferStore + ?Sized,
    N: Navigator + ?Sized,
{
    let record = store.load().await?;
    if record.is_none() {
        tracing::info!("no submission to confirm");
        navigator.go_to(View::Entry);
    }
    Ok(record)
}

/// Drop the stored record and return to the entry view
pub async fn return_to_form<S, N>(store: &S, navigator: &mut N) -> Result<(), StorageError>
where
    S: TransferStore + ?Sized,
    N: Navigator + ?Sized,
{
    store.clear().await?;
    navigator.go_to(View::Entry);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, MockNavigator};
    use crate::storage::MockTransferStore;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn filled_coordinator() -> FormCoordinator {
        let mut coordinator = FormCoordinator::default();
        for (field, value) in SubmittedRecord::sample().fields().iter() {
            if field != FieldName::CountryCode {
                coordinator.update_field(field, value);
            }
        }
        coordinator
    }

    fn io_error() -> StorageError {
        StorageError::io(
            "/tmp/formSubmissionData.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_form_saves_once_then_navigates() {
            let mut coordinator = filled_coordinator();
            let mut store = MockTransferStore::new();
            store
                .expect_save()
                .withf(|record| *record == SubmittedRecord::sample())
                .times(1)
                .returning(|_| Ok(()));
            let mut navigator = MockNavigator::new();
            navigator
                .expect_go_to()
                .with(eq(View::Confirmation))
                .times(1)
                .return_const(());

            let outcome = submit_and_transfer(&mut coordinator, &store, &mut navigator)
                .await
                .unwrap();

            assert_eq!(outcome, SubmitOutcome::Transferred(SubmittedRecord::sample()));
            assert!(coordinator.errors().is_empty());
        }

        #[tokio::test]
        async fn test_invalid_form_neither_saves_nor_navigates() {
            let mut coordinator = FormCoordinator::default();
            coordinator.update_field(FieldName::FirstName, "Amit");
            let mut store = MockTransferStore::new();
            store.expect_save().times(0);
            let mut navigator = MockNavigator::new();
            navigator.expect_go_to().times(0);

            let outcome = submit_and_transfer(&mut coordinator, &store, &mut navigator)
                .await
                .unwrap();

            let SubmitOutcome::Rejected(errors) = outcome else {
                panic!("expected rejection");
            };
            assert_eq!(errors.len(), 9);
            assert_eq!(errors.get(FieldName::FirstName), None);
            assert_eq!(coordinator.touched().len(), 11);
        }

        #[tokio::test]
        async fn test_storage_failure_does_not_navigate() {
            let mut coordinator = filled_coordinator();
            let mut store = MockTransferStore::new();
            store.expect_save().times(1).returning(|_| Err(io_error()));
            let mut navigator = MockNavigator::new();
            navigator.expect_go_to().times(0);

            let result = submit_and_transfer(&mut coordinator, &store, &mut navigator).await;
            assert!(matches!(result, Err(StorageError::Io { .. })));
        }
    }

    mod confirmation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_record_redirects_to_entry() {
            let mut store = MockTransferStore::new();
            store.expect_load().times(1).returning(|| Ok(None));
            let mut navigator = MockNavigator::new();
            navigator
                .expect_go_to()
                .with(eq(View::Entry))
                .times(1)
                .return_const(());

            let record =
                tokio_test::block_on(load_confirmation(&store, &mut navigator)).unwrap();
            assert!(record.is_none());
        }

        #[test]
        fn test_present_record_stays() {
            let mut store = MockTransferStore::new();
            store
                .expect_load()
                .times(1)
                .returning(|| Ok(Some(SubmittedRecord::sample())));
            let mut navigator = MockNavigator::new();
            navigator.expect_go_to().times(0);

            let record =
                tokio_test::block_on(load_confirmation(&store, &mut navigator)).unwrap();
            assert_eq!(record, Some(SubmittedRecord::sample()));
        }

        #[test]
        fn test_return_to_form_clears_then_navigates() {
            let mut seq = mockall::Sequence::new();
            let mut store = MockTransferStore::new();
            store
                .expect_clear()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|| Ok(()));
            let mut navigator = MockNavigator::new();
            navigator
                .expect_go_to()
                .with(eq(View::Entry))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());

            tokio_test::block_on(return_to_form(&store, &mut navigator)).unwrap();
        }
    }

    #[tokio::test]
    async fn test_round_trip_through_file_store() {
        use crate::state::Router;
        use crate::storage::FileStore;

        let dir = tempfile::TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        let mut router = Router::default();
        let mut coordinator = filled_coordinator();

        submit_and_transfer(&mut coordinator, &store, &mut router)
            .await
            .unwrap();
        assert_eq!(router.current(), View::Confirmation);

        let record = load_confirmation(&store, &mut router).await.unwrap();
        assert_eq!(record.unwrap().display_aadhar(), "1234 5678 9012");

        return_to_form(&store, &mut router).await.unwrap();
        assert_eq!(router.current(), View::Entry);
        assert_eq!(store.load().await.unwrap(), None);
    }
}
