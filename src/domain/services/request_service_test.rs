// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::domain::models::loose_id::LooseId;
    use crate::domain::repositories::in_memory::InMemoryStore;
    use crate::domain::services::request_service::{RequestService, SubmitRequest};
    use crate::domain::services::serial_counter::SerialCounter;
    use crate::domain::services::ServiceError;
    use std::sync::Arc;

    fn service(store: &Arc<InMemoryStore>) -> RequestService {
        RequestService::new(
            store.clone(),
            store.clone(),
            SerialCounter::new(store.clone()),
        )
    }

    fn submission(venue_id: LooseId) -> SubmitRequest {
        SubmitRequest {
            venue_id,
            artist: Some(" Queen ".to_string()),
            title: Some("Somebody to Love".to_string()),
            singer_name: Some("Freddie".to_string()),
            key_change: -2,
        }
    }

    #[tokio::test]
    async fn test_submit_creates_trimmed_request_and_advances_serial() {
        let store = Arc::new(InMemoryStore::new());
        let venue = store.insert_venue("Main Stage", true).await;

        let request = service(&store)
            .submit(submission(LooseId::Id(venue.venue_id)))
            .await
            .unwrap();

        assert_eq!(request.artist, "Queen");
        assert_eq!(request.singer, "Freddie");
        assert_eq!(request.key_change, -2);
        assert_eq!(store.requests().await.len(), 1);

        let serial = SerialCounter::new(store.clone()).current().await.unwrap();
        assert_eq!(serial, 1);
    }

    #[tokio::test]
    async fn test_missing_fields_are_bad_request() {
        let store = Arc::new(InMemoryStore::new());
        let venue = store.insert_venue("Main Stage", true).await;

        let mut blank_singer = submission(LooseId::Id(venue.venue_id));
        blank_singer.singer_name = Some("   ".to_string());
        let err = service(&store).submit(blank_singer).await.unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));

        let err = service(&store)
            .submit(submission(LooseId::Missing))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Venue ID, artist, title, and singer name are required."
        );
    }

    #[tokio::test]
    async fn test_unknown_venue_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let err = service(&store)
            .submit(submission(LooseId::Id(42)))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Venue with ID 42 not found.");
    }

    #[tokio::test]
    async fn test_closed_venue_is_forbidden() {
        let store = Arc::new(InMemoryStore::new());
        let venue = store.insert_venue("Quiet Night", false).await;

        let err = service(&store)
            .submit(submission(LooseId::Id(venue.venue_id)))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden(_)));
        assert_eq!(
            err.to_string(),
            "Venue \"Quiet Night\" is not currently accepting requests."
        );
        assert!(store.requests().await.is_empty());
    }
}
