//! List screen integration tests
//!
//! Full mount/save/delete cycles through `RestGateway` and `ApiClient`.

#[cfg(test)]
mod tests {
    use crate::common::assertions::NotificationAssertions;
    use crate::common::server::{ok, rejected};
    use crate::common::{BatchFactory, CandidateFactory, EnrollmentFactory, MockApi, SessionFactory};
    use batchdesk::config::UiConfig;
    use batchdesk::core::types::GENERIC_FAILURE_MESSAGE;
    use batchdesk::{
        BatchDeskError, BatchScreen, CandidateScreen, EnrollmentScreen, Entity, ListScreen,
        Lookup, RestGateway, SessionScreen, ViewMode,
    };
    use serde_json::{Value, json};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    fn batch_screen(api: &MockApi) -> BatchScreen {
        ListScreen::new(RestGateway::new(api.client()), &UiConfig::default())
    }

    #[tokio::test]
    async fn test_mount_pages_and_toggles() {
        let api = MockApi::logged_in("tok").await;
        let rows: Vec<Value> = (1..=23)
            .map(|id| BatchFactory::json(id, &format!("Batch {}", id)))
            .collect();
        api.respond("GET", "Batches", 200, ok("", Value::Array(rows))).await;

        let screen = batch_screen(&api);
        assert!(screen.mount().await.succeeded);

        assert_eq!(screen.len(), 23);
        assert_eq!(screen.page_count(), 3);
        assert_eq!(screen.window().len(), 10);
        assert!(screen.change_page(3));
        assert_eq!(screen.window().len(), 23);
        assert!(!screen.change_page(4));

        screen.toggle_view(ViewMode::Card);
        assert_eq!(screen.current_page(), 1);
    }

    #[tokio::test]
    async fn test_requests_carry_session_token() {
        let api = MockApi::logged_in("token-123").await;
        Mock::given(method("GET"))
            .and(path("/api/Candidates"))
            .and(header("authorization", "Bearer token-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok(
                "",
                json!([CandidateFactory::json(1, "Asha Rao")]),
            )))
            .expect(1)
            .mount(&api.server)
            .await;

        let screen: CandidateScreen =
            ListScreen::new(RestGateway::new(api.client()), &UiConfig::default());
        assert!(screen.mount().await.succeeded);
        assert_eq!(screen.snapshot()[0].full_name, "Asha Rao");
    }

    #[tokio::test]
    async fn test_create_then_update_then_delete() {
        let api = MockApi::logged_in("tok").await;
        api.respond("GET", "Batches", 200, ok("", json!([BatchFactory::json(1, "Morning")])))
            .await;
        api.respond(
            "POST",
            "Batches",
            200,
            ok("Batch created", BatchFactory::json(2, "Evening")),
        )
        .await;
        api.respond(
            "PUT",
            "Batches/2",
            200,
            ok("Batch updated", BatchFactory::json(2, "Late Evening")),
        )
        .await;
        api.expect("DELETE", "Batches/1", 1, ok("Batch deleted", Value::Null))
            .await;

        let screen = batch_screen(&api);
        screen.mount().await;

        screen.open_add();
        screen
            .edit_draft(|draft| *draft = BatchFactory::create(0, "Evening"))
            .unwrap();
        assert!(screen.save().await.unwrap().succeeded);
        screen.notification().assert_success("Batch Add");
        let ids: Vec<i64> = screen.snapshot().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![2, 1]);

        screen.open_edit(2).unwrap();
        screen
            .edit_draft(|draft| draft.batch_name = "Late Evening".to_string())
            .unwrap();
        assert!(screen.save().await.unwrap().succeeded);
        screen.notification().assert_success("Batch Edit");
        assert_eq!(screen.snapshot()[0].batch_name, "Late Evening");

        assert!(screen.delete(1).await.succeeded);
        screen.notification().assert_success("Batch Delete");
        assert_eq!(screen.len(), 1);
        assert!(screen.deleting_ids().is_empty());
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_state() {
        let api = MockApi::logged_in("tok").await;
        api.respond("GET", "Batches", 200, ok("", json!([BatchFactory::json(1, "Morning")])))
            .await;
        api.respond("PUT", "Batches/1", 200, rejected("Batch is closed")).await;
        api.respond(
            "DELETE",
            "Batches/1",
            409,
            json!({"error": {"message": "Batch has enrollments", "result": false}}),
        )
        .await;

        let screen = batch_screen(&api);
        screen.mount().await;
        let before = screen.snapshot();

        screen.open_edit(1).unwrap();
        screen
            .edit_draft(|draft| draft.description = "changed".to_string())
            .unwrap();
        assert!(!screen.save().await.unwrap().succeeded);
        screen
            .notification()
            .assert_failure("Batch Edit", "Batch is closed");
        assert_eq!(screen.snapshot(), before);
        assert!(screen.is_form_open());

        assert!(!screen.delete(1).await.succeeded);
        screen
            .notification()
            .assert_failure("Batch Delete", "Batch has enrollments");
        assert_eq!(screen.snapshot(), before);
    }

    #[tokio::test]
    async fn test_unreachable_server_fails_softly() {
        let api = MockApi::logged_in("tok").await;
        api.respond("GET", "Batches", 500, json!("not an envelope")).await;

        let screen = batch_screen(&api);
        let outcome = screen.mount().await;
        assert!(!outcome.succeeded);
        screen
            .notification()
            .assert_failure("Batch List", GENERIC_FAILURE_MESSAGE);
        assert!(screen.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_candidate_never_sent() {
        let api = MockApi::logged_in("tok").await;
        api.respond("GET", "Candidates", 200, ok("", json!([]))).await;
        api.expect("POST", "Candidates", 0, ok("", Value::Null)).await;

        let screen: CandidateScreen =
            ListScreen::new(RestGateway::new(api.client()), &UiConfig::default());
        screen.mount().await;
        screen.open_add();
        screen
            .edit_draft(|draft| {
                *draft = CandidateFactory::create(0, "Asha Rao");
                draft.mobile_number = "12345".to_string();
            })
            .unwrap();

        let err = screen.save().await.unwrap_err();
        assert!(matches!(err, BatchDeskError::Validation(ref fields) if fields.len() == 1));
    }

    #[tokio::test]
    async fn test_enrollment_edit_with_lookups() {
        let api = MockApi::logged_in("tok").await;
        api.respond(
            "GET",
            "BatchEnrollments/GetAllEnrollment",
            200,
            ok("", json!([EnrollmentFactory::json(5, "Asha Rao", "Evening")])),
        )
        .await;
        api.respond("GET", "Batches", 200, ok("", json!([BatchFactory::json(8, "Evening")])))
            .await;
        api.respond(
            "GET",
            "Candidates",
            200,
            ok("", json!([CandidateFactory::json(13, "Asha Rao")])),
        )
        .await;
        Mock::given(method("PUT"))
            .and(path("/api/BatchEnrollments/5"))
            .and(wiremock::matchers::body_partial_json(
                json!({"enrollmentId": 5, "batchId": 8, "candidateId": 13}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok("Enrollment updated", Value::Null)))
            .expect(1)
            .mount(&api.server)
            .await;

        let screen: EnrollmentScreen =
            ListScreen::new(RestGateway::new(api.client()), &UiConfig::default());
        let batches = Lookup::new(RestGateway::new(api.client()), screen.lifetime());
        let candidates = Lookup::new(RestGateway::new(api.client()), screen.lifetime());
        let (listed, _, _) = futures::join!(screen.mount(), batches.load(), candidates.load());
        assert!(listed.succeeded);

        screen.open_edit_resolved(5, &batches, &candidates).unwrap();
        let outcome = screen.save().await.unwrap();
        assert!(outcome.succeeded);
        screen.notification().assert_success("Enrollment Edit");
        assert_eq!(screen.snapshot()[0].batch_id, Some(8));

        let fresh = EnrollmentFactory::create(8, 13);
        assert!(fresh.validate().is_ok());
    }

    #[tokio::test]
    async fn test_session_create_sends_normalized_dates() {
        let api = MockApi::logged_in("tok").await;
        api.respond(
            "GET",
            "BatchSessions",
            200,
            ok("", json!([SessionFactory::json(1, "Evening", "Traits")])),
        )
        .await;
        Mock::given(method("POST"))
            .and(path("/api/BatchSessions"))
            .and(wiremock::matchers::body_partial_json(
                json!({"sessionId": 0, "sessionDate": "2026-03-01"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok(
                "Session created",
                json!({
                    "sessionId": 2,
                    "batchId": 8,
                    "topicName": "Lifetimes",
                    "youtubeVideoId": "dQw4w9WgXcQ",
                    "durationInMinutes": 60,
                    "sessionDate": "2026-03-01",
                    "displayOrder": 2
                }),
            )))
            .expect(1)
            .mount(&api.server)
            .await;

        let screen: SessionScreen =
            ListScreen::new(RestGateway::new(api.client()), &UiConfig::default());
        screen.mount().await;
        screen.open_add();
        screen
            .edit_draft(|draft| {
                *draft = SessionFactory::create(0, 8, "Lifetimes");
                draft.session_date = "2026-03-01T00:00:00Z".to_string();
                draft.display_order = 2;
            })
            .unwrap();

        assert!(screen.save().await.unwrap().succeeded);
        let ids: Vec<i64> = screen.snapshot().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_teardown_discards_late_results() {
        let api = MockApi::logged_in("tok").await;
        Mock::given(method("GET"))
            .and(path("/api/Batches"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(ok("", json!([BatchFactory::json(1, "Morning")])))
                    .set_delay(std::time::Duration::from_millis(200)),
            )
            .mount(&api.server)
            .await;

        let screen = batch_screen(&api);
        let (outcome, ()) = futures::join!(screen.mount(), async {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            screen.teardown();
        });

        assert!(outcome.succeeded);
        assert!(screen.is_empty());
    }
}
