use axum::http::StatusCode;
use axum_test::TestServer;
use biblia::api::{create_router, AppState};
use biblia::config::Config;
use biblia::models::*;
use serde_json::{json, Value};

fn setup() -> TestServer {
    let config = Config::instant().with_seed(42);
    let app = create_router(AppState::new(&config));
    TestServer::new(app).expect("Failed to create test server")
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup();
        let response = server.get("/api/v1/health").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }
}

mod content {
    use super::*;

    #[tokio::test]
    async fn unfiltered_listing_returns_the_whole_library() {
        let server = setup();
        let items: Vec<ContentItem> = server.get("/api/v1/content").await.json();
        assert_eq!(items.len(), 5);
    }

    #[tokio::test]
    async fn filters_combine_search_category_and_tags() {
        let server = setup();
        let items: Vec<ContentItem> = server
            .get("/api/v1/content")
            .add_query_param("category", "article")
            .add_query_param("tags", "teologia,novo testamento")
            .await
            .json();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "5");
    }

    #[tokio::test]
    async fn unknown_category_is_a_bad_request() {
        let server = setup();
        let response = server
            .get("/api/v1/content")
            .add_query_param("category", "podcast")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn stats_count_items_per_kind() {
        let server = setup();
        let stats: Value = server.get("/api/v1/content/stats").await.json();
        assert_eq!(stats["total"], 5);
        assert_eq!(stats["by_kind"]["article"], 2);

        let tags: Vec<String> = server.get("/api/v1/content/tags").await.json();
        assert!(tags.contains(&"salmos".to_string()));
    }
}

mod plans {
    use super::*;

    #[tokio::test]
    async fn session_starts_with_two_seeded_plans() {
        let server = setup();
        let plans: Vec<ReadingPlan> = server.get("/api/v1/plans").await.json();
        assert_eq!(plans.len(), 2);
    }

    #[tokio::test]
    async fn create_then_advance_a_plan() {
        let server = setup();
        let response = server
            .post("/api/v1/plans")
            .json(&CreatePlanInput {
                name: "Teste".to_string(),
                kind: PlanKind::Time,
            })
            .await;
        response.assert_status(StatusCode::CREATED);
        let plan: ReadingPlan = response.json();
        assert_eq!(plan.progress_percent, 0);

        let advanced: ReadingPlan = server
            .post(&format!("/api/v1/plans/{}/advance", plan.id))
            .await
            .json();
        assert_eq!(advanced.days_completed, 1);
        assert_eq!(advanced.current_reading, "Gênesis 2-3");
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let server = setup();
        let response = server
            .post("/api/v1/plans")
            .json(&CreatePlanInput {
                name: "  ".to_string(),
                kind: PlanKind::Theme,
            })
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn advancing_a_missing_plan_is_not_found() {
        let server = setup();
        let response = server
            .post(&format!("/api/v1/plans/{}/advance", uuid::Uuid::new_v4()))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod quiz {
    use super::*;

    #[tokio::test]
    async fn quiz_lifecycle_for_an_arrangement() {
        let server = setup();

        // Idle: nothing on screen yet.
        server.get("/api/v1/quiz").await.assert_status(StatusCode::NOT_FOUND);

        let active: Value = server
            .post("/api/v1/quiz/start")
            .json(&json!({ "verse_id": "verse2" }))
            .await
            .json();
        assert_eq!(active["quiz"]["id"], "quiz3");

        // Build the verse in order by looking each word up in the pool.
        let expected: Vec<String> = active["quiz"]["expected"]["sequence"]
            .as_array()
            .expect("sequence expected")
            .iter()
            .map(|w| w.as_str().unwrap().to_string())
            .collect();
        for word in &expected {
            let current: Value = server.get("/api/v1/quiz").await.json();
            let pool = current["input"]["arrange"]["pool"].as_array().unwrap();
            let index = pool
                .iter()
                .position(|t| t["word"].as_str() == Some(word.as_str()) && t["used"] == false)
                .expect("word not available");
            server
                .post("/api/v1/quiz/tokens")
                .json(&json!({ "index": index }))
                .await
                .assert_status_ok();
        }

        let feedback: Value = server.post("/api/v1/quiz/submit").await.json();
        assert_eq!(feedback["correct"], true);
        assert_eq!(feedback["message"], "Sequência correta! Parabéns!");

        // The verse moved from 60 to 70.
        let verses: Vec<MemorizationVerse> = server.get("/api/v1/verses").await.json();
        let verse2 = verses.iter().find(|v| v.id == "verse2").unwrap();
        assert_eq!(verse2.progress, 70);

        server
            .post("/api/v1/quiz/close")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server.get("/api/v1/quiz").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn picked_words_can_be_returned_to_the_pool() {
        let server = setup();
        server
            .post("/api/v1/quiz/start")
            .json(&json!({ "verse_id": "verse2" }))
            .await
            .assert_status_ok();
        server
            .post("/api/v1/quiz/tokens")
            .json(&json!({ "index": 3 }))
            .await
            .assert_status_ok();

        // Same token twice is rejected.
        server
            .post("/api/v1/quiz/tokens")
            .json(&json!({ "index": 3 }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let active: Value = server.delete("/api/v1/quiz/tokens/0").await.json();
        assert_eq!(active["input"]["arrange"]["picked"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn verse_without_quizzes_is_not_found() {
        let server = setup();
        let response = server
            .post("/api/v1/quiz/start")
            .json(&json!({ "verse_id": "verse3" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn summary_reports_level_and_points() {
        let server = setup();
        let summary: MemorizationSummary = server.get("/api/v1/verses/summary").await.json();
        assert_eq!(summary.level, "Intermediário");
        assert_eq!(summary.total_points, 180);
    }
}

mod topics {
    use super::*;

    #[tokio::test]
    async fn search_and_fetch_by_id() {
        let server = setup();
        let hits: Vec<TheologicalTopic> = server
            .get("/api/v1/topics")
            .add_query_param("q", "graça")
            .await
            .json();
        assert!(hits.iter().any(|t| t.id == "grace"));

        let topic: TheologicalTopic = server.get("/api/v1/topics/eschatology").await.json();
        assert_eq!(topic.alternate_views.len(), 3);

        server
            .get("/api/v1/topics/nope")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

mod qa {
    use super::*;

    #[tokio::test]
    async fn asking_records_an_exchange() {
        let server = setup();
        let response: Value = server
            .post("/api/v1/qa")
            .json(&AskQuestionInput {
                question: "Como posso perdoar alguém?".to_string(),
            })
            .await
            .json();
        assert_eq!(response["cancelled"], false);
        assert!(response["exchange"]["answer"]
            .as_str()
            .unwrap()
            .contains("Mateus 6:14-15"));

        let log: Vec<QaExchange> = server.get("/api/v1/qa").await.json();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].question, "Como posso perdoar alguém?");
    }

    #[tokio::test]
    async fn blank_question_is_rejected() {
        let server = setup();
        let response = server
            .post("/api/v1/qa")
            .json(&AskQuestionInput {
                question: "   ".to_string(),
            })
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn mid_flight_cancel_discards_the_answer() {
        use std::time::Duration;

        // A server whose backend is slow enough to cancel under.
        let mut config = Config::instant().with_seed(42);
        config.simulated_delay = Duration::from_millis(300);
        let server = TestServer::new(create_router(AppState::new(&config)))
            .expect("Failed to create test server");

        let ask = server.post("/api/v1/qa").json(&AskQuestionInput {
            question: "Como devo orar?".to_string(),
        });
        let cancel = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            server
                .post("/api/v1/qa/cancel")
                .await
                .assert_status(StatusCode::NO_CONTENT);
        };
        let (response, ()) = tokio::join!(ask, cancel);

        let body: Value = response.json();
        assert_eq!(body["cancelled"], true);
        assert!(body["exchange"].is_null());

        // The late answer never reaches the log.
        let log: Vec<QaExchange> = server.get("/api/v1/qa").await.json();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn cancel_between_requests_does_not_block_the_next_one() {
        let server = setup();
        server
            .post("/api/v1/qa/cancel")
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let response: Value = server
            .post("/api/v1/qa")
            .json(&AskQuestionInput {
                question: "Como devo orar?".to_string(),
            })
            .await
            .json();
        assert_eq!(response["cancelled"], false);
    }
}

mod assistant {
    use super::*;

    #[tokio::test]
    async fn keyword_search_for_amor() {
        let server = setup();
        let results: Vec<SearchResult> = server
            .post("/api/v1/search")
            .json(&SearchInput {
                query: "amor".to_string(),
                kind: SearchKind::Keyword,
            })
            .await
            .json();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].reference, "João 3:16");
    }

    #[tokio::test]
    async fn unmatched_search_falls_back_to_the_default_verse() {
        let server = setup();
        let results: Vec<SearchResult> = server
            .post("/api/v1/search")
            .json(&SearchInput {
                query: "zzz".to_string(),
                kind: SearchKind::Theme,
            })
            .await
            .json();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].reference, "2 Timóteo 3:16");
    }

    #[tokio::test]
    async fn devotional_respects_the_profile() {
        let server = setup();
        let devotional: Devotional = server
            .post("/api/v1/devotional")
            .json(&GenerateDevotionalInput {
                profile: Profile::Leader,
            })
            .await
            .json();
        assert_eq!(devotional.title, "Liderança Servidora");
    }

    #[tokio::test]
    async fn share_renders_text_and_targets() {
        let server = setup();
        let devotional: Devotional = server
            .post("/api/v1/devotional")
            .json(&GenerateDevotionalInput {
                profile: Profile::Adult,
            })
            .await
            .json();

        let shared: Value = server
            .post("/api/v1/devotional/share")
            .json(&json!({ "devotional": devotional, "target": "whatsapp" }))
            .await
            .json();
        assert!(shared["url"].as_str().unwrap().starts_with("https://wa.me/?text="));
        assert!(shared["text"]
            .as_str()
            .unwrap()
            .ends_with("-- Enviado por BIBL.IA"));

        let clipboard: Value = server
            .post("/api/v1/devotional/share")
            .json(&json!({ "devotional": devotional, "target": "clipboard" }))
            .await
            .json();
        assert!(clipboard["url"].is_null());
    }

    #[tokio::test]
    async fn sermon_interpolates_the_theme() {
        let server = setup();
        let outline: SermonOutline = server
            .post("/api/v1/sermon")
            .json(&GenerateSermonInput {
                theme: "Verdade".to_string(),
            })
            .await
            .json();
        assert_eq!(outline.title, "Verdade: Caminhando na Verdade");
        assert_eq!(outline.main_points.len(), 3);

        server
            .post("/api/v1/sermon")
            .json(&GenerateSermonInput {
                theme: "".to_string(),
            })
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn exegesis_knows_two_references() {
        let server = setup();
        let report: ExegesisReport = server
            .post("/api/v1/exegesis")
            .json(&AnalyzeInput {
                reference: "Romanos 8:28".to_string(),
            })
            .await
            .json();
        assert!(report.original.text.starts_with("οἴδαμεν"));

        let fallback: ExegesisReport = server
            .post("/api/v1/exegesis")
            .json(&AnalyzeInput {
                reference: "Salmos 23:1".to_string(),
            })
            .await
            .json();
        assert_eq!(fallback.original.text, "[Texto original aparecerá aqui]");
    }
}

mod studies {
    use super::*;

    #[tokio::test]
    async fn listing_and_answering_questions() {
        let server = setup();
        let studies: Vec<BibleStudy> = server.get("/api/v1/studies").await.json();
        assert_eq!(studies.len(), 2);

        let study: BibleStudy = server
            .post("/api/v1/studies/1/questions/q1/answer")
            .json(&AnswerQuestionInput {
                answer: "Reconhecer nossa dependência de Deus.".to_string(),
            })
            .await
            .json();
        let q1 = study.questions.iter().find(|q| q.id == "q1").unwrap();
        assert!(q1.answered);

        // The answer survives a fresh fetch.
        let again: BibleStudy = server.get("/api/v1/studies/1").await.json();
        assert!(again.questions[0].answered);

        server
            .post("/api/v1/studies/1/questions/q9/answer")
            .json(&AnswerQuestionInput {
                answer: "x".to_string(),
            })
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
