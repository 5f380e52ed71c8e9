#![allow(dead_code)]

use std::sync::Arc;

use review_relay::{
    bot::RecordingTransport,
    config::Config,
    db::{MemoryReviewStore, ReviewStore},
    models::{NewReview, Review, ReviewSubmission},
    state::AppState,
};
use serde_json::{Value, json};
use sqlx::postgres::PgConnectOptions;

pub const APPROVAL_CHAT: i64 = -1001;
pub const PUBLIC_CHAT: i64 = -2002;
pub const PROMPT_MESSAGE: i32 = 77;

pub struct TestRelay {
    pub state: AppState,
    pub store: Arc<MemoryReviewStore>,
    pub moderator: Arc<RecordingTransport>,
    pub public: Arc<RecordingTransport>,
}

pub fn test_config() -> Config {
    Config {
        port: 0,
        database: PgConnectOptions::new(),
        approval_bot_token: "approval-token".into(),
        approval_chat_id: APPROVAL_CHAT,
        public_bot_token: "public-token".into(),
        public_chat_id: PUBLIC_CHAT,
        module_base_url: "https://sp-elective-site-frontend.vercel.app/modules"
            .parse()
            .unwrap(),
        allowed_origins: vec!["http://localhost:3000".into()],
        webhook_url: None,
        webhook_secret: None,
    }
}

pub fn relay() -> TestRelay {
    relay_with(test_config(), RecordingTransport::new(), RecordingTransport::new())
}

pub fn relay_with(
    config: Config,
    moderator: RecordingTransport,
    public: RecordingTransport,
) -> TestRelay {
    let store = Arc::new(MemoryReviewStore::new());
    let moderator = Arc::new(moderator);
    let public = Arc::new(public);

    let state = AppState::new(store.clone(), moderator.clone(), public.clone(), config);

    TestRelay {
        state,
        store,
        moderator,
        public,
    }
}

pub fn scenario_body() -> Value {
    json!({
        "Elective_Module": "Data Structures",
        "Elective_Code": "CS201",
        "Academic_Year": "2024",
        "Semester": "1",
        "Ratings": 4,
        "Rating_Reason": "clear",
        "TLDR_experiences": "ok",
        "Assignment_Review": "fair",
        "Assignment_Weightage": "40%",
        "Life_Hacks": "attend labs"
    })
}

pub fn scenario_submission() -> ReviewSubmission {
    serde_json::from_value(scenario_body()).unwrap()
}

pub fn new_review(code: &str) -> NewReview {
    let mut body = scenario_body();
    body["Elective_Code"] = json!(code);
    serde_json::from_value::<ReviewSubmission>(body)
        .unwrap()
        .validate()
        .unwrap()
}

impl TestRelay {
    pub async fn seed_pending(&self, code: &str) -> Review {
        self.store.insert_pending(new_review(code)).await.unwrap()
    }
}
