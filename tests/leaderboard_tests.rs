// tests/leaderboard_tests.rs

use std::sync::Arc;

use daily_challenge::{
    config::Config,
    routes,
    state::AppState,
    store::{MemoryStore, SharedStore, seed::{DEMO_PASSWORD, seed_demo_data}},
};
use serde_json::{Value, json};

async fn spawn_app() -> String {
    let store: SharedStore = Arc::new(MemoryStore::new());
    seed_demo_data(store.as_ref()).await.unwrap();

    let config = Config {
        jwt_secret: "leaderboard_test_secret".to_string(),
        jwt_expiration: 600,
        rust_log: "error".to_string(),
        port: 0,
        seed_demo_data: true,
    };

    let state = AppState { store, config };
    let app = routes::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn login(client: &reqwest::Client, address: &str, username: &str, password: &str) -> String {
    let resp: Value = client
        .post(&format!("{}/api/auth/login", address))
        .json(&json!({"username": username, "password": password}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    resp["token"].as_str().unwrap().to_string()
}

/// Registers a student in `class` and returns (username, token).
async fn enrol(client: &reqwest::Client, address: &str, class: &str) -> (String, String) {
    let username = format!("s_{}", &uuid::Uuid::new_v4().to_string()[..8]);
    let password = "password123";

    let resp = client
        .post(&format!("{}/api/auth/register", address))
        .json(&json!({
            "username": username,
            "password": password,
            "name": username,
            "email": format!("{}@student.edu", username),
            "class": class,
            "semester": 4
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    let token = login(client, address, &username, password).await;
    (username, token)
}

async fn submit(
    client: &reqwest::Client,
    address: &str,
    token: &str,
    challenge_id: i64,
    answer: &str,
    time_spent: u32,
) -> reqwest::Response {
    client
        .post(&format!("{}/api/submissions", address))
        .bearer_auth(token)
        .json(&json!({
            "challengeId": challenge_id,
            "answer": answer,
            "timeSpent": time_spent
        }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_leaderboard_complex_flow() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let class = format!("LB {}", &uuid::Uuid::new_v4().to_string()[..6]);

    let teacher = login(&client, &address, "teacher1", DEMO_PASSWORD).await;

    // 1. Teacher creates two challenges for the class
    let mut challenge_ids = Vec::new();
    for (title, answer) in [("Stacks", "B"), ("Queues", "A")] {
        let resp = client
            .post(&format!("{}/api/challenges", address))
            .bearer_auth(&teacher)
            .json(&json!({
                "title": title,
                "question": format!("Pick the right answer about {}", title),
                "options": [{"id": "A", "text": "first"}, {"id": "B", "text": "second"}],
                "correctAnswer": answer,
                "difficulty": "medium",
                "class": class,
                "semester": 4,
                "dueDate": "2030-01-20"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 201);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["createdBy"], 1);
        challenge_ids.push(body["id"].as_i64().unwrap());
    }

    // 2. Three students join the class
    let (fast, fast_token) = enrol(&client, &address, &class).await;
    let (slow, slow_token) = enrol(&client, &address, &class).await;
    let (idle, _) = enrol(&client, &address, &class).await;

    // 3. Fast answers both correctly, slow gets one right and one wrong
    let first = submit(&client, &address, &fast_token, challenge_ids[0], "B", 30).await;
    assert_eq!(first.status().as_u16(), 201);
    let first: Value = first.json().await.unwrap();
    assert_eq!(first["submission"]["isCorrect"], true);

    submit(&client, &address, &fast_token, challenge_ids[1], "A", 50).await;

    let wrong: Value = submit(&client, &address, &slow_token, challenge_ids[0], "A", 120)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(wrong["submission"]["isCorrect"], false);
    assert_eq!(wrong["correctAnswer"], "B");

    submit(&client, &address, &slow_token, challenge_ids[1], "A", 80).await;

    // 4. Leaderboard for the class
    let board: Vec<Value> = client
        .get(&format!("{}/api/leaderboard", address))
        .query(&[("class", class.as_str())])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(board.len(), 3);
    assert_eq!(board[0]["username"], fast.as_str());
    assert_eq!(board[0]["totalSubmissions"], 2);
    assert_eq!(board[0]["correctSubmissions"], 2);
    assert_eq!(board[0]["accuracy"], 100.0);
    assert_eq!(board[0]["averageTime"], 40.0);
    assert_eq!(board[0]["score"], 16.0);

    // Slow: 1 correct, 100s average => 10 - 10 = 0, tied with idle but registered first.
    assert_eq!(board[1]["username"], slow.as_str());
    assert_eq!(board[1]["accuracy"], 50.0);
    assert_eq!(board[1]["averageTime"], 100.0);
    assert_eq!(board[1]["score"], 0.0);

    assert_eq!(board[2]["username"], idle.as_str());
    assert_eq!(board[2]["totalSubmissions"], 0);
    assert_eq!(board[2]["accuracy"], 0.0);
    assert_eq!(board[2]["score"], 0.0);

    // 5. Standing of the slow student among classmates
    let standing: Value = client
        .get(&format!("{}/api/leaderboard/me", address))
        .bearer_auth(&slow_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(standing["rank"], 2);
    assert_eq!(standing["outOf"], 3);
    assert_eq!(standing["entry"]["username"], slow.as_str());

    // 6. Students only see their own submissions, teachers see all of them
    let mine: Vec<Value> = client
        .get(&format!("{}/api/submissions", address))
        .bearer_auth(&slow_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(mine.len(), 2);

    let per_challenge: Vec<Value> = client
        .get(&format!("{}/api/submissions?challengeId={}", address, challenge_ids[0]))
        .bearer_auth(&teacher)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(per_challenge.len(), 2);

    // 7. Analytics for the class
    let report: Value = client
        .get(&format!("{}/api/analytics", address))
        .query(&[("class", class.as_str())])
        .bearer_auth(&teacher)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(report["totalStudents"], 3);
    assert_eq!(report["totalSubmissions"], 4);
    assert_eq!(report["overallAccuracy"], 75.0);
    assert_eq!(report["topPerformers"][0]["username"], fast.as_str());

    let stacks = report["challengePerformance"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["challengeId"] == challenge_ids[0])
        .unwrap();
    assert_eq!(stacks["attempts"], 2);
    assert_eq!(stacks["successRate"], 50.0);
}

#[tokio::test]
async fn leaderboard_filter_without_match_is_empty() {
    let address = spawn_app().await;

    let resp = reqwest::get(&format!("{}/api/leaderboard?class=Nowhere&semester=9", address))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let board: Vec<Value> = resp.json().await.unwrap();
    assert!(board.is_empty());
}

#[tokio::test]
async fn seeded_leaderboard_is_sorted() {
    let address = spawn_app().await;

    let board: Vec<Value> = reqwest::get(&format!("{}/api/leaderboard", address))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!board.is_empty());
    let scores: Vec<f64> = board.iter().map(|e| e["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn submitting_to_unknown_challenge_is_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login(&client, &address, "student1", DEMO_PASSWORD).await;

    let resp = submit(&client, &address, &token, 9999, "A", 10).await;

    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn teachers_cannot_submit_answers() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login(&client, &address, "teacher1", DEMO_PASSWORD).await;

    let resp = submit(&client, &address, &token, 1, "mark", 10).await;

    assert_eq!(resp.status().as_u16(), 403);
}

#[tokio::test]
async fn resubmitting_a_challenge_is_conflict() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let class = format!("RS {}", &uuid::Uuid::new_v4().to_string()[..6]);
    let (username, token) = enrol(&client, &address, &class).await;

    // Challenge 3 is open to every class, answer "A".
    let wrong = submit(&client, &address, &token, 3, "B", 20).await;
    assert_eq!(wrong.status().as_u16(), 201);
    let wrong: Value = wrong.json().await.unwrap();
    assert_eq!(wrong["submission"]["isCorrect"], false);

    let retry = submit(&client, &address, &token, 3, "A", 5).await;
    assert_eq!(retry.status().as_u16(), 409);

    let board: Vec<Value> = client
        .get(&format!("{}/api/leaderboard", address))
        .query(&[("class", class.as_str())])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0]["username"], username.as_str());
    assert_eq!(board[0]["totalSubmissions"], 1);
    assert_eq!(board[0]["correctSubmissions"], 0);
    assert_eq!(board[0]["score"], 0.0);
}

#[tokio::test]
async fn standing_without_class_is_bad_request() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let username = format!("s_{}", &uuid::Uuid::new_v4().to_string()[..8]);

    let resp = client
        .post(&format!("{}/api/auth/register", address))
        .json(&json!({
            "username": username,
            "password": "password123",
            "name": username,
            "email": format!("{}@student.edu", username)
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    let token = login(&client, &address, &username, "password123").await;
    let standing = client
        .get(&format!("{}/api/leaderboard/me", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(standing.status().as_u16(), 400);
}
