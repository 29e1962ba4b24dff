mod support;

use serde_json::{Value, json};

async fn get_json(client: &reqwest::Client, url: String) -> Value {
    client
        .get(url)
        .send()
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("response should be json")
}

async fn post_json(client: &reqwest::Client, url: String, body: Value) -> Value {
    client
        .post(url)
        .json(&body)
        .send()
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("response should be json")
}

async fn post_empty(client: &reqwest::Client, url: String) -> Value {
    client
        .post(url)
        .send()
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("response should be json")
}

// Drives a full judge session through the HTTP API against the live server
// and the checked-in question bank.
#[tokio::test]
async fn full_judge_session_flows_through_the_api() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    // Fresh board on the first bank question.
    let state = get_json(&client, format!("{base_url}/api/state")).await;
    assert_eq!(state["question"], "Name something you take on vacation");
    assert_eq!(state["question_id"], 1);
    assert_eq!(state["answers"].as_array().expect("answers").len(), 5);
    assert_eq!(state["roundScore"], 0);
    assert_eq!(state["activeTeam"], 1);
    assert_eq!(state["team1Name"], "Team 1");

    // Reveal two answers; each scores once.
    let selected = post_json(&client, format!("{base_url}/api/select"), json!({"id": 1})).await;
    assert_eq!(selected["ok"], true);
    assert_eq!(selected["selected"]["text"], "Toothbrush");
    assert_eq!(selected["roundScore"], 30);

    let selected = post_json(&client, format!("{base_url}/api/select"), json!({"id": 2})).await;
    assert_eq!(selected["roundScore"], 55);

    // Repeat select is idempotent.
    let selected = post_json(&client, format!("{base_url}/api/select"), json!({"id": 1})).await;
    assert_eq!(selected["ok"], true);
    assert_eq!(selected["roundScore"], 55);

    // Bank the round for the team in control, then confirm a re-bank is empty.
    let awarded = post_empty(&client, format!("{base_url}/api/award")).await;
    assert_eq!(awarded["awarded"], 55);
    let state = get_json(&client, format!("{base_url}/api/state")).await;
    assert_eq!(state["team1Score"], 55);
    assert_eq!(state["roundScore"], 0);

    let awarded = post_empty(&client, format!("{base_url}/api/award")).await;
    assert_eq!(awarded["awarded"], 0);

    // Strikes saturate at three.
    let mut strikes = Value::Null;
    for _ in 0..5 {
        strikes = post_empty(&client, format!("{base_url}/api/strike")).await;
    }
    assert_eq!(strikes["strikes"], 3);
    let cleared = post_empty(&client, format!("{base_url}/api/clear_strikes")).await;
    assert_eq!(cleared["strikes"], 0);

    // A steal credits the team that is not in control.
    let selected = post_json(&client, format!("{base_url}/api/select"), json!({"id": 3})).await;
    assert_eq!(selected["roundScore"], 20);
    let stolen = post_empty(&client, format!("{base_url}/api/award_steal")).await;
    assert_eq!(stolen["awarded"], 20);
    assert_eq!(stolen["to"], 2);
    let state = get_json(&client, format!("{base_url}/api/state")).await;
    assert_eq!(state["team2Score"], 20);

    // Judge correction path overwrites a total directly.
    let scores = post_json(
        &client,
        format!("{base_url}/api/set_score"),
        json!({"team": 2, "score": 5}),
    )
    .await;
    assert_eq!(scores["team2Score"], 5);

    // Reset hides the board but keeps strikes.
    let struck = post_empty(&client, format!("{base_url}/api/strike")).await;
    assert_eq!(struck["strikes"], 1);
    let reset = post_empty(&client, format!("{base_url}/api/reset")).await;
    assert_eq!(reset["ok"], true);
    let state = get_json(&client, format!("{base_url}/api/state")).await;
    assert_eq!(state["roundScore"], 0);
    assert_eq!(state["last_selected"], Value::Null);
    assert_eq!(state["strikes"], 1);
    assert!(
        state["answers"]
            .as_array()
            .expect("answers")
            .iter()
            .all(|answer| answer["revealed"] == false)
    );
    post_empty(&client, format!("{base_url}/api/clear_strikes")).await;

    // Next round banks the live score, then advances through the bank.
    let selected = post_json(&client, format!("{base_url}/api/select"), json!({"id": 4})).await;
    assert_eq!(selected["roundScore"], 15);
    let advanced = post_empty(&client, format!("{base_url}/api/next_round")).await;
    assert_eq!(advanced["ok"], true);
    assert_eq!(advanced["question_id"], 2);
    assert_eq!(advanced["awarded_points"], 15);
    assert_eq!(advanced["team1Score"], 70);
    assert_eq!(advanced["team2Score"], 5);

    // Nothing left to bank: a pure advance, wrapping past the last question.
    let advanced = post_empty(&client, format!("{base_url}/api/next_round")).await;
    assert_eq!(advanced["question_id"], 3);
    assert_eq!(advanced["awarded_points"], 0);
    let advanced = post_empty(&client, format!("{base_url}/api/next_round")).await;
    assert_eq!(advanced["question_id"], 1);
    assert_eq!(advanced["team1Score"], 70);

    // Direct jump to a known question resets the round bookkeeping.
    let loaded = post_json(
        &client,
        format!("{base_url}/api/new_question"),
        json!({"question_id": 2}),
    )
    .await;
    assert_eq!(loaded["question_id"], 2);
    let state = get_json(&client, format!("{base_url}/api/state")).await;
    assert_eq!(state["question"], "Name a reason people stay up too late");
    assert_eq!(state["roundScore"], 0);
    assert_eq!(state["strikes"], 0);
}

#[tokio::test]
async fn when_selecting_an_unknown_answer_then_returns_not_found() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/select"))
        .json(&json!({"id": 999}))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let payload: Value = response.json().await.expect("error body");
    assert_eq!(payload["error"], "not found");
}

#[tokio::test]
async fn when_jumping_to_an_unknown_question_then_returns_not_found() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/new_question"))
        .json(&json!({"question_id": 77}))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let payload: Value = response.json().await.expect("error body");
    assert_eq!(payload["error"], "question not found");
}

#[tokio::test]
async fn when_the_active_team_is_invalid_then_returns_bad_request() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/active"))
        .json(&json!({"team": 9}))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let payload: Value = response.json().await.expect("error body");
    assert_eq!(payload["error"], "team must be 1 or 2");
}

#[tokio::test]
async fn when_questions_are_listed_then_answers_stay_hidden() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let payload = get_json(&client, format!("{base_url}/api/questions")).await;

    let questions = payload["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[0]["answer_count"], 5);
    // The listing must not spoil the board.
    assert!(questions[0].get("answers").is_none());
    assert!(questions[0].get("points").is_none());
}
