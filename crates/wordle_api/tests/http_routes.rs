use chrono::NaiveDate;
use serde_json::{json, Value};
use tiny_http::Method;
use wordle_api::{dispatch, ApiContext, HttpReply};
use wordle_core::GameConfig;

struct Harness {
    _dir: tempfile::TempDir,
    ctx: ApiContext,
    today: NaiveDate,
}

impl Harness {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ApiContext::new(dir.path().join("routes.sqlite3"), GameConfig::default());
        Self {
            _dir: dir,
            ctx,
            // 2024-01-01 has ordinal 738_886; default fallback is "crazy".
            today: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn get(&self, url: &str) -> HttpReply {
        dispatch(&self.ctx, &Method::Get, url, "", self.today)
    }

    fn post(&self, url: &str, body: Value) -> HttpReply {
        dispatch(&self.ctx, &Method::Post, url, &body.to_string(), self.today)
    }
}

fn body(reply: &HttpReply) -> Value {
    serde_json::from_str(&reply.body).unwrap()
}

#[test]
fn root_reports_liveness() {
    let harness = Harness::new();
    let reply = harness.get("/");
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, "Wordle backend is running.");
}

#[test]
fn today_answer_falls_back_when_unconfigured() {
    let harness = Harness::new();
    let reply = harness.get("/api/today-answer");
    assert_eq!(reply.status, 200);
    assert_eq!(body(&reply), json!({"date": "2024-01-01", "answer": "crazy"}));
}

#[test]
fn set_answer_returns_created_record_and_is_listed() {
    let harness = Harness::new();

    let created = harness.post("/api/answer", json!({"date": "2024-01-01", "answer": "Ghost"}));
    assert_eq!(created.status, 201);
    assert_eq!(body(&created), json!({"date": "2024-01-01", "answer": "ghost"}));

    let overwritten =
        harness.post("/api/answer", json!({"date": "2024-01-01", "answer": "witch"}));
    assert_eq!(overwritten.status, 201);

    let listed = harness.get("/api/answers");
    assert_eq!(listed.status, 200);
    assert_eq!(body(&listed), json!([{"date": "2024-01-01", "answer": "witch"}]));

    let by_date = harness.get("/api/answer/2024-01-01");
    assert_eq!(body(&by_date)["answer"], "witch");
}

#[test]
fn set_answer_rejects_missing_fields_and_bad_input() {
    let harness = Harness::new();

    let missing = harness.post("/api/answer", json!({"date": "2024-01-01"}));
    assert_eq!(missing.status, 400);
    assert_eq!(body(&missing)["error"]["code"], "BAD_REQUEST");

    let bad_date = harness.post("/api/answer", json!({"date": "2024-13-01", "answer": "ghost"}));
    assert_eq!(bad_date.status, 400);

    let not_json = dispatch(
        &harness.ctx,
        &Method::Post,
        "/api/answer",
        "date=2024-01-01",
        harness.today,
    );
    assert_eq!(not_json.status, 400);

    assert_eq!(body(&harness.get("/api/answers")), json!([]));
}

#[test]
fn losing_guess_returns_colors_and_null_answer() {
    let harness = Harness::new();
    harness.post("/api/answer", json!({"date": "2024-01-01", "answer": "apple"}));

    let reply = harness.post("/api/guess", json!({"guess": "ebbed"}));
    assert_eq!(reply.status, 200);
    assert_eq!(
        body(&reply),
        json!({
            "date": "2024-01-01",
            "guess": "ebbed",
            "result": ["yellow", "gray", "gray", "gray", "gray"],
            "win": false,
            "answer": null
        })
    );
}

#[test]
fn winning_guess_returns_answer() {
    let harness = Harness::new();

    let reply = harness.post("/api/guess", json!({"guess": " CRAZY "}));
    let data = body(&reply);
    assert_eq!(data["win"], true);
    assert_eq!(data["answer"], "crazy");
    assert_eq!(data["result"], json!(["green", "green", "green", "green", "green"]));
}

#[test]
fn guess_for_explicit_date_uses_that_date() {
    let harness = Harness::new();
    harness.post("/api/answer", json!({"date": "2024-02-02", "answer": "pride"}));

    let reply = harness.post("/api/guess", json!({"guess": "pride", "date": "2024-02-02"}));
    assert_eq!(body(&reply)["win"], true);
}

#[test]
fn invalid_guesses_are_bad_requests() {
    let harness = Harness::new();

    for payload in [json!({}), json!({"guess": "four"}), json!({"guess": "ab1de"})] {
        let reply = harness.post("/api/guess", payload.clone());
        assert_eq!(reply.status, 400, "payload {payload} should be rejected");
    }
}

#[test]
fn inconsistent_stored_answer_is_server_error() {
    let harness = Harness::new();
    let conn = wordle_core::db::open_db(harness.ctx.db_path()).unwrap();
    conn.execute(
        "INSERT INTO daily_answers (date, answer) VALUES ('2024-01-01', 'banana');",
        [],
    )
    .unwrap();
    drop(conn);

    let reply = harness.post("/api/guess", json!({"guess": "apple"}));
    assert_eq!(reply.status, 500);
    assert_eq!(body(&reply)["error"]["code"], "INTERNAL_ERROR");
    assert!(!reply.body.contains("banana"));
}

#[test]
fn malformed_stored_answer_is_not_revealed_on_error() {
    let harness = Harness::new();
    let conn = wordle_core::db::open_db(harness.ctx.db_path()).unwrap();
    conn.execute(
        "INSERT INTO daily_answers (date, answer) VALUES ('2024-01-01', 'Crane');",
        [],
    )
    .unwrap();
    drop(conn);

    let reply = harness.post("/api/guess", json!({"guess": "apple"}));
    assert_eq!(reply.status, 500);
    assert_eq!(body(&reply)["error"]["code"], "INTERNAL_ERROR");
    assert!(!reply.body.to_ascii_lowercase().contains("crane"));

    let reply = harness.get("/api/today-answer");
    assert_eq!(reply.status, 500);
    assert!(!reply.body.to_ascii_lowercase().contains("crane"));
}

#[test]
fn preflight_and_unknown_routes() {
    let harness = Harness::new();

    let preflight = dispatch(
        &harness.ctx,
        &Method::Options,
        "/api/guess",
        "",
        harness.today,
    );
    assert_eq!(preflight.status, 204);

    let unknown = harness.get("/api/nothing?x=1");
    assert_eq!(unknown.status, 404);
    assert_eq!(body(&unknown)["error"]["code"], "NOT_FOUND");
}
