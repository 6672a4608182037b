use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Assignee, Category, DomainError, Task};
use crate::repository::TaskStore;
use crate::AppState;

/// Wire shape of a task. Field names are camelCase on the wire and the
/// optional fields are omitted entirely when unset, so every client sees
/// the same compact JSON regardless of which one wrote the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    pub id: String,
    pub title: String,
    pub date: String,
    pub is_completed: bool,
    pub assignee: Assignee,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl TaskBody {
    fn from_task(task: &Task) -> Self {
        TaskBody {
            id: task.id.clone(),
            title: task.title.clone(),
            date: task.date.to_string(),
            is_completed: task.is_completed,
            assignee: task.assignee,
            start_time: task.start_time.clone(),
            duration_minutes: task.duration_minutes,
            category: task.category,
        }
    }
}

/// Incoming task with every field optional. Presence is checked by hand so
/// that a half-filled body produces the endpoint's documented 400 message
/// instead of a serde parse error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
    #[serde(default)]
    pub assignee: Option<Assignee>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub category: Option<Category>,
}

/// Request body for create and update: the family partition plus the task.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEnvelope {
    #[serde(default)]
    pub family_code: Option<String>,
    #[serde(default)]
    pub task: Option<TaskInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyCodeQuery {
    #[serde(default)]
    pub family_code: Option<String>,
}

/// Error response, carried on the wire as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: &str) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    fn internal(message: &str) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
        .with_state(state)
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Assembles a domain task from a loose input body. Missing mandatory
/// fields report `missing_message`; a field that is present but malformed
/// reports its own validation message.
fn build_task(
    family_code: String,
    id: String,
    input: TaskInput,
    missing_message: &str,
) -> Result<Task, ApiError> {
    let (title, date, assignee) = match (present(input.title), present(input.date), input.assignee)
    {
        (Some(title), Some(date), Some(assignee)) => (title, date, assignee),
        _ => return Err(ApiError::bad_request(missing_message)),
    };
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request("date must be a calendar day formatted YYYY-MM-DD"))?;

    let task = Task {
        family_code,
        id,
        title,
        date,
        is_completed: input.is_completed.unwrap_or(false),
        assignee,
        start_time: present(input.start_time),
        duration_minutes: input.duration_minutes,
        category: input.category,
    };
    task.validate().map_err(|err| match err {
        DomainError::InvalidInput(message) => ApiError::bad_request(&message),
        other => ApiError::bad_request(&other.to_string()),
    })?;
    Ok(task)
}

/// GET /api/tasks?familyCode=…
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<FamilyCodeQuery>,
) -> Result<Json<Vec<TaskBody>>, ApiError> {
    let family_code = present(query.family_code)
        .ok_or_else(|| ApiError::bad_request("familyCode is required"))?;

    let tasks = state.tasks.list_by_family(&family_code).await.map_err(|err| {
        tracing::error!("listing tasks for {family_code} failed: {err}");
        ApiError::internal("Failed to fetch tasks")
    })?;
    Ok(Json(tasks.iter().map(TaskBody::from_task).collect()))
}

/// POST /api/tasks
async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<TaskEnvelope>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskBody>), ApiError> {
    const MISSING: &str = "familyCode and task with title, date, assignee are required";

    // Bodies the decoder refuses (malformed JSON, unknown enum strings) ride
    // the same 400 envelope as a missing field.
    let Json(body) = body.map_err(|rejection| ApiError::bad_request(&rejection.body_text()))?;
    let family_code = present(body.family_code).ok_or_else(|| ApiError::bad_request(MISSING))?;
    let input = body.task.ok_or_else(|| ApiError::bad_request(MISSING))?;

    // Clients may supply their own id so an optimistic row and the stored
    // row agree; otherwise the server mints one.
    let id = present(input.id.clone()).unwrap_or_else(|| Uuid::new_v4().to_string());
    let task = build_task(family_code, id, input, MISSING)?;

    state.tasks.insert(&task).await.map_err(|err| {
        tracing::error!("creating task {} failed: {err}", task.id);
        ApiError::internal("Failed to create task")
    })?;
    Ok((StatusCode::CREATED, Json(TaskBody::from_task(&task))))
}

/// PUT /api/tasks/{id}
///
/// Upserts: an update for an id nobody has seen lands as a fresh row. The
/// path id wins over any id carried in the body.
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TaskEnvelope>, JsonRejection>,
) -> Result<Json<TaskBody>, ApiError> {
    const MISSING: &str = "familyCode, task with required fields, and id are required";

    let Json(body) = body.map_err(|rejection| ApiError::bad_request(&rejection.body_text()))?;
    let family_code = present(body.family_code).ok_or_else(|| ApiError::bad_request(MISSING))?;
    let input = body.task.ok_or_else(|| ApiError::bad_request(MISSING))?;
    let task = build_task(family_code, id, input, MISSING)?;

    state.tasks.replace(&task).await.map_err(|err| {
        tracing::error!("updating task {} failed: {err}", task.id);
        ApiError::internal("Failed to update task")
    })?;
    Ok(Json(TaskBody::from_task(&task)))
}

/// DELETE /api/tasks/{id}?familyCode=…
///
/// Always 204 when the partition is known, whether or not the row still
/// existed.
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<FamilyCodeQuery>,
) -> Result<StatusCode, ApiError> {
    let family_code = present(query.family_code)
        .ok_or_else(|| ApiError::bad_request("familyCode and id are required"))?;

    state.tasks.delete(&family_code, &id).await.map_err(|err| {
        tracing::error!("deleting task {id} failed: {err}");
        ApiError::internal("Failed to delete task")
    })?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{open_in_memory, SqliteTaskStore};

    fn state() -> AppState {
        let conn = open_in_memory().unwrap();
        AppState {
            tasks: SqliteTaskStore::new(conn),
        }
    }

    fn input(title: &str, date: &str, assignee: Assignee) -> TaskInput {
        TaskInput {
            title: Some(title.to_string()),
            date: Some(date.to_string()),
            assignee: Some(assignee),
            ..TaskInput::default()
        }
    }

    fn envelope(family_code: &str, task: TaskInput) -> TaskEnvelope {
        TaskEnvelope {
            family_code: Some(family_code.to_string()),
            task: Some(task),
        }
    }

    async fn list(state: &AppState, family_code: &str) -> Vec<TaskBody> {
        let query = FamilyCodeQuery {
            family_code: Some(family_code.to_string()),
        };
        let Json(tasks) = list_tasks(State(state.clone()), Query(query)).await.unwrap();
        tasks
    }

    #[tokio::test]
    async fn test_list_requires_family_code() {
        let err = list_tasks(
            State(state()),
            Query(FamilyCodeQuery { family_code: None }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "familyCode is required");

        let err = list_tasks(
            State(state()),
            Query(FamilyCodeQuery {
                family_code: Some(String::new()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message, "familyCode is required");
    }

    #[tokio::test]
    async fn test_list_unknown_family_is_empty() {
        let state = state();
        assert!(list(&state, "ZZZZ99").await.is_empty());
    }

    #[tokio::test]
    async fn test_create_returns_created_task() {
        let state = state();
        let (status, Json(created)) = create_task(
            State(state.clone()),
            Ok(Json(envelope("AB12CD", input("Soccer practice", "2024-03-11", Assignee::Kid)))),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert!(!created.id.is_empty());
        assert_eq!(created.title, "Soccer practice");
        assert_eq!(created.date, "2024-03-11");
        assert_eq!(created.assignee, Assignee::Kid);
        assert!(!created.is_completed);

        let listed = list(&state, "AB12CD").await;
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_create_keeps_client_id() {
        let state = state();
        let body = TaskInput {
            id: Some("client-7".to_string()),
            ..input("Dentist", "2024-03-12", Assignee::Mom)
        };
        let (_, Json(created)) =
            create_task(State(state.clone()), Ok(Json(envelope("AB12CD", body))))
                .await
                .unwrap();
        assert_eq!(created.id, "client-7");
    }

    #[tokio::test]
    async fn test_create_requires_family_code_and_fields() {
        const MISSING: &str = "familyCode and task with title, date, assignee are required";
        let state = state();

        let no_family = TaskEnvelope {
            family_code: None,
            task: Some(input("Dishes", "2024-03-11", Assignee::Dad)),
        };
        let err = create_task(State(state.clone()), Ok(Json(no_family))).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, MISSING);

        let no_task = TaskEnvelope {
            family_code: Some("AB12CD".to_string()),
            task: None,
        };
        let err = create_task(State(state.clone()), Ok(Json(no_task))).await.unwrap_err();
        assert_eq!(err.message, MISSING);

        let no_assignee = TaskInput {
            assignee: None,
            ..input("Dishes", "2024-03-11", Assignee::Dad)
        };
        let err = create_task(State(state.clone()), Ok(Json(envelope("AB12CD", no_assignee))))
            .await
            .unwrap_err();
        assert_eq!(err.message, MISSING);

        // Nothing was persisted along the way.
        assert!(list(&state, "AB12CD").await.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_fields() {
        let state = state();

        let bad_date = input("Dishes", "tomorrow", Assignee::Dad);
        let err = create_task(State(state.clone()), Ok(Json(envelope("AB12CD", bad_date))))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let bad_start = TaskInput {
            start_time: Some("25:00".to_string()),
            ..input("Dishes", "2024-03-11", Assignee::Dad)
        };
        let err = create_task(State(state.clone()), Ok(Json(envelope("AB12CD", bad_start))))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let zero_duration = TaskInput {
            duration_minutes: Some(0),
            ..input("Dishes", "2024-03-11", Assignee::Dad)
        };
        let err = create_task(State(state.clone()), Ok(Json(envelope("AB12CD", zero_duration))))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        assert!(list(&state, "AB12CD").await.is_empty());
    }

    /// Runs the real body decoder over a raw payload and returns its refusal.
    async fn reject_body(raw: &str) -> JsonRejection {
        use axum::body::Body;
        use axum::extract::FromRequest;
        use axum::http::{header, Request};

        let request = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();
        Json::<TaskEnvelope>::from_request(request, &())
            .await
            .expect_err("body should not decode")
    }

    #[tokio::test]
    async fn test_undecodable_body_is_a_bad_request() {
        let state = state();

        // Well-formed JSON with a value outside the enum is a 400 in the
        // envelope, not the decoder's own 422.
        let unknown_assignee = reject_body(
            r#"{"familyCode":"AB12CD","task":{"title":"Dishes","date":"2024-03-11","assignee":"Uncle"}}"#,
        )
        .await;
        let err = create_task(State(state.clone()), Err(unknown_assignee))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("Uncle"));

        let truncated = reject_body(r#"{"familyCode":"AB12CD""#).await;
        let err = update_task(State(state.clone()), Path("t1".to_string()), Err(truncated))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        assert!(list(&state, "AB12CD").await.is_empty());
    }

    #[tokio::test]
    async fn test_update_requires_envelope() {
        let err = update_task(
            State(state()),
            Path("t1".to_string()),
            Ok(Json(TaskEnvelope::default())),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "familyCode, task with required fields, and id are required"
        );
    }

    #[tokio::test]
    async fn test_update_upserts_and_prefers_path_id() {
        let state = state();
        let body = TaskInput {
            id: Some("ignored".to_string()),
            is_completed: Some(true),
            ..input("Laundry", "2024-03-13", Assignee::Everyone)
        };
        let Json(updated) = update_task(
            State(state.clone()),
            Path("t9".to_string()),
            Ok(Json(envelope("AB12CD", body))),
        )
        .await
        .unwrap();

        assert_eq!(updated.id, "t9");
        assert!(updated.is_completed);

        let listed = list(&state, "AB12CD").await;
        assert_eq!(listed, vec![updated]);
    }

    #[tokio::test]
    async fn test_update_overwrites_existing_row() {
        let state = state();
        let (_, Json(created)) = create_task(
            State(state.clone()),
            Ok(Json(envelope("AB12CD", input("Draft", "2024-03-11", Assignee::Dad)))),
        )
        .await
        .unwrap();

        let replacement = TaskInput {
            category: Some(Category::Chore),
            ..input("Final", "2024-03-14", Assignee::Mom)
        };
        let Json(updated) = update_task(
            State(state.clone()),
            Path(created.id.clone()),
            Ok(Json(envelope("AB12CD", replacement))),
        )
        .await
        .unwrap();
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.category, Some(Category::Chore));

        let listed = list(&state, "AB12CD").await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Final");
    }

    #[tokio::test]
    async fn test_delete_requires_family_code() {
        let err = delete_task(
            State(state()),
            Path("t1".to_string()),
            Query(FamilyCodeQuery { family_code: None }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "familyCode and id are required");
    }

    #[tokio::test]
    async fn test_delete_is_silent_about_missing_rows() {
        let state = state();
        let (_, Json(created)) = create_task(
            State(state.clone()),
            Ok(Json(envelope("AB12CD", input("Trash", "2024-03-11", Assignee::Kid)))),
        )
        .await
        .unwrap();

        let query = || {
            Query(FamilyCodeQuery {
                family_code: Some("AB12CD".to_string()),
            })
        };
        let status = delete_task(State(state.clone()), Path(created.id.clone()), query())
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        // Deleting again, or deleting an id that never existed, looks the same.
        let status = delete_task(State(state.clone()), Path(created.id.clone()), query())
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        assert!(list(&state, "AB12CD").await.is_empty());
    }

    #[tokio::test]
    async fn test_families_do_not_see_each_other() {
        let state = state();
        create_task(
            State(state.clone()),
            Ok(Json(envelope("AAAA11", input("Ours", "2024-03-11", Assignee::Dad)))),
        )
        .await
        .unwrap();
        create_task(
            State(state.clone()),
            Ok(Json(envelope("BBBB22", input("Theirs", "2024-03-11", Assignee::Mom)))),
        )
        .await
        .unwrap();

        let ours = list(&state, "AAAA11").await;
        assert_eq!(ours.len(), 1);
        assert_eq!(ours[0].title, "Ours");
    }

    #[test]
    fn test_wire_shape_is_camel_case_and_compact() {
        let body = TaskBody {
            id: "t1".to_string(),
            title: "Piano".to_string(),
            date: "2024-03-11".to_string(),
            is_completed: false,
            assignee: Assignee::Kid,
            start_time: Some("16:30".to_string()),
            duration_minutes: None,
            category: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "t1",
                "title": "Piano",
                "date": "2024-03-11",
                "isCompleted": false,
                "assignee": "Kid",
                "startTime": "16:30",
            })
        );

        let parsed: TaskBody = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, body);
    }
}
