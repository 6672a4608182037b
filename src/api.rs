//! Task API Client
//!
//! Frontend bindings to the backend task endpoints. Every call reports
//! failure as a plain message for the error banner.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::models::Task;

/// Query-component escaping: everything outside `encodeURIComponent`'s
/// unreserved set is percent-encoded.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Body for create and update calls
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskEnvelope<'a> {
    family_code: &'a str,
    task: &'a Task,
}

fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{origin}/api"))
        .unwrap_or_else(|| "/api".to_string())
}

pub async fn fetch_tasks(family_code: &str) -> Result<Vec<Task>, String> {
    let url = format!(
        "{}/tasks?familyCode={}",
        api_base(),
        utf8_percent_encode(family_code, QUERY)
    );
    let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err("Failed to fetch tasks".to_string());
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn create_task(family_code: &str, task: &Task) -> Result<Task, String> {
    let response = reqwest::Client::new()
        .post(format!("{}/tasks", api_base()))
        .json(&TaskEnvelope { family_code, task })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err("Failed to create task".to_string());
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn update_task(family_code: &str, task: &Task) -> Result<Task, String> {
    let response = reqwest::Client::new()
        .put(format!("{}/tasks/{}", api_base(), task.id))
        .json(&TaskEnvelope { family_code, task })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err("Failed to update task".to_string());
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn delete_task(family_code: &str, task_id: &str) -> Result<(), String> {
    let response = reqwest::Client::new()
        .delete(format!(
            "{}/tasks/{}?familyCode={}",
            api_base(),
            task_id,
            utf8_percent_encode(family_code, QUERY)
        ))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err("Failed to delete task".to_string());
    }
    Ok(())
}
