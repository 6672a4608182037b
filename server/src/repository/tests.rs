//! Repository Integration Tests
//!
//! Tests for SqliteTaskStore with an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::domain::{Assignee, Category, DomainError, Task};
    use crate::repository::{open_in_memory, SqliteTaskStore, TaskStore};

    fn store() -> SqliteTaskStore {
        SqliteTaskStore::new(open_in_memory().expect("Failed to init test DB"))
    }

    fn task(family_code: &str, id: &str, title: &str) -> Task {
        Task {
            family_code: family_code.to_string(),
            id: id.to_string(),
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            is_completed: false,
            assignee: Assignee::Everyone,
            start_time: None,
            duration_minutes: None,
            category: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_round_trip() {
        let store = store();

        let mut t = task("ABC123", "t1", "Soccer practice");
        t.assignee = Assignee::Kid;
        t.start_time = Some("16:00".to_string());
        t.duration_minutes = Some(90);
        t.category = Some(Category::Event);
        store.insert(&t).await.expect("insert failed");

        let listed = store.list_by_family("ABC123").await.expect("list failed");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], t);
    }

    #[tokio::test]
    async fn test_listing_is_partition_scoped() {
        let store = store();

        store.insert(&task("AAA111", "t1", "Ours")).await.unwrap();
        store.insert(&task("BBB222", "t1", "Theirs")).await.unwrap();
        store.insert(&task("BBB222", "t2", "Also theirs")).await.unwrap();

        let ours = store.list_by_family("AAA111").await.unwrap();
        assert_eq!(ours.len(), 1);
        assert_eq!(ours[0].title, "Ours");

        let theirs = store.list_by_family("BBB222").await.unwrap();
        assert_eq!(theirs.len(), 2);
        assert!(theirs.iter().all(|t| t.family_code == "BBB222"));

        assert!(store.list_by_family("CCC333").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_a_conflict() {
        let store = store();

        store.insert(&task("ABC123", "t1", "First")).await.unwrap();
        let err = store
            .insert(&task("ABC123", "t1", "Second"))
            .await
            .expect_err("duplicate id should be rejected");
        assert!(matches!(err, DomainError::Conflict(_)));

        // Same id in another partition is fine.
        store.insert(&task("XYZ789", "t1", "Elsewhere")).await.unwrap();
    }

    #[tokio::test]
    async fn test_replace_upserts_missing_row() {
        let store = store();

        let t = task("ABC123", "t1", "Created by replace");
        store.replace(&t).await.expect("replace should upsert");

        let listed = store.list_by_family("ABC123").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Created by replace");
    }

    #[tokio::test]
    async fn test_replace_overwrites_every_field() {
        let store = store();

        store.insert(&task("ABC123", "t1", "Before")).await.unwrap();

        let mut updated = task("ABC123", "t1", "After");
        updated.is_completed = true;
        updated.start_time = Some("09:30".to_string());
        updated.duration_minutes = Some(45);
        store.replace(&updated).await.unwrap();

        let listed = store.list_by_family("ABC123").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], updated);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = store();

        store.insert(&task("ABC123", "t1", "Doomed")).await.unwrap();
        store.delete("ABC123", "t1").await.expect("first delete failed");
        store.delete("ABC123", "t1").await.expect("second delete should also succeed");
        store.delete("ABC123", "never-existed").await.unwrap();

        assert!(store.list_by_family("ABC123").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_order_is_deterministic() {
        let store = store();

        let mut evening = task("ABC123", "a-evening", "Game night");
        evening.start_time = Some("19:00".to_string());
        let mut morning = task("ABC123", "b-morning", "Groceries");
        morning.start_time = Some("10:00".to_string());
        let untimed = task("ABC123", "c-untimed", "Water plants");
        let mut next_day = task("ABC123", "d-next", "Recycling");
        next_day.date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        next_day.start_time = Some("08:00".to_string());

        // Insert out of order on purpose.
        store.insert(&next_day).await.unwrap();
        store.insert(&untimed).await.unwrap();
        store.insert(&evening).await.unwrap();
        store.insert(&morning).await.unwrap();

        let ids: Vec<String> = store
            .list_by_family("ABC123")
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        // Within a day: timed tasks by start time, untimed last.
        assert_eq!(ids, vec!["b-morning", "a-evening", "c-untimed", "d-next"]);
    }
}
