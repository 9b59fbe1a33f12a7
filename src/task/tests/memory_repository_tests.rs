//! Contract tests for the in-memory task repository.

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DueDate, NewTask, TaskId, TaskPatch, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn payload(title: &str, status: TaskStatus) -> NewTask {
    NewTask::new(title, status, DueDate::new("2025-01-10")).expect("valid payload")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_an_identifier_and_persists(repository: InMemoryTaskRepository) {
    let created = repository
        .create(payload("Water the plants", TaskStatus::Pending))
        .await
        .expect("creation should succeed");

    assert!(!created.id().as_str().is_empty());
    let fetched = repository
        .get(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_preserves_insertion_order(repository: InMemoryTaskRepository) {
    let first = repository
        .create(payload("First", TaskStatus::Pending))
        .await
        .expect("creation should succeed");
    let second = repository
        .create(payload("Second", TaskStatus::Completed))
        .await
        .expect("creation should succeed");

    let listed = repository.list(None).await.expect("list should succeed");
    assert_eq!(listed, vec![first, second]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_filters_by_status(repository: InMemoryTaskRepository) {
    repository
        .create(payload("Open work", TaskStatus::Pending))
        .await
        .expect("creation should succeed");
    let done = repository
        .create(payload("Done work", TaskStatus::Completed))
        .await
        .expect("creation should succeed");

    let listed = repository
        .list(Some(TaskStatus::Completed))
        .await
        .expect("list should succeed");
    assert_eq!(listed, vec![done]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_missing_returns_not_found(repository: InMemoryTaskRepository) {
    let id = TaskId::new("missing").expect("valid task id");
    let result = repository.get(&id).await;
    assert!(matches!(result, Err(TaskRepositoryError::NotFound(gone)) if gone == id));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_applies_the_patch(repository: InMemoryTaskRepository) {
    let created = repository
        .create(payload("Draft report", TaskStatus::Pending))
        .await
        .expect("creation should succeed");

    let updated = repository
        .update(
            created.id(),
            TaskPatch::new()
                .with_title("Final report")
                .with_status(TaskStatus::Completed),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), "Final report");
    assert_eq!(updated.status(), &TaskStatus::Completed);
    let fetched = repository
        .get(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_returns_not_found(repository: InMemoryTaskRepository) {
    let id = TaskId::new("missing").expect("valid task id");
    let result = repository.update(&id, TaskPatch::new().with_title("x")).await;
    assert!(matches!(result, Err(TaskRepositoryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_a_blank_title(repository: InMemoryTaskRepository) {
    let created = repository
        .create(payload("Draft report", TaskStatus::Pending))
        .await
        .expect("creation should succeed");

    let result = repository
        .update(created.id(), TaskPatch::new().with_title("   "))
        .await;

    assert!(matches!(result, Err(TaskRepositoryError::Validation(_))));
    let fetched = repository
        .get(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched.title(), "Draft report");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_record_once(repository: InMemoryTaskRepository) {
    let created = repository
        .create(payload("Throwaway", TaskStatus::Pending))
        .await
        .expect("creation should succeed");

    repository
        .delete(created.id())
        .await
        .expect("deletion should succeed");
    let listed = repository.list(None).await.expect("list should succeed");
    assert!(listed.is_empty());

    let second = repository.delete(created.id()).await;
    assert!(matches!(second, Err(TaskRepositoryError::NotFound(_))));
}
