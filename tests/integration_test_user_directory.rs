mod common;

use appointment_backend::domain::models::user::ExternalIdentity;
use common::TestApp;

fn identity(external_id: i64, first_name: &str) -> ExternalIdentity {
    ExternalIdentity::new(external_id, Some(first_name.to_string()), None, Some("handle".to_string()))
}

#[tokio::test]
async fn test_get_or_create_is_stable() {
    let app = TestApp::new().await;

    let first = app.state.users.get_or_create_user(&identity(321, "Ivan")).await.unwrap();
    let second = app.state.users.get_or_create_user(&identity(321, "Ivan")).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.role, "client");
    assert_eq!(app.count("SELECT COUNT(*) FROM users WHERE external_id = 321").await, 1);
}

#[tokio::test]
async fn test_concurrent_first_contact_creates_one_user() {
    let app = TestApp::new().await;

    let a = app.state.users.clone();
    let b = app.state.users.clone();
    let (left, right) = tokio::join!(
        async move { a.get_or_create_user(&identity(654, "Petr")).await },
        async move { b.get_or_create_user(&identity(654, "Petr")).await },
    );

    assert_eq!(left.unwrap().id, right.unwrap().id);
    assert_eq!(app.count("SELECT COUNT(*) FROM users WHERE external_id = 654").await, 1);
}

#[tokio::test]
async fn test_find_user_does_not_create() {
    let app = TestApp::new().await;

    let result = app.state.users.find_user(987).await;

    assert!(result.is_err());
    assert_eq!(app.count("SELECT COUNT(*) FROM users").await, 0);
}
