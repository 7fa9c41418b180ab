use crate::activities::chess_club_participants;
use crate::helpers::{error_detail, TestApp};

#[tokio::test]
async fn unregister_returns_a_200_and_a_confirmation_for_a_registered_student() {
    let app = TestApp::spawn().await;
    // Already in Chess Club
    let email = "michael@mergington.edu";

    let response = app.delete_unregister("Chess Club", email).await;

    assert_eq!(200, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        format!("Unregistered {email} from Chess Club")
    );
}

#[tokio::test]
async fn unregister_removes_the_participant_from_the_activity() {
    let app = TestApp::spawn().await;
    let email = "michael@mergington.edu";

    app.delete_unregister("Chess Club", email).await;

    let activities = app.activities_json().await;
    let participants = chess_club_participants(&activities);
    assert!(!participants.contains(&email.to_owned()));
}

#[tokio::test]
async fn unregister_from_a_nonexistent_activity_returns_a_404() {
    let app = TestApp::spawn().await;

    let response = app
        .delete_unregister("Nonexistent Club", "student@mergington.edu")
        .await;

    assert_eq!(404, response.status());
    assert_eq!(error_detail(response).await, "Activity not found");
}

#[tokio::test]
async fn unregister_without_prior_signup_returns_a_400() {
    let app = TestApp::spawn().await;

    let response = app
        .delete_unregister("Chess Club", "notsignedup@mergington.edu")
        .await;

    assert_eq!(400, response.status());
    assert_eq!(
        error_detail(response).await,
        "Student not signed up for this activity"
    );
}

#[tokio::test]
async fn a_student_can_sign_up_and_then_unregister() {
    let app = TestApp::spawn().await;
    let email = "flowtest@mergington.edu";

    let response = app.post_signup("Drama Club", email).await;
    assert_eq!(200, response.status());

    let activities = app.activities_json().await;
    let participants = activities["Drama Club"]["participants"].as_array().unwrap();
    assert!(participants.iter().any(|p| p == email));

    let response = app.delete_unregister("Drama Club", email).await;
    assert_eq!(200, response.status());

    let activities = app.activities_json().await;
    let participants = activities["Drama Club"]["participants"].as_array().unwrap();
    assert!(!participants.iter().any(|p| p == email));
}

#[tokio::test]
async fn unregister_works_for_activity_names_containing_spaces() {
    let app = TestApp::spawn().await;
    // Already in Science Olympiad
    let email = "alexander@mergington.edu";

    let response = app.delete_unregister("Science Olympiad", email).await;

    assert_eq!(200, response.status());
}
