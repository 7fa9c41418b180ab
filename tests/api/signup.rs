use crate::activities::chess_club_participants;
use crate::helpers::{error_detail, TestApp};

#[tokio::test]
async fn signup_returns_a_200_and_a_confirmation_for_an_existing_activity() {
    let app = TestApp::spawn().await;

    let response = app
        .post_signup("Chess Club", "newstudent@mergington.edu")
        .await;

    assert_eq!(200, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Signed up newstudent@mergington.edu for Chess Club"
    );
}

#[tokio::test]
async fn signup_adds_the_participant_to_the_activity() {
    let app = TestApp::spawn().await;
    let email = "newstudent@mergington.edu";

    app.post_signup("Chess Club", email).await;

    let activities = app.activities_json().await;
    let participants = chess_club_participants(&activities);
    assert!(participants.contains(&email.to_owned()));
}

#[tokio::test]
async fn signup_for_a_nonexistent_activity_returns_a_404() {
    let app = TestApp::spawn().await;

    let response = app
        .post_signup("Nonexistent Club", "student@mergington.edu")
        .await;

    assert_eq!(404, response.status());
    assert_eq!(error_detail(response).await, "Activity not found");
}

#[tokio::test]
async fn duplicate_signup_returns_a_400() {
    let app = TestApp::spawn().await;
    // Already in Chess Club
    let email = "michael@mergington.edu";

    let response = app.post_signup("Chess Club", email).await;

    assert_eq!(400, response.status());
    assert_eq!(
        error_detail(response).await,
        "Student already signed up for this activity"
    );
}

#[tokio::test]
async fn a_student_can_sign_up_for_multiple_activities() {
    let app = TestApp::spawn().await;
    let email = "multisport@mergington.edu";

    let response = app.post_signup("Chess Club", email).await;
    assert_eq!(200, response.status());

    let response = app.post_signup("Programming Class", email).await;
    assert_eq!(200, response.status());

    let activities = app.activities_json().await;
    for activity in ["Chess Club", "Programming Class"] {
        let participants = activities[activity]["participants"].as_array().unwrap();
        assert!(
            participants.iter().any(|p| p == email),
            "{email} is missing from `{activity}`"
        );
    }
}

#[tokio::test]
async fn signup_works_for_activity_names_containing_spaces() {
    let app = TestApp::spawn().await;

    let response = app
        .post_signup("Science Olympiad", "scientist@mergington.edu")
        .await;

    assert_eq!(200, response.status());
}

#[tokio::test]
async fn activity_names_are_case_sensitive() {
    let app = TestApp::spawn().await;

    let response = app.post_signup("chess club", "test@mergington.edu").await;

    assert_eq!(404, response.status());
}

#[tokio::test]
async fn signup_with_an_invalid_email_returns_a_400() {
    let app = TestApp::spawn().await;
    let test_cases = [
        ("", "empty email"),
        ("definitely-not-an-email", "missing the @ symbol"),
        ("@mergington.edu", "missing the subject"),
    ];

    for (email, description) in test_cases {
        let response = app.post_signup("Chess Club", email).await;

        assert_eq!(
            400,
            response.status(),
            "The API did not return a 400 Bad Request when the email was {description}"
        );
    }
}

#[tokio::test]
async fn signup_without_an_email_parameter_returns_a_400() {
    let app = TestApp::spawn().await;

    let response = app
        .api_client
        .post(format!("{}/activities/Chess Club/signup", &app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(400, response.status());
}
