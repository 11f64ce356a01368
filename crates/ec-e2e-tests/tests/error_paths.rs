//! E2E tests for prompts and the catch-all fallback. Every path answers 200.

mod helpers;

use axum::body::Body;
use axum::http::StatusCode;

use ec_diagnostics::reply::{
    FALLBACK_INSTRUCTIONS, PROMPT_MISSING_COOLANT_TEMP, PROMPT_MISSING_RPM,
};
use helpers::TestHarness;

#[tokio::test]
async fn e2e_no_numbers_prompts_for_rpm() {
    let h = TestHarness::with_sample_dataset();

    for message in ["", "   ", "my engine is making noise", "rpm? temp?"] {
        let (status, text) = h.chat(message).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, PROMPT_MISSING_RPM, "message {message:?}");
    }
}

#[tokio::test]
async fn e2e_one_number_prompts_for_coolant() {
    let h = TestHarness::with_sample_dataset();

    for message in ["700", "  rpm is 700  ", "3.5"] {
        let (status, text) = h.chat(message).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, PROMPT_MISSING_COOLANT_TEMP, "message {message:?}");
    }
}

#[tokio::test]
async fn e2e_missing_message_field() {
    let h = TestHarness::with_sample_dataset();

    let (status, text) = h
        .post_chat(Body::from(r#"{"text": "700 81"}"#), "application/json")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, FALLBACK_INSTRUCTIONS);
}

#[tokio::test]
async fn e2e_null_message() {
    let h = TestHarness::with_sample_dataset();

    let (status, text) = h
        .post_chat(Body::from(r#"{"message": null}"#), "application/json")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, FALLBACK_INSTRUCTIONS);
}

#[tokio::test]
async fn e2e_non_string_message() {
    let h = TestHarness::with_sample_dataset();

    for body in [
        r#"{"message": 700}"#,
        r#"{"message": ["700", "81"]}"#,
        r#""700 81""#,
    ] {
        let (status, text) = h.post_chat(Body::from(body), "application/json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, FALLBACK_INSTRUCTIONS, "body {body}");
    }
}

#[tokio::test]
async fn e2e_garbage_body() {
    let h = TestHarness::with_sample_dataset();

    let (status, text) = h.post_chat(Body::from("700 81"), "application/json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, FALLBACK_INSTRUCTIONS);

    let (status, text) = h.post_chat(Body::empty(), "application/json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, FALLBACK_INSTRUCTIONS);
}

/// An RPM too large to represent gets the fallback, not a diagnosis.
#[tokio::test]
async fn e2e_overflowing_rpm() {
    let h = TestHarness::with_sample_dataset();

    let message = format!("{} 81", "9".repeat(400));
    let (status, text) = h.chat(&message).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, FALLBACK_INSTRUCTIONS);
}

/// An overflowing coolant temperature is just very hot.
#[tokio::test]
async fn e2e_overflowing_coolant_is_overheating() {
    let h = TestHarness::with_sample_dataset();

    let message = format!("700 {}", "9".repeat(400));
    let (status, text) = h.chat(&message).await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.starts_with("Condition: Overheating\n"), "{text}");
}

/// Digits from other scripts are not readings.
#[tokio::test]
async fn e2e_non_ascii_digits_prompt_for_rpm() {
    let h = TestHarness::with_sample_dataset();

    let (_, text) = h.chat("\u{0667}\u{0660}\u{0660} \u{0668}\u{0661}").await;
    assert_eq!(text, PROMPT_MISSING_RPM);
}
