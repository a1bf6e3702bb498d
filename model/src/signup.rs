use serde::{Deserialize, Serialize};

/// Payload the signup function is invoked with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignupEvent {
    pub mailaddress: String,
    pub firstname: String,
}

#[test]
fn deserializes_invocation_payload() {
    let event: SignupEvent = serde_json::from_str(
        r#"{"mailaddress": "a@example.com", "firstname": "Ann", "source": "landing-page"}"#,
    )
    .unwrap();

    assert_eq!(event.mailaddress, "a@example.com");
    assert_eq!(event.firstname, "Ann");
}

#[test]
fn rejects_payload_without_firstname() {
    let result = serde_json::from_str::<SignupEvent>(r#"{"mailaddress": "a@example.com"}"#);
    assert!(result.is_err());
}
