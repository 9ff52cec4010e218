#![cfg(feature = "serde")]
use std::fs::File;

use serde::Deserialize;
use vietqr::*;

#[derive(Deserialize)]
struct Fixture {
    #[serde(flatten)]
    request: EncodingRequest,
    qr: String,
}

#[test]
fn encode_fixtures() {
    let file = File::open("tests/test-data.json").expect("Can't open fixture file");
    let fixtures: Vec<Fixture> = serde_json::from_reader(file).expect("Can't parse fixtures");
    assert!(!fixtures.is_empty());
    for fixture in fixtures {
        assert_eq!(
            make_content(&fixture.request),
            fixture.qr,
            "request: {:?}",
            fixture.request
        );
    }
}

#[test]
fn request_round_trip() {
    let request = EncodingRequest::new("970436", "0123456789")
        .with_amount(50000.0)
        .with_description("thanh toan");
    let json = serde_json::to_string(&request).expect("Can't serialize request");
    assert_eq!(
        json,
        r#"{"bankId":"970436","accountId":"0123456789","amount":50000.0,"description":"thanh toan"}"#
    );
    let back: EncodingRequest = serde_json::from_str(&json).expect("Can't deserialize request");
    assert_eq!(back, request);
}

#[test]
fn request_optional_fields() {
    let request: EncodingRequest =
        serde_json::from_str(r#"{"bankId":"970436","accountId":"0123456789"}"#)
            .expect("Can't deserialize request");
    assert_eq!(request, EncodingRequest::new("970436", "0123456789"));
}
