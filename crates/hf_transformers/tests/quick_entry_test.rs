//! Quick entry points against a mock endpoint.
//!
//! Kept in its own test binary because it points the environment endpoint
//! at the mock server.

use hf_transformers::{
    quick_classify, quick_generate, CallContext, GenerationOptions, HfModel, TOKEN_ENV_VARS,
};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_default_sampling_options() {
    assert_eq!(
        serde_json::to_value(GenerationOptions::default_sampling()).unwrap(),
        json!({"max_length": 50, "temperature": 0.7, "do_sample": true})
    );
}

#[tokio::test]
async fn test_quick_entry_points_use_default_models() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/distilbert-base-uncased-finetuned-sst-2-english"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"label": "POSITIVE", "score": 0.99}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"generated_text": "a bright one"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    for name in TOKEN_ENV_VARS {
        std::env::remove_var(name);
    }
    std::env::remove_var("HF_INFERENCE_TIMEOUT");
    std::env::set_var("HF_INFERENCE_ENDPOINT", mock_server.uri());

    assert_eq!(HfModel::new("any").unwrap().base_url(), mock_server.uri());

    let ctx = CallContext::new();

    let classified = quick_classify(&ctx, "I love this").await.unwrap();
    assert_eq!(classified.label, "POSITIVE");
    assert_eq!(classified.score, 0.99);

    let generated = quick_generate(&ctx, "The future of AI is").await.unwrap();
    assert_eq!(generated.generated_text, "a bright one");

    let requests = mock_server.received_requests().await.unwrap();
    let generate_request = requests
        .iter()
        .find(|r| r.url.path() == "/models/gpt2")
        .expect("no generation request received");
    let body: Value = serde_json::from_slice(&generate_request.body).unwrap();
    assert_eq!(body["inputs"], "The future of AI is");
    assert_eq!(
        body["parameters"],
        json!({"max_length": 50, "temperature": 0.7, "do_sample": true})
    );
    assert!(generate_request.headers.get("authorization").is_none());

    std::env::remove_var("HF_INFERENCE_ENDPOINT");
}
