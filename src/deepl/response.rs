//! Response decoding: status validation followed by typed body parsing.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, DecodeError};
use super::status::status_text;
use super::transport::RawResponse;

/// Error object DeepL sends along with a failed request.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    message: Option<Value>,
}

/// Passes 2xx responses through untouched; anything else becomes
/// [`ApiError::Status`], carrying the service message when the body has one.
pub async fn validate_status(response: RawResponse) -> Result<RawResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }

    let code = response.status();
    // A body that can't be read or parsed must not hide the status error.
    let message = response
        .bytes()
        .await
        .ok()
        .and_then(|body| error_message(&body));

    Err(ApiError::Status {
        code,
        reason: status_text(code).into_owned(),
        message,
    })
}

/// Reads the whole body and deserializes it into `T`.
///
/// An empty body yields `T::default()`.
pub async fn parse_body<T>(response: RawResponse) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let body = response.bytes().await?;

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(&body)
        .map_err(DecodeError::from)
        .map_err(ApiError::from)
}

/// Validates and parses `response` in one go.
pub async fn decode<T>(response: RawResponse) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let response = validate_status(response).await?;
    parse_body(response).await
}

fn error_message(body: &[u8]) -> Option<String> {
    let payload: ErrorPayload = serde_json::from_slice(body).ok()?;

    let message = match payload.message? {
        Value::String(s) => s,
        Value::Null => return None,
        other => other.to_string(),
    };

    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::deepl::types::{Translation, TranslationList, Usage};

    fn canonical(code: u16) -> Option<&'static str> {
        reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|s| s.canonical_reason())
    }

    #[tokio::test]
    async fn test_validate_accepts_every_success_code() {
        for code in 200..300 {
            let response = RawResponse::buffered(code, r#"{"message": "test message"}"#);
            let validated = validate_status(response).await;
            assert!(validated.is_ok(), "status {code} should be accepted");

            let empty = RawResponse::buffered(code, "");
            assert!(validate_status(empty).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_validate_rejects_standard_error_codes() {
        for code in (100..200).chain(300..600) {
            let Some(reason) = canonical(code) else {
                continue;
            };

            let response = RawResponse::buffered(code, r#"{"message": "test message"}"#);
            let err = validate_status(response).await.unwrap_err();
            let text = err.to_string();

            assert!(text.contains(&code.to_string()), "missing code in: {text}");
            assert!(text.contains(reason), "missing reason in: {text}");
            assert_eq!(err.status_code(), Some(code));
        }
    }

    #[tokio::test]
    async fn test_invalid_json_body_keeps_base_error() {
        let response = RawResponse::buffered(444, "test");
        let err = validate_status(response).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid response [444 Unknown HTTP error]");
        assert!(err.to_string().ends_with(']'));
    }

    #[tokio::test]
    async fn test_error_message_is_appended() {
        let response = RawResponse::buffered(444, r#"{"message": "This is test"}"#);
        let err = validate_status(response).await.unwrap_err();

        assert!(err.to_string().ends_with("This is test"));
        assert_eq!(
            err.to_string(),
            "Invalid response [444 Unknown HTTP error], This is test"
        );
    }

    #[tokio::test]
    async fn test_quota_exceeded() {
        let response = RawResponse::buffered(456, r#"{"message":"limit reached"}"#);
        let err = decode::<TranslationList>(response).await.unwrap_err();
        let text = err.to_string();

        assert!(text.contains("456"));
        assert!(text.contains("Quota exceeded"));
        assert!(text.ends_with("limit reached"));
    }

    #[tokio::test]
    async fn test_error_body_without_message() {
        let response = RawResponse::buffered(500, r#"{"detail": "boom"}"#);
        let err = validate_status(response).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid response [500 Internal Server Error]");

        let response = RawResponse::buffered(500, "");
        let err = validate_status(response).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid response [500 Internal Server Error]");
    }

    #[tokio::test]
    async fn test_non_string_message_is_rendered() {
        let response = RawResponse::buffered(400, r#"{"message": 42}"#);
        let err = validate_status(response).await.unwrap_err();
        assert!(err.to_string().ends_with(", 42"));
    }

    #[tokio::test]
    async fn test_parse_translation_list() {
        let body = r#"{"translations":[
            {"detected_source_language":"test","text":"test text"},
            {"detected_source_language":"test","text":"test text"},
            {"detected_source_language":"test","text":"test text"}
        ]}"#;

        let parsed: TranslationList = parse_body(RawResponse::buffered(200, body))
            .await
            .unwrap();
        assert_eq!(parsed.translations.len(), 3);
    }

    #[tokio::test]
    async fn test_parse_ignores_unknown_fields_and_keeps_order() {
        let body = r#"{"Translations":[
            {"detected_source_language":"EN","text":"first","this will be ignored":"test"},
            {"detected_source_language":"DE","text":"second","billed_characters":12}
        ],"extra":true}"#;

        let parsed: TranslationList = decode(RawResponse::buffered(200, body)).await.unwrap();
        assert_eq!(
            parsed.translations,
            vec![
                Translation {
                    detected_source_language: "EN".to_string(),
                    text: "first".to_string(),
                },
                Translation {
                    detected_source_language: "DE".to_string(),
                    text: "second".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_single_translation_scenario() {
        let body = r#"{"Translations":[{"detected_source_language":"EN","text":"Hola"}]}"#;
        let parsed: TranslationList = decode(RawResponse::buffered(200, body)).await.unwrap();

        assert_eq!(parsed.translations.len(), 1);
        assert_eq!(parsed.translations[0].text, "Hola");
    }

    #[tokio::test]
    async fn test_missing_fields_take_defaults() {
        let body = r#"{"character_count": 180118}"#;
        let usage: Usage = decode(RawResponse::buffered(200, body)).await.unwrap();

        assert_eq!(usage.character_count, 180_118);
        assert_eq!(usage.character_limit, 0);
        assert_eq!(usage.team_document_count, 0);
    }

    #[tokio::test]
    async fn test_empty_success_body_is_default() {
        let parsed: TranslationList = decode(RawResponse::buffered(204, "")).await.unwrap();
        assert!(parsed.translations.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let err = decode::<TranslationList>(RawResponse::buffered(200, "{not json"))
            .await
            .unwrap_err();

        assert!(err.is_decode());
        assert!(err.status_code().is_none());
        assert!(
            err.to_string()
                .ends_with("(occurred while parsing response)")
        );
    }

    #[tokio::test]
    async fn test_decode_is_repeatable() {
        let first = decode::<TranslationList>(RawResponse::buffered(456, r#"{"message":"x"}"#))
            .await
            .unwrap_err();
        let second = decode::<TranslationList>(RawResponse::buffered(456, r#"{"message":"x"}"#))
            .await
            .unwrap_err();
        assert_eq!(first.to_string(), second.to_string());

        let body = r#"{"translations":[{"detected_source_language":"EN","text":"Hola"}]}"#;
        let first: TranslationList = decode(RawResponse::buffered(200, body)).await.unwrap();
        let second: TranslationList = decode(RawResponse::buffered(200, body)).await.unwrap();
        assert_eq!(first, second);
    }
}
