/// Gemini generateContent call
///
/// One POST per generation attempt: both photos inline as base64 parts,
/// followed by the instruction text with the selected background fragment
/// embedded verbatim. The first inline image in the response is the
/// result. No retries, no timeout policy beyond the transport's.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{GenerateError, ServiceConfig};
use crate::state::data::EncodedImage;
use crate::state::session::GenerationRequest;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl RequestPart {
    fn image(image: &EncodedImage) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: image.mime_type.clone(),
                data: image.as_base64(),
            }),
            text: None,
        }
    }

    fn text(text: String) -> Self {
        Self {
            inline_data: None,
            text: Some(text),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// The instruction sent alongside the two photos.
/// The background fragment is embedded verbatim.
fn compose_prompt(background_prompt: &str) -> String {
    format!(
        "Create a photorealistic image of the person from the first image wearing \
         the garment from the second image. Preserve the person's face, pose, and \
         body shape. Place them in a {background_prompt}. The result should look \
         like a professional fashion photograph."
    )
}

fn build_request(request: &GenerationRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                RequestPart::image(&request.model_image),
                RequestPart::image(&request.dress_image),
                RequestPart::text(compose_prompt(&request.background_prompt)),
            ],
        }],
        generation_config: GenerationConfig {
            response_modalities: vec!["IMAGE", "TEXT"],
        },
    }
}

/// Best-effort message out of an API error body, e.g.
/// {"error": {"code": 429, "message": "...", "status": "RESOURCE_EXHAUSTED"}}
fn extract_api_error(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }
    String::from_utf8_lossy(body).trim().to_string()
}

/// Pull the composite image out of a successful response.
///
/// The model may interleave text parts with the image; the first inline
/// image wins. A response with no image at all (content block, refusal)
/// becomes a `NoImage` error carrying whatever reason the service gave.
fn extract_image(response: GenerateContentResponse) -> Result<EncodedImage, GenerateError> {
    let mut refusal_text = None;

    if let Some(candidate) = response.candidates.into_iter().next() {
        if let Some(content) = candidate.content {
            for part in content.parts {
                if let Some(inline) = part.inline_data {
                    let bytes = STANDARD.decode(inline.data.as_bytes())?;
                    return Ok(EncodedImage::new(inline.mime_type, bytes));
                }
                if refusal_text.is_none() {
                    refusal_text = part.text;
                }
            }
        }
        if refusal_text.is_none() {
            refusal_text = candidate.finish_reason;
        }
    }

    let reason = response
        .prompt_feedback
        .and_then(|f| f.block_reason)
        .or(refusal_text)
        .unwrap_or_else(|| "empty response".to_string());

    Err(GenerateError::NoImage(reason))
}

/// Run one generation attempt against the configured service.
pub async fn generate(
    config: &ServiceConfig,
    request: &GenerationRequest,
) -> Result<EncodedImage, GenerateError> {
    let body = build_request(request);

    debug!(
        "dispatching generation request: model={}, background=\"{}\"",
        config.model, request.background_prompt
    );

    let client = reqwest::Client::new();
    let response = client
        .post(config.generate_url())
        .header("x-goog-api-key", &config.api_key)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        return Err(GenerateError::Api {
            status: status.as_u16(),
            message: extract_api_error(&bytes),
        });
    }

    let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
    extract_image(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            model_image: EncodedImage::new("image/jpeg", vec![1, 2]),
            dress_image: EncodedImage::new("image/png", vec![3, 4]),
            background_prompt: "serene beach at sunset with golden light".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_background_verbatim() {
        let prompt = compose_prompt("serene beach at sunset with golden light");
        assert!(prompt.contains("serene beach at sunset with golden light"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(build_request(&request())).unwrap();

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts.as_array().unwrap().len(), 3);

        // Model photo, garment photo, then the instruction text
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inlineData"]["data"], STANDARD.encode([1u8, 2]));
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        let text = parts[2]["text"].as_str().unwrap();
        assert!(text.contains("serene beach at sunset with golden light"));

        // Image parts must not carry a text field, and vice versa
        assert!(parts[0].get("text").is_none());
        assert!(parts[2].get("inlineData").is_none());

        assert_eq!(body["generationConfig"]["responseModalities"][0], "IMAGE");
    }

    #[test]
    fn test_extract_image_takes_first_inline_part() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your image." },
                        { "inlineData": { "mimeType": "image/png", "data": STANDARD.encode([9u8, 8, 7]) } }
                    ]
                },
                "finishReason": "STOP"
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(json).unwrap();

        let image = extract_image(response).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, vec![9, 8, 7]);
    }

    #[test]
    fn test_refusal_surfaces_block_reason() {
        let json = serde_json::json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "SAFETY" }
        });
        let response: GenerateContentResponse = serde_json::from_value(json).unwrap();

        let err = extract_image(response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_text_only_response_is_no_image() {
        let json = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "I cannot generate that image." }] }
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(json).unwrap();

        let err = extract_image(response).unwrap_err();
        assert!(err.to_string().contains("I cannot generate that image."));
    }

    #[test]
    fn test_api_error_message_extraction() {
        let body = br#"{"error": {"code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(extract_api_error(body), "quota exceeded");

        // Unparseable bodies fall back to the raw text
        assert_eq!(extract_api_error(b"bad gateway"), "bad gateway");
    }
}
