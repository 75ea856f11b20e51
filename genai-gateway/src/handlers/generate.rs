use crate::dtos::GenerateResponse;
use crate::models::{UploadKind, UploadedFile};
use crate::services::{ContentPart, GenerationConfig, GenerationRequest, ProviderError};
use crate::startup::AppState;
use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

/// Temperature used by `/generate-text`. Upload routes send no generation config.
const TEXT_TEMPERATURE: f32 = 0.5;

const BODY_TOO_LARGE_MESSAGE: &str = "Request body exceeds the upload limit";

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidRequest(msg) => AppError::BadRequest(anyhow::anyhow!(msg)),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

pub async fn generate_text(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(AppError::PayloadTooLarge(BODY_TOO_LARGE_MESSAGE.to_string()));
        }
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Rejected generate-text body");
            return Err(AppError::BadRequest(anyhow::anyhow!("No body provided")));
        }
    };

    let prompt = body
        .get("prompt")
        .and_then(Value::as_str)
        .filter(|prompt| !prompt.is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Prompt is required")))?;

    tracing::info!(prompt_len = prompt.len(), "Text generation requested");

    let request = GenerationRequest::new(
        state.model.as_str(),
        vec![ContentPart::text(prompt)],
        GenerationConfig::with_temperature(TEXT_TEMPERATURE),
    )?;

    run_generation(&state, "/generate-text", request).await
}

pub async fn generate_from_image(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Result<Json<GenerateResponse>, AppError> {
    generate_from_upload(&state, UploadKind::Image, multipart).await
}

pub async fn generate_from_document(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Result<Json<GenerateResponse>, AppError> {
    generate_from_upload(&state, UploadKind::Document, multipart).await
}

pub async fn generate_from_audio(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Result<Json<GenerateResponse>, AppError> {
    generate_from_upload(&state, UploadKind::Audio, multipart).await
}

async fn generate_from_upload(
    state: &AppState,
    kind: UploadKind,
    multipart: Option<Multipart>,
) -> Result<Json<GenerateResponse>, AppError> {
    // A non-multipart request carries no file at all.
    let multipart = multipart
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!(kind.missing_file_message())))?;

    let upload = read_upload(kind, multipart).await?;

    tracing::info!(
        field = kind.field_name(),
        mime_type = %upload.mime_type,
        size = upload.data.len(),
        prompt_len = upload.prompt.len(),
        "File generation requested"
    );

    let request = GenerationRequest::new(
        state.model.as_str(),
        vec![
            ContentPart::text(upload.prompt),
            ContentPart::inline_data(upload.mime_type, upload.data),
        ],
        GenerationConfig::default(),
    )?;

    let route = match kind {
        UploadKind::Image => "/generate-from-image",
        UploadKind::Document => "/generate-from-document",
        UploadKind::Audio => "/generate-from-audio",
    };

    run_generation(state, route, request).await
}

/// Buffer the route's file field and the optional `prompt` field.
///
/// The first non-empty file field wins; unknown fields are skipped.
async fn read_upload(kind: UploadKind, mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    let mut prompt: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);

        match name.as_deref() {
            Some("prompt") => {
                prompt = Some(field.text().await.map_err(multipart_error)?);
            }
            Some(name) if name == kind.field_name() => {
                let mime_type = field
                    .content_type()
                    .filter(|content_type| !content_type.is_empty())
                    .unwrap_or(kind.default_mime_type())
                    .to_string();
                let data = field.bytes().await.map_err(multipart_error)?;

                if file.is_none() && !data.is_empty() {
                    file = Some((mime_type, data.to_vec()));
                }
            }
            _ => {}
        }
    }

    let (mime_type, data) =
        file.ok_or_else(|| AppError::BadRequest(anyhow::anyhow!(kind.missing_file_message())))?;

    let prompt = prompt
        .filter(|prompt| !prompt.is_empty())
        .unwrap_or_else(|| kind.default_prompt().to_string());

    Ok(UploadedFile {
        prompt,
        mime_type,
        data,
    })
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(BODY_TOO_LARGE_MESSAGE.to_string())
    } else {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", err))
    }
}

async fn run_generation(
    state: &AppState,
    route: &'static str,
    request: GenerationRequest,
) -> Result<Json<GenerateResponse>, AppError> {
    let output = state
        .generator
        .generate_content(&request)
        .await
        .map_err(|e| {
            tracing::error!(route = %route, error = %e, "Generation failed");
            AppError::from(e)
        })?;

    tracing::info!(route = %route, output_len = output.len(), "Generation completed");

    Ok(Json(GenerateResponse { output }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn provider_errors_map_to_upstream() {
        let err = AppError::from(ProviderError::ApiError("quota exceeded".to_string()));
        assert!(matches!(&err, AppError::Upstream(msg) if msg == "quota exceeded"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn rate_limit_keeps_upstream_message() {
        let err = AppError::from(ProviderError::RateLimited(
            "Gemini API error 429: Resource exhausted".to_string(),
        ));
        assert!(
            matches!(&err, AppError::Upstream(msg) if msg == "Gemini API error 429: Resource exhausted")
        );
    }

    #[test]
    fn invalid_request_maps_to_bad_request() {
        let err = AppError::from(ProviderError::InvalidRequest("empty".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
