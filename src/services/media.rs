//! # 미디어 업로드 서비스
//!
//! 메모리에 올라온 이미지 파일을 외부 미디어 호스트(Cloudinary)에 올리고,
//! 공개 URL을 돌려받는 기능을 제공합니다.
//!
//! 구성:
//! - `to_data_uri()`: 파일 바이트를 `data:<mime>;base64,<payload>` 문자열로 변환
//! - `MediaHost` 트레이트: "data URI 업로드 → URL" 연산 하나만 정의
//! - `CloudinaryClient`: `MediaHost`의 실제 구현 (서명된 업로드 요청)
//! - `MediaUploader`: 핸들러가 사용하는 진입점. 에러 로깅과 동시 업로드 담당
//!
//! 재시도와 타임아웃은 없습니다.
//! 여러 파일 중 하나가 실패하면 이미 올라간 파일은 미디어 호스트에 그대로 남습니다.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::config::CloudinaryConfig;
use crate::error::AppError;

/// 업로드할 파일 하나 (multipart 필드에서 읽은 내용)
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// 클라이언트가 보낸 원래 파일 이름 (로그용)
    pub file_name: Option<String>,
    /// 선언된 MIME 타입 (예: "image/png")
    pub content_type: String,
    pub bytes: Bytes,
}

/// 파일을 data URI 문자열로 인코딩합니다.
///
/// 예: `data:image/png;base64,iVBORw0KGgo...`
pub fn to_data_uri(file: &UploadFile) -> String {
    let payload = general_purpose::STANDARD.encode(&file.bytes);
    format!("data:{};base64,{}", file.content_type, payload)
}

/// 미디어 호스트가 돌려준 업로드 결과
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedMedia {
    pub url: String,
}

/// 미디어 호스트 호출 중 발생하는 에러
#[derive(Debug, Error)]
pub enum MediaError {
    /// 네트워크/TLS 등 전송 계층 실패
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 미디어 호스트가 요청을 거절함 (인증 실패, 용량 초과, 잘못된 페이로드 등)
    #[error("media host rejected upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// 성공 응답이지만 본문을 해석할 수 없음
    #[error("invalid response from media host: {0}")]
    InvalidResponse(String),
}

/// 외부 미디어 호스트 추상화
///
/// 핸들러는 이 트레이트 객체만 알고 있으므로,
/// 테스트에서는 네트워크 없이 동작하는 가짜 구현으로 바꿔 끼울 수 있습니다.
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload(&self, data_uri: String) -> Result<UploadedMedia, MediaError>;
}

// ============================================================================
// Cloudinary
// ============================================================================

#[derive(Debug, Deserialize)]
struct CloudinaryErrorBody {
    error: CloudinaryErrorDetail,
}

#[derive(Debug, Deserialize)]
struct CloudinaryErrorDetail {
    message: String,
}

/// Cloudinary 업로드 API 클라이언트
pub struct CloudinaryClient {
    http: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Result<Self, MediaError> {
        // 요청 타임아웃은 설정하지 않습니다. 느린 업로드는 끝날 때까지 기다립니다.
        let http = reqwest::Client::builder()
            .user_agent(concat!("secure-gallery/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    /// `{api_base}/{cloud_name}/image/upload`
    fn upload_url(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.config.api_base.trim_end_matches('/'),
            self.config.cloud_name
        )
    }
}

/// Cloudinary 요청 서명을 계산합니다.
///
/// 파라미터를 키 이름순으로 정렬해 `k=v`를 `&`로 잇고,
/// 그 뒤에 API 시크릿을 붙인 문자열의 SHA-1 다이제스트(16진수)입니다.
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl MediaHost for CloudinaryClient {
    async fn upload(&self, data_uri: String) -> Result<UploadedMedia, MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign_params(&[("timestamp", timestamp.as_str())], &self.config.api_secret);

        let form = reqwest::multipart::Form::new()
            .text("file", data_uri)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature);

        let response = self
            .http
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // 에러 본문은 {"error": {"message": "..."}} 형태입니다.
            // 해석할 수 없으면 상태 코드의 기본 문구를 사용합니다.
            let message = response
                .json::<CloudinaryErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());
            return Err(MediaError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<UploadedMedia>()
            .await
            .map_err(|e| MediaError::InvalidResponse(e.to_string()))
    }
}

// ============================================================================
// MediaUploader
// ============================================================================

/// 핸들러가 사용하는 업로드 진입점
///
/// 내부적으로 `Arc<dyn MediaHost>`를 감싸고 있어 clone 비용이 작습니다.
/// 프로세스 시작 시 하나 만들어 `AppState`로 모든 요청이 공유합니다.
#[derive(Clone)]
pub struct MediaUploader {
    host: Arc<dyn MediaHost>,
}

impl MediaUploader {
    pub fn new(host: impl MediaHost + 'static) -> Self {
        Self {
            host: Arc::new(host),
        }
    }

    /// 파일 하나를 업로드하고 공개 URL을 반환합니다.
    ///
    /// 미디어 호스트의 원래 에러는 로그로만 남기고,
    /// 호출자에게는 `AppError::UploadFailed`로 다시 알립니다.
    pub async fn upload_image(&self, file: &UploadFile) -> Result<String, AppError> {
        let data_uri = to_data_uri(file);

        match self.host.upload(data_uri).await {
            Ok(media) => {
                tracing::debug!(
                    file_name = ?file.file_name,
                    size = file.bytes.len(),
                    url = %media.url,
                    "uploaded image"
                );
                Ok(media.url)
            }
            Err(e) => {
                tracing::error!(file_name = ?file.file_name, error = %e, "Error uploading image");
                Err(AppError::UploadFailed(e))
            }
        }
    }

    /// 모든 파일을 동시에 업로드하고, 전부 끝날 때까지 기다립니다.
    ///
    /// # 반환값
    /// - `Ok(urls)`: 모든 업로드 성공. URL 순서는 `files` 순서와 같습니다.
    /// - `Err(AppError::UploadFailed)`: 하나라도 실패한 경우 (첫 번째 실패를 반환)
    pub async fn upload_all(&self, files: &[UploadFile]) -> Result<Vec<String>, AppError> {
        // join_all: 실패가 있어도 나머지 업로드가 모두 끝날 때까지 기다립니다.
        let results = futures::future::join_all(files.iter().map(|file| self.upload_image(file))).await;

        // Vec<Result<T, E>> → Result<Vec<T>, E>: 첫 번째 Err에서 멈춥니다.
        results.into_iter().collect()
    }
}
