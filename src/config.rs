//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로
//! - `CLOUDINARY_CLOUD_NAME`: 미디어 호스트 계정 식별자
//! - `CLOUDINARY_API_KEY`: 미디어 호스트 액세스 키
//! - `CLOUDINARY_API_SECRET`: 미디어 호스트 액세스 시크릿
//! - `CLOUDINARY_API_BASE`: 업로드 API 기본 주소 (테스트/프록시용)
//! - `HOST`: 서버 바인딩 주소
//!
//! 포트 번호는 환경변수로 바꿀 수 없는 고정값([`PORT`])입니다.
//! 미디어 호스트 자격증명은 시작 시 검증하지 않습니다.
//! 값이 비어 있으면 첫 업로드 요청에서 업로드 실패로 드러납니다.

use std::env;

/// 서버가 수신 대기하는 고정 포트 번호
pub const PORT: u16 = 8000;

/// `DATABASE_URL`이 없을 때 사용하는 기본 SQLite 경로
/// `mode=rwc`: 파일이 없으면 새로 생성합니다.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:gallery.db?mode=rwc";

/// Cloudinary 업로드 API의 기본 주소
pub const DEFAULT_CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Clone)]
/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// `main`에서 각 구성요소(DB 풀, 미디어 클라이언트)에 나눠 전달됩니다.
pub struct Config {
    /// SQLite 데이터베이스 연결 문자열 (예: "sqlite:gallery.db?mode=rwc")
    pub database_url: String,
    /// 미디어 호스트 자격증명
    pub cloudinary: CloudinaryConfig,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호. 항상 [`PORT`]입니다.
    pub port: u16,
}

/// 미디어 호스트(Cloudinary) 접속 정보
#[derive(Debug, Clone, Default)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_base: String,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 항목에 기본값이 있으므로 실패하지 않습니다.
    /// 누락된 설정은 실제로 쓰이는 시점(DB 쿼리, 업로드)에 실패로 나타납니다.
    pub fn from_env() -> Self {
        Self {
            // unwrap_or_else(|_| ...): 환경변수가 없으면 기본값을 사용합니다.
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            cloudinary: CloudinaryConfig::from_env(),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: PORT,
        }
    }
}

impl CloudinaryConfig {
    /// `CLOUDINARY_*` 환경변수를 읽습니다.
    /// 없는 값은 빈 문자열(`unwrap_or_default`)로 남습니다.
    pub fn from_env() -> Self {
        Self {
            cloud_name: env::var("CLOUDINARY_CLOUD_NAME").unwrap_or_default(),
            api_key: env::var("CLOUDINARY_API_KEY").unwrap_or_default(),
            api_secret: env::var("CLOUDINARY_API_SECRET").unwrap_or_default(),
            api_base: env::var("CLOUDINARY_API_BASE")
                .unwrap_or_else(|_| DEFAULT_CLOUDINARY_API_BASE.to_string()),
        }
    }

    /// 세 가지 자격증명이 모두 채워져 있는지 확인합니다.
    /// 시작 시 경고 로그를 남기는 데만 사용합니다.
    pub fn is_complete(&self) -> bool {
        !self.cloud_name.is_empty() && !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}
