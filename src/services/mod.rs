//! # 서비스(비즈니스 로직) 모듈
//!
//! 라우트 핸들러와 외부 시스템 사이의 로직을 담습니다.
//! - `media`: 이미지 파일을 미디어 호스트에 업로드하고 공개 URL을 받아오는 기능

pub mod media;

pub use media::*;
