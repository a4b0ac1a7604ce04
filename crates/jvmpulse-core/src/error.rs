//! jvmpulse 핵심 에러 타입.
//!
//! 어댑터 crate는 전송 계층 에러를 `CoreError`로 매핑해 반환한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 설정 오류와 제출 경로의 전송 실패를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// Rate Limit 초과 (429)
    #[error("요청 한도 초과, {retry_after_secs}초 후 재시도")]
    RateLimit {
        /// 재시도 대기 시간 (초)
        retry_after_secs: u64,
    },

    /// 서비스 일시 불가 (503)
    #[error("서비스 일시 불가: {0}")]
    ServiceUnavailable(String),

    /// 네트워크 에러 (연결 실패, 타임아웃)
    #[error("네트워크 에러: {0}")]
    Network(String),
}
