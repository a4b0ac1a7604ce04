//! 애플리케이션 설정 구조체.

use serde::{Deserialize, Serialize};

/// gRPC 연결 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrpcConfig {
    /// gRPC 수집 서버 엔드포인트 (기본 포트)
    #[serde(default = "default_grpc_endpoint")]
    pub grpc_endpoint: String,
    /// gRPC fallback 포트 목록 (기본 포트 연결 실패 시 순차 시도)
    #[serde(default = "default_grpc_fallback_ports")]
    pub grpc_fallback_ports: Vec<u16>,
    /// 연결 타임아웃 (초)
    #[serde(default = "default_grpc_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_grpc_request_timeout")]
    pub request_timeout_secs: u64,
    /// TLS 사용 여부
    #[serde(default)]
    pub use_tls: bool,
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            grpc_endpoint: default_grpc_endpoint(),
            grpc_fallback_ports: default_grpc_fallback_ports(),
            connect_timeout_secs: default_grpc_connect_timeout(),
            request_timeout_secs: default_grpc_request_timeout(),
            use_tls: false,
        }
    }
}

fn default_grpc_endpoint() -> String {
    "http://localhost:11800".to_string()
}

/// 수집 서버가 다른 포트에서 실행될 수 있음
fn default_grpc_fallback_ports() -> Vec<u16> {
    vec![11801]
}

fn default_grpc_connect_timeout() -> u64 {
    10
}

fn default_grpc_request_timeout() -> u64 {
    30
}
