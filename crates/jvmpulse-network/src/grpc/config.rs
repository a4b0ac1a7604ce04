//! gRPC 클라이언트 설정
//!
//! `jvmpulse-core`의 `GrpcConfig`에 TLS 검증 도메인 옵션을 더한 어댑터 설정.
//! 서버 인증서는 시스템 루트 인증서로 검증한다.

use std::time::Duration;

use jvmpulse_core::config::GrpcConfig as CoreGrpcConfig;
use jvmpulse_core::error::CoreError;
use serde::{Deserialize, Serialize};
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

/// gRPC 클라이언트 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrpcConfig {
    /// gRPC 수집 서버 엔드포인트 (기본 포트)
    #[serde(default = "default_grpc_endpoint")]
    pub grpc_endpoint: String,

    /// gRPC fallback 포트 목록 (기본 포트 연결 실패 시 순차 시도)
    #[serde(default = "default_grpc_fallback_ports")]
    pub grpc_fallback_ports: Vec<u16>,

    /// 연결 타임아웃 (초)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// 요청 타임아웃 (초)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// TLS 사용 여부
    #[serde(default)]
    pub use_tls: bool,

    /// TLS 인증서 검증 도메인 (use_tls=true일 때 필수)
    #[serde(default)]
    pub tls_domain_name: Option<String>,
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            grpc_endpoint: default_grpc_endpoint(),
            grpc_fallback_ports: default_grpc_fallback_ports(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
            use_tls: false,
            tls_domain_name: None,
        }
    }
}

impl From<CoreGrpcConfig> for GrpcConfig {
    fn from(core: CoreGrpcConfig) -> Self {
        Self {
            grpc_endpoint: core.grpc_endpoint,
            grpc_fallback_ports: core.grpc_fallback_ports,
            connect_timeout_secs: core.connect_timeout_secs,
            request_timeout_secs: core.request_timeout_secs,
            use_tls: core.use_tls,
            tls_domain_name: None,
        }
    }
}

impl GrpcConfig {
    /// 시도할 모든 gRPC 엔드포인트 목록 반환 (기본 + fallback)
    pub fn all_endpoints(&self) -> Vec<String> {
        let mut endpoints = Vec::with_capacity(1 + self.grpc_fallback_ports.len());
        endpoints.push(self.grpc_endpoint.clone());

        // fallback 포트는 기본 엔드포인트의 호스트를 공유한다
        if let Some((host, _)) = self.grpc_endpoint.rsplit_once(':') {
            endpoints.extend(
                self.grpc_fallback_ports
                    .iter()
                    .map(|port| format!("{host}:{port}")),
            );
        }

        endpoints
    }

    pub fn build_endpoint(&self, endpoint_url: &str) -> Result<Endpoint, CoreError> {
        let mut endpoint = Endpoint::from_shared(endpoint_url.to_string())
            .map_err(|e| CoreError::Network(format!("invalid gRPC endpoint: {e}")))?
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .timeout(Duration::from_secs(self.request_timeout_secs));

        if self.use_tls {
            let tls = ClientTlsConfig::new()
                .domain_name(self.tls_domain()?.to_string())
                .with_native_roots();
            endpoint = endpoint
                .tls_config(tls)
                .map_err(|e| CoreError::Config(format!("invalid grpc tls configuration: {e}")))?;
        }

        Ok(endpoint)
    }

    pub async fn connect_channel(&self, endpoint_url: &str) -> Result<Channel, CoreError> {
        self.build_endpoint(endpoint_url)?
            .connect()
            .await
            .map_err(|e| CoreError::Network(format!("gRPC connection failed: {e}")))
    }

    /// use_tls=true면 경로 없는 검증 도메인이 있어야 한다
    fn tls_domain(&self) -> Result<&str, CoreError> {
        let domain = self
            .tls_domain_name
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                CoreError::Config(
                    "grpc.tls_domain_name is required when grpc.use_tls=true".to_string(),
                )
            })?;

        if domain.contains('/') {
            return Err(CoreError::Config(
                "grpc.tls_domain_name must be a hostname without path".to_string(),
            ));
        }

        Ok(domain)
    }
}

fn default_grpc_endpoint() -> String {
    "http://localhost:11800".to_string()
}

/// 수집 서버가 다른 포트에서 실행될 수 있음
fn default_grpc_fallback_ports() -> Vec<u16> {
    vec![11801]
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}
