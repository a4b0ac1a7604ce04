//! gRPC 메트릭 클라이언트
//!
//! 수집 서버의 JvmMetricsService와 통신합니다.
//! 스냅샷 단건 제출을 처리합니다.

use async_trait::async_trait;
use jvmpulse_core::error::CoreError;
use tonic::transport::Channel;
use tonic::{Code, Status};
use tracing::{debug, error, info, warn};

use super::GrpcConfig;
use crate::proto::jvm::{
    jvm_metrics_service_client::JvmMetricsServiceClient, MetricSnapshot, SubmitAck,
};
use crate::seeder::JvmMetricsSink;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// gRPC 메트릭 클라이언트
pub struct GrpcMetricsClient {
    client: JvmMetricsServiceClient<Channel>,
    config: GrpcConfig,
}

impl GrpcMetricsClient {
    /// 새 gRPC 메트릭 클라이언트 생성
    ///
    /// 기본 엔드포인트부터 fallback 포트까지 순서대로 연결을 시도하고
    /// 처음 연결된 채널을 사용한다.
    pub async fn connect(config: GrpcConfig) -> Result<Self, CoreError> {
        let mut last_error = None;

        for endpoint_url in config.all_endpoints() {
            match config.connect_channel(&endpoint_url).await {
                Ok(channel) => {
                    info!(endpoint = %endpoint_url, "수집 서버 연결 완료");
                    return Ok(Self {
                        client: JvmMetricsServiceClient::new(channel),
                        config,
                    });
                }
                Err(e) => {
                    warn!(endpoint = %endpoint_url, error = %e, "수집 서버 연결 실패");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| CoreError::Network("사용 가능한 gRPC 엔드포인트 없음".to_string())))
    }

    /// 스냅샷 제출
    ///
    /// 서버가 수신을 확인하거나 호출이 실패할 때까지 완료되지 않습니다.
    pub async fn submit(&mut self, snapshot: MetricSnapshot) -> Result<SubmitAck, CoreError> {
        debug!(timestamp = snapshot.timestamp, "gRPC 스냅샷 제출");

        let response = self
            .client
            .submit(tonic::Request::new(snapshot))
            .await
            .map_err(|status| {
                error!(error = %status, "gRPC 스냅샷 제출 실패");
                map_submit_status(status)
            })?;

        Ok(response.into_inner())
    }

    /// 설정 조회
    pub fn config(&self) -> &GrpcConfig {
        &self.config
    }
}

#[async_trait]
impl JvmMetricsSink for GrpcMetricsClient {
    async fn submit(&mut self, snapshot: MetricSnapshot) -> Result<(), CoreError> {
        GrpcMetricsClient::submit(self, snapshot).await?;
        Ok(())
    }
}

/// 제출 호출의 gRPC status를 `CoreError`로 변환.
///
/// 단건 제출 RPC가 실제로 돌려주는 상태만 구분한다: 서버 과부하
/// (ResourceExhausted), 일시 불가(Unavailable). 나머지는 전송 실패로
/// 묶는다.
fn map_submit_status(status: Status) -> CoreError {
    match status.code() {
        Code::ResourceExhausted => CoreError::RateLimit {
            retry_after_secs: retry_after_secs(&status),
        },
        Code::Unavailable => {
            CoreError::ServiceUnavailable(format!("수집 서버 응답 불가: {}", status.message()))
        }
        code => CoreError::Network(format!("metric submit failed: {} ({code})", status.message())),
    }
}

fn retry_after_secs(status: &Status) -> u64 {
    status
        .metadata()
        .get("retry-after")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
