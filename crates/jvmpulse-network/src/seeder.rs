//! 합성 JVM 메트릭 시더.
//!
//! 타임스탬프 목록을 중복 제거한 뒤 타임스탬프마다 고정값 스냅샷 1건을
//! 만들어 수집 서버에 순차 제출한다. 인제스트 파이프라인 테스트용 입력
//! 생성기이며 실제 측정은 하지 않는다.

use std::collections::HashSet;

use async_trait::async_trait;
use jvmpulse_core::error::CoreError;
use tracing::info;

use crate::proto::jvm::{
    Cpu, GcEvent, GcKind, MemoryPoolUsage, MemoryUsage, MetricRecord, MetricSnapshot, PoolKind,
};

/// 스냅샷 전송 포트.
///
/// 구현: `grpc::GrpcMetricsClient`. 연결 수립/해제는 호출자 소유이며
/// 시더는 제출만 담당한다.
#[async_trait]
pub trait JvmMetricsSink: Send {
    /// 스냅샷 1건 제출. 서버가 수신을 확인할 때까지 완료되지 않는다.
    async fn submit(&mut self, snapshot: MetricSnapshot) -> Result<(), CoreError>;
}

/// 진행 상황 리포터 포트.
///
/// 시더 생성 시 주입한다. 전역 로거 상태에 의존하지 않는다.
pub trait ProgressReporter: Send + Sync {
    /// 누적 제출 건수 보고
    fn report(&self, submitted: usize);
}

/// tracing 기반 기본 리포터
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn report(&self, submitted: usize) {
        info!(submitted, "JVM 메트릭 제출 진행");
    }
}

/// 고정 테스트 인스턴스 ID
const INSTANCE_ID: i32 = 2;
/// 진행 보고 주기 (제출 건수)
const PROGRESS_INTERVAL: usize = 100;

const CPU_USAGE_PERCENT: f64 = 20.0;

/// 합성 JVM 메트릭 시더
///
/// 모든 수치는 고정 상수다. 메모리 값의 used > committed 조합은
/// 원본 픽스처 그대로 유지한다.
pub struct JvmMetricSeeder {
    instance_id: i32,
    progress: Box<dyn ProgressReporter>,
}

impl JvmMetricSeeder {
    /// 새 시더 생성 (tracing 리포터 사용)
    pub fn new() -> Self {
        Self::with_progress(Box::new(TracingProgress))
    }

    /// 진행 리포터를 주입하여 생성
    pub fn with_progress(progress: Box<dyn ProgressReporter>) -> Self {
        Self {
            instance_id: INSTANCE_ID,
            progress,
        }
    }

    /// 타임스탬프 배치를 중복 제거 후 순차 제출
    ///
    /// 고유 타임스탬프당 스냅샷 1건을 제출하고 제출 건수를 반환한다.
    /// 제출 순서는 집합 순회 순서를 따르며 보장되지 않는다.
    /// 제출이 실패하면 남은 타임스탬프를 건너뛰고 즉시 반환한다.
    pub async fn seed(
        &self,
        sink: &mut dyn JvmMetricsSink,
        times: &[i64],
    ) -> Result<usize, CoreError> {
        let unique: HashSet<i64> = times.iter().copied().collect();

        let mut submitted = 0usize;
        for &timestamp in &unique {
            sink.submit(self.build_snapshot(timestamp)).await?;
            submitted += 1;

            if submitted % PROGRESS_INTERVAL == 0 {
                self.progress.report(submitted);
            }
        }
        self.progress.report(submitted);

        Ok(submitted)
    }

    fn build_snapshot(&self, timestamp: i64) -> MetricSnapshot {
        MetricSnapshot {
            instance_id: self.instance_id,
            timestamp,
            record: Some(MetricRecord {
                cpu: Some(Cpu {
                    usage_percent: CPU_USAGE_PERCENT,
                }),
                gc_events: gc_events(),
                memory_regions: memory_regions(),
                memory_pools: memory_pools(),
            }),
        }
    }
}

impl Default for JvmMetricSeeder {
    fn default() -> Self {
        Self::new()
    }
}

/// 세대별 GC 이벤트 (NEW, OLD 순)
fn gc_events() -> Vec<GcEvent> {
    vec![
        GcEvent {
            kind: GcKind::New as i32,
            count: 2,
            duration_ms: 1000,
        },
        GcEvent {
            kind: GcKind::Old as i32,
            count: 4,
            duration_ms: 49,
        },
    ]
}

/// 메모리 영역 사용량 (heap, non-heap 순)
fn memory_regions() -> Vec<MemoryUsage> {
    [true, false]
        .into_iter()
        .map(|is_heap| MemoryUsage {
            is_heap,
            init: 20,
            max: 100,
            committed: 20,
            used: 60,
        })
        .collect()
}

/// 메모리 풀 사용량 (풀 종류별 1건)
fn memory_pools() -> Vec<MemoryPoolUsage> {
    [
        PoolKind::CodeCache,
        PoolKind::NewGen,
        PoolKind::OldGen,
        PoolKind::Survivor,
        PoolKind::PermGen,
        PoolKind::Metaspace,
    ]
    .into_iter()
    .map(|kind| MemoryPoolUsage {
        kind: kind as i32,
        init: 10,
        max: 100,
        committed: 10,
        used: 50,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// 제출 호출을 기록하는 테스트 싱크
    #[derive(Default)]
    struct RecordingSink {
        snapshots: Vec<MetricSnapshot>,
        calls: usize,
        /// n번째 호출에서 실패 주입
        fail_on_call: Option<usize>,
    }

    #[async_trait]
    impl JvmMetricsSink for RecordingSink {
        async fn submit(&mut self, snapshot: MetricSnapshot) -> Result<(), CoreError> {
            self.calls += 1;
            if self.fail_on_call == Some(self.calls) {
                return Err(CoreError::Network("주입된 실패".to_string()));
            }
            self.snapshots.push(snapshot);
            Ok(())
        }
    }

    /// 보고된 누적 건수를 기록하는 리포터
    struct RecordingProgress(Arc<Mutex<Vec<usize>>>);

    impl ProgressReporter for RecordingProgress {
        fn report(&self, submitted: usize) {
            self.0.lock().unwrap().push(submitted);
        }
    }

    fn seeder_with_recording_progress() -> (JvmMetricSeeder, Arc<Mutex<Vec<usize>>>) {
        let reports = Arc::new(Mutex::new(Vec::new()));
        let seeder =
            JvmMetricSeeder::with_progress(Box::new(RecordingProgress(Arc::clone(&reports))));
        (seeder, reports)
    }

    #[tokio::test]
    async fn duplicate_timestamps_collapse_to_one_submission() {
        let mut sink = RecordingSink::default();

        let submitted = JvmMetricSeeder::new()
            .seed(&mut sink, &[5, 5, 7])
            .await
            .unwrap();

        assert_eq!(submitted, 2);
        assert_eq!(sink.snapshots.len(), 2);

        let timestamps: HashSet<i64> = sink.snapshots.iter().map(|s| s.timestamp).collect();
        assert_eq!(timestamps, HashSet::from([5, 7]));
    }

    #[tokio::test]
    async fn empty_input_submits_nothing() {
        let mut sink = RecordingSink::default();
        let (seeder, reports) = seeder_with_recording_progress();

        let submitted = seeder.seed(&mut sink, &[]).await.unwrap();

        assert_eq!(submitted, 0);
        assert!(sink.snapshots.is_empty());
        // 최종 보고는 빈 배치에서도 나간다
        assert_eq!(*reports.lock().unwrap(), vec![0]);
    }

    #[tokio::test]
    async fn every_snapshot_carries_the_fixture_payload() {
        let mut sink = RecordingSink::default();

        JvmMetricSeeder::new().seed(&mut sink, &[42]).await.unwrap();

        assert_eq!(sink.snapshots.len(), 1);
        let snapshot = &sink.snapshots[0];
        assert_eq!(snapshot.instance_id, 2);
        assert_eq!(snapshot.timestamp, 42);

        let record = snapshot.record.as_ref().unwrap();
        assert_eq!(record.cpu.unwrap().usage_percent, 20.0);

        // GC 이벤트 2건: NEW, OLD 순
        assert_eq!(record.gc_events.len(), 2);
        let new_gc = &record.gc_events[0];
        assert_eq!(new_gc.kind, GcKind::New as i32);
        assert_eq!(new_gc.count, 2);
        assert_eq!(new_gc.duration_ms, 1000);
        let old_gc = &record.gc_events[1];
        assert_eq!(old_gc.kind, GcKind::Old as i32);
        assert_eq!(old_gc.count, 4);
        assert_eq!(old_gc.duration_ms, 49);

        // 메모리 영역 2건: heap, non-heap 순
        assert_eq!(record.memory_regions.len(), 2);
        assert!(record.memory_regions[0].is_heap);
        assert!(!record.memory_regions[1].is_heap);
        for region in &record.memory_regions {
            assert_eq!(region.init, 20);
            assert_eq!(region.max, 100);
            assert_eq!(region.committed, 20);
            assert_eq!(region.used, 60);
        }

        // 메모리 풀 6건: 풀 종류별 1건
        assert_eq!(record.memory_pools.len(), 6);
        let kinds: Vec<i32> = record.memory_pools.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PoolKind::CodeCache as i32,
                PoolKind::NewGen as i32,
                PoolKind::OldGen as i32,
                PoolKind::Survivor as i32,
                PoolKind::PermGen as i32,
                PoolKind::Metaspace as i32,
            ]
        );
        for pool in &record.memory_pools {
            assert_eq!(pool.init, 10);
            assert_eq!(pool.max, 100);
            assert_eq!(pool.committed, 10);
            assert_eq!(pool.used, 50);
        }
    }

    #[tokio::test]
    async fn submission_failure_stops_the_batch() {
        let mut sink = RecordingSink {
            fail_on_call: Some(4),
            ..Default::default()
        };
        let times: Vec<i64> = (0..10).collect();

        let result = JvmMetricSeeder::new().seed(&mut sink, &times).await;

        assert!(matches!(result, Err(CoreError::Network(_))));
        // 실패 이후 제출 없음, 실패 이전 제출은 유지
        assert_eq!(sink.calls, 4);
        assert_eq!(sink.snapshots.len(), 3);
    }

    #[tokio::test]
    async fn progress_reports_every_hundredth_and_final_count() {
        let mut sink = RecordingSink::default();
        let (seeder, reports) = seeder_with_recording_progress();
        let times: Vec<i64> = (0..250).collect();

        let submitted = seeder.seed(&mut sink, &times).await.unwrap();

        assert_eq!(submitted, 250);
        assert_eq!(*reports.lock().unwrap(), vec![100, 200, 250]);
    }

    #[tokio::test]
    async fn final_report_carries_the_distinct_count() {
        let mut sink = RecordingSink::default();
        let (seeder, reports) = seeder_with_recording_progress();

        seeder.seed(&mut sink, &[5, 5, 7]).await.unwrap();

        assert_eq!(*reports.lock().unwrap(), vec![2]);
    }
}
