//! 여러 지표 레코드를 컬럼별로 집계한다.
//!
//! 평균 레코드 하나로 전체 판정을 내리는 방식은 행별 편차를 가릴 수 있다.
//! 그래서 평균과 함께 최소/최대/표준편차를 같이 제공한다.

use crate::metrics::{Indicator, MetricsRecord};

/// 누적 통계. 평균은 합/개수 산술평균이고, 모든 값이 같으면 그 값을 그대로 돌려준다.
/// 분산은 Welford 방식으로 누적한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningStats {
    count: usize,
    sum: f64,
    welford_mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            welford_mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl RunningStats {
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        let delta = value - self.welford_mean;
        self.welford_mean += delta / self.count as f64;
        self.m2 += delta * (value - self.welford_mean);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else if self.min == self.max {
            Some(self.min)
        } else {
            Some(self.sum / self.count as f64)
        }
    }

    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    /// 모표준편차.
    pub fn std_dev(&self) -> Option<f64> {
        (self.count > 0).then(|| (self.m2 / self.count as f64).sqrt())
    }
}

/// 지표별 분포 요약.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread {
    pub indicator: Indicator,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

/// 다섯 지표 각각의 누적 통계.
#[derive(Debug, Clone, Default)]
pub struct MetricsAccumulator {
    stats: [RunningStats; 5],
}

impl MetricsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, metrics: &MetricsRecord) {
        for (stats, value) in self.stats.iter_mut().zip(metrics.values()) {
            stats.push(value);
        }
    }

    /// 컬럼별 산술평균으로 만든 합성 레코드. 입력이 없으면 None.
    pub fn mean(&self) -> Option<MetricsRecord> {
        let mut values = [0.0; 5];
        for (slot, stats) in values.iter_mut().zip(&self.stats) {
            *slot = stats.mean()?;
        }
        Some(MetricsRecord::from_values(values))
    }

    pub fn spreads(&self) -> Vec<Spread> {
        Indicator::ALL
            .into_iter()
            .zip(&self.stats)
            .filter_map(|(indicator, s)| {
                Some(Spread {
                    indicator,
                    mean: s.mean()?,
                    min: s.min()?,
                    max: s.max()?,
                    std_dev: s.std_dev()?,
                })
            })
            .collect()
    }
}

impl<'a> Extend<&'a MetricsRecord> for MetricsAccumulator {
    fn extend<T: IntoIterator<Item = &'a MetricsRecord>>(&mut self, iter: T) {
        for m in iter {
            self.push(m);
        }
    }
}

/// N개 레코드의 컬럼별 평균. 빈 입력이면 None.
pub fn mean(records: &[MetricsRecord]) -> Option<MetricsRecord> {
    let mut acc = MetricsAccumulator::new();
    acc.extend(records);
    acc.mean()
}
