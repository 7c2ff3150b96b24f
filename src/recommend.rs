//! 지표 값을 구간별로 판정해 정비 권고를 만든다.

use serde::{Deserialize, Serialize};

use crate::aggregate;
use crate::i18n::{keys, Translator};
use crate::metrics::{round_to, Indicator, MetricsRecord};

/// 권고 심각도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Good,
    Warning,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Good, Severity::Warning, Severity::Critical];

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Good => "✅",
            Severity::Warning => "⚠️",
            Severity::Critical => "❌",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Severity::Good => "severity.good",
            Severity::Warning => "severity.warning",
            Severity::Critical => "severity.critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Good => write!(f, "good"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// 권고가 단일 감사 결과인지 배치 평균인지 구분한다. 메시지 표기에만 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Single,
    Aggregate,
}

/// 판정 결과 한 건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub indicator: Indicator,
    pub severity: Severity,
    /// 판정에 쓰인 원값(반올림 전)
    pub value: f64,
}

impl Recommendation {
    /// 조치 안내 문구의 i18n 키.
    pub fn hint_key(&self) -> String {
        let indicator = match self.indicator {
            Indicator::BoilerEfficiency => "boiler_efficiency",
            Indicator::HeatRate => "heat_rate",
            Indicator::SpecificFuelConsumption => "sfc",
            Indicator::FlueGasLoss => "flue_gas_loss",
            Indicator::Co2Emissions => "co2",
        };
        format!("rec.{indicator}.{}", self.severity)
    }

    /// 값(소수 2자리)과 조치 안내를 담은 표시용 메시지를 만든다.
    pub fn message(&self, tr: &Translator, scope: Scope) -> String {
        let shown = round_to(self.value, 2);
        let value = match scope {
            Scope::Single => format!("{shown:.2} {}", self.indicator.unit()),
            Scope::Aggregate => format!(
                "{} {shown:.2} {}",
                tr.t(keys::REC_AVG_PREFIX),
                self.indicator.unit()
            ),
        };
        format!(
            "{} {} ({value}): {}",
            self.severity.icon(),
            tr.t(self.indicator.label_key()),
            tr.t(&self.hint_key())
        )
    }
}

/// 보일러 효율: >85 양호, [70,85] 주의, <70 위험.
pub fn classify_boiler_efficiency(value: f64) -> Severity {
    if value > 85.0 {
        Severity::Good
    } else if value >= 70.0 {
        Severity::Warning
    } else {
        Severity::Critical
    }
}

/// 열소비율: (0,2500) 양호, [2500,3000] 주의, 그 외 위험. 0은 출력 0에서 나온 값이므로 위험.
pub fn classify_heat_rate(value: f64) -> Severity {
    classify_lower_is_better(value, 2500.0, 3000.0)
}

/// 연료 원단위: (0,0.6) 양호, [0.6,0.75] 주의, 그 외 위험.
pub fn classify_specific_fuel_consumption(value: f64) -> Severity {
    classify_lower_is_better(value, 0.6, 0.75)
}

/// 배가스 손실: (0,5) 양호, [5,10] 주의, 그 외 위험.
pub fn classify_flue_gas_loss(value: f64) -> Severity {
    classify_lower_is_better(value, 5.0, 10.0)
}

/// CO2 배출량: >8000 주의, (0,8000] 정보성 양호, 0 이하는 판정하지 않는다.
pub fn classify_co2_emissions(value: f64) -> Option<Severity> {
    if value > 8000.0 {
        Some(Severity::Warning)
    } else if value > 0.0 {
        Some(Severity::Good)
    } else {
        None
    }
}

fn classify_lower_is_better(value: f64, good_below: f64, warning_up_to: f64) -> Severity {
    if value > 0.0 && value < good_below {
        Severity::Good
    } else if (good_below..=warning_up_to).contains(&value) {
        Severity::Warning
    } else {
        Severity::Critical
    }
}

/// 지표 하나를 판정한다.
pub fn classify(indicator: Indicator, value: f64) -> Option<Severity> {
    match indicator {
        Indicator::BoilerEfficiency => Some(classify_boiler_efficiency(value)),
        Indicator::HeatRate => Some(classify_heat_rate(value)),
        Indicator::SpecificFuelConsumption => Some(classify_specific_fuel_consumption(value)),
        Indicator::FlueGasLoss => Some(classify_flue_gas_loss(value)),
        Indicator::Co2Emissions => classify_co2_emissions(value),
    }
}

/// 지표 레코드 하나에 대한 권고 목록. 순서는 `Indicator::ALL`을 따른다.
pub fn recommend(metrics: &MetricsRecord) -> Vec<Recommendation> {
    Indicator::ALL
        .into_iter()
        .filter_map(|indicator| {
            let value = metrics.get(indicator);
            classify(indicator, value).map(|severity| Recommendation {
                indicator,
                severity,
                value,
            })
        })
        .collect()
}

/// 컬럼별 평균 레코드에 같은 규칙을 적용한다. 빈 입력이면 None.
pub fn recommend_aggregate(records: &[MetricsRecord]) -> Option<Vec<Recommendation>> {
    aggregate::mean(records).map(|avg| recommend(&avg))
}
