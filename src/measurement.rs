use serde::{Deserialize, Serialize};

/// 감사 입력 항목. 배치 CSV 컬럼 순서와 동일한 정규 순서를 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    CoalFlow,
    Gcv,
    SteamFlow,
    SteamEnthalpy,
    FeedwaterEnthalpy,
    PowerOutput,
    FlueTemp,
    AmbientTemp,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::CoalFlow,
        Field::Gcv,
        Field::SteamFlow,
        Field::SteamEnthalpy,
        Field::FeedwaterEnthalpy,
        Field::PowerOutput,
        Field::FlueTemp,
        Field::AmbientTemp,
    ];

    /// 배치 CSV 헤더 이름.
    pub fn column(self) -> &'static str {
        match self {
            Field::CoalFlow => "Coal Flow",
            Field::Gcv => "GCV",
            Field::SteamFlow => "Steam Flow",
            Field::SteamEnthalpy => "Steam Enthalpy",
            Field::FeedwaterEnthalpy => "Feedwater Enthalpy",
            Field::PowerOutput => "Power Output",
            Field::FlueTemp => "Flue Temp",
            Field::AmbientTemp => "Ambient Temp",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Field::CoalFlow | Field::SteamFlow => "kg/hr",
            Field::Gcv | Field::SteamEnthalpy | Field::FeedwaterEnthalpy => "kcal/kg",
            Field::PowerOutput => "kW",
            Field::FlueTemp | Field::AmbientTemp => "°C",
        }
    }

    /// i18n 라벨 키.
    pub fn label_key(self) -> &'static str {
        match self {
            Field::CoalFlow => "field.coal_flow",
            Field::Gcv => "field.gcv",
            Field::SteamFlow => "field.steam_flow",
            Field::SteamEnthalpy => "field.steam_enthalpy",
            Field::FeedwaterEnthalpy => "field.feedwater_enthalpy",
            Field::PowerOutput => "field.power_output",
            Field::FlueTemp => "field.flue_temp",
            Field::AmbientTemp => "field.ambient_temp",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// 운전 측정값 한 건.
///
/// 음수 물리량은 여기서 걸러내지 않는다. 입력 경계(CLI/GUI/CSV)의 몫이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// 석탄 투입량 [kg/hr]
    pub coal_flow: f64,
    /// 석탄 고위발열량 GCV [kcal/kg]
    pub gcv: f64,
    /// 증기 발생량 [kg/hr]
    pub steam_flow: f64,
    /// 증기 엔탈피 [kcal/kg]
    pub steam_enthalpy: f64,
    /// 급수 엔탈피 [kcal/kg]
    pub feedwater_enthalpy: f64,
    /// 발전 출력 [kW]
    pub power_output: f64,
    /// 배가스 온도 [°C]
    pub flue_temp: f64,
    /// 외기 온도 [°C]
    pub ambient_temp: f64,
}

impl MeasurementRecord {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::CoalFlow => self.coal_flow,
            Field::Gcv => self.gcv,
            Field::SteamFlow => self.steam_flow,
            Field::SteamEnthalpy => self.steam_enthalpy,
            Field::FeedwaterEnthalpy => self.feedwater_enthalpy,
            Field::PowerOutput => self.power_output,
            Field::FlueTemp => self.flue_temp,
            Field::AmbientTemp => self.ambient_temp,
        }
    }

    /// 연료 투입 열량 [kcal/hr].
    pub fn energy_input(&self) -> f64 {
        self.coal_flow * self.gcv
    }

    /// 증기가 흡수한 유효 열량 [kcal/hr].
    pub fn steam_energy(&self) -> f64 {
        self.steam_flow * (self.steam_enthalpy - self.feedwater_enthalpy)
    }

    /// 분모(연료 열량 또는 발전 출력)가 정확히 0이어서 0-가드가 적용되는지 여부.
    pub fn has_degenerate_division(&self) -> bool {
        self.energy_input() == 0.0 || self.power_output == 0.0
    }
}

/// 파싱 경계에서 쓰는 미완성 측정값. 각 항목은 `Some(값)` 또는 누락(`None`)이다.
/// 누락값은 0으로 채우지 않는다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementDraft {
    values: [Option<f64>; 8],
}

impl MeasurementDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        self.values[index_of(field)] = value;
    }

    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        self.values[index_of(field)]
    }

    /// 누락된 항목 목록(정규 순서).
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    /// 모든 항목이 채워졌으면 측정값을, 아니면 누락 항목 목록을 반환한다.
    pub fn finish(&self) -> Result<MeasurementRecord, Vec<Field>> {
        match self.values {
            [Some(coal_flow), Some(gcv), Some(steam_flow), Some(steam_enthalpy), Some(feedwater_enthalpy), Some(power_output), Some(flue_temp), Some(ambient_temp)] => {
                Ok(MeasurementRecord {
                    coal_flow,
                    gcv,
                    steam_flow,
                    steam_enthalpy,
                    feedwater_enthalpy,
                    power_output,
                    flue_temp,
                    ambient_temp,
                })
            }
            _ => Err(self.missing()),
        }
    }
}

fn index_of(field: Field) -> usize {
    field as usize
}

/// 셀 문자열을 실수로 해석한다. 빈 칸, 숫자가 아닌 값, NaN/무한대는 누락으로 본다.
pub fn parse_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_rejects_non_numeric_and_non_finite() {
        assert_eq!(parse_cell(" 12.5 "), Some(12.5));
        assert_eq!(parse_cell("n/a"), None);
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("NaN"), None);
        assert_eq!(parse_cell("inf"), None);
    }

    #[test]
    fn draft_reports_missing_fields_in_order() {
        let draft = MeasurementDraft::new()
            .with(Field::CoalFlow, 1.0)
            .with(Field::SteamFlow, 2.0);
        let missing = draft.finish().unwrap_err();
        assert_eq!(missing.first(), Some(&Field::Gcv));
        assert_eq!(missing.len(), 6);
    }

    #[test]
    fn field_index_matches_canonical_order() {
        for (i, f) in Field::ALL.iter().enumerate() {
            assert_eq!(index_of(*f), i);
        }
    }
}
