//! 측정값 한 건에서 성능/배출 지표 다섯 개를 계산한다.

use serde::{Deserialize, Serialize};

use crate::measurement::MeasurementRecord;

/// 석탄 1 kg당 CO2 배출량 [kg CO2/kg coal].
pub const EMISSION_FACTOR: f64 = 2.32;

/// 배가스 정압비열 근사값 [kcal/kg°C]
pub const FLUE_GAS_CP: f64 = 0.24;

/// 석탄 1 kg당 배가스 질량 [kg]. 단순 추정치.
pub const FLUE_GAS_PER_COAL: f64 = 1.5;

/// 측정값 한 건에서 파생된 지표. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// 보일러 효율 [%] (클램프하지 않음)
    pub boiler_efficiency: f64,
    /// 열소비율 [kcal/kWh]
    pub heat_rate: f64,
    /// 연료 원단위 [kg/kWh]
    pub specific_fuel_consumption: f64,
    /// 배가스 손실 [% of heat input]
    pub flue_gas_loss: f64,
    /// CO2 배출량 [kg/hr]
    pub co2_emissions: f64,
}

impl MetricsRecord {
    pub fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::BoilerEfficiency => self.boiler_efficiency,
            Indicator::HeatRate => self.heat_rate,
            Indicator::SpecificFuelConsumption => self.specific_fuel_consumption,
            Indicator::FlueGasLoss => self.flue_gas_loss,
            Indicator::Co2Emissions => self.co2_emissions,
        }
    }

    /// 지표 배열(평가 순서)에서 레코드를 만든다.
    pub fn from_values(values: [f64; 5]) -> Self {
        let [boiler_efficiency, heat_rate, specific_fuel_consumption, flue_gas_loss, co2_emissions] =
            values;
        Self {
            boiler_efficiency,
            heat_rate,
            specific_fuel_consumption,
            flue_gas_loss,
            co2_emissions,
        }
    }

    pub fn values(&self) -> [f64; 5] {
        Indicator::ALL.map(|i| self.get(i))
    }

    /// 표시 정밀도로 각 지표를 반올림한 문자열.
    pub fn formatted(&self, indicator: Indicator) -> String {
        let places = indicator.display_places();
        format!("{:.*}", places, round_to(self.get(indicator), places))
    }
}

/// 다섯 가지 지표. 배열 순서가 곧 권고 평가 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    BoilerEfficiency,
    HeatRate,
    SpecificFuelConsumption,
    FlueGasLoss,
    Co2Emissions,
}

impl Indicator {
    pub const ALL: [Indicator; 5] = [
        Indicator::BoilerEfficiency,
        Indicator::HeatRate,
        Indicator::SpecificFuelConsumption,
        Indicator::FlueGasLoss,
        Indicator::Co2Emissions,
    ];

    /// 내보내기 CSV 컬럼 이름.
    pub fn column(self) -> &'static str {
        match self {
            Indicator::BoilerEfficiency => "Boiler Efficiency (%)",
            Indicator::HeatRate => "Heat Rate (kcal/kWh)",
            Indicator::SpecificFuelConsumption => "Specific Fuel Consumption (kg/kWh)",
            Indicator::FlueGasLoss => "Flue Gas Loss (%)",
            Indicator::Co2Emissions => "CO2 Emissions (kg/hr)",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Indicator::BoilerEfficiency | Indicator::FlueGasLoss => "%",
            Indicator::HeatRate => "kcal/kWh",
            Indicator::SpecificFuelConsumption => "kg/kWh",
            Indicator::Co2Emissions => "kg/hr",
        }
    }

    /// 표시 소수 자릿수. 연료 원단위는 1 미만 값이므로 4자리.
    pub fn display_places(self) -> usize {
        match self {
            Indicator::SpecificFuelConsumption => 4,
            _ => 2,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Indicator::BoilerEfficiency => "indicator.boiler_efficiency",
            Indicator::HeatRate => "indicator.heat_rate",
            Indicator::SpecificFuelConsumption => "indicator.sfc",
            Indicator::FlueGasLoss => "indicator.flue_gas_loss",
            Indicator::Co2Emissions => "indicator.co2",
        }
    }
}

/// 기본 배출계수로 지표를 계산한다.
pub fn compute(record: &MeasurementRecord) -> MetricsRecord {
    compute_with_factor(record, EMISSION_FACTOR)
}

/// 지정한 배출계수[kg CO2/kg coal]로 지표를 계산한다.
///
/// 연료 열량 또는 발전 출력이 정확히 0이면 해당 지표는 0이 된다. 오류로 올리지 않는다.
pub fn compute_with_factor(record: &MeasurementRecord, emission_factor: f64) -> MetricsRecord {
    let energy_input = record.energy_input();
    let steam_energy = record.steam_energy();

    let boiler_efficiency = if energy_input == 0.0 {
        0.0
    } else {
        steam_energy / energy_input * 100.0
    };
    let (heat_rate, specific_fuel_consumption) = if record.power_output == 0.0 {
        (0.0, 0.0)
    } else {
        (
            energy_input / record.power_output,
            record.coal_flow / record.power_output,
        )
    };

    // 배가스 질량 = 1.5 × 석탄량, 현열 손실을 투입 열량 대비 %로 환산
    let flue_gas_loss = if energy_input == 0.0 {
        0.0
    } else {
        let flue_gas_flow = FLUE_GAS_PER_COAL * record.coal_flow;
        (record.flue_temp - record.ambient_temp) * FLUE_GAS_CP * flue_gas_flow / energy_input
            * 100.0
    };

    MetricsRecord {
        boiler_efficiency,
        heat_rate,
        specific_fuel_consumption,
        flue_gas_loss,
        co2_emissions: record.coal_flow * emission_factor,
    }
}

/// 소수 `places` 자리로 반올림한다(0.5는 0에서 먼 쪽).
pub fn round_to(value: f64, places: usize) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
