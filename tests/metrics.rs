//! 성능 지표 계산 회귀 테스트.
use coal_plant_audit::metrics::{compute, compute_with_factor, round_to, Indicator};
use coal_plant_audit::MeasurementRecord;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn reference() -> MeasurementRecord {
    MeasurementRecord {
        coal_flow: 100.0,
        gcv: 5000.0,
        steam_flow: 400.0,
        steam_enthalpy: 750.0,
        feedwater_enthalpy: 100.0,
        power_output: 200.0,
        flue_temp: 150.0,
        ambient_temp: 25.0,
    }
}

#[test]
fn reference_plant_metrics() {
    let m = compute(&reference());
    assert_close("efficiency", m.boiler_efficiency, 52.0, 1e-9);
    assert_close("heat rate", m.heat_rate, 2500.0, 1e-9);
    assert_close("sfc", m.specific_fuel_consumption, 0.5, 1e-12);
    // 125 K × 0.24 × 150 kg/hr / 500000 kcal/hr
    assert_close("flue loss", m.flue_gas_loss, 0.9, 1e-9);
    assert_close("co2", m.co2_emissions, 232.0, 1e-9);
    assert_eq!(m.formatted(Indicator::SpecificFuelConsumption), "0.5000");
    assert_eq!(m.formatted(Indicator::HeatRate), "2500.00");
}

#[test]
fn zero_power_output_zeroes_rate_metrics_only() {
    let mut rec = reference();
    rec.power_output = 0.0;
    let m = compute(&rec);
    assert_eq!(m.heat_rate, 0.0);
    assert_eq!(m.specific_fuel_consumption, 0.0);
    assert_close("efficiency", m.boiler_efficiency, 52.0, 1e-9);
    assert!(rec.has_degenerate_division());
}

#[test]
fn zero_heat_input_zeroes_efficiency_and_flue_loss() {
    let mut rec = reference();
    rec.gcv = 0.0;
    let m = compute(&rec);
    assert_eq!(m.boiler_efficiency, 0.0);
    assert_eq!(m.flue_gas_loss, 0.0);
    assert_eq!(m.heat_rate, 0.0);
    assert_close("sfc", m.specific_fuel_consumption, 0.5, 1e-12);
    assert_close("co2", m.co2_emissions, 232.0, 1e-9);
}

#[test]
fn all_metrics_finite_for_degenerate_inputs() {
    let rec = MeasurementRecord {
        coal_flow: 0.0,
        gcv: 0.0,
        steam_flow: 0.0,
        steam_enthalpy: 0.0,
        feedwater_enthalpy: 0.0,
        power_output: 0.0,
        flue_temp: 0.0,
        ambient_temp: 0.0,
    };
    let m = compute(&rec);
    assert!(m.values().iter().all(|v| v.is_finite()));
}

#[test]
fn efficiency_rises_with_steam_enthalpy() {
    let mut prev = f64::NEG_INFINITY;
    for h in [500.0, 650.0, 750.0, 900.0] {
        let rec = MeasurementRecord {
            steam_enthalpy: h,
            ..reference()
        };
        let eff = compute(&rec).boiler_efficiency;
        assert!(eff > prev, "h={h} eff={eff}");
        prev = eff;
    }
}

#[test]
fn hotter_flue_gas_increases_loss() {
    let mut hot = reference();
    hot.flue_temp = 200.0;
    assert!(compute(&hot).flue_gas_loss > compute(&reference()).flue_gas_loss);
}

#[test]
fn feedwater_above_steam_enthalpy_gives_negative_efficiency() {
    let mut rec = reference();
    rec.feedwater_enthalpy = 800.0;
    assert!(compute(&rec).boiler_efficiency < 0.0);
}

#[test]
fn co2_scales_with_configured_factor() {
    let m = compute_with_factor(&reference(), 2.29);
    assert_close("co2", m.co2_emissions, 229.0, 1e-9);
    let doubled = MeasurementRecord {
        coal_flow: 200.0,
        ..reference()
    };
    assert_close(
        "linear",
        compute(&doubled).co2_emissions,
        2.0 * compute(&reference()).co2_emissions,
        1e-9,
    );
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(round_to(1.005_000_1, 2), 1.01);
    assert_eq!(round_to(-2.5, 0), -3.0);
    assert_eq!(round_to(0.123_46, 4), 0.1235);
}
