//! 판정 구간과 권고 메시지 테스트.
use coal_plant_audit::i18n::Translator;
use coal_plant_audit::metrics::{compute, Indicator, MetricsRecord};
use coal_plant_audit::recommend::{
    classify_boiler_efficiency, classify_co2_emissions, classify_flue_gas_loss,
    classify_heat_rate, classify_specific_fuel_consumption, Scope,
};
use coal_plant_audit::{recommend, recommend_aggregate, MeasurementRecord, Severity};

fn metrics(values: [f64; 5]) -> MetricsRecord {
    MetricsRecord::from_values(values)
}

#[test]
fn boiler_efficiency_bands() {
    assert_eq!(classify_boiler_efficiency(85.01), Severity::Good);
    assert_eq!(classify_boiler_efficiency(85.0), Severity::Warning);
    assert_eq!(classify_boiler_efficiency(70.0), Severity::Warning);
    assert_eq!(classify_boiler_efficiency(69.99), Severity::Critical);
    assert_eq!(classify_boiler_efficiency(-5.0), Severity::Critical);
}

#[test]
fn lower_is_better_bands_treat_zero_as_critical() {
    assert_eq!(classify_heat_rate(2499.0), Severity::Good);
    assert_eq!(classify_heat_rate(2500.0), Severity::Warning);
    assert_eq!(classify_heat_rate(3000.0), Severity::Warning);
    assert_eq!(classify_heat_rate(3000.5), Severity::Critical);
    assert_eq!(classify_heat_rate(0.0), Severity::Critical);

    assert_eq!(classify_specific_fuel_consumption(0.59), Severity::Good);
    assert_eq!(classify_specific_fuel_consumption(0.75), Severity::Warning);
    assert_eq!(classify_specific_fuel_consumption(0.0), Severity::Critical);

    assert_eq!(classify_flue_gas_loss(4.99), Severity::Good);
    assert_eq!(classify_flue_gas_loss(10.0), Severity::Warning);
    assert_eq!(classify_flue_gas_loss(0.0), Severity::Critical);
    assert_eq!(classify_flue_gas_loss(-1.0), Severity::Critical);
}

#[test]
fn co2_has_no_critical_band_and_skips_non_positive() {
    assert_eq!(classify_co2_emissions(8000.01), Some(Severity::Warning));
    assert_eq!(classify_co2_emissions(8000.0), Some(Severity::Good));
    assert_eq!(classify_co2_emissions(0.0), None);
}

#[test]
fn classification_uses_unrounded_values() {
    // 85.004는 표시상 85.00이지만 85 초과이므로 양호
    assert_eq!(classify_boiler_efficiency(85.004), Severity::Good);
}

#[test]
fn recommendations_follow_indicator_order() {
    let recs = recommend(&metrics([90.0, 2400.0, 0.5, 4.0, 9000.0]));
    let order: Vec<Indicator> = recs.iter().map(|r| r.indicator).collect();
    assert_eq!(order, Indicator::ALL.to_vec());
    assert_eq!(recs[4].severity, Severity::Warning);
}

#[test]
fn zero_co2_drops_the_fifth_message() {
    let recs = recommend(&metrics([90.0, 2400.0, 0.5, 4.0, 0.0]));
    assert_eq!(recs.len(), 4);
    assert!(recs.iter().all(|r| r.indicator != Indicator::Co2Emissions));
}

#[test]
fn aggregate_of_identical_rows_matches_single() {
    let single = compute(&MeasurementRecord {
        coal_flow: 100.0,
        gcv: 5000.0,
        steam_flow: 400.0,
        steam_enthalpy: 750.0,
        feedwater_enthalpy: 100.0,
        power_output: 200.0,
        flue_temp: 150.0,
        ambient_temp: 25.0,
    });
    let rows = vec![single; 7];
    let aggregate = recommend_aggregate(&rows).expect("non-empty");
    assert_eq!(aggregate, recommend(&single));
    assert!(recommend_aggregate(&[]).is_none());
}

#[test]
fn aggregate_messages_carry_average_prefix() {
    let tr = Translator::new("en");
    let recs = recommend(&metrics([52.0, 2500.0, 0.5, 0.9, 232.0]));
    let single = recs[0].message(&tr, Scope::Single);
    let avg = recs[0].message(&tr, Scope::Aggregate);
    assert!(single.contains("52.00 %"), "{single}");
    assert!(avg.contains("Avg: 52.00 %"), "{avg}");
    assert!(single.starts_with(Severity::Critical.icon()));
}

#[test]
fn aggregate_mean_lands_on_warning_boundary() {
    // 합/개수 = 70.0, 주의 구간의 하한
    let rows: Vec<MetricsRecord> = [47.365, 128.095, 34.54]
        .into_iter()
        .map(|eff| metrics([eff, 2400.0, 0.5, 4.0, 232.0]))
        .collect();
    let recs = recommend_aggregate(&rows).expect("non-empty");
    assert_eq!(recs[0].indicator, Indicator::BoilerEfficiency);
    assert_eq!(recs[0].value, 70.0);
    assert_eq!(recs[0].severity, Severity::Warning);
}

#[test]
fn message_value_matches_metrics_grid_rounding() {
    let tr = Translator::new("en");
    // 4.125는 이진수로 정확히 표현되는 반올림 경계값
    let m = metrics([90.0, 2400.0, 0.5, 4.125, 232.0]);
    let flue = recommend(&m)[3];
    assert_eq!(flue.indicator, Indicator::FlueGasLoss);
    let shown = m.formatted(Indicator::FlueGasLoss);
    assert_eq!(shown, "4.13");
    assert!(flue.message(&tr, Scope::Single).contains("(4.13 %)"));
    assert!(flue.message(&tr, Scope::Aggregate).contains("Avg: 4.13 %"));
}

#[test]
fn severity_labels_are_translated() {
    let tr = Translator::new("ko");
    let labels: Vec<String> = Severity::ALL
        .iter()
        .map(|s| tr.t(s.label_key()).into_owned())
        .collect();
    assert_eq!(labels, ["양호", "주의", "위험"]);
}
