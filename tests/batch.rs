//! CSV 배치 감사 테스트.
use coal_plant_audit::batch::{audit_reader, BatchTable};
use coal_plant_audit::export::{export_headers, to_csv_string};
use coal_plant_audit::metrics::{Indicator, EMISSION_FACTOR};
use coal_plant_audit::{AuditError, Field, Severity};

const HEADER: &str =
    "Coal Flow,GCV,Steam Flow,Steam Enthalpy,Feedwater Enthalpy,Power Output,Flue Temp,Ambient Temp";

fn csv(rows: &[&str]) -> String {
    let mut s = String::from(HEADER);
    for r in rows {
        s.push('\n');
        s.push_str(r);
    }
    s.push('\n');
    s
}

#[test]
fn missing_column_fails_before_rows() {
    let input = "Coal Flow,GCV,Steam Flow,Steam Enthalpy,Feedwater Enthalpy,Power Output,Ambient Temp\n1,2,3,4,5,6,7\n";
    match BatchTable::from_reader(input.as_bytes()) {
        Err(AuditError::SchemaMismatch { missing }) => assert_eq!(missing, vec!["Flue Temp"]),
        other => panic!("expected schema mismatch, got {other:?}"),
    }
}

#[test]
fn non_numeric_cell_excludes_only_that_row() {
    let input = csv(&[
        "100,5000,400,750,100,200,150,25",
        "100,n/a,400,750,100,200,150,25",
        "100,5000,400,750,100,200,150,25",
    ]);
    let report = audit_reader(input.as_bytes(), EMISSION_FACTOR).expect("batch");
    assert_eq!(report.processed(), 2);
    assert_eq!(report.excluded.len(), 1);
    assert_eq!(report.excluded[0].line, 3);
    assert_eq!(report.excluded[0].fields, vec![Field::Gcv]);
    assert_eq!(report.excluded_by_column(), vec![(Field::Gcv, 1)]);
}

#[test]
fn short_row_counts_as_missing_cells() {
    let input = csv(&["100,5000,400,750,100,200", "100,5000,400,750,100,200,150,25"]);
    let report = audit_reader(input.as_bytes(), EMISSION_FACTOR).expect("batch");
    assert_eq!(report.processed(), 1);
    assert_eq!(
        report.excluded[0].fields,
        vec![Field::FlueTemp, Field::AmbientTemp]
    );
}

#[test]
fn all_rows_invalid_is_empty_batch() {
    let input = csv(&[",5000,400,750,100,200,150,25", "x,x,x,x,x,x,x,x"]);
    match audit_reader(input.as_bytes(), EMISSION_FACTOR) {
        Err(AuditError::EmptyBatch { excluded }) => assert_eq!(excluded, 2),
        other => panic!("expected empty batch, got {other:?}"),
    }
    match audit_reader(HEADER.as_bytes(), EMISSION_FACTOR) {
        Err(AuditError::EmptyBatch { excluded }) => assert_eq!(excluded, 0),
        other => panic!("expected empty batch, got {other:?}"),
    }
}

#[test]
fn identical_rows_average_exactly() {
    let row = "123.4,4811.7,377.9,744.1,103.3,211.9,163.2,27.8";
    let input = csv(&[row; 9]);
    let report = audit_reader(input.as_bytes(), EMISSION_FACTOR).expect("batch");
    assert_eq!(report.average, report.rows[0].metrics);
    assert!(report.spreads.iter().all(|s| s.std_dev == 0.0));
}

#[test]
fn average_drives_recommendations_and_tally_counts_rows() {
    let input = csv(&[
        // 효율 90 (양호)
        "100,5000,450,1100,100,200,150,25",
        // 효율 52 (위험)
        "100,5000,400,750,100,200,150,25",
    ]);
    let report = audit_reader(input.as_bytes(), EMISSION_FACTOR).expect("batch");
    assert!((report.average.boiler_efficiency - 71.0).abs() < 1e-9);
    assert_eq!(report.recommendations[0].severity, Severity::Warning);
    assert_eq!(report.tally.count(Indicator::BoilerEfficiency, Severity::Good), 1);
    assert_eq!(report.tally.count(Indicator::BoilerEfficiency, Severity::Critical), 1);
    assert_eq!(report.tally.count(Indicator::BoilerEfficiency, Severity::Warning), 0);

    let eff = &report.spreads[0];
    assert_eq!(eff.indicator, Indicator::BoilerEfficiency);
    assert!((eff.min - 52.0).abs() < 1e-9);
    assert!((eff.max - 90.0).abs() < 1e-9);
}

#[test]
fn zero_power_rows_are_counted_not_excluded() {
    let input = csv(&["100,5000,400,750,100,0,150,25"]);
    let report = audit_reader(input.as_bytes(), EMISSION_FACTOR).expect("batch");
    assert_eq!(report.processed(), 1);
    assert_eq!(report.degenerate_rows, 1);
    assert_eq!(report.average.heat_rate, 0.0);
}

#[test]
fn headers_are_matched_after_trimming_and_extra_columns_kept() {
    let input = "Unit, Coal Flow ,GCV,Steam Flow,Steam Enthalpy,Feedwater Enthalpy,Power Output,Flue Temp,Ambient Temp\nU1,100,5000,400,750,100,200,150,25\n";
    let report = audit_reader(input.as_bytes(), EMISSION_FACTOR).expect("batch");
    assert_eq!(report.rows[0].measurement.coal_flow, 100.0);
    let headers = export_headers(&report);
    assert_eq!(headers.len(), 9 + 5);
    assert_eq!(headers[0], "Unit");
    assert_eq!(headers[9], Indicator::BoilerEfficiency.column());
}

#[test]
fn export_keeps_row_order_and_rounds_metrics() {
    let input = csv(&[
        "100,5000,400,750,100,200,150,25",
        "bad,5000,400,750,100,200,150,25",
        "100,5000,450,1100,100,200,150,25",
    ]);
    let report = audit_reader(input.as_bytes(), EMISSION_FACTOR).expect("batch");
    let out = to_csv_string(&report).expect("export");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(
        "Boiler Efficiency (%),Heat Rate (kcal/kWh),Specific Fuel Consumption (kg/kWh),Flue Gas Loss (%),CO2 Emissions (kg/hr)"
    ));
    assert_eq!(
        lines[1],
        "100,5000,400,750,100,200,150,25,52.00,2500.00,0.5000,0.90,232.00"
    );
    assert!(lines[2].starts_with("100,5000,450,1100,"));
    assert!(lines[2].contains(",90.00,"));
}

#[test]
fn export_pads_header_for_overlong_rows() {
    let input = csv(&["100,5000,400,750,100,200,150,25,note", "100,5000,400,750,100,200,150,25"]);
    let report = audit_reader(input.as_bytes(), EMISSION_FACTOR).expect("batch");
    let headers = export_headers(&report);
    assert_eq!(headers.len(), 9 + 5);
    assert_eq!(headers[8], "");
    let out = to_csv_string(&report).expect("export");
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[1].starts_with("100,5000,400,750,100,200,150,25,note,52.00,"), "{}", lines[1]);
    assert!(lines[2].starts_with("100,5000,400,750,100,200,150,25,,52.00,"), "{}", lines[2]);
}

#[test]
fn invalid_utf8_cells_do_not_abort_the_batch() {
    let mut input = b"Unit,Coal Flow,GCV,Steam Flow,Steam Enthalpy,Feedwater Enthalpy,Power Output,Flue Temp,Ambient Temp\n".to_vec();
    input.extend_from_slice(b"U1,100,5000,400,750,100,200,150,25\n");
    // CP949 "\xb9\xdf\xc0\xfc" 단위명은 통과 컬럼이라 행은 유지된다
    input.extend_from_slice(b"\xb9\xdf\xc0\xfc,100,5000,400,750,100,200,150,25\n");
    input.extend_from_slice(b"U3,100,\xff,400,750,100,200,150,25\n");
    let report = audit_reader(input.as_slice(), EMISSION_FACTOR).expect("batch");
    assert_eq!(report.processed(), 2);
    assert_eq!(report.excluded.len(), 1);
    assert_eq!(report.excluded[0].line, 4);
    assert_eq!(report.excluded[0].fields, vec![Field::Gcv]);
    assert_eq!(report.rows[1].cells.get(0), Some("\u{fffd}\u{fffd}\u{fffd}\u{fffd}"));
    let out = to_csv_string(&report).expect("export");
    assert_eq!(out.lines().count(), 3);
}
