use coal_plant_audit::batch::audit_reader;
use coal_plant_audit::i18n::Translator;
use coal_plant_audit::report::{render_batch, render_single};
use coal_plant_audit::{compute, recommend, MeasurementRecord, EMISSION_FACTOR};

#[test]
fn single_report_lists_metrics_then_recommendations() {
    let tr = Translator::new("en");
    let m = compute(&MeasurementRecord {
        coal_flow: 100.0,
        gcv: 5000.0,
        steam_flow: 400.0,
        steam_enthalpy: 750.0,
        feedwater_enthalpy: 100.0,
        power_output: 200.0,
        flue_temp: 150.0,
        ambient_temp: 25.0,
    });
    let text = render_single(&tr, &m, &recommend(&m));
    let metrics_at = text.find("[Key Metrics]").expect("metrics heading");
    let recs_at = text.find("[Performance Recommendations]").expect("recs heading");
    assert!(metrics_at < recs_at);
    assert!(text.contains("Boiler Efficiency: 52.00 %"), "{text}");
    assert!(!text.contains("Avg:"));
}

#[test]
fn batch_report_summarises_exclusions() {
    let input = "Coal Flow,GCV,Steam Flow,Steam Enthalpy,Feedwater Enthalpy,Power Output,Flue Temp,Ambient Temp\n\
                 100,5000,400,750,100,200,150,25\n\
                 100,5000,400,750,100,200,,25\n";
    let report = audit_reader(input.as_bytes(), EMISSION_FACTOR).expect("batch");
    let text = render_batch(&Translator::new("en"), &report);
    assert!(text.contains("Rows processed: 1"));
    assert!(text.contains("Rows excluded: 1"));
    assert!(text.contains("line 3: Flue Temp"), "{text}");
    assert!(text.contains("Avg: 52.00 %"));
}
