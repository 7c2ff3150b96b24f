//! CLI 출력용 텍스트 보고서.

use crate::batch::BatchReport;
use crate::i18n::{keys, Translator};
use crate::metrics::{round_to, Indicator, MetricsRecord};
use crate::recommend::{Recommendation, Scope, Severity};

/// 지표 표: "라벨: 값 단위" 줄 목록.
pub fn metrics_lines(tr: &Translator, metrics: &MetricsRecord) -> Vec<String> {
    Indicator::ALL
        .iter()
        .map(|i| {
            format!(
                "{}: {} {}",
                tr.t(i.label_key()),
                metrics.formatted(*i),
                i.unit()
            )
        })
        .collect()
}

pub fn recommendation_lines(tr: &Translator, recs: &[Recommendation], scope: Scope) -> Vec<String> {
    recs.iter().map(|r| r.message(tr, scope)).collect()
}

/// 단일 감사 보고서.
pub fn render_single(tr: &Translator, metrics: &MetricsRecord, recs: &[Recommendation]) -> String {
    let mut lines = vec![tr.t(keys::REPORT_METRICS_HEADING).into_owned()];
    lines.extend(metrics_lines(tr, metrics));
    lines.push(tr.t(keys::REPORT_RECOMMENDATIONS_HEADING).into_owned());
    lines.extend(recommendation_lines(tr, recs, Scope::Single));
    lines.join("\n")
}

/// 배치 감사 보고서: 처리/제외 요약, 평균 지표, 분포, 행별 판정 집계, 평균 기반 권고.
pub fn render_batch(tr: &Translator, report: &BatchReport) -> String {
    let mut lines = vec![
        tr.fill(keys::REPORT_PROCESSED, &[("count", report.processed().to_string())]),
        tr.fill(keys::REPORT_EXCLUDED, &[("count", report.excluded.len().to_string())]),
    ];
    for (field, count) in report.excluded_by_column() {
        lines.push(tr.fill(
            keys::REPORT_EXCLUDED_COLUMN,
            &[("column", field.column().to_string()), ("count", count.to_string())],
        ));
    }
    for row in &report.excluded {
        let columns = row
            .fields
            .iter()
            .map(|f| f.column())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(tr.fill(
            keys::REPORT_EXCLUDED_ROW,
            &[("line", row.line.to_string()), ("columns", columns)],
        ));
    }
    if report.degenerate_rows > 0 {
        lines.push(tr.fill(
            keys::REPORT_DEGENERATE,
            &[("count", report.degenerate_rows.to_string())],
        ));
    }

    lines.push(tr.t(keys::REPORT_AGGREGATE_HEADING).into_owned());
    lines.extend(metrics_lines(tr, &report.average));

    lines.push(tr.t(keys::REPORT_SPREAD_HEADING).into_owned());
    for s in &report.spreads {
        let places = s.indicator.display_places();
        let fmt = |v: f64| format!("{:.*}", places, round_to(v, places));
        lines.push(tr.fill(
            keys::REPORT_SPREAD_ROW,
            &[
                ("label", tr.t(s.indicator.label_key()).into_owned()),
                ("mean", fmt(s.mean)),
                ("min", fmt(s.min)),
                ("max", fmt(s.max)),
                ("std", fmt(s.std_dev)),
            ],
        ));
    }

    lines.push(tr.t(keys::REPORT_TALLY_HEADING).into_owned());
    for indicator in Indicator::ALL {
        let [good, warning, critical] =
            Severity::ALL.map(|sev| report.tally.count(indicator, sev).to_string());
        lines.push(tr.fill(
            keys::REPORT_TALLY_ROW,
            &[
                ("label", tr.t(indicator.label_key()).into_owned()),
                ("good", good),
                ("warning", warning),
                ("critical", critical),
            ],
        ));
    }

    lines.push(tr.t(keys::REPORT_RECOMMENDATIONS_HEADING).into_owned());
    lines.extend(recommendation_lines(tr, &report.recommendations, Scope::Aggregate));
    lines.push(tr.t(keys::REPORT_MASKING_NOTE).into_owned());
    lines.join("\n")
}
