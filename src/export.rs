//! 배치 결과를 CSV로 내보낸다. 원본 컬럼 뒤에 파생 지표 다섯 컬럼을 붙인다.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::batch::BatchReport;
use crate::error::AuditError;
use crate::metrics::Indicator;

/// 원본 컬럼 폭. 헤더보다 긴 행이 있으면 그 행의 셀 수를 따른다.
pub fn source_width(report: &BatchReport) -> usize {
    report
        .rows
        .iter()
        .map(|r| r.cells.len())
        .fold(report.headers.len(), usize::max)
}

/// 헤더 행: 원본 헤더(긴 행이 있으면 빈 이름으로 채움) + 지표 컬럼.
pub fn export_headers(report: &BatchReport) -> Vec<String> {
    let width = source_width(report);
    (0..width)
        .map(|i| report.headers.get(i).unwrap_or("").to_string())
        .chain(Indicator::ALL.iter().map(|i| i.column().to_string()))
        .collect()
}

/// 유효 행을 입력 순서대로 쓴다. 지표는 표시 정밀도로 반올림한다.
pub fn write_csv<W: io::Write>(report: &BatchReport, writer: W) -> Result<(), AuditError> {
    let width = source_width(report);
    if width > report.headers.len() {
        tracing::warn!(
            header = report.headers.len(),
            width,
            "rows wider than header, padding header with unnamed columns"
        );
    }
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(export_headers(report))?;
    for row in &report.rows {
        let mut record: Vec<String> = (0..width)
            .map(|i| row.cells.get(i).unwrap_or("").to_string())
            .collect();
        record.extend(Indicator::ALL.iter().map(|i| row.metrics.formatted(*i)));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(report: &BatchReport, path: P) -> Result<(), AuditError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(report, io::BufWriter::new(file))?;
    tracing::info!(path = %path.display(), rows = report.rows.len(), "exported audit results");
    Ok(())
}

/// 메모리 버퍼로 내보낸다(UTF-8).
pub fn to_csv_string(report: &BatchReport) -> Result<String, AuditError> {
    let mut buf = Vec::new();
    write_csv(report, &mut buf)?;
    String::from_utf8(buf).map_err(|e| AuditError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
