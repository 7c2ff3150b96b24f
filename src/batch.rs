//! CSV 배치 감사. 표를 읽어 검증하고, 행별 지표와 평균 기반 권고를 만든다.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ByteRecord, StringRecord};

use crate::aggregate::{MetricsAccumulator, Spread};
use crate::error::AuditError;
use crate::measurement::{parse_cell, Field, MeasurementDraft, MeasurementRecord};
use crate::metrics::{self, Indicator, MetricsRecord};
use crate::recommend::{self, Recommendation, Severity};

/// 업로드된 표의 한 행.
#[derive(Debug, Clone)]
pub struct TableRow {
    /// CSV 파일 기준 줄 번호(헤더가 1)
    pub line: u64,
    /// 원본 셀. UTF-8이 아닌 바이트는 U+FFFD로 바꾼다. 내보내기 시 그대로 쓴다.
    pub cells: StringRecord,
    /// 파싱 결과. 실패하면 누락/비숫자 항목 목록.
    pub parsed: Result<MeasurementRecord, Vec<Field>>,
}

/// 필수 컬럼 검증을 통과한 표.
#[derive(Debug, Clone)]
pub struct BatchTable {
    headers: StringRecord,
    rows: Vec<TableRow>,
}

impl BatchTable {
    /// CSV를 읽는다. 필수 컬럼이 하나라도 없으면 행을 읽기 전에 `SchemaMismatch`로 끝낸다.
    ///
    /// 셀은 바이트로 읽는다. 필수 셀이 UTF-8이 아니면 그 항목은 누락으로 보고 행만 제외한다.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, AuditError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);
        let headers = decode_lossy(rdr.byte_headers()?);
        let columns = locate_columns(&headers)?;

        let mut rows = Vec::new();
        for (idx, result) in rdr.byte_records().enumerate() {
            let raw = result?;
            let line = raw
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2);
            let parsed = parse_row(&raw, &columns);
            rows.push(TableRow {
                line,
                cells: decode_lossy(&raw),
                parsed,
            });
        }
        Ok(Self { headers, rows })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AuditError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(io::BufReader::new(file))
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn locate_columns(headers: &StringRecord) -> Result<[usize; 8], AuditError> {
    let mut columns = [0usize; 8];
    let mut missing = Vec::new();
    for (slot, field) in columns.iter_mut().zip(Field::ALL) {
        match headers.iter().position(|h| h.trim() == field.column()) {
            Some(idx) => *slot = idx,
            None => missing.push(field.column()),
        }
    }
    if missing.is_empty() {
        Ok(columns)
    } else {
        Err(AuditError::SchemaMismatch { missing })
    }
}

fn parse_row(raw: &ByteRecord, columns: &[usize; 8]) -> Result<MeasurementRecord, Vec<Field>> {
    let mut draft = MeasurementDraft::new();
    for (field, idx) in Field::ALL.into_iter().zip(columns) {
        let value = raw
            .get(*idx)
            .and_then(|b| std::str::from_utf8(b).ok())
            .and_then(parse_cell);
        draft.set(field, value);
    }
    draft.finish()
}

fn decode_lossy(raw: &ByteRecord) -> StringRecord {
    raw.iter().map(String::from_utf8_lossy).collect()
}

/// 지표가 계산된 유효 행.
#[derive(Debug, Clone)]
pub struct AuditedRow {
    pub line: u64,
    pub cells: StringRecord,
    pub measurement: MeasurementRecord,
    pub metrics: MetricsRecord,
}

/// 제외된 행. 어느 줄의 어느 컬럼이 문제였는지 담는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcludedRow {
    pub line: u64,
    pub fields: Vec<Field>,
}

impl ExcludedRow {
    pub fn to_error(&self) -> AuditError {
        AuditError::InvalidMeasurement {
            line: self.line,
            fields: self.fields.clone(),
        }
    }
}

/// 행별 판정 결과를 지표/심각도별로 센 표.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeverityTally {
    counts: [[usize; 3]; 5],
}

impl SeverityTally {
    pub fn record(&mut self, recommendations: &[Recommendation]) {
        for rec in recommendations {
            self.counts[indicator_index(rec.indicator)][severity_index(rec.severity)] += 1;
        }
    }

    pub fn count(&self, indicator: Indicator, severity: Severity) -> usize {
        self.counts[indicator_index(indicator)][severity_index(severity)]
    }
}

fn indicator_index(indicator: Indicator) -> usize {
    indicator as usize
}

fn severity_index(severity: Severity) -> usize {
    severity as usize
}

/// 배치 감사 결과.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub headers: StringRecord,
    /// 입력 순서를 유지한 유효 행
    pub rows: Vec<AuditedRow>,
    pub excluded: Vec<ExcludedRow>,
    /// 0-가드가 적용된 행 수
    pub degenerate_rows: usize,
    /// 컬럼별 평균 레코드
    pub average: MetricsRecord,
    pub spreads: Vec<Spread>,
    pub tally: SeverityTally,
    /// 평균 레코드에 대한 권고
    pub recommendations: Vec<Recommendation>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.rows.len()
    }

    /// 컬럼별로 몇 행이 문제였는지(정규 순서, 0건 컬럼 제외).
    pub fn excluded_by_column(&self) -> Vec<(Field, usize)> {
        Field::ALL
            .into_iter()
            .map(|f| {
                let n = self
                    .excluded
                    .iter()
                    .filter(|row| row.fields.contains(&f))
                    .count();
                (f, n)
            })
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}

/// 표의 각 유효 행에 계산기를 적용하고 평균으로 권고를 만든다.
pub fn run(table: &BatchTable, emission_factor: f64) -> Result<BatchReport, AuditError> {
    let mut rows = Vec::with_capacity(table.len());
    let mut excluded = Vec::new();
    let mut degenerate_rows = 0;
    let mut acc = MetricsAccumulator::new();
    let mut tally = SeverityTally::default();

    for row in table.rows() {
        let measurement = match &row.parsed {
            Ok(m) => *m,
            Err(fields) => {
                let skipped = ExcludedRow {
                    line: row.line,
                    fields: fields.clone(),
                };
                tracing::warn!("excluding row: {}", skipped.to_error());
                excluded.push(skipped);
                continue;
            }
        };
        if measurement.has_degenerate_division() {
            degenerate_rows += 1;
            tracing::debug!(line = row.line, "zero denominator, dependent metrics set to 0");
        }
        let metrics = metrics::compute_with_factor(&measurement, emission_factor);
        acc.push(&metrics);
        tally.record(&recommend::recommend(&metrics));
        rows.push(AuditedRow {
            line: row.line,
            cells: row.cells.clone(),
            measurement,
            metrics,
        });
    }

    let Some(average) = acc.mean() else {
        return Err(AuditError::EmptyBatch {
            excluded: excluded.len(),
        });
    };
    tracing::info!(
        processed = rows.len(),
        excluded = excluded.len(),
        degenerate = degenerate_rows,
        "batch audit finished"
    );

    Ok(BatchReport {
        headers: table.headers().clone(),
        rows,
        excluded,
        degenerate_rows,
        average,
        spreads: acc.spreads(),
        tally,
        recommendations: recommend::recommend(&average),
    })
}

/// 리더에서 표를 읽어 바로 감사한다.
pub fn audit_reader<R: io::Read>(reader: R, emission_factor: f64) -> Result<BatchReport, AuditError> {
    let table = BatchTable::from_reader(reader)?;
    run(&table, emission_factor)
}

pub fn audit_path<P: AsRef<Path>>(path: P, emission_factor: f64) -> Result<BatchReport, AuditError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "reading batch table");
    let table = BatchTable::from_path(path)?;
    run(&table, emission_factor)
}
