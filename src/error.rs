use crate::measurement::Field;

/// 감사 입력 경계에서 발생 가능한 오류.
#[derive(thiserror::Error, Debug)]
pub enum AuditError {
    /// 필수 컬럼이 비었거나 숫자가 아닌 행. 배치에서는 해당 행만 제외된다.
    #[error("row {line}: missing or non-numeric value in {}", join_fields(.fields))]
    InvalidMeasurement { line: u64, fields: Vec<Field> },
    /// 필수 컬럼 자체가 없는 표. 행 처리 전에 중단한다.
    #[error("CSV is missing required columns: {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<&'static str> },
    /// 제외 후 남은 유효 행이 없다.
    #[error("no valid rows to audit ({excluded} rows excluded)")]
    EmptyBatch { excluded: usize },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.column())
        .collect::<Vec<_>>()
        .join(", ")
}
