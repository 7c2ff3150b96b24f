use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::AppError;
use crate::config::{self, Config};
use crate::error::AuditError;
use crate::i18n::{keys, Translator};
use crate::measurement::{Field, MeasurementDraft, MeasurementRecord};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ManualAudit,
    BatchAudit,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_MANUAL_AUDIT));
    println!("{}", tr.t(keys::MAIN_MENU_BATCH_AUDIT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::ManualAudit),
        "2" => Some(MenuChoice::BatchAudit),
        "3" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 여덟 개 입력값을 차례로 받는다. 숫자가 아니면 다시 묻는다.
pub fn read_measurement(tr: &Translator) -> Result<MeasurementRecord, AppError> {
    println!("{}", tr.t(keys::MANUAL_HEADING));
    let mut draft = MeasurementDraft::new();
    for field in Field::ALL {
        let prompt = tr.fill(
            keys::MANUAL_PROMPT_FIELD,
            &[
                ("label", tr.t(field.label_key()).into_owned()),
                ("unit", field.unit().to_string()),
            ],
        );
        draft.set(field, Some(read_f64(tr, &prompt)?));
    }
    draft
        .finish()
        .map_err(|fields| AppError::Audit(AuditError::InvalidMeasurement { line: 0, fields }))
}

/// 배치 입력 경로와 내보내기 경로(선택)를 받는다.
pub fn read_batch_paths(
    tr: &Translator,
    cfg: &Config,
) -> Result<(PathBuf, Option<PathBuf>), AppError> {
    println!("{}", tr.t(keys::BATCH_HEADING));
    let input = loop {
        let s = read_line(&tr.t(keys::BATCH_PROMPT_PATH))?;
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            break PathBuf::from(trimmed);
        }
    };
    let prompt = tr.fill(
        keys::BATCH_PROMPT_EXPORT,
        &[("default", cfg.export_file_name.clone())],
    );
    let out = read_line(&prompt)?;
    let export_to = match out.trim() {
        "-" => None,
        "" => Some(PathBuf::from(&cfg.export_file_name)),
        path => Some(PathBuf::from(path)),
    };
    Ok((input, export_to))
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.fill(keys::SETTINGS_CURRENT_LANGUAGE, &[("lang", cfg.language.clone())])
    );
    let mut language_changed = false;
    let lang = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    match lang.trim().to_lowercase().as_str() {
        "" => {}
        code @ ("auto" | "ko" | "en") => {
            language_changed = cfg.language != code;
            cfg.language = code.to_string();
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!(
        "{}",
        tr.fill(
            keys::SETTINGS_CURRENT_FACTOR,
            &[("factor", cfg.emission_factor_kg_per_kg.to_string())]
        )
    );
    let factor = read_line(&tr.t(keys::SETTINGS_PROMPT_FACTOR))?;
    if !factor.trim().is_empty() {
        match factor
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(|v| config::validate_emission_factor(v).ok())
        {
            Some(v) => cfg.emission_factor_kg_per_kg = v,
            None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }
    Ok(language_changed)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choice_ignores_surrounding_whitespace() {
        assert_eq!(parse_menu_choice(" 2\n"), Some(MenuChoice::BatchAudit));
        assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("9"), None);
    }
}
