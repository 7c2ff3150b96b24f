use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use coal_plant_audit::{app, config, observability, MeasurementRecord};

/// 석탄화력 에너지 감사 CLI.
#[derive(Parser, Debug)]
#[command(name = "coal_plant_audit_cli", version, about)]
struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 측정값 한 건을 감사한다.
    Audit(MeasurementArgs),
    /// CSV 표 전체를 감사하고 평균 기반 권고를 출력한다.
    Batch {
        /// 입력 CSV 경로
        input: PathBuf,
        /// 결과 CSV를 저장할 경로
        #[arg(long, short)]
        export: Option<PathBuf>,
    },
    /// 대화형 메뉴 (기본값)
    Interactive,
}

#[derive(Args, Debug)]
struct MeasurementArgs {
    /// 석탄 투입량 [kg/hr]
    #[arg(long)]
    coal_flow: f64,
    /// 석탄 발열량 GCV [kcal/kg]
    #[arg(long)]
    gcv: f64,
    /// 증기 발생량 [kg/hr]
    #[arg(long)]
    steam_flow: f64,
    /// 증기 엔탈피 [kcal/kg]
    #[arg(long)]
    steam_enthalpy: f64,
    /// 급수 엔탈피 [kcal/kg]
    #[arg(long)]
    feedwater_enthalpy: f64,
    /// 발전 출력 [kW]
    #[arg(long)]
    power_output: f64,
    /// 배가스 온도 [°C]
    #[arg(long, allow_negative_numbers = true)]
    flue_temp: f64,
    /// 외기 온도 [°C]
    #[arg(long, allow_negative_numbers = true)]
    ambient_temp: f64,
}

impl From<MeasurementArgs> for MeasurementRecord {
    fn from(a: MeasurementArgs) -> Self {
        MeasurementRecord {
            coal_flow: a.coal_flow,
            gcv: a.gcv,
            steam_flow: a.steam_flow,
            steam_enthalpy: a.steam_enthalpy,
            feedwater_enthalpy: a.feedwater_enthalpy,
            power_output: a.power_output,
            flue_temp: a.flue_temp,
            ambient_temp: a.ambient_temp,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 선택한 명령을 실행한다.
fn main() -> ExitCode {
    observability::init_tracing();
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_create(&cli.config)?;
    let mut tr = app::translator_for(&cfg, &cli.lang);
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Audit(args) => app::run_single(&cfg, &tr, args.into()),
        Command::Batch { input, export } => {
            app::run_batch(&cfg, &tr, &input, export.as_deref())?;
        }
        Command::Interactive => app::run(&mut cfg, &mut tr)?,
    }
    Ok(())
}
