//! Raskladka - 영문 레슨 계획을 러시아어 자판용으로 변환

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use raskladka::config::{load_config, load_config_file, RaskladkaConfig, DEFAULT_CONFIG_FILE};
use raskladka::lesson::{read_plan, write_plan, LessonPlanTransformer};
use raskladka::{DictionaryIndex, EngineConfig, SymbolTransformer, TransformStats, WordEngine};

fn main() {
    // 로깅 초기화 (RUST_LOG로 조정 가능)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 설정 로드: 인자로 지정한 파일은 반드시 있어야 하고, 기본 파일은 없으면 기본값
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match load_config_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("설정 파일 읽기 실패 ({}): {}", path.display(), e);
                process::exit(1);
            }
        },
        None => load_config(Path::new(DEFAULT_CONFIG_FILE)),
    };

    match run(&config) {
        Ok(Some(stats)) => {
            println!("Transformed by symbol: {}", stats.transformed_by_symbol);
            println!("Transformed to word part: {}", stats.transformed_to_word_part);
            println!("Transformed to word: {}", stats.transformed_to_word);
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("변환 실패: {}", e);
            process::exit(1);
        }
    }
}

/// 레슨 계획 변환 후 저장. 사전 복원을 사용했으면 통계 반환
fn run(config: &RaskladkaConfig) -> Result<Option<TransformStats>, Box<dyn Error>> {
    if !config.reconstruct_words {
        let mut plan = read_plan(&config.source_path)?;
        let mut symbols = SymbolTransformer::default();
        LessonPlanTransformer::new(&mut symbols).transform_plan(&mut plan)?;
        write_plan(&config.target_path, &plan)?;
        return Ok(None);
    }

    // 사전은 문서보다 먼저 로드 (없으면 바로 중단)
    let index = DictionaryIndex::load(&config.dictionary_path)?;
    let engine_config = EngineConfig::new().with_length_slack(config.length_slack);
    let mut engine = WordEngine::with_config(index, engine_config);

    let mut plan = read_plan(&config.source_path)?;
    LessonPlanTransformer::new(&mut engine).transform_plan(&mut plan)?;
    write_plan(&config.target_path, &plan)?;
    log::info!("저장 완료: {}", config.target_path.display());

    Ok(Some(engine.stats()))
}
