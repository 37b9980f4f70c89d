//! 설정 파일 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 기본 설정 파일 이름 (작업 디렉토리 기준)
pub const DEFAULT_CONFIG_FILE: &str = "raskladka.json";

/// 변환 실행 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RaskladkaConfig {
    /// 빈도 사전 파일 (한 줄에 한 단어)
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
    /// 영문 레슨 계획 파일
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,
    /// 변환 결과를 쓸 파일
    #[serde(default = "default_target_path")]
    pub target_path: PathBuf,
    /// false면 사전 없이 문자 단위 치환만 수행
    #[serde(default = "default_reconstruct_words")]
    pub reconstruct_words: bool,
    /// 대표 단어 길이 여유
    #[serde(default = "default_length_slack")]
    pub length_slack: usize,
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("resources/freq_rus_utf.txt")
}

fn default_source_path() -> PathBuf {
    PathBuf::from("./resources/lessonPlans/export_lesson_plan_en.json")
}

fn default_target_path() -> PathBuf {
    PathBuf::from("./resources/lessonPlans/export_lesson_plan_ru.json")
}

fn default_reconstruct_words() -> bool {
    true
}

fn default_length_slack() -> usize {
    2
}

impl Default for RaskladkaConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            source_path: default_source_path(),
            target_path: default_target_path(),
            reconstruct_words: default_reconstruct_words(),
            length_slack: default_length_slack(),
        }
    }
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: &Path) -> RaskladkaConfig {
    load_config_file(path).unwrap_or_default()
}

/// 지정한 설정 파일 로드
///
/// 파일을 읽지 못하면 에러. 파싱 실패 시에는 경고 후 기본값.
pub fn load_config_file(path: &Path) -> std::io::Result<RaskladkaConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        log::warn!("설정 파일 파싱 실패 ({}), 기본값 사용: {}", path.display(), e);
        RaskladkaConfig::default()
    }))
}
