//! 레슨 계획 문서 읽기/변환/쓰기

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::core::layout::SubstitutionTable;
use crate::core::transformer::TextTransformer;

use super::brackets::convert_in_brackets;

const NAME: &str = "name";
const INSTRUCTION: &str = "instruction";
const INST: &str = "inst";
const BODY: &str = "body";
const TITLE: &str = "title";
const CHR: &str = "chr";
const TYPING: &str = "typing";
const TEXT_1: &str = "text1";

/// 한 글자 토큰 변환에서 제외하는 토큰
const SKIPPED_TOKEN: &str = "&";

/// 레슨 계획 처리 에러
#[derive(Debug)]
pub enum LessonPlanError {
    /// 파일 읽기/쓰기 실패
    IoError(PathBuf, std::io::Error),
    /// JSON 파싱/직렬화 실패
    ParseError(String),
    /// 문서 형식 오류
    FormatError(String),
}

impl std::fmt::Display for LessonPlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonPlanError::IoError(path, e) => {
                write!(f, "레슨 계획 파일 오류 ({}): {}", path.display(), e)
            }
            LessonPlanError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            LessonPlanError::FormatError(s) => write!(f, "레슨 계획 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for LessonPlanError {}

/// JSON 파일에서 레슨 계획 읽기
pub fn read_plan(path: impl AsRef<Path>) -> Result<Value, LessonPlanError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LessonPlanError::IoError(path.to_path_buf(), e))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|e| LessonPlanError::ParseError(e.to_string()))
}

/// 레슨 계획을 보기 좋은 JSON으로 저장
///
/// 같은 디렉토리의 임시 파일에 먼저 쓴 뒤 대상 경로로 교체.
pub fn write_plan(path: impl AsRef<Path>, plan: &Value) -> Result<(), LessonPlanError> {
    let path = path.as_ref();
    let io_error = |e: std::io::Error| LessonPlanError::IoError(path.to_path_buf(), e);

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(io_error)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(io_error)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, plan)
            .map_err(|e| LessonPlanError::ParseError(e.to_string()))?;
        writer.flush().map_err(io_error)?;
    }

    temp_file.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

/// 레슨 계획 변환기
///
/// `text1` 필드는 주어진 변환기로, 나머지 필드는 문자 단위 치환으로 처리.
pub struct LessonPlanTransformer<'a> {
    text: &'a mut dyn TextTransformer,
    table: SubstitutionTable,
}

impl<'a> LessonPlanTransformer<'a> {
    pub fn new(text: &'a mut dyn TextTransformer) -> Self {
        Self {
            text,
            table: SubstitutionTable::en_ru(),
        }
    }

    /// 문서 전체 변환. 처리한 레슨 수 반환
    ///
    /// `program.lessons` 배열이 없으면 에러.
    pub fn transform_plan(&mut self, plan: &mut Value) -> Result<usize, LessonPlanError> {
        let lessons = plan
            .pointer_mut("/program/lessons")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| {
                LessonPlanError::FormatError("program.lessons 배열이 없습니다".into())
            })?;

        for lesson in lessons.iter_mut() {
            self.transform_lesson(lesson);
        }

        log::info!("레슨 {}개 변환 완료", lessons.len());
        Ok(lessons.len())
    }

    /// 레슨 하나 변환 (없는 필드는 건너뜀)
    pub fn transform_lesson(&mut self, lesson: &mut Value) {
        let Some(lesson) = lesson.as_object_mut() else {
            log::warn!("객체가 아닌 레슨 건너뜀: {}", lesson);
            return;
        };

        let mut targets = BTreeSet::new();
        update_text(lesson, NAME, |name| {
            self.convert_single_symbols(name, Some(&mut targets))
        });

        let instructions = lesson
            .get_mut(INSTRUCTION)
            .and_then(|instruction| instruction.get_mut(INST))
            .and_then(Value::as_array_mut);
        if let Some(instructions) = instructions {
            for instruction in instructions.iter_mut().filter_map(Value::as_object_mut) {
                update_text(instruction, BODY, |body| convert_in_brackets(body, &self.table));
                update_text(instruction, TITLE, |title| convert_in_brackets(title, &self.table));
                update_text(instruction, CHR, |chr| self.convert_single_symbols(chr, None));
            }
        }

        if let Some(typing) = lesson.get_mut(TYPING).and_then(Value::as_object_mut) {
            update_text(typing, TEXT_1, |text| {
                self.text.transform_with(text, Some(&targets))
            });
        }
    }

    /// 공백으로 나눈 토큰 중 한 글자짜리만 변환 (`&` 제외)
    ///
    /// `targets`가 주어지면 변환된 글자를 모음.
    pub fn convert_single_symbols(
        &self,
        text: &str,
        mut targets: Option<&mut BTreeSet<char>>,
    ) -> String {
        text.split(' ')
            .map(|part| {
                let mut chars = part.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if part != SKIPPED_TOKEN => {
                        let converted = self.table.map_char(c);
                        if let Some(targets) = targets.as_deref_mut() {
                            targets.insert(converted);
                        }
                        converted.to_string()
                    }
                    _ => part.to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// 문자열 필드를 변환 결과로 교체. 없거나 null이면 그대로 둠
fn update_text(object: &mut Map<String, Value>, key: &str, convert: impl FnOnce(&str) -> String) {
    match object.get_mut(key) {
        Some(Value::String(text)) => {
            let converted = convert(text);
            *text = converted;
        }
        Some(Value::Null) | None => {}
        Some(other) => log::warn!("문자열이 아닌 필드 건너뜀: {} = {}", key, other),
    }
}
