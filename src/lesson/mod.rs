//! 타자 연습 레슨 계획(JSON) 변환
//!
//! 영문 레슨 계획의 텍스트 필드를 러시아어 자판용으로 바꿉니다.
//!
//! - `lesson.name`: 한 글자 토큰만 변환 (`&` 제외), 변환 결과는 대상 문자로 수집
//! - `lesson.instruction.inst[].body`, `title`: `[X]` 자리표시자만 변환
//! - `lesson.instruction.inst[].chr`: 한 글자 토큰만 변환
//! - `lesson.typing.text1`: 전체 텍스트를 변환기로 변환 (대상 문자 전달)

mod brackets;
mod plan;

pub use brackets::convert_in_brackets;
pub use plan::{read_plan, write_plan, LessonPlanError, LessonPlanTransformer};
