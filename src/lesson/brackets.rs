//! 대괄호 자리표시자 변환
//!
//! 안내문 본문/제목의 `[f]` 같은 한 글자 자리표시자만 자판 변환합니다.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::layout::SubstitutionTable;

/// `[X]` (X는 ASCII 영문/숫자/밑줄 한 글자)
static BRACKET_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([A-Za-z0-9_])\]").expect("자리표시자 정규식"));

/// 텍스트 안의 모든 `[X]`를 `[변환된 X]`로 교체
///
/// # Examples
/// ```
/// use raskladka::lesson::convert_in_brackets;
/// use raskladka::SubstitutionTable;
///
/// let table = SubstitutionTable::en_ru();
/// assert_eq!(convert_in_brackets("Press [f] and [J]", &table), "Press [а] and [О]");
/// ```
pub fn convert_in_brackets(text: &str, table: &SubstitutionTable) -> String {
    BRACKET_PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            let converted = table.map(&caps[1]);
            format!("[{}]", converted)
        })
        .into_owned()
}
