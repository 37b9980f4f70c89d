//! 영문 -> 러시아어 자판 단순 변환기

use crate::core::layout::SubstitutionTable;

/// 영문 자판으로 입력한 문자열을 러시아어 자판 문자열로 변환
/// 매핑이 없는 문자(숫자, 일부 특수문자, 키릴 문자 등)는 그대로 유지
///
/// # Examples
/// ```
/// use raskladka::convert;
/// assert_eq!(convert("ghbdtn"), "привет");
/// assert_eq!(convert("Vjcrdf"), "Москва");
/// ```
pub fn convert(input: &str) -> String {
    SubstitutionTable::en_ru().map(input)
}
