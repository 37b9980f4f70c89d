//! QWERTY 영문 키 -> ЙЦУКЕН 러시아어 키 매핑

use std::collections::HashMap;

/// 영문 자판 키와 같은 위치의 러시아어 자판 문자 (입력 순서 그대로)
///
/// `"` 키가 두 번 등록되어 있으며 뒤의 값(`Э`)이 앞의 값(`э`)을 덮어씀.
/// 그 결과 `'` 키는 매핑되지 않음. 기존 변환 결과와의 호환을 위해 그대로 유지.
const EN_RU_PAIRS: &[(char, char)] = &[
    ('q', 'й'),
    ('w', 'ц'),
    ('e', 'у'),
    ('r', 'к'),
    ('t', 'е'),
    ('y', 'н'),
    ('u', 'г'),
    ('i', 'ш'),
    ('o', 'щ'),
    ('p', 'з'),
    ('[', 'х'),
    ('{', 'Х'),
    (']', 'ъ'),
    ('}', 'Ъ'),
    ('|', '/'),
    ('`', 'ё'),
    ('~', 'Ё'),
    ('a', 'ф'),
    ('s', 'ы'),
    ('d', 'в'),
    ('f', 'а'),
    ('g', 'п'),
    ('h', 'р'),
    ('j', 'о'),
    ('k', 'л'),
    ('l', 'д'),
    (';', 'ж'),
    (':', 'Ж'),
    ('"', 'э'),
    ('"', 'Э'),
    ('z', 'я'),
    ('x', 'ч'),
    ('c', 'с'),
    ('v', 'м'),
    ('b', 'и'),
    ('n', 'т'),
    ('m', 'ь'),
    (',', 'б'),
    ('<', 'Б'),
    ('.', 'ю'),
    ('>', 'Ю'),
    ('/', '.'),
    ('?', ','),
    ('@', '"'),
    ('#', '№'),
    ('$', ';'),
    ('^', ':'),
    ('&', '?'),
];

/// 문자 단위 치환 테이블
///
/// 키는 항상 소문자. 같은 키가 여러 번 주어지면 마지막 값이 남음.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    map: HashMap<char, char>,
}

impl SubstitutionTable {
    /// (원본 키, 대상 문자) 쌍으로 테이블 생성
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut map = HashMap::new();
        for (from, to) in pairs {
            let key = single_lowercase(from).unwrap_or(from);
            map.insert(key, to);
        }
        Self { map }
    }

    /// 영문 QWERTY -> 러시아어 ЙЦУКЕН 기본 테이블
    pub fn en_ru() -> Self {
        Self::from_pairs(EN_RU_PAIRS.iter().copied())
    }

    /// 문자 하나 변환
    ///
    /// 소문자 기준으로 테이블을 찾고, 입력이 대문자면 결과도 대문자로 바꿈.
    /// 매핑이 없으면 입력 문자를 그대로 반환.
    pub fn map_char(&self, c: char) -> char {
        let Some(mapped) = single_lowercase(c).and_then(|lower| self.map.get(&lower).copied())
        else {
            return c;
        };

        if c.is_uppercase() {
            single_uppercase(mapped).unwrap_or(mapped)
        } else {
            mapped
        }
    }

    /// 문자열 전체 변환 (문자 수는 변하지 않음)
    pub fn map(&self, text: &str) -> String {
        text.chars().map(|c| self.map_char(c)).collect()
    }

    /// 등록된 키 수
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::en_ru()
    }
}

/// 소문자 변환 결과가 한 글자일 때만 반환
pub(crate) fn single_lowercase(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

/// 대문자 변환 결과가 한 글자일 때만 반환
pub(crate) fn single_uppercase(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_mapping() {
        let table = SubstitutionTable::en_ru();
        assert_eq!(table.map_char('q'), 'й');
        assert_eq!(table.map_char('f'), 'а');
        assert_eq!(table.map_char('m'), 'ь');
        assert_eq!(table.map_char('`'), 'ё');
    }

    #[test]
    fn test_case_preserved() {
        let table = SubstitutionTable::en_ru();
        assert_eq!(table.map_char('Q'), 'Й');
        assert_eq!(table.map("Ghbdtn"), "Привет");
        assert_eq!(table.map("GHBDTN"), "ПРИВЕТ");
    }

    #[test]
    fn test_punctuation_keys() {
        let table = SubstitutionTable::en_ru();
        assert_eq!(table.map_char(','), 'б');
        assert_eq!(table.map_char('.'), 'ю');
        assert_eq!(table.map_char('/'), '.');
        assert_eq!(table.map_char('?'), ',');
        assert_eq!(table.map_char('#'), '№');
        assert_eq!(table.map_char('&'), '?');
        assert_eq!(table.map_char('{'), 'Х');
    }

    #[test]
    fn test_duplicate_quote_key() {
        // 두 번째 등록이 이김
        let table = SubstitutionTable::en_ru();
        assert_eq!(table.map_char('"'), 'Э');
        assert_eq!(table.map_char('\''), '\'');
    }

    #[test]
    fn test_unmapped_passthrough() {
        let table = SubstitutionTable::en_ru();
        assert_eq!(table.map("1"), "1");
        assert_eq!(table.map("!"), "!");
        assert_eq!(table.map(" "), " ");
        assert_eq!(table.map("привет"), "привет");
        assert_eq!(table.map(""), "");
    }

    #[test]
    fn test_char_count_preserved() {
        let table = SubstitutionTable::en_ru();
        let input = "Hello, World! 123 [x] ~`";
        assert_eq!(table.map(input).chars().count(), input.chars().count());
    }

    #[test]
    fn test_last_write_wins() {
        let table = SubstitutionTable::from_pairs([('a', 'x'), ('A', 'y')]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.map_char('a'), 'y');
        assert_eq!(table.map_char('A'), 'Y');
    }
}
