//! 단어 복원 엔진 설정

/// 단어 복원 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// 대표 단어 길이가 후보 길이를 넘을 수 있는 최대 글자 수
    pub length_slack: usize,

    /// 사전 조회를 시도할 최소 후보 길이
    pub min_candidate_len: usize,

    /// 토큰 끝에서 사전에 붙지 못한 구두점 키를 원래 문자로 되돌릴지 여부
    /// 예: "tlf," -> "еда," ("едаб"가 아님)
    pub keep_trailing_punctuation: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            length_slack: 2,
            min_candidate_len: 2,
            keep_trailing_punctuation: true,
        }
    }
}

impl EngineConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 길이 여유 설정
    pub fn with_length_slack(mut self, slack: usize) -> Self {
        self.length_slack = slack;
        self
    }

    /// 최소 후보 길이 설정 (1 미만은 1로 취급)
    pub fn with_min_candidate_len(mut self, len: usize) -> Self {
        self.min_candidate_len = len.max(1);
        self
    }

    /// 끝 구두점 유지 여부 설정
    pub fn with_trailing_punctuation(mut self, keep: bool) -> Self {
        self.keep_trailing_punctuation = keep;
        self
    }
}
