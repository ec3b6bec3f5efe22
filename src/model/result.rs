use super::*;

// 和了状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HandStatus {
    Won,      // 和了形
    Ready,    // 聴牌
    NotReady, // 一向聴以上
}

impl HandStatus {
    pub fn from_shanten(shanten: i32) -> Self {
        match shanten {
            s if s < 0 => HandStatus::Won,
            0 => HandStatus::Ready,
            _ => HandStatus::NotReady,
        }
    }
}

// 待ち牌
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitingTile {
    pub tile: Tile,
    pub remaining: usize,
    pub probability: String, // "12.5%" 牌山が空の場合は"0%"
}

// 推奨打牌
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscardAdvice {
    pub tile: Tile,
    pub reason: String,
    pub shanten: i32,
    pub ukeire: usize,       // 有効牌の残り枚数の合計
    pub ukeire_tiles: usize, // 有効牌の種類数
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub waiting_tiles: Vec<Tile>, // 打牌後に聴牌となる場合の待ち
}

// 役の候補
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FanSuggestion {
    pub name: String,
    pub fan: usize,      // 付随する役を含めた合計
    pub base_fan: usize, // 主となる役の番数
    pub probability: u32, // 0~100
    pub missing_tiles: Vec<Tile>,
    pub pattern_details: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<u64>, // 四川麻雀のみ (2^fan)
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub illegal: bool, // 花猪
}

impl fmt::Display for FanSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fan: {}, prob: {}%", self.name, self.fan, self.probability)?;
        if let Some(m) = self.multiplier {
            write!(f, ", x{}", m)?;
        }
        if !self.missing_tiles.is_empty() {
            write!(f, ", missing: {}", vec_to_string(&self.missing_tiles))?;
        }
        if !self.pattern_details.is_empty() {
            write!(f, " [{}]", self.pattern_details.join(", "))?;
        }
        Ok(())
    }
}

// 解析結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub status: HandStatus,
    pub is_ready: bool,
    pub shanten: i32,
    pub waiting_tiles: Vec<WaitingTile>,
    pub best_discard: Option<DiscardAdvice>,
    pub suggestions: Vec<FanSuggestion>,
    pub score_estimate: usize,
    pub warnings: Vec<String>,
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "status: {:?}, shanten: {}", self.status, self.shanten)?;
        if !self.waiting_tiles.is_empty() {
            let waits: Vec<String> = self
                .waiting_tiles
                .iter()
                .map(|w| format!("{}({}, {})", w.tile, w.remaining, w.probability))
                .collect();
            writeln!(f, "waits: {}", waits.join(", "))?;
        }
        if let Some(d) = &self.best_discard {
            writeln!(
                f,
                "discard: {} ({}) shanten: {}, ukeire: {} tiles / {} kinds",
                d.tile, d.reason, d.shanten, d.ukeire, d.ukeire_tiles
            )?;
        }
        for s in &self.suggestions {
            writeln!(f, "  {}", s)?;
        }
        write!(f, "score: {}", self.score_estimate)?;
        for w in &self.warnings {
            write!(f, "\nwarning: {}", w)?;
        }
        Ok(())
    }
}
