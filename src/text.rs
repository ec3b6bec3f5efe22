// 表示用の文字列 (数値の計算には一切影響しない)
use std::str::FromStr;

use crate::error::MahjongError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn text(self) -> &'static Text {
        match self {
            Locale::En => &TEXT_EN,
            Locale::Zh => &TEXT_ZH,
        }
    }
}

impl FromStr for Locale {
    type Err = MahjongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => Err(MahjongError::parse(s, "locale must be 'en' or 'zh'")),
        }
    }
}

#[derive(Debug)]
pub struct Text {
    pub discard_hint: &'static str,
    pub hua_zhu: &'static str,
    pub illegal: &'static str,
    pub root: &'static str,
    // 四川麻雀の役
    pub ping_hu: &'static str,
    pub qi_dui: &'static str,
    pub long_qi_dui: &'static str,
    pub qing_yi_se: &'static str,
    pub qing_dui: &'static str,
    pub dui_dui_hu: &'static str,
    pub jin_gou_diao: &'static str,
    pub jiang_dui: &'static str,
    pub duan_yao_jiu: &'static str,
    pub qing_yao_jiu: &'static str,
    pub qing_jin_gou: &'static str,
    pub qing_qi_dui: &'static str,
    pub qing_long_qi_dui: &'static str,
    // 海底
    pub last_tile_both: &'static str,
    pub last_tile_chance: &'static str,
    pub last_tile_hint: &'static str,
    pub achieved: &'static str,
    pub wall_empty: &'static str,
}

static TEXT_EN: Text = Text {
    discard_hint: "Discard this to improve efficiency",
    hua_zhu: "Flower Pig",
    illegal: "Illegal",
    root: "Root",
    ping_hu: "Basic Win",
    qi_dui: "Seven Pairs",
    long_qi_dui: "Seven Pairs + Root",
    qing_yi_se: "Full Flush",
    qing_dui: "Pure Pungs",
    dui_dui_hu: "All Pungs",
    jin_gou_diao: "Single Wait",
    jiang_dui: "All 258 Pungs",
    duan_yao_jiu: "All Simples",
    qing_yao_jiu: "Pure Terminals",
    qing_jin_gou: "Pure Single Wait",
    qing_qi_dui: "Pure Seven Pairs",
    qing_long_qi_dui: "Pure Dragon Seven Pairs",
    last_tile_both: "Last Tile Draw/Claim",
    last_tile_chance: "Last Tile Chance",
    last_tile_hint: "Wall nearly empty - last tile bonus possible!",
    achieved: "Achieved",
    wall_empty: "Wall is empty",
};

static TEXT_ZH: Text = Text {
    discard_hint: "打出此牌进张面最广",
    hua_zhu: "花猪",
    illegal: "无法和牌",
    root: "根",
    ping_hu: "基本和",
    qi_dui: "七对",
    long_qi_dui: "龙七对",
    qing_yi_se: "清一色",
    qing_dui: "清对",
    dui_dui_hu: "对对胡",
    jin_gou_diao: "金钩钓",
    jiang_dui: "将对",
    duan_yao_jiu: "断幺九",
    qing_yao_jiu: "清幺九",
    qing_jin_gou: "清金钩钓",
    qing_qi_dui: "清七对",
    qing_long_qi_dui: "清龙七对",
    last_tile_both: "妙手回春/海底捞月",
    last_tile_chance: "海底机会",
    last_tile_hint: "牌墙将尽，可能获得海底番！",
    achieved: "已达成",
    wall_empty: "牌墙已空",
};

// [数値を含む文字列]

pub fn wall_low(locale: Locale, n: usize) -> String {
    match locale {
        Locale::En => format!("Wall is running low: {} tiles left", n),
        Locale::Zh => format!("牌墙仅剩{}张", n),
    }
}

pub fn tiles_left(locale: Locale, n: usize) -> String {
    match locale {
        Locale::En => format!("Only {} tile(s) left", n),
        Locale::Zh => format!("牌墙仅剩{}张", n),
    }
}

pub fn discard_others(locale: Locale, n: usize) -> String {
    match locale {
        Locale::En => format!("Discard {} tile(s) of other suits", n),
        Locale::Zh => format!("需打掉{}张其他花色", n),
    }
}

pub fn discard_terminals(locale: Locale, n: usize) -> String {
    match locale {
        Locale::En => format!("Discard {} terminal/honor tile(s)", n),
        Locale::Zh => format!("需打掉{}张幺九字牌", n),
    }
}

pub fn pairs_progress(locale: Locale, pairs: usize, need: usize) -> String {
    match locale {
        Locale::En => format!("{} pairs, {} more needed", pairs, need),
        Locale::Zh => format!("已有{}对，缺{}张", pairs, need),
    }
}

pub fn pungs_progress(locale: Locale, pungs: usize, need: usize) -> String {
    match locale {
        Locale::En => format!("{} pungs, {} more needed", pungs, need),
        Locale::Zh => format!("已有{}刻，缺{}张", pungs, need),
    }
}

pub fn shanten_note(locale: Locale, shanten: i32) -> String {
    match locale {
        Locale::En => format!("Shanten {}", shanten),
        Locale::Zh => format!("向听{}", shanten),
    }
}

pub fn missing_types(locale: Locale, n: usize, shanten: i32) -> String {
    match locale {
        Locale::En => format!("{} type(s) missing, shanten {}", n, shanten),
        Locale::Zh => format!("缺{}门，向听{}", n, shanten),
    }
}

pub fn below_minimum(locale: Locale, total: usize, min: usize) -> String {
    match locale {
        Locale::En => format!("{} fan is below the {} fan minimum", total, min),
        Locale::Zh => format!("{}番未达{}番起和", total, min),
    }
}

// 番種の明細 "名前 (番数)" 複数回の場合は "名前 xN (合計)"
pub fn fan_detail(locale: Locale, name: &str, fan: usize, count: usize) -> String {
    let unit = match locale {
        Locale::En => "",
        Locale::Zh => "番",
    };
    if count > 1 {
        format!("{} x{} ({}{})", name, count, fan * count, unit)
    } else {
        format!("{} ({}{})", name, fan, unit)
    }
}

pub fn root_detail(locale: Locale, roots: usize) -> String {
    format!("{} x{} (+{})", locale.text().root, roots, roots)
}

#[test]
fn test_locale() {
    assert_eq!("zh".parse::<Locale>().unwrap(), Locale::Zh);
    assert!("jp".parse::<Locale>().is_err());
    assert_eq!(Locale::En.text().hua_zhu, "Flower Pig");
    assert_eq!(Locale::Zh.text().hua_zhu, "花猪");
}

#[test]
fn test_fan_detail() {
    assert_eq!(fan_detail(Locale::En, "Dragon Pung", 2, 2), "Dragon Pung x2 (4)");
    assert_eq!(fan_detail(Locale::Zh, "碰碰和", 6, 1), "碰碰和 (6番)");
    assert_eq!(root_detail(Locale::En, 1), "Root x1 (+1)");
}
