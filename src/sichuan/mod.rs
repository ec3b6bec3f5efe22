// 四川麻雀 (血戦到底) の役判定と点数計算
mod classify;
mod suggest;

use serde::Serialize;

use crate::text::Locale;

pub use self::{
    classify::{calc_roots, classify_sichuan, classify_sichuan_with, SichuanScore},
    suggest::suggest_sichuan,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SichuanPattern {
    PingHu,        // 平和 (基本和)
    DuiDuiHu,      // 対対和
    DuanYaoJiu,    // 断幺九
    QingYiSe,      // 清一色
    JinGouDiao,    // 金鈎釣
    JiangDui,      // 将対 (2,5,8の刻子のみ)
    QiDui,         // 七対
    LongQiDui,     // 龍七対 (根を含む七対)
    QingYaoJiu,    // 清幺九
    QingDui,       // 清対
    QingJinGou,    // 清金鈎釣
    QingQiDui,     // 清七対
    QingLongQiDui, // 清龍七対
}

impl SichuanPattern {
    // 根を含まない番数
    pub fn base_fan(self) -> usize {
        use SichuanPattern::*;
        match self {
            PingHu => 1,
            DuiDuiHu | DuanYaoJiu => 2,
            QingYiSe | JinGouDiao | JiangDui | QiDui | LongQiDui | QingYaoJiu => 4,
            QingDui => 6,
            QingJinGou | QingQiDui | QingLongQiDui => 8,
        }
    }

    pub fn name(self, locale: Locale) -> &'static str {
        use SichuanPattern::*;
        let t = locale.text();
        match self {
            PingHu => t.ping_hu,
            DuiDuiHu => t.dui_dui_hu,
            DuanYaoJiu => t.duan_yao_jiu,
            QingYiSe => t.qing_yi_se,
            JinGouDiao => t.jin_gou_diao,
            JiangDui => t.jiang_dui,
            QiDui => t.qi_dui,
            LongQiDui => t.long_qi_dui,
            QingYaoJiu => t.qing_yao_jiu,
            QingDui => t.qing_dui,
            QingJinGou => t.qing_jin_gou,
            QingQiDui => t.qing_qi_dui,
            QingLongQiDui => t.qing_long_qi_dui,
        }
    }
}

// 根がある場合は "役名 + N根" (龍七対は役名に根を含む)
pub fn display_name(pattern: SichuanPattern, roots: usize, locale: Locale) -> String {
    use SichuanPattern::*;
    let name = pattern.name(locale);
    if roots > 0 && !matches!(pattern, LongQiDui | QingLongQiDui) {
        format!("{} + {}{}", name, roots, locale.text().root)
    } else {
        name.to_string()
    }
}

// 点数の倍率 (2^番数)
#[inline]
pub fn multiplier(fan: usize) -> u64 {
    1u64 << fan.min(63)
}

#[test]
fn test_pattern() {
    assert_eq!(SichuanPattern::QingDui.base_fan(), 6);
    assert_eq!(SichuanPattern::PingHu.name(Locale::Zh), "基本和");
    assert_eq!(multiplier(3), 8);
    assert_eq!(multiplier(0), 1);
    assert_eq!(display_name(SichuanPattern::QiDui, 2, Locale::En), "Seven Pairs + 2Root");
    assert_eq!(display_name(SichuanPattern::QiDui, 0, Locale::Zh), "七对");
    assert_eq!(display_name(SichuanPattern::LongQiDui, 1, Locale::En), "Seven Pairs + Root");
    assert_eq!(display_name(SichuanPattern::QingLongQiDui, 2, Locale::Zh), "清龙七对");
}
