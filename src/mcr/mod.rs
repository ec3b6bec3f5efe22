// 国標麻雀 (Mahjong Competition Rules) の番種判定と点数計算
mod fan;
mod recognize;
mod score;
mod suggest;

pub use self::{
    fan::{fan_table, Fan, FanDef},
    recognize::{build_contexts, McrContext, RecognizedFan, WinFlags},
    score::{
        calculate_total_fan, recognize_fans, score_completed_hand, score_completed_hand_with, FanTotal, McrScore,
        MIN_FAN_TO_WIN,
    },
    suggest::{suggest_mcr, MAX_MISSING},
};
