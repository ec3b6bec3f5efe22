use serde::Serialize;

use super::fan::{fan_table, Fan};
use crate::hand::{
    calc_winning_tiles, is_seven_pairs_win, is_thirteen_orphans_win, is_winning, parse_into_sets, parse_melds,
    winning_hand_len, ParsedHand, SetPair, SetPairType,
};
use crate::model::*;

use SetPairType::*;

// 組み合わせ以外による番種 外部から設定を行う
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WinFlags {
    pub self_drawn: bool,
    pub last_tile_draw: bool,    // 妙手回春
    pub last_tile_claim: bool,   // 海底捞月
    pub replacement_tile: bool,  // 杠上开花
    pub robbing_kong: bool,      // 抢杠和
    pub last_of_kind: bool,      // 和绝张
    pub prevalent_wind: Option<Tnum>, // 圏風 (東: 1, 南: 2, 西: 3, 北: 4)
    pub seat_wind: Option<Tnum>,      // 門風 (同上)
    pub winning_tile: Option<Tile>,   // 和了牌 (手牌に含まれる)
    pub flowers: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecognizedFan {
    pub fan: Fan,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wait {
    Edge,
    Closed,
    Single,
}

#[derive(Debug, Default)]
struct Counts {
    chow: usize,
    pung: usize, // 槓子を含む
    kong: usize,
    concealed_pung: usize, // 暗槓を含む
    melded_kong: usize,
    concealed_kong: usize,
    melded: usize, // 吃, 碰, 明槓
    wind_pung: usize,
    dragon_pung: usize,
}

// 数牌3種の並べ替え (花龍, 組合龍など)
pub(super) const SUIT_PERMS: [[Type; 3]; 6] = [
    [TM, TP, TS],
    [TM, TS, TP],
    [TP, TM, TS],
    [TP, TS, TM],
    [TS, TM, TP],
    [TS, TP, TM],
];

#[derive(Debug)]
pub struct McrContext<'a> {
    hand: TileTable,      // 手牌 (副露は含まない) 九蓮宝燈, 七対などの判定に使用
    all: TileTable,       // 副露を含むすべての牌
    sets: ParsedHand,     // 副露を含むすべての面子と雀頭
    pair: Option<Tile>,   // 雀頭 (面子分解した場合のみ)
    complete: bool,       // 和了形
    decomposed: bool,     // setsが完成形の面子分解から作られている
    meld_count: usize,
    flags: &'a WinFlags,
    counts: Counts,
    wait: Option<Wait>,
}

impl<'a> McrContext<'a> {
    // parsedがNoneの場合は手牌の3枚以上ある牌を刻子とみなす (未完成の手牌用)
    pub fn new(hand: &TileTable, melds: &[Meld], flags: &'a WinFlags, parsed: Option<&ParsedHand>) -> Self {
        let meld_count = melds.len();
        let mut all = *hand;
        for t in melds_to_tiles(melds) {
            inc_tile(&mut all, t);
        }
        let complete = table_len(hand) == winning_hand_len(meld_count) && is_winning(hand, meld_count);

        let mut sets = parse_melds(melds);
        match parsed {
            Some(ph) => sets.extend(ph.iter().copied()),
            None if !complete => {
                for t in all_tiles() {
                    if count_tile(hand, t) >= 3 {
                        sets.push(SetPair(Pung, t));
                    }
                }
            }
            None => {} // 七対, 十三幺
        }
        let pair = sets.iter().find(|sp| sp.0 == Pair).map(|sp| sp.1);

        let mut counts = count_sets(&sets);
        let wait = match parsed {
            Some(_) => calc_wait(hand, meld_count, &sets, flags),
            None => None,
        };
        if parsed.is_some() && is_claimed_pung(&sets, flags) {
            // ロン和了で完成した刻子は暗刻として数えない
            counts.concealed_pung -= 1;
        }

        Self {
            hand: *hand,
            all,
            sets,
            pair,
            complete,
            decomposed: parsed.is_some(),
            meld_count,
            flags,
            counts,
            wait,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    // 成立するすべての番種と成立回数
    // 無番和は他に番種(花牌を除く)がない場合のみ
    pub fn recognize(&self) -> Vec<RecognizedFan> {
        let mut res = vec![];
        for d in fan_table() {
            let count = (d.func)(self);
            if count > 0 {
                res.push(RecognizedFan { fan: d.id, count });
            }
        }
        if res
            .iter()
            .any(|r| !matches!(r.fan, Fan::ChickenHand | Fan::FlowerTiles))
        {
            res.retain(|r| r.fan != Fan::ChickenHand);
        }
        res
    }

    fn present(&self) -> impl Iterator<Item = Tile> + '_ {
        all_tiles().filter(move |&t| count_tile(&self.all, t) > 0)
    }

    // 牌が1枚以上あり,すべての牌が条件を満たす
    fn all_match(&self, f: impl Fn(Tile) -> bool) -> bool {
        let mut any = false;
        for t in self.present() {
            if !f(t) {
                return false;
            }
            any = true;
        }
        any
    }

    fn suit_count(&self) -> usize {
        (0..TZ).filter(|&ti| self.all[ti][1..TNUM].iter().any(|&n| n > 0)).count()
    }

    fn has_honor(&self) -> bool {
        self.all[TZ][1..TNUM].iter().any(|&n| n > 0)
    }

    fn chow_count(&self, t: Tile) -> usize {
        self.sets.iter().filter(|sp| sp.0.is_chow() && sp.1 == t).count()
    }

    #[inline]
    fn has_chow(&self, ti: Type, ni: Tnum) -> bool {
        (1..=7).contains(&ni) && self.chow_count(Tile(ti, ni)) > 0
    }

    #[inline]
    fn has_pung(&self, ti: Type, ni: Tnum) -> bool {
        self.sets.iter().any(|sp| sp.0.is_pung() && sp.1 == Tile(ti, ni))
    }

    // 雀頭と4面子のすべてが条件を満たす
    fn all_sets_match(&self, f: impl Fn(&SetPair) -> bool) -> bool {
        self.pair.is_some() && self.counts.chow + self.counts.pung == SET && self.sets.iter().all(f)
    }

    fn is_scoring_wind(&self, t: Tile) -> bool {
        t.is_wind() && (Some(t.1) == self.flags.prevalent_wind || Some(t.1) == self.flags.seat_wind)
    }

    // 手牌のみで14枚すべてが異なり,数牌が147,258,369の組み合わせに収まる
    fn is_knitted_hand(&self) -> bool {
        if self.meld_count != 0 || table_len(&self.hand) != HAND_MAX {
            return false;
        }
        if all_tiles().any(|t| count_tile(&self.hand, t) > 1) {
            return false;
        }
        SUIT_PERMS.iter().any(|perm| {
            perm.iter().enumerate().all(|(k, &ti)| {
                (1..TNUM).all(|ni| self.hand[ti][ni] == 0 || ni % 3 == (k + 1) % 3)
            })
        })
    }
}

fn count_sets(sets: &ParsedHand) -> Counts {
    let mut cnt = Counts::default();
    for &SetPair(tp, t) in sets {
        if tp.is_chow() {
            cnt.chow += 1;
        }
        if tp.is_pung() {
            cnt.pung += 1;
            if t.is_wind() {
                cnt.wind_pung += 1;
            }
            if t.is_dragon() {
                cnt.dragon_pung += 1;
            }
        }
        if tp.is_kong() {
            cnt.kong += 1;
        }
        if tp.is_concealed_pung() {
            cnt.concealed_pung += 1;
        }
        if tp.is_melded() {
            cnt.melded += 1;
        }
        match tp {
            MeldedKong => cnt.melded_kong += 1,
            ConcealedKong => cnt.concealed_kong += 1,
            _ => {}
        }
    }
    cnt
}

// 他家の打牌で和了し,その牌が暗刻にしか使えない場合
fn is_claimed_pung(sets: &ParsedHand, flags: &WinFlags) -> bool {
    let w = match flags.winning_tile {
        Some(w) if !flags.self_drawn => w,
        _ => return false,
    };
    let in_pung = sets.contains(&SetPair(Pung, w));
    let elsewhere = sets.iter().any(|&SetPair(tp, t)| match tp {
        Pair => t == w,
        Chow => t.0 == w.0 && t.1 <= w.1 && w.1 <= t.1 + 2,
        _ => false,
    });
    in_pung && !elsewhere
}

// 和了牌が1種類のみの待ちの場合,その形を返却
fn calc_wait(hand: &TileTable, meld_count: usize, sets: &ParsedHand, flags: &WinFlags) -> Option<Wait> {
    let w = flags.winning_tile?;
    if count_tile(hand, w) == 0 {
        return None;
    }
    let mut before = *hand;
    dec_tile(&mut before, w);
    if calc_winning_tiles(&before, meld_count) != [w] {
        return None;
    }

    for &SetPair(tp, t) in sets {
        if tp == Chow && t.0 == w.0 && ((t.1 == 1 && w.1 == 3) || (t.1 == 7 && w.1 == 7)) {
            return Some(Wait::Edge);
        }
    }
    for &SetPair(tp, t) in sets {
        if tp == Chow && t.0 == w.0 && w.1 == t.1 + 1 {
            return Some(Wait::Closed);
        }
    }
    if sets.contains(&SetPair(Pair, w)) {
        return Some(Wait::Single);
    }
    None
}

// 完成形の場合は面子分解ごとの,それ以外は牌の枚数から作った判定用のデータ
// 七対の形をした手牌は面子分解とは別に七対としての解釈を追加
pub fn build_contexts<'a>(hand: &[Tile], melds: &[Meld], flags: &'a WinFlags) -> Vec<McrContext<'a>> {
    let tt = tiles_to_tile_table(hand);
    let mut res: Vec<McrContext<'a>> = parse_into_sets(&tt, melds.len())
        .iter()
        .map(|ph| McrContext::new(&tt, melds, flags, Some(ph)))
        .collect();
    if res.is_empty() || (melds.is_empty() && is_seven_pairs_win(&tt)) {
        res.push(McrContext::new(&tt, melds, flags, None));
    }
    res
}

#[inline]
fn b(x: bool) -> usize {
    x as usize
}

// [88番] ======================================================================

// 大四喜
pub(super) fn is_big_four_winds(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.wind_pung == 4)
}

// 大三元
pub(super) fn is_big_three_dragons(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.dragon_pung == 3)
}

// 緑一色
pub(super) fn is_all_green(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_match(|t| t.is_green()))
}

// 九蓮宝燈
pub(super) fn is_nine_gates(ctx: &McrContext<'_>) -> usize {
    if !ctx.complete || ctx.meld_count != 0 || ctx.suit_count() != 1 || ctx.has_honor() {
        return 0;
    }
    let ti = match (0..TZ).find(|&ti| ctx.hand[ti][1..TNUM].iter().any(|&n| n > 0)) {
        Some(ti) => ti,
        None => return 0,
    };
    let tr = &ctx.hand[ti];
    b(tr[1] >= 3 && tr[9] >= 3 && (2..=8).all(|ni| tr[ni] >= 1))
}

// 四杠
pub(super) fn is_four_kongs(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.kong == 4)
}

// 連七対
pub(super) fn is_seven_shifted_pairs(ctx: &McrContext<'_>) -> usize {
    if ctx.decomposed || ctx.meld_count != 0 || table_len(&ctx.hand) != HAND_MAX {
        return 0;
    }
    b((0..TZ).any(|ti| (1..=3).any(|s| (s..s + 7).all(|ni| ctx.hand[ti][ni] == 2))))
}

// 十三幺
pub(super) fn is_thirteen_orphans(ctx: &McrContext<'_>) -> usize {
    b(ctx.meld_count == 0 && is_thirteen_orphans_win(&ctx.hand))
}

// [64番] ======================================================================

// 清幺九
pub(super) fn is_all_terminals(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_match(|t| t.is_terminal()))
}

// 小四喜
pub(super) fn is_little_four_winds(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.wind_pung == 3 && ctx.pair.map_or(false, |p| p.is_wind()))
}

// 小三元
pub(super) fn is_little_three_dragons(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.dragon_pung == 2 && ctx.pair.map_or(false, |p| p.is_dragon()))
}

// 字一色
pub(super) fn is_all_honors(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_match(|t| t.is_honor()))
}

// 四暗刻
pub(super) fn is_four_concealed_pungs(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.concealed_pung == 4)
}

// 一色双龍会
pub(super) fn is_pure_terminal_chows(ctx: &McrContext<'_>) -> usize {
    const ROW: TileRow = [0, 2, 2, 2, 0, 2, 0, 2, 2, 2];
    b(ctx.complete && table_len(&ctx.all) == HAND_MAX && (0..TZ).any(|ti| ctx.all[ti] == ROW))
}

// [48番] ======================================================================

// 一色四同順
pub(super) fn is_quadruple_chow(ctx: &McrContext<'_>) -> usize {
    b(ctx.sets.iter().any(|sp| sp.0.is_chow() && ctx.chow_count(sp.1) == 4))
}

// 一色四節高
pub(super) fn is_four_pure_shifted_pungs(ctx: &McrContext<'_>) -> usize {
    b((0..TZ).any(|ti| (1..=6).any(|ni| (ni..ni + 4).all(|n| ctx.has_pung(ti, n)))))
}

// [32番] ======================================================================

// 一色四步高
pub(super) fn is_four_pure_shifted_chows(ctx: &McrContext<'_>) -> usize {
    b((0..TZ).any(|ti| {
        [1, 2].iter().any(|&s| (1..=7).any(|ni| (0..4).all(|k| ctx.has_chow(ti, ni + k * s))))
    }))
}

// 三杠
pub(super) fn is_three_kongs(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.kong == 3)
}

// 混幺九
pub(super) fn is_all_terminals_and_honors(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_match(|t| t.is_end()))
}

// [24番] ======================================================================

// 七対
pub(super) fn is_seven_pairs(ctx: &McrContext<'_>) -> usize {
    b(!ctx.decomposed && ctx.meld_count == 0 && is_seven_pairs_win(&ctx.hand))
}

// 七星不靠
pub(super) fn is_greater_honors_and_knitted(ctx: &McrContext<'_>) -> usize {
    b(ctx.is_knitted_hand() && (1..=DR).all(|ni| ctx.hand[TZ][ni] == 1))
}

// 全双刻
pub(super) fn is_all_even_pungs(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.pung == SET && ctx.all_match(|t| t.is_suit() && t.1 % 2 == 0))
}

// 清一色
pub(super) fn is_full_flush(ctx: &McrContext<'_>) -> usize {
    b(ctx.suit_count() == 1 && !ctx.has_honor())
}

// 一色三同順
pub(super) fn is_pure_triple_chow(ctx: &McrContext<'_>) -> usize {
    b(ctx.sets.iter().any(|sp| sp.0.is_chow() && ctx.chow_count(sp.1) >= 3))
}

// 一色三節高
pub(super) fn is_pure_shifted_pungs(ctx: &McrContext<'_>) -> usize {
    b((0..TZ).any(|ti| (1..=7).any(|ni| (ni..ni + 3).all(|n| ctx.has_pung(ti, n)))))
}

// 全大
pub(super) fn is_upper_tiles(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_match(|t| t.is_suit() && t.1 >= 7))
}

// 全中
pub(super) fn is_middle_tiles(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_match(|t| t.is_suit() && (4..=6).contains(&t.1)))
}

// 全小
pub(super) fn is_lower_tiles(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_match(|t| t.is_suit() && t.1 <= 3))
}

// [16番] ======================================================================

// 清龍
pub(super) fn is_pure_straight(ctx: &McrContext<'_>) -> usize {
    b((0..TZ).any(|ti| ctx.has_chow(ti, 1) && ctx.has_chow(ti, 4) && ctx.has_chow(ti, 7)))
}

// 三色双龍会
pub(super) fn is_three_suited_terminal_chows(ctx: &McrContext<'_>) -> usize {
    let p = match ctx.pair {
        Some(p) if p.is_suit() && p.1 == 5 => p,
        _ => return 0,
    };
    b(ctx.counts.chow == SET
        && (0..TZ)
            .filter(|&ti| ti != p.0)
            .all(|ti| ctx.has_chow(ti, 1) && ctx.has_chow(ti, 7)))
}

// 一色三步高
pub(super) fn is_pure_shifted_chows(ctx: &McrContext<'_>) -> usize {
    b((0..TZ).any(|ti| {
        [1, 2].iter().any(|&s| (1..=7).any(|ni| (0..3).all(|k| ctx.has_chow(ti, ni + k * s))))
    }))
}

// 全帯五
pub(super) fn is_all_fives(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_sets_match(|&SetPair(tp, t)| {
        if tp.is_chow() {
            (3..=5).contains(&t.1)
        } else {
            t.is_suit() && t.1 == 5
        }
    }))
}

// 三同刻
pub(super) fn is_triple_pung(ctx: &McrContext<'_>) -> usize {
    b((1..TNUM).any(|ni| (0..TZ).all(|ti| ctx.has_pung(ti, ni))))
}

// 三暗刻
pub(super) fn is_three_concealed_pungs(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.concealed_pung == 3)
}

// [12番] ======================================================================

// 全不靠
pub(super) fn is_lesser_honors_and_knitted(ctx: &McrContext<'_>) -> usize {
    b(ctx.is_knitted_hand())
}

// 組合龍
pub(super) fn is_knitted_straight(ctx: &McrContext<'_>) -> usize {
    b(SUIT_PERMS.iter().any(|perm| {
        perm.iter()
            .enumerate()
            .all(|(k, &ti)| [k + 1, k + 4, k + 7].iter().all(|&ni| ctx.all[ti][ni] > 0))
    }))
}

// 大于五
pub(super) fn is_upper_four(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_match(|t| t.is_suit() && t.1 >= 6))
}

// 小于五
pub(super) fn is_lower_four(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_match(|t| t.is_suit() && t.1 <= 4))
}

// 三風刻
pub(super) fn is_big_three_winds(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.wind_pung >= 3)
}

// [8番] =======================================================================

// 花龍
pub(super) fn is_mixed_straight(ctx: &McrContext<'_>) -> usize {
    b(SUIT_PERMS
        .iter()
        .any(|p| ctx.has_chow(p[0], 1) && ctx.has_chow(p[1], 4) && ctx.has_chow(p[2], 7)))
}

// 推不倒
pub(super) fn is_reversible_tiles(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_match(|t| t.is_reversible()))
}

// 三色三同順
pub(super) fn is_mixed_triple_chow(ctx: &McrContext<'_>) -> usize {
    b((1..=7).any(|ni| (0..TZ).all(|ti| ctx.has_chow(ti, ni))))
}

// 三色三節高
pub(super) fn is_mixed_shifted_pungs(ctx: &McrContext<'_>) -> usize {
    b(SUIT_PERMS.iter().any(|p| {
        (1..=7).any(|ni| ctx.has_pung(p[0], ni) && ctx.has_pung(p[1], ni + 1) && ctx.has_pung(p[2], ni + 2))
    }))
}

// 無番和
pub(super) fn is_chicken_hand(ctx: &McrContext<'_>) -> usize {
    b(ctx.complete)
}

// 妙手回春
pub(super) fn is_last_tile_draw(ctx: &McrContext<'_>) -> usize {
    b(ctx.flags.last_tile_draw)
}

// 海底捞月
pub(super) fn is_last_tile_claim(ctx: &McrContext<'_>) -> usize {
    b(ctx.flags.last_tile_claim)
}

// 杠上開花
pub(super) fn is_out_with_replacement_tile(ctx: &McrContext<'_>) -> usize {
    b(ctx.flags.replacement_tile)
}

// 搶杠和
pub(super) fn is_robbing_the_kong(ctx: &McrContext<'_>) -> usize {
    b(ctx.flags.robbing_kong)
}

// [6番] =======================================================================

// 碰碰和
pub(super) fn is_all_pungs(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.pung == SET)
}

// 混一色
pub(super) fn is_half_flush(ctx: &McrContext<'_>) -> usize {
    b(ctx.suit_count() == 1 && ctx.has_honor())
}

// 三色三步高
pub(super) fn is_mixed_shifted_chows(ctx: &McrContext<'_>) -> usize {
    b(SUIT_PERMS.iter().any(|p| {
        (1..=5).any(|ni| ctx.has_chow(p[0], ni) && ctx.has_chow(p[1], ni + 1) && ctx.has_chow(p[2], ni + 2))
    }))
}

// 五門斉
pub(super) fn is_all_types(ctx: &McrContext<'_>) -> usize {
    let wind = ctx.present().any(|t| t.is_wind());
    let dragon = ctx.present().any(|t| t.is_dragon());
    b(ctx.suit_count() == 3 && wind && dragon)
}

// 全求人
pub(super) fn is_melded_hand(ctx: &McrContext<'_>) -> usize {
    b(ctx.complete
        && ctx.counts.melded == SET
        && table_len(&ctx.hand) == 2
        && ctx.flags.winning_tile.is_some()
        && !ctx.flags.self_drawn)
}

// 双暗杠
pub(super) fn is_two_concealed_kongs(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.concealed_kong == 2)
}

// 双箭刻
pub(super) fn is_two_dragon_pungs(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.dragon_pung == 2)
}

// [4番] =======================================================================

// 全帯幺
pub(super) fn is_outside_hand(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_sets_match(|&SetPair(tp, t)| {
        if tp.is_chow() {
            t.1 == 1 || t.1 == 7
        } else {
            t.is_end()
        }
    }))
}

// 不求人
pub(super) fn is_fully_concealed_hand(ctx: &McrContext<'_>) -> usize {
    b(ctx.complete && ctx.counts.melded == 0 && ctx.flags.self_drawn)
}

// 双明杠
pub(super) fn is_two_melded_kongs(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.melded_kong == 2)
}

// 和絶張
pub(super) fn is_last_tile(ctx: &McrContext<'_>) -> usize {
    b(ctx.flags.last_of_kind)
}

// [2番] =======================================================================

// 箭刻
pub(super) fn count_dragon_pungs(ctx: &McrContext<'_>) -> usize {
    ctx.counts.dragon_pung
}

// 圏風刻
pub(super) fn is_prevalent_wind(ctx: &McrContext<'_>) -> usize {
    b(ctx.flags.prevalent_wind.map_or(false, |w| ctx.has_pung(TZ, w)))
}

// 門風刻
pub(super) fn is_seat_wind(ctx: &McrContext<'_>) -> usize {
    b(ctx.flags.seat_wind.map_or(false, |w| ctx.has_pung(TZ, w)))
}

// 門前清
pub(super) fn is_concealed_hand(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.melded == 0 && table_len(&ctx.all) > 0)
}

// 平和
pub(super) fn is_all_chows(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.chow == SET && ctx.pair.map_or(false, |p| p.is_suit()))
}

// 四帰一
pub(super) fn count_tile_hogs(ctx: &McrContext<'_>) -> usize {
    let n = all_tiles().filter(|&t| count_tile(&ctx.all, t) == TILE).count();
    n.saturating_sub(ctx.counts.kong)
}

// 双同刻
pub(super) fn count_double_pungs(ctx: &McrContext<'_>) -> usize {
    (1..TNUM)
        .filter(|&ni| (0..TZ).filter(|&ti| ctx.has_pung(ti, ni)).count() == 2)
        .count()
}

// 双暗刻
pub(super) fn is_two_concealed_pungs(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.concealed_pung == 2)
}

// 断幺
pub(super) fn is_all_simples(ctx: &McrContext<'_>) -> usize {
    b(ctx.all_match(|t| t.is_simple()))
}

// 暗杠
pub(super) fn is_concealed_kong(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.concealed_kong == 1)
}

// [1番] =======================================================================

// 一般高
pub(super) fn count_pure_double_chows(ctx: &McrContext<'_>) -> usize {
    let mut n = 0;
    for ti in 0..TZ {
        for ni in 1..=7 {
            n += ctx.chow_count(Tile(ti, ni)) / 2;
        }
    }
    n
}

// 喜相逢
pub(super) fn count_mixed_double_chows(ctx: &McrContext<'_>) -> usize {
    (1..=7)
        .filter(|&ni| (0..TZ).filter(|&ti| ctx.has_chow(ti, ni)).count() == 2)
        .count()
}

// 連六
pub(super) fn count_short_straights(ctx: &McrContext<'_>) -> usize {
    let mut n = 0;
    for ti in 0..TZ {
        for ni in 1..=4 {
            if ctx.has_chow(ti, ni) && ctx.has_chow(ti, ni + 3) {
                n += 1;
            }
        }
    }
    n
}

// 老少副
pub(super) fn count_two_terminal_chows(ctx: &McrContext<'_>) -> usize {
    (0..TZ).filter(|&ti| ctx.has_chow(ti, 1) && ctx.has_chow(ti, 7)).count()
}

// 幺九刻 (箭刻, 圏風, 門風は除く)
pub(super) fn count_terminal_pungs(ctx: &McrContext<'_>) -> usize {
    ctx.sets
        .iter()
        .filter(|sp| sp.0.is_pung() && sp.1.is_end() && !sp.1.is_dragon() && !ctx.is_scoring_wind(sp.1))
        .count()
}

// 明杠
pub(super) fn is_melded_kong(ctx: &McrContext<'_>) -> usize {
    b(ctx.counts.melded_kong == 1)
}

// 缺一門
pub(super) fn is_one_voided_suit(ctx: &McrContext<'_>) -> usize {
    b(ctx.suit_count() == 2)
}

// 無字
pub(super) fn is_no_honors(ctx: &McrContext<'_>) -> usize {
    b(table_len(&ctx.all) > 0 && !ctx.has_honor())
}

// 辺張
pub(super) fn is_edge_wait(ctx: &McrContext<'_>) -> usize {
    b(ctx.wait == Some(Wait::Edge))
}

// 坎張
pub(super) fn is_closed_wait(ctx: &McrContext<'_>) -> usize {
    b(ctx.wait == Some(Wait::Closed))
}

// 単釣将
pub(super) fn is_single_wait(ctx: &McrContext<'_>) -> usize {
    b(ctx.wait == Some(Wait::Single))
}

// 自摸
pub(super) fn is_self_drawn(ctx: &McrContext<'_>) -> usize {
    b(ctx.flags.self_drawn)
}

// 花牌
pub(super) fn count_flowers(ctx: &McrContext<'_>) -> usize {
    ctx.flags.flowers
}

#[cfg(test)]
fn fans_of(hand: &str, melds: &[Meld], flags: &WinFlags) -> Vec<Vec<Fan>> {
    let hand = crate::util::string::tiles_from_string(hand).unwrap();
    build_contexts(&hand, melds, flags)
        .iter()
        .map(|ctx| ctx.recognize().iter().map(|r| r.fan).collect())
        .collect()
}

#[test]
fn test_contexts() {
    let flags = WinFlags::default();
    let hand = crate::util::string::tiles_from_string("m111222333444m55").unwrap();
    let ctxs = build_contexts(&hand, &[], &flags);
    assert!(ctxs.len() >= 2);
    assert!(ctxs.iter().all(|c| c.is_complete()));

    // 七対の形は面子分解とは別の解釈を持つ
    let hand = crate::util::string::tiles_from_string("m112233p112233z11").unwrap();
    let fans = fans_of("m112233p112233z11", &[], &flags);
    assert!(build_contexts(&hand, &[], &flags).len() >= 2);
    assert!(fans.iter().any(|f| f.contains(&Fan::SevenPairs)));
    assert!(fans.iter().any(|f| f.contains(&Fan::PureDoubleChow) && !f.contains(&Fan::SevenPairs)));

    // 未完成の手牌は1つだけ
    assert_eq!(fans_of("m111p23", &[], &flags).len(), 1);
}

#[test]
fn test_recognize_patterns() {
    let flags = WinFlags::default();
    let has = |hand: &str, melds: &[Meld], f: Fan| fans_of(hand, melds, &flags).iter().any(|v| v.contains(&f));

    assert!(has("m123456789p123z11", &[], Fan::PureStraight));
    assert!(has("m123p456s789m55z111", &[], Fan::MixedStraight));
    assert!(has("m123p123s123m99z222", &[], Fan::MixedTripleChow));
    assert!(has("m234p345s456z333m99", &[], Fan::MixedShiftedChows));
    assert!(has("m111p222s333z555m99", &[], Fan::MixedShiftedPungs));
    assert!(has("m222p222s222z555m99", &[], Fan::TriplePung));
    assert!(has("m123s123m789s789p55", &[], Fan::ThreeSuitedTerminalChows));
    assert!(has("m11123456789995", &[], Fan::NineGates));
    assert!(has("m11223344556677", &[], Fan::SevenShiftedPairs));
    assert!(has("m19p19s19z12345677", &[], Fan::ThirteenOrphans));
    assert!(has("m147p258s3z1234567", &[], Fan::GreaterHonorsAndKnitted));
    assert!(has("m147p258s369z12345", &[], Fan::LesserHonorsAndKnitted));
    assert!(has("m147p258s369z12345", &[], Fan::KnittedStraight));
    assert!(!has("m147p258s369z12345", &[], Fan::GreaterHonorsAndKnitted));
    assert!(has("m12378p123s789z11m9", &[], Fan::TwoTerminalChows));

    // 雀頭の判定
    assert!(has("z111222333m123z44", &[], Fan::BigThreeWinds));
    assert!(has("z111222333z44m123", &[], Fan::LittleFourWinds));
    assert!(has("z555666m123p123z77", &[], Fan::LittleThreeDragons));
    assert!(!has("z555666m123p123s11", &[], Fan::LittleThreeDragons));
    assert!(has("z555666m123p123s11", &[], Fan::TwoDragonPungs));
}

#[test]
fn test_recognize_kongs() {
    let flags = WinFlags::default();
    let melds = vec![
        Meld::Kong {
            tile: Tile(TM, 2),
            concealed: true,
        },
        Meld::Kong {
            tile: Tile(TP, 3),
            concealed: false,
        },
    ];
    let fans = fans_of("m456p678s11", &melds, &flags);
    assert_eq!(fans.len(), 1);
    let f = &fans[0];
    assert!(f.contains(&Fan::ConcealedKong));
    assert!(f.contains(&Fan::MeldedKong));
    assert!(!f.contains(&Fan::TwoMeldedKongs));
    assert!(!f.contains(&Fan::ConcealedHand));
    assert!(!f.contains(&Fan::TileHog));

    // 暗槓は門前清を崩さない
    let fans = fans_of("m456p678s789s11", &melds[..1], &flags);
    assert!(fans[0].contains(&Fan::ConcealedHand));
}

#[test]
fn test_recognize_waits() {
    let flags = WinFlags {
        winning_tile: Some(Tile(TM, 3)),
        ..Default::default()
    };
    // 12の辺張
    let fans = fans_of("m123p456s789z111p99", &[], &flags);
    assert!(fans.iter().all(|f| f.contains(&Fan::EdgeWait)));

    let flags = WinFlags {
        winning_tile: Some(Tile(TP, 5)),
        ..Default::default()
    };
    let fans = fans_of("m123p456s789z111m99", &[], &flags);
    assert!(fans.iter().all(|f| f.contains(&Fan::ClosedWait)));

    let flags = WinFlags {
        winning_tile: Some(Tile(TZ, DW)),
        self_drawn: true,
        ..Default::default()
    };
    let fans = fans_of("m123p456s789z111z55", &[], &flags);
    assert!(fans.iter().all(|f| f.contains(&Fan::SingleWait)
        && f.contains(&Fan::FullyConcealedHand)
        && f.contains(&Fan::SelfDrawn)));
}

#[test]
fn test_claimed_pung() {
    let hand = "m111p222s333z555m99";
    let flags = WinFlags {
        winning_tile: Some(Tile(TZ, DW)),
        ..Default::default()
    };
    let fans = fans_of(hand, &[], &flags);
    assert!(fans[0].contains(&Fan::ThreeConcealedPungs));
    assert!(!fans[0].contains(&Fan::FourConcealedPungs));

    let fans = fans_of(hand, &[], &WinFlags::default());
    assert!(fans[0].contains(&Fan::FourConcealedPungs));
}

#[test]
fn test_chicken_hand() {
    let melds = vec![Meld::Chi { tile: Tile(TM, 2) }, Meld::Chi { tile: Tile(TP, 5) }];
    let fans = fans_of("m678s345z11", &melds, &WinFlags::default());
    assert_eq!(fans, vec![vec![Fan::ChickenHand]]);

    let flags = WinFlags {
        flowers: 2,
        ..Default::default()
    };
    let fans = fans_of("m678s345z11", &melds, &flags);
    assert_eq!(fans, vec![vec![Fan::ChickenHand, Fan::FlowerTiles]]);

    // 未完成
    let fans = fans_of("m678s345z1", &melds, &WinFlags::default());
    assert!(!fans[0].contains(&Fan::ChickenHand));
}
