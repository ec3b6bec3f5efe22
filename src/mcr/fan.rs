use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use super::recognize::*;
use crate::text::Locale;

// 国標麻雀の番種 (81種)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Fan {
    // 88番
    BigFourWinds,
    BigThreeDragons,
    AllGreen,
    NineGates,
    FourKongs,
    SevenShiftedPairs,
    ThirteenOrphans,
    // 64番
    AllTerminals,
    LittleFourWinds,
    LittleThreeDragons,
    AllHonors,
    FourConcealedPungs,
    PureTerminalChows,
    // 48番
    QuadrupleChow,
    FourPureShiftedPungs,
    // 32番
    FourPureShiftedChows,
    ThreeKongs,
    AllTerminalsAndHonors,
    // 24番
    SevenPairs,
    GreaterHonorsAndKnitted,
    AllEvenPungs,
    FullFlush,
    PureTripleChow,
    PureShiftedPungs,
    UpperTiles,
    MiddleTiles,
    LowerTiles,
    // 16番
    PureStraight,
    ThreeSuitedTerminalChows,
    PureShiftedChows,
    AllFives,
    TriplePung,
    ThreeConcealedPungs,
    // 12番
    LesserHonorsAndKnitted,
    KnittedStraight,
    UpperFour,
    LowerFour,
    BigThreeWinds,
    // 8番
    MixedStraight,
    ReversibleTiles,
    MixedTripleChow,
    MixedShiftedPungs,
    ChickenHand,
    LastTileDraw,
    LastTileClaim,
    OutWithReplacementTile,
    RobbingTheKong,
    // 6番
    AllPungs,
    HalfFlush,
    MixedShiftedChows,
    AllTypes,
    MeldedHand,
    TwoConcealedKongs,
    TwoDragonPungs,
    // 4番
    OutsideHand,
    FullyConcealedHand,
    TwoMeldedKongs,
    LastTile,
    // 2番
    DragonPung,
    PrevalentWind,
    SeatWind,
    ConcealedHand,
    AllChows,
    TileHog,
    DoublePung,
    TwoConcealedPungs,
    AllSimples,
    ConcealedKong,
    // 1番
    PureDoubleChow,
    MixedDoubleChow,
    ShortStraight,
    TwoTerminalChows,
    PungOfTerminalsOrHonors,
    MeldedKong,
    OneVoidedSuit,
    NoHonors,
    EdgeWait,
    ClosedWait,
    SingleWait,
    SelfDrawn,
    FlowerTiles,
}

use Fan::*;

impl Fan {
    pub const ALL: [Fan; 81] = [
        BigFourWinds,
        BigThreeDragons,
        AllGreen,
        NineGates,
        FourKongs,
        SevenShiftedPairs,
        ThirteenOrphans,
        AllTerminals,
        LittleFourWinds,
        LittleThreeDragons,
        AllHonors,
        FourConcealedPungs,
        PureTerminalChows,
        QuadrupleChow,
        FourPureShiftedPungs,
        FourPureShiftedChows,
        ThreeKongs,
        AllTerminalsAndHonors,
        SevenPairs,
        GreaterHonorsAndKnitted,
        AllEvenPungs,
        FullFlush,
        PureTripleChow,
        PureShiftedPungs,
        UpperTiles,
        MiddleTiles,
        LowerTiles,
        PureStraight,
        ThreeSuitedTerminalChows,
        PureShiftedChows,
        AllFives,
        TriplePung,
        ThreeConcealedPungs,
        LesserHonorsAndKnitted,
        KnittedStraight,
        UpperFour,
        LowerFour,
        BigThreeWinds,
        MixedStraight,
        ReversibleTiles,
        MixedTripleChow,
        MixedShiftedPungs,
        ChickenHand,
        LastTileDraw,
        LastTileClaim,
        OutWithReplacementTile,
        RobbingTheKong,
        AllPungs,
        HalfFlush,
        MixedShiftedChows,
        AllTypes,
        MeldedHand,
        TwoConcealedKongs,
        TwoDragonPungs,
        OutsideHand,
        FullyConcealedHand,
        TwoMeldedKongs,
        LastTile,
        DragonPung,
        PrevalentWind,
        SeatWind,
        ConcealedHand,
        AllChows,
        TileHog,
        DoublePung,
        TwoConcealedPungs,
        AllSimples,
        ConcealedKong,
        PureDoubleChow,
        MixedDoubleChow,
        ShortStraight,
        TwoTerminalChows,
        PungOfTerminalsOrHonors,
        MeldedKong,
        OneVoidedSuit,
        NoHonors,
        EdgeWait,
        ClosedWait,
        SingleWait,
        SelfDrawn,
        FlowerTiles,
    ];

    #[inline]
    pub fn def(self) -> &'static FanDef {
        REGISTRY[self as usize]
    }

    #[inline]
    pub fn fan(self) -> usize {
        self.def().fan
    }

    pub fn name(self, locale: Locale) -> &'static str {
        let d = self.def();
        match locale {
            Locale::En => d.name_en,
            Locale::Zh => d.name_zh,
        }
    }
}

impl fmt::Display for Fan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.def().name_en)
    }
}

pub struct FanDef {
    pub id: Fan,
    pub name_zh: &'static str,
    pub name_en: &'static str,
    pub fan: usize,
    pub func: fn(&McrContext<'_>) -> usize, // 成立回数 (0: 不成立)
    pub description: &'static str,
    pub excludes: &'static [Fan], // 不計
    pub includes: &'static [Fan], // 不計に含まれていても別に数える
}

impl fmt::Debug for FanDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.name_en, self.fan)
    }
}

macro_rules! fan {
    ($id: ident, $zh: expr, $en: expr, $fan: expr, $f: expr, $desc: expr, [$($ex: ident),*], [$($inc: ident),*]) => {
        FanDef {
            id: $id,
            name_zh: $zh,
            name_en: $en,
            fan: $fan,
            func: $f,
            description: $desc,
            excludes: &[$($ex),*],
            includes: &[$($inc),*],
        }
    };
}

static FAN_LIST: &[FanDef] = &[
    // 88番
    fan!(BigFourWinds, "大四喜", "Big Four Winds", 88, is_big_four_winds, "Four pungs of winds",
        [LittleFourWinds, BigThreeWinds, AllPungs, PrevalentWind, SeatWind, PungOfTerminalsOrHonors],
        [AllTerminalsAndHonors, HalfFlush, AllHonors]),
    fan!(BigThreeDragons, "大三元", "Big Three Dragons", 88, is_big_three_dragons, "Three pungs of dragons",
        [LittleThreeDragons, DragonPung, TwoDragonPungs],
        [OutsideHand, AllHonors]),
    fan!(AllGreen, "绿一色", "All Green", 88, is_all_green, "Only bamboo 2, 3, 4, 6, 8 and green dragons",
        [HalfFlush, FullFlush, AllPungs],
        [TileHog, FullFlush, PureShiftedPungs, AllSimples]),
    fan!(NineGates, "九莲宝灯", "Nine Gates", 88, is_nine_gates, "1112345678999 of one suit plus any tile of that suit, concealed",
        [FullFlush, ConcealedHand, FullyConcealedHand, PungOfTerminalsOrHonors],
        [TileHog, PureStraight, TwoConcealedPungs, ShortStraight]),
    fan!(FourKongs, "四杠", "Four Kongs", 88, is_four_kongs, "Four kongs",
        [ThreeKongs, TwoMeldedKongs, TwoConcealedKongs, MeldedKong, SingleWait, AllPungs],
        [FourConcealedPungs, UpperTiles, MixedShiftedPungs, DoublePung, PungOfTerminalsOrHonors,
         AllTerminalsAndHonors, TriplePung, AllTypes, DragonPung]),
    fan!(SevenShiftedPairs, "连七对", "Seven Shifted Pairs", 88, is_seven_shifted_pairs, "Seven consecutive pairs of one suit",
        [FullFlush, SevenPairs, ConcealedHand, FullyConcealedHand, AllChows, SingleWait],
        [AllSimples]),
    fan!(ThirteenOrphans, "十三幺", "Thirteen Orphans", 88, is_thirteen_orphans, "One of each terminal and honor plus one duplicate",
        [AllTypes, ConcealedHand, FullyConcealedHand, SingleWait, AllTerminalsAndHonors],
        []),
    // 64番
    fan!(AllTerminals, "清幺九", "All Terminals", 64, is_all_terminals, "Only terminals",
        [AllPungs, AllTerminalsAndHonors, DoublePung, NoHonors, PungOfTerminalsOrHonors],
        [SevenPairs, TileHog]),
    fan!(LittleFourWinds, "小四喜", "Little Four Winds", 64, is_little_four_winds, "Three wind pungs and a wind pair",
        [BigThreeWinds, PungOfTerminalsOrHonors],
        [AllPungs]),
    fan!(LittleThreeDragons, "小三元", "Little Three Dragons", 64, is_little_three_dragons, "Two dragon pungs and a dragon pair",
        [TwoDragonPungs, DragonPung, OneVoidedSuit],
        [AllTerminalsAndHonors, DoublePung]),
    fan!(AllHonors, "字一色", "All Honors", 64, is_all_honors, "Only honors",
        [AllPungs, AllTerminalsAndHonors, PungOfTerminalsOrHonors],
        [TwoDragonPungs]),
    fan!(FourConcealedPungs, "四暗刻", "Four Concealed Pungs", 64, is_four_concealed_pungs, "Four concealed pungs or kongs",
        [AllPungs, ConcealedHand, FullyConcealedHand, TwoConcealedKongs, ThreeConcealedPungs, TwoConcealedPungs],
        []),
    fan!(PureTerminalChows, "一色双龙会", "Pure Terminal Chows", 64, is_pure_terminal_chows, "Two 123 and two 789 chows of one suit with a pair of 5",
        [FullFlush, AllChows, PureDoubleChow, TwoTerminalChows, NoHonors, OneVoidedSuit],
        []),
    // 48番
    fan!(QuadrupleChow, "一色四同顺", "Quadruple Chow", 48, is_quadruple_chow, "Four identical chows",
        [PureTripleChow, PureDoubleChow, TileHog],
        [AllGreen, FullFlush, AllSimples, AllChows]),
    fan!(FourPureShiftedPungs, "一色四节高", "Four Pure Shifted Pungs", 48, is_four_pure_shifted_pungs, "Four pungs of one suit increasing by one",
        [PureShiftedPungs, AllPungs],
        [ReversibleTiles, LowerFour, PungOfTerminalsOrHonors]),
    // 32番
    fan!(FourPureShiftedChows, "一色四步高", "Four Pure Shifted Chows", 32, is_four_pure_shifted_chows, "Four chows of one suit increasing by one or two",
        [PureShiftedChows, ShortStraight],
        [HalfFlush, AllChows]),
    fan!(ThreeKongs, "三杠", "Three Kongs", 32, is_three_kongs, "Three kongs",
        [TwoMeldedKongs, TwoConcealedKongs, MeldedKong],
        [LowerFour, MixedShiftedPungs]),
    fan!(AllTerminalsAndHonors, "混幺九", "All Terminals and Honors", 32, is_all_terminals_and_honors, "Only terminals and honors",
        [AllPungs, OutsideHand, PungOfTerminalsOrHonors],
        [TriplePung, DragonPung, AllTypes, SevenPairs, TileHog, OneVoidedSuit]),
    // 24番
    fan!(SevenPairs, "七对", "Seven Pairs", 24, is_seven_pairs, "Seven pairs",
        [ConcealedHand, FullyConcealedHand, SingleWait],
        [AllTypes, AllGreen, FullFlush, AllEvenPungs, ReversibleTiles]),
    fan!(GreaterHonorsAndKnitted, "七星不靠", "Greater Honors and Knitted Tiles", 24, is_greater_honors_and_knitted, "All seven honors and seven knitted suited tiles",
        [LesserHonorsAndKnitted, AllTypes, ConcealedHand, FullyConcealedHand, SingleWait],
        []),
    fan!(AllEvenPungs, "全双刻", "All Even Pungs", 24, is_all_even_pungs, "Pungs and pair of 2, 4, 6, 8",
        [AllPungs, AllSimples],
        [ReversibleTiles, DoublePung]),
    fan!(FullFlush, "清一色", "Full Flush", 24, is_full_flush, "Only one suit",
        [NoHonors],
        [PureStraight, PureDoubleChow, TileHog, AllChows]),
    fan!(PureTripleChow, "一色三同顺", "Pure Triple Chow", 24, is_pure_triple_chow, "Three identical chows",
        [PureDoubleChow],
        [LowerTiles, OutsideHand, AllChows, OneVoidedSuit, MixedDoubleChow]),
    fan!(PureShiftedPungs, "一色三节高", "Pure Shifted Pungs", 24, is_pure_shifted_pungs, "Three pungs of one suit increasing by one",
        [],
        [HalfFlush, TileHog]),
    fan!(UpperTiles, "全大", "Upper Tiles", 24, is_upper_tiles, "Only suited 7, 8, 9",
        [NoHonors, UpperFour],
        [MixedTripleChow, OutsideHand, AllChows, PureDoubleChow]),
    fan!(MiddleTiles, "全中", "Middle Tiles", 24, is_middle_tiles, "Only suited 4, 5, 6",
        [NoHonors, AllSimples],
        [AllPungs, MixedShiftedPungs, DoublePung]),
    fan!(LowerTiles, "全小", "Lower Tiles", 24, is_lower_tiles, "Only suited 1, 2, 3",
        [NoHonors, LowerFour],
        [QuadrupleChow, OutsideHand, OneVoidedSuit, AllChows]),
    // 16番
    fan!(PureStraight, "清龙", "Pure Straight", 16, is_pure_straight, "123, 456, 789 chows of one suit",
        [ShortStraight, TwoTerminalChows],
        [AllChows, OneVoidedSuit, MixedDoubleChow]),
    fan!(ThreeSuitedTerminalChows, "三色双龙会", "Three-Suited Terminal Chows", 16, is_three_suited_terminal_chows, "123 and 789 chows of two suits with a pair of 5 of the third",
        [AllChows, TwoTerminalChows, NoHonors, MixedDoubleChow],
        []),
    fan!(PureShiftedChows, "一色三步高", "Pure Shifted Chows", 16, is_pure_shifted_chows, "Three chows of one suit increasing by one or two",
        [],
        [AllFives, AllChows, MixedDoubleChow]),
    fan!(AllFives, "全带五", "All Fives", 16, is_all_fives, "Every set and the pair contain a 5",
        [AllSimples],
        [MiddleTiles, MixedTripleChow, TileHog, AllChows, PureDoubleChow]),
    fan!(TriplePung, "三同刻", "Triple Pung", 16, is_triple_pung, "Pungs of the same number in three suits",
        [],
        [AllEvenPungs, MiddleTiles]),
    fan!(ThreeConcealedPungs, "三暗刻", "Three Concealed Pungs", 16, is_three_concealed_pungs, "Three concealed pungs",
        [TwoConcealedPungs],
        []),
    // 12番
    fan!(LesserHonorsAndKnitted, "全不靠", "Lesser Honors and Knitted Tiles", 12, is_lesser_honors_and_knitted, "Fourteen single knitted suited tiles and honors",
        [AllTypes, ConcealedHand, FullyConcealedHand, SingleWait],
        [KnittedStraight]),
    fan!(KnittedStraight, "组合龙", "Knitted Straight", 12, is_knitted_straight, "147, 258, 369 of three different suits",
        [],
        [AllChows, AllTypes, DragonPung]),
    fan!(UpperFour, "大于五", "Upper Four", 12, is_upper_four, "Only suited 6, 7, 8, 9",
        [NoHonors],
        [MixedTripleChow, PureDoubleChow, AllChows]),
    fan!(LowerFour, "小于五", "Lower Four", 12, is_lower_four, "Only suited 1, 2, 3, 4",
        [NoHonors],
        [FullFlush, PureShiftedPungs, ReversibleTiles, TileHog]),
    fan!(BigThreeWinds, "三风刻", "Big Three Winds", 12, is_big_three_winds, "Three wind pungs",
        [PungOfTerminalsOrHonors],
        [AllHonors, DragonPung]),
    // 8番
    fan!(MixedStraight, "花龙", "Mixed Straight", 8, is_mixed_straight, "123, 456, 789 chows in three different suits",
        [],
        [PureDoubleChow, AllChows]),
    fan!(ReversibleTiles, "推不倒", "Reversible Tiles", 8, is_reversible_tiles, "Only dots 1234589, bamboo 245689 and white dragons",
        [OneVoidedSuit],
        [DoublePung, NoHonors, PungOfTerminalsOrHonors, FullFlush, SevenPairs]),
    fan!(MixedTripleChow, "三色三同顺", "Mixed Triple Chow", 8, is_mixed_triple_chow, "Chows of the same numbers in three suits",
        [MixedDoubleChow],
        [AllChows, ShortStraight]),
    fan!(MixedShiftedPungs, "三色三节高", "Mixed Shifted Pungs", 8, is_mixed_shifted_pungs, "Pungs of three suits increasing by one",
        [],
        [UpperTiles, AllPungs, DoublePung, PungOfTerminalsOrHonors]),
    fan!(ChickenHand, "无番和", "Chicken Hand", 8, is_chicken_hand, "A winning hand with no other scoring pattern",
        [],
        []),
    fan!(LastTileDraw, "妙手回春", "Last Tile Draw", 8, is_last_tile_draw, "Self-drawn win on the last tile of the wall",
        [SelfDrawn],
        []),
    fan!(LastTileClaim, "海底捞月", "Last Tile Claim", 8, is_last_tile_claim, "Win on the discard of the last tile",
        [],
        []),
    fan!(OutWithReplacementTile, "杠上开花", "Out with Replacement Tile", 8, is_out_with_replacement_tile, "Win on the replacement tile after a kong",
        [SelfDrawn],
        []),
    fan!(RobbingTheKong, "抢杠和", "Robbing the Kong", 8, is_robbing_the_kong, "Win on a tile added to a melded pung",
        [LastTile],
        []),
    // 6番
    fan!(AllPungs, "碰碰和", "All Pungs", 6, is_all_pungs, "Four pungs or kongs",
        [],
        [PureShiftedPungs, DoublePung, ReversibleTiles]),
    fan!(HalfFlush, "混一色", "Half Flush", 6, is_half_flush, "One suit and honors",
        [],
        [DragonPung, TwoTerminalChows]),
    fan!(MixedShiftedChows, "三色三步高", "Mixed Shifted Chows", 6, is_mixed_shifted_chows, "Chows of three suits increasing by one",
        [],
        [AllFives, TileHog]),
    fan!(AllTypes, "五门齐", "All Types", 6, is_all_types, "Characters, dots, bamboo, winds and dragons",
        [],
        [OutsideHand, DragonPung, MixedDoubleChow]),
    fan!(MeldedHand, "全求人", "Melded Hand", 6, is_melded_hand, "Four melded sets and a single wait won on a discard",
        [SingleWait],
        []),
    fan!(TwoConcealedKongs, "双暗杠", "Two Concealed Kongs", 6, is_two_concealed_kongs, "Two concealed kongs",
        [],
        []),
    fan!(TwoDragonPungs, "双箭刻", "Two Dragon Pungs", 6, is_two_dragon_pungs, "Two dragon pungs",
        [],
        []),
    // 4番
    fan!(OutsideHand, "全带幺", "Outside Hand", 4, is_outside_hand, "Every set and the pair contain a terminal or honor",
        [],
        []),
    fan!(FullyConcealedHand, "不求人", "Fully Concealed Hand", 4, is_fully_concealed_hand, "Concealed hand won by self-draw",
        [ConcealedHand, SelfDrawn],
        []),
    fan!(TwoMeldedKongs, "双明杠", "Two Melded Kongs", 4, is_two_melded_kongs, "Two melded kongs",
        [],
        []),
    fan!(LastTile, "和绝张", "Last Tile", 4, is_last_tile, "Win on the fourth copy of a tile",
        [],
        []),
    // 2番
    fan!(DragonPung, "箭刻", "Dragon Pung", 2, count_dragon_pungs, "A pung of dragons",
        [],
        []),
    fan!(PrevalentWind, "圈风刻", "Prevalent Wind", 2, is_prevalent_wind, "A pung of the prevalent wind",
        [],
        []),
    fan!(SeatWind, "门风刻", "Seat Wind", 2, is_seat_wind, "A pung of the seat wind",
        [],
        []),
    fan!(ConcealedHand, "门前清", "Concealed Hand", 2, is_concealed_hand, "No chow, pung or melded kong",
        [],
        []),
    fan!(AllChows, "平和", "All Chows", 2, is_all_chows, "Four chows and a suited pair",
        [NoHonors],
        []),
    fan!(TileHog, "四归一", "Tile Hog", 2, count_tile_hogs, "All four copies of a tile without a kong",
        [],
        []),
    fan!(DoublePung, "双同刻", "Double Pung", 2, count_double_pungs, "Pungs of the same number in two suits",
        [],
        []),
    fan!(TwoConcealedPungs, "双暗刻", "Two Concealed Pungs", 2, is_two_concealed_pungs, "Two concealed pungs",
        [],
        []),
    fan!(AllSimples, "断幺", "All Simples", 2, is_all_simples, "No terminals or honors",
        [NoHonors],
        []),
    fan!(ConcealedKong, "暗杠", "Concealed Kong", 2, is_concealed_kong, "One concealed kong",
        [],
        []),
    // 1番
    fan!(PureDoubleChow, "一般高", "Pure Double Chow", 1, count_pure_double_chows, "Two identical chows",
        [],
        []),
    fan!(MixedDoubleChow, "喜相逢", "Mixed Double Chow", 1, count_mixed_double_chows, "Chows of the same numbers in two suits",
        [],
        []),
    fan!(ShortStraight, "连六", "Short Straight", 1, count_short_straights, "Two chows of one suit making six consecutive tiles",
        [],
        []),
    fan!(TwoTerminalChows, "老少副", "Two Terminal Chows", 1, count_two_terminal_chows, "123 and 789 chows of one suit",
        [],
        []),
    fan!(PungOfTerminalsOrHonors, "幺九刻", "Pung of Terminals or Honors", 1, count_terminal_pungs, "A pung of terminals or non-scoring winds",
        [],
        []),
    fan!(MeldedKong, "明杠", "Melded Kong", 1, is_melded_kong, "One melded kong",
        [],
        []),
    fan!(OneVoidedSuit, "缺一门", "One Voided Suit", 1, is_one_voided_suit, "Missing one of the three suits",
        [],
        []),
    fan!(NoHonors, "无字", "No Honors", 1, is_no_honors, "No honor tiles",
        [],
        []),
    fan!(EdgeWait, "边张", "Edge Wait", 1, is_edge_wait, "Only waiting on 3 of 12 or 7 of 89",
        [],
        []),
    fan!(ClosedWait, "坎张", "Closed Wait", 1, is_closed_wait, "Only waiting on the middle tile of a chow",
        [],
        []),
    fan!(SingleWait, "单钓将", "Single Wait", 1, is_single_wait, "Only waiting on the pair",
        [],
        []),
    fan!(SelfDrawn, "自摸", "Self-Drawn", 1, is_self_drawn, "Win by self-draw",
        [],
        []),
    fan!(FlowerTiles, "花牌", "Flower Tiles", 1, count_flowers, "One per flower tile",
        [],
        []),
];

const FAN_VALUES: [usize; 12] = [1, 2, 4, 6, 8, 12, 16, 24, 32, 48, 64, 88];

// Fan as usizeで引く表 初回アクセス時に整合性を検証
static REGISTRY: LazyLock<Vec<&'static FanDef>> = LazyLock::new(|| build_registry(FAN_LIST));

fn build_registry(list: &'static [FanDef]) -> Vec<&'static FanDef> {
    let mut table: Vec<Option<&'static FanDef>> = vec![None; Fan::ALL.len()];
    for d in list {
        assert!(FAN_VALUES.contains(&d.fan), "invalid fan value: {} {}", d.name_en, d.fan);
        let slot = &mut table[d.id as usize];
        assert!(slot.is_none(), "duplicate fan definition: {}", d.name_en);
        *slot = Some(d);

        let ex: HashSet<Fan> = d.excludes.iter().copied().collect();
        assert!(ex.len() == d.excludes.len(), "duplicate excludes: {}", d.name_en);
        assert!(!ex.contains(&d.id), "fan excludes itself: {}", d.name_en);
    }

    Fan::ALL
        .iter()
        .zip(table)
        .map(|(f, d)| match d {
            Some(d) => d,
            None => panic!("missing fan definition: {:?}", f),
        })
        .collect()
}

// 番数の高い順に並んだ定義の一覧
pub fn fan_table() -> &'static [FanDef] {
    LazyLock::force(&REGISTRY);
    FAN_LIST
}

#[test]
fn test_registry() {
    assert_eq!(fan_table().len(), 81);
    for (i, f) in Fan::ALL.iter().enumerate() {
        assert_eq!(*f as usize, i);
        assert_eq!(f.def().id, *f);
    }
    for w in fan_table().windows(2) {
        assert!(w[0].fan >= w[1].fan, "{:?} {:?}", w[0], w[1]);
    }
    assert_eq!(AllGreen.fan(), 88);
    assert_eq!(FlowerTiles.fan(), 1);
    assert_eq!(AllPungs.name(Locale::Zh), "碰碰和");
    assert_eq!(AllPungs.to_string(), "All Pungs");
    assert!(AllGreen.def().excludes.contains(&AllPungs));
    assert!(!AllGreen.def().includes.contains(&AllPungs));
    assert!(!AllGreen.def().includes.contains(&DragonPung));
}
