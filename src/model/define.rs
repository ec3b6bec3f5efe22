// 型エイリアス
pub type Type = usize; // 牌の種別部分 (萬子,筒子,索子,字牌)
pub type Tnum = usize; // 牌の数字部分 (1~9, 字牌は1~7)
pub type Index = usize; // 牌の通し番号 (0~33) やその他Index

// Number
pub const TYPE: usize = 4; // 牌の種別部分の数 (萬子,筒子,索子,字牌)
pub const TNUM: usize = 10; // 牌の数字部分の配列長 (0は未使用)
pub const TILE: usize = 4; // 同種の牌の数
pub const KIND: usize = 34; // 牌の種類数
pub const SET: usize = 4; // 和了に必要な面子数
pub const HAND_MAX: usize = 14; // 手牌の最大枚数 (槓を除く)

// Type Index
pub const TM: usize = 0; // Type: Manzu (萬子)
pub const TP: usize = 1; // Type: Pinzu (筒子)
pub const TS: usize = 2; // Type: Souzu (索子)
pub const TZ: usize = 3; // Type: Zihai (字牌)

// Tnum Index
pub const WE: usize = 1; // Wind:    East  (東)
pub const WS: usize = 2; // Wind:    South (南)
pub const WW: usize = 3; // Wind:    West  (西)
pub const WN: usize = 4; // Wind:    North (北)
pub const DW: usize = 5; // Doragon: White (白)
pub const DG: usize = 6; // Doragon: Green (發)
pub const DR: usize = 7; // Doragon: Red   (中)

// 牌山の初期枚数 (配牌後)
pub const INITIAL_WALL_MCR: usize = 83;
pub const INITIAL_WALL_SICHUAN: usize = 55;
