use crate::error::{MahjongError, MahjongResult};
use crate::model::*;

pub fn tile_type_from_char(ch: char) -> Result<Type, String> {
    match ch {
        'm' => Ok(TM),
        'p' => Ok(TP),
        's' => Ok(TS),
        'z' => Ok(TZ),
        _ => Err(format!("invalid tile type char: {}", ch)),
    }
}

pub fn tile_type_to_char(ti: Type) -> char {
    match ti {
        TM => 'm',
        TP => 'p',
        TS => 's',
        TZ => 'z',
        _ => panic!("invalid tile type index: {}", ti),
    }
}

pub fn tile_number_from_char(ch: char) -> Result<Tnum, String> {
    match ch.to_digit(10) {
        Some(i) => Ok(i as Tnum),
        None => Err(format!("invalid tile number char: {}", ch)),
    }
}

// "m123p55z7" 形式の文字列を牌のリストに変換
pub fn tiles_from_string(exp: &str) -> MahjongResult<Vec<Tile>> {
    let mut tiles = vec![];
    let mut ti = None;
    for ch in exp.chars() {
        match ch {
            'm' | 'p' | 's' | 'z' => ti = tile_type_from_char(ch).ok(),
            '0'..='9' => {
                let ti = ti.ok_or_else(|| MahjongError::parse(exp, "tile number before tile type"))?;
                let ni = tile_number_from_char(ch).map_err(|e| MahjongError::parse(exp, e))?;
                let t = Tile(ti, ni);
                if !t.is_valid() {
                    return Err(MahjongError::parse(exp, format!("invalid tile: {}{}", tile_type_to_char(ti), ni)));
                }
                tiles.push(t);
            }
            _ => return Err(MahjongError::parse(exp, format!("invalid char: '{}'", ch))),
        }
    }
    Ok(tiles)
}

pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let mut res = String::new();
    let mut last_ti = None;
    for t in tiles {
        if last_ti != Some(t.0) {
            last_ti = Some(t.0);
            res.push(tile_type_to_char(t.0));
        }
        res.push_str(&t.1.to_string());
    }
    res
}

// "m123"(チー), "p555"(ポン), "z6666"(明槓), "s2222+"(暗槓)
pub fn meld_from_string(exp: &str) -> MahjongResult<Meld> {
    let (body, concealed) = match exp.strip_suffix('+') {
        Some(b) => (b, true),
        None => (exp, false),
    };
    let mut tiles = tiles_from_string(body)?;
    tiles.sort();
    if tiles.is_empty() || tiles.iter().any(|t| t.0 != tiles[0].0) {
        return Err(MahjongError::parse(exp, "meld tiles must share one type"));
    }

    let t = tiles[0];
    let same = tiles.iter().all(|&x| x == t);
    let meld = match tiles.len() {
        3 if same => Meld::Pong { tile: t },
        3 if t.is_suit() && tiles[1].1 == t.1 + 1 && tiles[2].1 == t.1 + 2 => Meld::Chi { tile: t },
        4 if same => Meld::Kong { tile: t, concealed },
        _ => return Err(MahjongError::parse(exp, "invalid meld")),
    };
    if concealed && !meld.is_kong() {
        return Err(MahjongError::parse(exp, "only a kong can be concealed"));
    }
    Ok(meld)
}

pub fn meld_to_string(m: &Meld) -> String {
    let mut res = tiles_to_string(&m.tiles());
    if m.is_concealed() {
        res.push('+');
    }
    res
}

#[test]
fn test_tiles_to_string() {
    let hand_str = "m111p34777s123z66";
    let hand = tiles_from_string(hand_str).unwrap();
    assert_eq!(hand.len(), 13);
    assert_eq!(tiles_to_string(&hand), hand_str);

    assert!(tiles_from_string("123m").is_err());
    assert!(tiles_from_string("z8").is_err());
    assert!(tiles_from_string("m1x").is_err());
}

#[test]
fn test_meld_from_string() {
    assert_eq!(meld_from_string("m312").unwrap(), Meld::Chi { tile: Tile(TM, 1) });
    assert_eq!(meld_from_string("z555").unwrap(), Meld::Pong { tile: Tile(TZ, DW) });
    assert_eq!(
        meld_from_string("s2222+").unwrap(),
        Meld::Kong {
            tile: Tile(TS, 2),
            concealed: true
        }
    );
    assert!(meld_from_string("z123").is_err());
    assert!(meld_from_string("m124").is_err());
    assert!(meld_from_string("m123+").is_err());
    assert!(meld_from_string("m1p1s1").is_err());

    let m = meld_from_string("p7777").unwrap();
    assert_eq!(meld_to_string(&m), "p7777");
}
