use mahjong_advisor::model::*;
use mahjong_advisor::util::string::tiles_from_string;
use mahjong_advisor::{analyze, score_completed_hand, suggest_sichuan, Locale, MahjongError};

fn state_from_json(json: &str) -> GameState {
    let state: GameState = serde_json::from_str(json).unwrap();
    state.validate().unwrap();
    state
}

#[test]
fn mcr_winning_hand_from_json() {
    let state = state_from_json(
        r#"{
            "mode": "mcr",
            "wallCount": 40,
            "hand": ["m1","m1","m1","m2","m2","m2","m3","m3","m3","m4","m4","m4","m5","m5"]
        }"#,
    );
    let res = analyze(&state, Locale::En);
    assert_eq!(res.status, HandStatus::Won);
    assert_eq!(res.score_estimate, 137);
    assert_eq!(res.suggestions[0].probability, 100);
    assert_eq!(
        res.suggestions[0].pattern_details,
        score_completed_hand(&state.hand, &state.melds).details
    );

    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["status"], "won");
    assert_eq!(json["isReady"], true);
    assert_eq!(json["scoreEstimate"], 137);
    assert!(json["bestDiscard"].is_null());
}

#[test]
fn mcr_hand_with_melds() {
    let state = state_from_json(
        r#"{
            "mode": "mcr",
            "wallCount": 8,
            "hand": ["z6","z6"],
            "melds": [
                {"type":"pong","tile":"s2"},
                {"type":"pong","tile":"s4"},
                {"type":"pong","tile":"s6"},
                {"type":"gang","tile":"s8"}
            ]
        }"#,
    );
    let res = analyze(&state, Locale::Zh);
    assert_eq!(res.status, HandStatus::Won);
    assert_eq!(res.suggestions[0].name, "绿一色");
    assert!(res.score_estimate >= 88);
    // 牌山が少ない場合の警告
    assert!(!res.warnings.is_empty());
}

#[test]
fn sichuan_flower_pig() {
    let state = state_from_json(
        r#"{
            "mode": "sichuan",
            "wallCount": 30,
            "voidSuit": "s",
            "hand": ["m1","m2","m3","m4","m5","m6","m7","m8","m9","p1","p1","p2","p2","s5"],
            "discards": ["s5","s5"]
        }"#,
    );
    let res = analyze(&state, Locale::En);
    let d = res.best_discard.unwrap();
    assert_eq!(d.tile, Tile(TS, 5));
    assert_eq!(d.reason, "Flower Pig");
    assert_eq!(res.suggestions.len(), 1);
    assert!(res.suggestions[0].illegal);
    assert_eq!(res.suggestions[0].multiplier, None);

    let json = serde_json::to_value(&res.suggestions[0]).unwrap();
    assert_eq!(json["illegal"], true);
    assert!(json.get("multiplier").is_none());
}

#[test]
fn sichuan_suggestions_carry_multiplier() {
    let hand = tiles_from_string("m1234567899m1p23").unwrap();
    let list = suggest_sichuan(&hand, &[], Some(Suit::Sou), Locale::En);
    assert!(!list.is_empty());
    for s in &list {
        assert!(!s.illegal);
        assert_eq!(s.multiplier, Some(1 << s.fan));
    }
    for w in list.windows(2) {
        assert!(w[0].fan >= w[1].fan);
    }
}

#[test]
fn invalid_states_are_rejected() {
    let state: GameState =
        serde_json::from_str(r#"{"mode":"mcr","wallCount":10,"hand":["m1","m1","m1"],"discards":["m1","m1"]}"#).unwrap();
    assert!(matches!(state.validate(), Err(MahjongError::InvalidState { .. })));

    let res: Result<GameState, _> = serde_json::from_str(r#"{"mode":"mcr","wallCount":10,"hand":["m0"]}"#);
    assert!(res.is_err());
}
