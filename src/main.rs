#![warn(rust_2018_idioms)]

use log::error;

use mahjong_advisor::{app, util};

fn main() {
    let mut verbose = false;
    let mut quiet = false;
    let mut args = vec![];
    for a in std::env::args().skip(1) {
        match a.as_str() {
            "-v" => verbose = true,
            "-q" => quiet = true,
            _ => args.push(a),
        }
    }
    util::log::init(util::log::level_from_flags(verbose, quiet));

    if args.is_empty() {
        error!("mode not specified");
        return;
    }

    let args2 = args[1..].to_vec();
    match args[0].as_str() {
        "C" => {
            // Calculator (式から向聴数と番数を計算)
            app::CalculatorApp::new(args2).run();
        }
        "A" => {
            // Analyzer (JSONの局面を解析)
            app::AnalyzerApp::new(args2).run();
        }
        "B" => {
            // Bench (無作為な配牌で解析を検証)
            app::BenchApp::new(args2).run();
        }
        m => {
            error!("unknown mode: {}", m)
        }
    }
}
