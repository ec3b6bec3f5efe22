// mainから直接呼び出すアプリケーションの動作モード(C, A, B)のモジュール

mod analyzer;
mod bench;
mod calculator;

pub use analyzer::AnalyzerApp;
pub use bench::BenchApp;
pub use calculator::CalculatorApp;
