//! Review command handlers.

mod analyze_code;

pub use analyze_code::{
    AnalyzeCodeCommand, AnalyzeCodeError, AnalyzeCodeHandler, AnalyzeCodeResult,
};
