//! # Category Module
//!
//! 荷物を寸法と重量から3つの振り分け先カテゴリに分類する。
//!
//! ## 判定ルール
//!
//! - **Bulky**: 体積 ≥ 1,000,000 cm³、またはいずれかの辺 ≥ 150 cm
//! - **Heavy**: 重量 ≥ 20 kg
//!
//! | Bulky | Heavy | Category |
//! |-------|-------|----------|
//! | no    | no    | STANDARD |
//! | yes   | no    | SPECIAL  |
//! | no    | yes   | SPECIAL  |
//! | yes   | yes   | REJECTED |
//!
//! ## モジュール構成
//!
//! - `thresholds`: 閾値定数と判定述語
//! - `stack`: カテゴリ定義
//! - `classifier`: 分類器
//! - `tally`: カテゴリ別集計
//!
//! ## 使用例
//!
//! ```rust
//! use package_sorter_core::category::{describe, Category, CategoryTally};
//!
//! let report = describe(150.0, 100.0, 100.0, 25.0).unwrap();
//! assert_eq!(report.volume_cm3, 1_500_000.0);
//! assert!(report.is_bulky && report.is_heavy);
//! assert_eq!(report.category, Category::Rejected);
//!
//! let mut tally = CategoryTally::new();
//! tally.record(report.category);
//! assert_eq!(tally.count(Category::Rejected), 1);
//! ```

mod classifier;
mod stack;
mod tally;
mod thresholds;

// Re-exports
pub use classifier::{
    classify, classify_measurement, describe, describe_measurement, DetailedResult, Dimensions,
};
pub use stack::Category;
pub use tally::CategoryTally;
pub use thresholds::{is_bulky, is_heavy, BULKY_DIMENSION_CM, BULKY_VOLUME_CM3, HEAVY_MASS_KG};
