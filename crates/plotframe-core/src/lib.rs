// File: crates/plotframe-core/src/lib.rs
// Summary: Core library entry point; exports data record and layout dimension shapes.

pub mod config;
pub mod dimensions;
pub mod error;
pub mod geometry;
pub mod record;
pub mod types;

pub use config::FrameConfig;
pub use dimensions::Dimensions;
pub use error::{Error, Result};
pub use geometry::Rect;
pub use record::{column_keys, parse_records, DataRecord, Scalar, ScalarKind};
pub use types::Margin;
