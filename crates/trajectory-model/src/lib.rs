//! Habilo Trajectory Model
//!
//! Defines the core data contracts for motion-capture recordings:
//! - **Schema:** Anatomical segment/side/axis naming and the column keys it produces
//! - **Table:** Frame-aligned numeric columns plus the `Time [sec]` axis
//! - **Reader:** Delimited-text ingest with configurable separators
//!
//! Coordinates are taken as recorded (centimetres in the capture exports);
//! no calibration or unit conversion happens here.

pub mod error;
pub mod reader;
pub mod schema;
pub mod table;

pub use error::*;
pub use schema::*;
pub use table::*;
