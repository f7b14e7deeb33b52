//! JSON to XML converter.
//!
//! This crate maps a JSON document onto a fixed, type-tagged XML scheme
//! (`object`, `array`, `string`, `number`, `boolean`, `null`, with an
//! optional `name` attribute carrying the member key) and writes it as
//! pretty-printed XML.
//!
//! The binary `jsonxml` takes an input JSON path and an output XML path.

pub mod converter;
pub mod error;
pub mod generator;
pub mod model;
pub mod pipeline;

pub use converter::JsonToXmlConverter;
pub use error::ConvertError;
pub use pipeline::{ConversionReport, convert_file};
