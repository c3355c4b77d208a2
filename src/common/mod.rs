//! Common types and utilities shared across the document and formatting layers.

pub mod unit;
pub mod xml;

pub use xml::{XmlElement, XmlNode};
