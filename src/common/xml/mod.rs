//! XML helpers shared by the package and document layers.

mod element;
mod escape;

pub use element::{XmlElement, XmlNode};
pub use escape::{escape_xml, unescape_xml};
