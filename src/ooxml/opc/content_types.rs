//! Content type map for `[Content_Types].xml`.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;

/// Content type map for looking up content types by part name or extension.
///
/// Implements the OPC content type discovery algorithm using Default and Override elements
/// from [Content_Types].xml.
#[derive(Debug, Default)]
pub struct ContentTypeMap {
    /// Maps lowercase file extensions to default content types
    defaults: HashMap<String, String>,

    /// Maps lowercase partnames to override content types
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    /// Parse content types from [Content_Types].xml.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self::default();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let kind = match e.local_name().as_ref() {
                        b"Default" => Some((&b"Extension"[..], true)),
                        b"Override" => Some((&b"PartName"[..], false)),
                        _ => None,
                    };
                    if let Some((key_attr, is_default)) = kind {
                        let mut key = None;
                        let mut content_type = None;
                        for attr in e.attributes() {
                            let attr = attr.map_err(|err| OpcError::XmlError(err.to_string()))?;
                            let value = attr
                                .decode_and_unescape_value(reader.decoder())
                                .map_err(|err| OpcError::XmlError(err.to_string()))?
                                .into_owned();
                            match attr.key.as_ref() {
                                k if k == key_attr => key = Some(value),
                                b"ContentType" => content_type = Some(value),
                                _ => {},
                            }
                        }

                        if let (Some(key), Some(ct)) = (key, content_type) {
                            if is_default {
                                map.defaults.insert(key.to_lowercase(), ct);
                            } else {
                                map.overrides.insert(key.to_lowercase(), ct);
                            }
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OpcError::XmlError(format!(
                        "Content types parse error: {}",
                        e
                    )));
                },
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Get the content type for a partname.
    ///
    /// First checks for an override, then falls back to the default
    /// based on file extension. Partnames compare case-insensitively.
    pub fn get(&self, pack_uri: &PackURI) -> Result<&str> {
        if let Some(ct) = self.overrides.get(&pack_uri.as_str().to_lowercase()) {
            return Ok(ct);
        }

        if let Some(ct) = self.defaults.get(&pack_uri.ext().to_lowercase()) {
            return Ok(ct);
        }

        Err(OpcError::ContentTypeNotFound(pack_uri.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;

    #[test]
    fn test_content_type_map() {
        let xml = br#"<?xml version="1.0"?>
            <Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
                <Default Extension="xml" ContentType="application/xml"/>
                <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
                <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
            </Types>"#;

        let map = ContentTypeMap::from_xml(xml).unwrap();

        let doc = PackURI::new("/word/document.xml").unwrap();
        assert_eq!(map.get(&doc).unwrap(), ct::WML_DOCUMENT_MAIN);

        let upper = PackURI::new("/WORD/Document.xml").unwrap();
        assert_eq!(map.get(&upper).unwrap(), ct::WML_DOCUMENT_MAIN);

        let rels = PackURI::new("/_rels/.rels").unwrap();
        assert_eq!(map.get(&rels).unwrap(), ct::OPC_RELATIONSHIPS);

        let other = PackURI::new("/word/styles.xml").unwrap();
        assert_eq!(map.get(&other).unwrap(), ct::XML);

        let image = PackURI::new("/word/media/image1.png").unwrap();
        assert!(map.get(&image).is_err());
    }
}
