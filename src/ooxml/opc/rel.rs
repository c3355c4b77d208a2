//! Relationship-related objects for OPC packages.
//!
//! This module provides types for reading the relationships between parts in
//! an OPC package, including internal and external relationships.
use crate::ooxml::opc::constants::target_mode;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference - either a part URI or external URL
    target_ref: String,

    /// Base URI for resolving relative references
    base_uri: String,

    /// Whether this is an external relationship
    is_external: bool,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Check if this is an external relationship.
    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Get the absolute target partname for internal relationships.
    ///
    /// Returns an error if this is an external relationship.
    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external {
            return Err(OpcError::InvalidRelationship(
                "Cannot get target_partname for external relationship".to_string(),
            ));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Collection of relationships from a single source, in document order.
#[derive(Debug, Default)]
pub struct Relationships {
    /// Base URI for resolving relative references
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: Vec::new(),
        }
    }

    /// Parse a `.rels` part.
    ///
    /// # Arguments
    /// * `base_uri` - Base URI of the source part, used to resolve targets
    /// * `xml` - Content of the relationships part
    pub fn from_xml(base_uri: &str, xml: &[u8]) -> Result<Self> {
        let mut rels = Self::new(base_uri.to_string());
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::with_capacity(512);

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target_ref = None;
                    let mut is_external = false;

                    for attr in e.attributes().flatten() {
                        let value = attr
                            .decode_and_unescape_value(reader.decoder())
                            .map_err(|err| OpcError::XmlError(err.to_string()))?
                            .into_owned();
                        match attr.key.local_name().as_ref() {
                            b"Id" => r_id = Some(value),
                            b"Type" => reltype = Some(value),
                            b"Target" => target_ref = Some(value),
                            b"TargetMode" => is_external = value == target_mode::EXTERNAL,
                            _ => {},
                        }
                    }

                    match (r_id, reltype, target_ref) {
                        (Some(r_id), Some(reltype), Some(target_ref)) => {
                            rels.add_relationship(reltype, target_ref, r_id, is_external);
                        },
                        _ => {
                            return Err(OpcError::InvalidRelationship(
                                "Relationship element missing Id, Type or Target".to_string(),
                            ));
                        },
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Add a relationship to the collection.
    pub fn add_relationship(
        &mut self,
        reltype: String,
        target_ref: String,
        r_id: String,
        is_external: bool,
    ) -> &Relationship {
        self.rels.push(Relationship {
            r_id,
            reltype,
            target_ref,
            base_uri: self.base_uri.clone(),
            is_external,
        });
        &self.rels[self.rels.len() - 1]
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Get the first relationship of the given type.
    ///
    /// Returns an error if no relationship of that type exists.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        self.rels
            .iter()
            .find(|rel| rel.reltype == reltype)
            .ok_or_else(|| OpcError::RelationshipNotFound(reltype.to_string()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Relationship> {
        self.rels.iter()
    }
}
