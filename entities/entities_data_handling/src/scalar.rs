//! Scalar Envelope Module
//!
//! Provides the message envelope that carries one encoded integer.

/// Scalar envelope
///
/// Holds a single variable-length byte string. On the write path it is
/// created from an encoded integer; on the read path it starts empty and is
/// filled in by the wire decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scalar {
    data: Vec<u8>,
}

impl Scalar {
    /// Create a new envelope owning `data`
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Get the payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Replace the payload
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Consume the envelope and return the payload
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the payload is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for Scalar {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}
