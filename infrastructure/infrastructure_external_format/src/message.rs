//! Protobuf Message Module
//!
//! The `prost` form of the envelope. The entity stays free of wire concerns;
//! conversions move the payload without copying where ownership allows.

use entities_data_handling::Scalar;
use prost::Message;

/// `message Scalar { bytes data = 1; }`
#[derive(Clone, PartialEq, Eq, Message)]
pub struct ScalarMessage {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

impl From<Scalar> for ScalarMessage {
    fn from(scalar: Scalar) -> Self {
        Self {
            data: scalar.into_data(),
        }
    }
}

impl From<&Scalar> for ScalarMessage {
    fn from(scalar: &Scalar) -> Self {
        Self {
            data: scalar.data().to_vec(),
        }
    }
}

impl From<ScalarMessage> for Scalar {
    fn from(message: ScalarMessage) -> Self {
        Scalar::new(message.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_encodes_to_nothing() {
        assert!(ScalarMessage::default().encode_to_vec().is_empty());
    }

    #[test]
    fn test_key_and_length_prefix() {
        let message = ScalarMessage {
            data: vec![0x01, 0x02],
        };
        assert_eq!(message.encode_to_vec(), vec![0x0a, 0x02, 0x01, 0x02]);
        assert_eq!(message.encoded_len(), 4);
    }

    #[test]
    fn test_entity_conversions() {
        let scalar = Scalar::new(vec![9, 8, 7]);
        let message = ScalarMessage::from(&scalar);
        assert_eq!(message.data, vec![9, 8, 7]);
        assert_eq!(Scalar::from(message), scalar);
    }
}
