//! Raw routing-service payloads.

/// The unparsed body of a successful route response.
///
/// The schema belongs to the routing service and to whatever consumes the
/// output stream; this crate only moves the bytes around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePayload(Vec<u8>);

impl RoutePayload {
    /// Wrap raw response bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the payload contains a line terminator.
    ///
    /// Such a payload cannot be written as a single output line.
    pub fn contains_line_break(&self) -> bool {
        self.0.iter().any(|&b| b == b'\n' || b == b'\r')
    }

    /// Consume the payload, returning the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<String> for RoutePayload {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&str> for RoutePayload {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_line_breaks() {
        assert!(!RoutePayload::from(r#"{"paths":[]}"#).contains_line_break());
        assert!(RoutePayload::from("{\n}").contains_line_break());
        assert!(RoutePayload::from("{\r}").contains_line_break());
    }

    #[test]
    fn keeps_bytes_untouched() {
        let bytes = vec![0xff, b'{', b'}', 0x00];
        let payload = RoutePayload::new(bytes.clone());
        assert_eq!(payload.as_bytes(), bytes.as_slice());
        assert_eq!(payload.len(), 4);
        assert_eq!(payload.into_bytes(), bytes);
    }
}
