use thiserror::Error;

/// Failure while building notes for a request
///
/// There is no partial result: any failure aborts the whole request.
#[derive(Error, Debug)]
pub enum ProcessingError {
    /// Note generation panicked or its task failed to complete
    #[error("{0}")]
    Generation(String),
}

impl ProcessingError {
    /// Build an error from a panic payload, keeping its message when it has one
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "note generation panicked".to_string()
        };
        Self::Generation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_underlying_message() {
        let err = ProcessingError::Generation("index out of range".to_string());
        assert_eq!(err.to_string(), "index out of range");
    }

    #[test]
    fn test_from_panic_payloads() {
        let err = ProcessingError::from_panic(Box::new("static message"));
        assert_eq!(err.to_string(), "static message");

        let err = ProcessingError::from_panic(Box::new(String::from("owned message")));
        assert_eq!(err.to_string(), "owned message");

        let err = ProcessingError::from_panic(Box::new(42u32));
        assert_eq!(err.to_string(), "note generation panicked");
    }
}
