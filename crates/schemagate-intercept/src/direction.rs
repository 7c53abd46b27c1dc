use reqwest::Method;

/// The side of a transport operation a schema check applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Validate the outgoing payload before the transport call; on failure
    /// the call is never issued.
    Pre,
    /// Validate the received payload after the transport call completed; the
    /// receipt is not rolled back on failure.
    Post,
}

/// Enforcement direction for an HTTP method.
///
/// Mutating verbs ship a payload and are pre-validated; GET is
/// post-validated against the response body. Everything else (DELETE,
/// HEAD, OPTIONS, TRACE) has no payload contract and returns `None`.
pub fn classify(method: &Method) -> Option<Direction> {
    if *method == Method::POST || *method == Method::PUT || *method == Method::PATCH {
        Some(Direction::Pre)
    } else if *method == Method::GET {
        Some(Direction::Post)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutating_verbs_are_pre_validated() {
        assert_eq!(classify(&Method::POST), Some(Direction::Pre));
        assert_eq!(classify(&Method::PUT), Some(Direction::Pre));
        assert_eq!(classify(&Method::PATCH), Some(Direction::Pre));
    }

    #[test]
    fn get_is_post_validated() {
        assert_eq!(classify(&Method::GET), Some(Direction::Post));
    }

    #[test]
    fn remaining_verbs_are_unsupported() {
        for method in [Method::DELETE, Method::HEAD, Method::OPTIONS, Method::TRACE] {
            assert_eq!(classify(&method), None);
        }
    }
}
