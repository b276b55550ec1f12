use std::fmt;

/// Why a result was built from fallback content instead of a parsed backend answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
    /// The probe found no usable backend at startup; nothing was invoked.
    BackendUnavailable,
    /// The single backend call failed (transport, backend-reported, or empty text).
    BackendError(String),
    /// The backend answered, but not with the expected structured shape.
    ParseError(String),
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degradation::BackendUnavailable => f.write_str("backend unavailable"),
            Degradation::BackendError(cause) => write!(f, "backend error: {cause}"),
            Degradation::ParseError(cause) => write!(f, "parse error: {cause}"),
        }
    }
}

/// Result of a generation task. Both arms carry a fully populated value.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Ok(T),
    Degraded(T, Degradation),
}

impl<T> Outcome<T> {
    pub fn value(&self) -> &T {
        match self {
            Outcome::Ok(value) | Outcome::Degraded(value, _) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Outcome::Ok(value) | Outcome::Degraded(value, _) => value,
        }
    }

    pub fn degradation(&self) -> Option<&Degradation> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Degraded(_, reason) => Some(reason),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Degraded(value, reason) => Outcome::Degraded(f(value), reason),
        }
    }
}
