//! Response status as reported by the transport.

/// Family a status code belongs to, taken from its hundreds digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    /// Outside 100..=599.
    Nonstandard,
}

/// Raw numeric status of an API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    pub fn class(self) -> StatusClass {
        match self.0 / 100 {
            1 => StatusClass::Informational,
            2 => StatusClass::Success,
            3 => StatusClass::Redirection,
            4 => StatusClass::ClientError,
            5 => StatusClass::ServerError,
            _ => StatusClass::Nonstandard,
        }
    }

    /// Only these bodies are handed to the models.
    pub fn is_success(self) -> bool {
        self.class() == StatusClass::Success
    }

    /// Bad token, unknown resource, rate limit and the like.
    pub fn is_client_error(self) -> bool {
        self.class() == StatusClass::ClientError
    }

    pub fn is_server_error(self) -> bool {
        self.class() == StatusClass::ServerError
    }

    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
