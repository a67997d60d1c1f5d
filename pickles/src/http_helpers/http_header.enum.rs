/// Headers the framework itself reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpHeader {
    /// Size of the body, in bytes.
    ContentLength,
    /// Media type of the body (e.g. `application/json`).
    ContentType,
    /// Redirect target.
    Location,
}

impl HttpHeader {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpHeader::ContentLength => "Content-Length",
            HttpHeader::ContentType => "Content-Type",
            HttpHeader::Location => "Location",
        }
    }

    /// Lower-cased form, as stored in request and response header maps.
    pub fn key(&self) -> &'static str {
        match self {
            HttpHeader::ContentLength => "content-length",
            HttpHeader::ContentType => "content-type",
            HttpHeader::Location => "location",
        }
    }
}

impl AsRef<str> for HttpHeader {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
