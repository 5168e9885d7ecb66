pub type Result<T> = core::result::Result<T, Error>;

pub struct Error {
    pub inner: Box<ErrorKind>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::Http(e.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::Json(e))
    }
}

pub enum ErrorKind {
    /// The request never produced a response (network, CORS, aborted).
    Http(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    Json(serde_json::Error),
    Config(String),
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ErrorKind::Http(ref e) => write!(f, "HttpError: {e:?}"),
            ErrorKind::Status(code) => write!(f, "StatusError: {code}"),
            ErrorKind::Json(ref e) => write!(f, "JsonError: {e:?}"),
            ErrorKind::Config(ref e) => write!(f, "ConfigError: {e:?}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ErrorKind::Http(ref e) => write!(f, "network error: {e}"),
            ErrorKind::Status(code) => write!(f, "server responded with HTTP {code}"),
            ErrorKind::Json(ref e) => write!(f, "invalid JSON: {e}"),
            ErrorKind::Config(ref e) => write!(f, "config error: {e}"),
        }
    }
}
