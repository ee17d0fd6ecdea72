/// The Global Error enum. Encodes all possible internal library errors
#[derive(Debug)]
pub enum Error {
    Daemon(String),
    HTTP(ureq::Error),
    JSON(serde_json::Error),
    IO(std::io::Error),
    Url(url::ParseError),
    WebSocket(tungstenite::Error),
    Generic(String),
}

impl From<ureq::Error> for Error {
    fn from(value: ureq::Error) -> Self {
        Self::HTTP(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::JSON(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::IO(value)
    }
}

impl From<url::ParseError> for Error {
    fn from(value: url::ParseError) -> Self {
        Self::Url(value)
    }
}

impl From<tungstenite::Error> for Error {
    fn from(value: tungstenite::Error) -> Self {
        Self::WebSocket(value)
    }
}

impl Error {
    // Returns the name of the enum variant as a string
    pub fn name(&self) -> String {
        match self {
            Error::Daemon(_) => "Daemon",
            Error::HTTP(_) => "HTTP",
            Error::JSON(_) => "JSON",
            Error::IO(_) => "IO",
            Error::Url(_) => "Url",
            Error::WebSocket(_) => "WebSocket",
            Error::Generic(_) => "Generic",
        }
        .to_string()
    }

    // Returns the error message as a string
    pub fn message(&self) -> String {
        match self {
            Error::Daemon(e) => e.clone(),
            Error::HTTP(e) => e.to_string(),
            Error::JSON(e) => e.to_string(),
            Error::IO(e) => e.to_string(),
            Error::Url(e) => e.to_string(),
            Error::WebSocket(e) => e.to_string(),
            Error::Generic(e) => e.clone(),
        }
    }
}
