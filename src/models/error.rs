use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    CatalogError(String),
    NoBaseMatch(String),
    UnknownBaseItem(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::CatalogError(msg) => write!(f, "Catalog Error: {}", msg),
            Error::NoBaseMatch(text) => write!(f, "No base item found in: {:?}", text),
            Error::UnknownBaseItem(name) => {
                write!(f, "Base item {:?} is not present in the catalog", name)
            }
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}
