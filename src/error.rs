// SPDX-License-Identifier: MPL-2.0
use crate::domain::media::MediaId;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Catalog Error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Problems found while validating a media catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two images share the same identifier, which would make selection ambiguous.
    #[error("duplicate image id {0}")]
    DuplicateImageId(MediaId),

    /// An entry has a blank title.
    #[error("entry {0} has an empty title")]
    EmptyTitle(String),

    /// An image entry has no resource locator.
    #[error("image {0} has no url")]
    MissingImageUrl(MediaId),
}

/// Errors reported by the strict gallery operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The item is not part of the gallery's image collection.
    #[error("item {0} is not in the image collection")]
    NotInCollection(MediaId),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_wraps_into_error() {
        let err: Error = CatalogError::DuplicateImageId(MediaId::new(2)).into();
        assert_eq!(format!("{}", err), "Catalog Error: duplicate image id #2");
    }

    #[test]
    fn gallery_error_names_item() {
        let err = GalleryError::NotInCollection(MediaId::new(9));
        assert_eq!(err.to_string(), "item #9 is not in the image collection");
    }

    #[test]
    fn toml_parse_error_is_config_error() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }
}
