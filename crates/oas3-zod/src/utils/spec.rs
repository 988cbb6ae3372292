use std::{ffi::OsStr, path::Path};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use thiserror::Error;

use crate::generator::spec::OpenApiDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

/// A document that could not be turned into an [`OpenApiDocument`].
///
/// These are the only fatal errors of a generation run. Parse failures carry the
/// path of the offending node so it can be found in the source document.
#[derive(Debug, Error)]
pub enum SpecError {
  #[error("failed to read {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: fmmap::error::Error,
  },
  #[error("invalid JSON document at `{location}`: {source}")]
  Json {
    location: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("invalid YAML document at `{location}`: {source}")]
  Yaml {
    location: String,
    #[source]
    source: serde_yaml::Error,
  },
  #[error("unsupported OpenAPI version `{0}`, expected 3.0.x or 3.1.x")]
  UnsupportedVersion(String),
}

pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> Result<Self, SpecError> {
    let file = AsyncMmapFile::open(path).await.map_err(|source| SpecError::Io {
      path: path.display().to_string(),
      source,
    })?;

    Ok(Self {
      file,
      format: SpecFormat::from_path(path),
    })
  }

  pub fn parse(&self) -> Result<OpenApiDocument, SpecError> {
    parse_document(self.file.as_slice(), self.format)
  }
}

pub fn parse_document(bytes: &[u8], format: SpecFormat) -> Result<OpenApiDocument, SpecError> {
  let document: OpenApiDocument = match format {
    SpecFormat::Json => {
      let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
      serde_path_to_error::deserialize(deserializer).map_err(|error| SpecError::Json {
        location: error.path().to_string(),
        source: error.into_inner(),
      })?
    }
    SpecFormat::Yaml => {
      let deserializer = serde_yaml::Deserializer::from_slice(bytes);
      serde_path_to_error::deserialize(deserializer).map_err(|error| SpecError::Yaml {
        location: error.path().to_string(),
        source: error.into_inner(),
      })?
    }
  };

  if !document.openapi.starts_with("3.0") && !document.openapi.starts_with("3.1") {
    return Err(SpecError::UnsupportedVersion(document.openapi));
  }

  Ok(document)
}
