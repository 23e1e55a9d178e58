//! Files and folders as returned by the API

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// A file stored on Dropbox
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct File {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub path_lower: Option<String>,
    pub path_display: Option<String>,
    #[serde(default)]
    pub size: u64,
    pub rev: Option<String>,
    pub client_modified: Option<DateTime<Utc>>,
    pub server_modified: Option<DateTime<Utc>>,
    pub content_hash: Option<String>,
}

/// A folder stored on Dropbox
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Folder {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub path_lower: Option<String>,
    pub path_display: Option<String>,
}

macro_rules! entry_field_ref {
    ($field:ident, $output:ty) => {
        impl Entry {
            pub fn $field(&self) -> $output {
                match self {
                    Self::File(item) => &item.$field,
                    Self::Folder(item) => &item.$field,
                }
            }
        }
    };
}

macro_rules! entry_path {
    ($kind:ty) => {
        impl $kind {
            /// The path of the entry, preferring the display casing when provided
            pub fn path(&self) -> &str {
                self.path_display
                    .as_deref()
                    .or(self.path_lower.as_deref())
                    .unwrap_or_default()
            }
        }
    };
}

entry_path!(File);
entry_path!(Folder);

/// Either a file or a folder
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(tag = ".tag", rename_all = "lowercase")]
pub enum Entry {
    File(File),
    Folder(Folder),
}

/// Metadata as sent by the API, which may describe kinds of entries unknown to this client
#[derive(Debug, serde::Deserialize)]
#[serde(tag = ".tag", rename_all = "lowercase")]
pub(crate) enum Metadata {
    File(File),
    Folder(Folder),
    #[serde(other)]
    Unknown,
}

impl Metadata {
    pub(crate) fn into_entry(self) -> Option<Entry> {
        match self {
            Self::File(inner) => Some(Entry::File(inner)),
            Self::Folder(inner) => Some(Entry::Folder(inner)),
            Self::Unknown => None,
        }
    }
}

impl From<File> for Entry {
    fn from(value: File) -> Self {
        Self::File(value)
    }
}

impl From<Folder> for Entry {
    fn from(value: Folder) -> Self {
        Self::Folder(value)
    }
}

entry_field_ref!(id, &str);
entry_field_ref!(name, &str);

impl Entry {
    pub fn path(&self) -> &str {
        match self {
            Self::File(item) => item.path(),
            Self::Folder(item) => item.path(),
        }
    }

    /// Size of the entry in bytes, folders having a size of 0
    pub fn size(&self) -> u64 {
        match self {
            Self::File(item) => item.size,
            Self::Folder(_) => 0,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn as_file(self) -> Option<File> {
        match self {
            Self::File(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    pub fn as_folder(self) -> Option<Folder> {
        match self {
            Self::Folder(value) => Some(value),
            _ => None,
        }
    }

    /// Order used to display a listing: folders come first, then entries are sorted by name
    pub fn listing_order(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Folder(_), Self::File(_)) => Ordering::Less,
            (Self::File(_), Self::Folder(_)) => Ordering::Greater,
            _ => self
                .name()
                .cmp(other.name())
                .then_with(|| self.path().cmp(other.path())),
        }
    }
}
