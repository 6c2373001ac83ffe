use std::{
    error::Error,
    fmt::Display,
    sync::atomic::{AtomicU64, Ordering},
};

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

/// In-memory identity of an entry. Never written to the playlist file, every
/// decode hands out fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Takes the next id from the process-wide counter
    pub fn generate() -> Self {
        Self(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::generate()
    }
}

impl From<u64> for EntryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    pub url: SmolStr,
    pub active: bool,
}

impl PathEntry {
    pub fn active(url: impl Into<SmolStr>) -> Self {
        Self {
            url: url.into(),
            active: true,
        }
    }

    pub fn inactive(url: impl Into<SmolStr>) -> Self {
        Self {
            url: url.into(),
            active: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaylistEntry {
    pub id: EntryId,
    pub title: SmolStr,
    /// Alternative locations, the first one is the default
    pub paths: Vec<PathEntry>,
    pub tvg_id: SmolStr,
    pub tvg_name: SmolStr,
    pub tvg_logo: SmolStr,
    pub tvg_res: SmolStr,
    pub group_title: SmolStr,
}

impl Default for PlaylistEntry {
    /// A blank entry with a single empty active path, ready to be filled in
    fn default() -> Self {
        Self {
            id: EntryId::generate(),
            title: SmolStr::default(),
            paths: vec![PathEntry::active("")],
            tvg_id: SmolStr::default(),
            tvg_name: SmolStr::default(),
            tvg_logo: SmolStr::default(),
            tvg_res: SmolStr::default(),
            group_title: SmolStr::default(),
        }
    }
}

impl PlaylistEntry {
    pub fn new(title: impl Into<SmolStr>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Same entry under a newly generated id
    pub fn with_fresh_id(&self) -> Self {
        Self {
            id: EntryId::generate(),
            ..self.clone()
        }
    }

    pub fn add_path(&mut self, url: impl Into<SmolStr>, active: bool) {
        self.paths.push(PathEntry {
            url: url.into(),
            active,
        });
    }

    /// Removes the path at `index` unless it is the last one left.
    pub fn remove_path(&mut self, index: usize) -> bool {
        if self.paths.len() <= 1 || index >= self.paths.len() {
            return false;
        }

        self.paths.remove(index);
        true
    }

    /// Replaces the url at `index`, and the active flag when one is given.
    pub fn update_path(&mut self, index: usize, url: impl Into<SmolStr>, active: Option<bool>) -> bool {
        let Some(path) = self.paths.get_mut(index) else {
            return false;
        };

        path.url = url.into();
        if let Some(active) = active {
            path.active = active;
        }
        true
    }

    pub fn active_paths(&self) -> impl Iterator<Item = &PathEntry> {
        self.paths.iter().filter(|x| x.active)
    }

    pub fn inactive_paths(&self) -> impl Iterator<Item = &PathEntry> {
        self.paths.iter().filter(|x| !x.active)
    }

    /// Checks that the entry can be saved: it needs a title and at least one
    /// non-empty location.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        if !self.paths.iter().any(|x| !x.url.is_empty()) {
            return Err(ValidationError::NoPath);
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    NoPath,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Entry title is empty"),
            Self::NoPath => write!(f, "Entry has no non-empty path"),
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_remove_path_keeps_last() {
        let mut entry = PlaylistEntry::new("A");
        assert!(!entry.remove_path(0));
        assert_eq!(entry.paths.len(), 1);

        entry.add_path("http://b", false);
        assert!(!entry.remove_path(5));
        assert!(entry.remove_path(0));
        assert_eq!(entry.paths, vec![PathEntry::inactive("http://b")]);
    }

    #[test]
    fn test_update_path() {
        let mut entry = PlaylistEntry::new("A");
        assert!(entry.update_path(0, "http://a", None));
        assert_eq!(entry.paths[0], PathEntry::active("http://a"));

        assert!(entry.update_path(0, "http://a2", Some(false)));
        assert_eq!(entry.paths[0], PathEntry::inactive("http://a2"));

        assert!(!entry.update_path(1, "http://nope", Some(true)));
    }

    #[test]
    fn test_validate() {
        let mut entry = PlaylistEntry::new("");
        entry.update_path(0, "http://a", None);
        assert_eq!(entry.validate(), Err(ValidationError::EmptyTitle));

        let mut entry = PlaylistEntry::new("A");
        assert_eq!(entry.validate(), Err(ValidationError::NoPath));

        entry.paths.clear();
        assert_eq!(entry.validate(), Err(ValidationError::NoPath));

        // an inactive location still counts
        entry.add_path("", true);
        entry.add_path("http://backup", false);
        assert!(entry.is_valid());
    }

    #[test]
    fn test_path_groups_keep_relative_order() {
        let mut entry = PlaylistEntry::new("A");
        entry.paths = vec![
            PathEntry::inactive("1"),
            PathEntry::active("2"),
            PathEntry::inactive("3"),
            PathEntry::active("4"),
        ];

        let active: Vec<_> = entry.active_paths().map(|x| x.url.as_str()).collect();
        let inactive: Vec<_> = entry.inactive_paths().map(|x| x.url.as_str()).collect();
        assert_eq!(active, ["2", "4"]);
        assert_eq!(inactive, ["1", "3"]);
    }

    #[test]
    fn test_with_fresh_id() {
        let entry = PlaylistEntry::new("A");
        let copy = entry.with_fresh_id();
        assert_ne!(entry.id, copy.id);
        assert_eq!(entry.title, copy.title);
        assert_eq!(entry.paths, copy.paths);
    }

    #[test]
    fn test_json_form() {
        let json = r#"{"title":"News","paths":[{"url":"http://a","active":true}],"groupTitle":"TV"}"#;
        let entry: PlaylistEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.title, "News");
        assert_eq!(entry.group_title, "TV");
        assert_eq!(entry.tvg_id, "");
        assert_eq!(entry.paths, vec![PathEntry::active("http://a")]);

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], entry.id.value());
        assert_eq!(value["tvgLogo"], "");
        assert_eq!(value["paths"][0]["active"], true);
    }
}
