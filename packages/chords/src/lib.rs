//! Chord catalogs compiled into the binary.
//!
//! Every `library/<tuning>/<vibe>.yaml` file is embedded at build time and
//! addressed by its `"<tuning>/<vibe>"` name.

include!(concat!(env!("OUT_DIR"), "/catalogs.rs"));

/// A catalog file with its name and YAML content
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub name: &'static str,
    pub content: &'static str,
}

/// Get the catalog for a tuning and vibe, e.g. `get_catalog("drop", "dark")`
pub fn get_catalog(tuning: &str, vibe: &str) -> Option<Catalog> {
    let wanted = format!("{}/{}", tuning, vibe);
    CATALOGS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|&(name, content)| Catalog { name, content })
}

/// List all catalog names
pub fn list_catalogs() -> Vec<&'static str> {
    CATALOGS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tuning_and_vibe_is_embedded() {
        for tuning in ["standard", "drop"] {
            for vibe in ["dark", "melodic", "energetic"] {
                let catalog = get_catalog(tuning, vibe)
                    .unwrap_or_else(|| panic!("missing catalog {}/{}", tuning, vibe));
                assert!(catalog.content.contains("chords:"));
            }
        }
    }

    #[test]
    fn test_list_is_sorted() {
        let names = list_catalogs();
        assert_eq!(names.len(), 6);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_unknown_catalog() {
        assert!(get_catalog("open-g", "dark").is_none());
    }
}
