use std::path::Path;

/// One entry of the pip requirements manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    /// Exact version when the entry is `==`-pinned.
    pub version: Option<String>,
}

/// Parsed requirements manifest.
///
/// Parsing is permissive (anything pip accepts is kept), but only
/// `name==version` entries count as pinned. Releases refuse unpinned
/// entries so published images stay reproducible.
#[derive(Debug, Clone)]
pub struct RequirementsManifest {
    pub entries: Vec<Requirement>,
}

impl RequirementsManifest {
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| crate::Error::ManifestRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .filter_map(|line| {
                let line = line.split('#').next().unwrap_or("").trim();
                if line.is_empty() || line.starts_with('-') {
                    return None;
                }
                Some(parse_entry(line))
            })
            .collect();
        Self { entries }
    }

    /// Entries without an exact `==` pin.
    pub fn unpinned(&self) -> Vec<&Requirement> {
        self.entries
            .iter()
            .filter(|r| r.version.is_none())
            .collect()
    }
}

fn parse_entry(line: &str) -> Requirement {
    if let Some((name, version)) = line.split_once("==") {
        // A trailing specifier list (`pkg==1.0,<2`) is not an exact pin.
        if !version.contains(',') {
            return Requirement {
                name: strip_extras(name),
                version: Some(version.trim().to_owned()),
            };
        }
    }

    // Range or bare requirement: keep the name, no pin.
    let name_end = line
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '-' && c != '_' && c != '.')
        .unwrap_or(line.len());
    Requirement {
        name: strip_extras(&line[..name_end]),
        version: None,
    }
}

/// `uvicorn[standard]` → `uvicorn`
fn strip_extras(name: &str) -> String {
    name.split('[').next().unwrap_or(name).trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pinned_entries() {
        let manifest = RequirementsManifest::parse("readyapi==0.109.0\ngunicorn==21.2.0\n");
        assert_eq!(manifest.entries.len(), 2);
        assert_eq!(manifest.entries[0].name, "readyapi");
        assert_eq!(manifest.entries[0].version.as_deref(), Some("0.109.0"));
        assert!(manifest.unpinned().is_empty());
    }

    #[test]
    fn skips_comments_and_blanks() {
        let manifest = RequirementsManifest::parse("# server\n\nuvicorn==0.27.0  # pinned\n");
        assert_eq!(manifest.entries.len(), 1);
        assert_eq!(manifest.entries[0].name, "uvicorn");
    }

    #[test]
    fn extras_are_stripped_from_name() {
        let manifest = RequirementsManifest::parse("uvicorn[standard]==0.27.0\n");
        assert_eq!(manifest.entries[0].name, "uvicorn");
        assert_eq!(manifest.entries[0].version.as_deref(), Some("0.27.0"));
    }

    #[test]
    fn range_requirements_are_unpinned() {
        let manifest = RequirementsManifest::parse("httpx>=0.26\npydantic\n");
        let unpinned = manifest.unpinned();
        assert_eq!(unpinned.len(), 2);
        assert_eq!(unpinned[0].name, "httpx");
        assert_eq!(unpinned[1].name, "pydantic");
    }

    #[test]
    fn option_lines_are_ignored() {
        let manifest = RequirementsManifest::parse("-r base.txt\nreadyapi==0.109.0\n");
        assert_eq!(manifest.entries.len(), 1);
    }
}
