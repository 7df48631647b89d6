use crate::config::MatrixConfig;

/// Upstream base flavor a variant is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseFlavor {
    /// Full Debian-based `python:<ver>` image
    Full,
    /// `python:<ver>-slim`
    Slim,
    /// `python:<ver>-alpine`
    Alpine,
}

impl BaseFlavor {
    pub fn from_config_name(value: &str) -> crate::Result<Self> {
        match value {
            "full" => Ok(Self::Full),
            "slim" => Ok(Self::Slim),
            "alpine" => Ok(Self::Alpine),
            other => Err(crate::Error::UnknownFlavor {
                value: other.to_owned(),
            }),
        }
    }

    /// Suffix appended to the published image name.
    pub fn tag_suffix(&self) -> &'static str {
        match self {
            Self::Full => "",
            Self::Slim => "-slim",
            Self::Alpine => "-alpine",
        }
    }

    /// Suffix appended to the upstream `python:` base tag.
    pub fn base_suffix(&self) -> &'static str {
        match self {
            Self::Full => "",
            Self::Slim => "-slim",
            Self::Alpine => "-alpine",
        }
    }

    /// Whether the base ships apk instead of apt.
    pub fn is_alpine(&self) -> bool {
        matches!(self, Self::Alpine)
    }
}

/// One entry of the build matrix: a published image name bound to a
/// Python version, a base flavor, and the Dockerfile that builds it.
#[derive(Debug, Clone)]
pub struct ImageVariant {
    /// Published tag, e.g. `python3.10-slim` or `latest`
    pub name: String,
    /// Interpreter version, e.g. `3.10`
    pub python_version: String,
    pub flavor: BaseFlavor,
    /// Dockerfile stem; differs from `name` only for the `latest` alias
    dockerfile_stem: String,
}

impl ImageVariant {
    fn new(name: String, python_version: String, flavor: BaseFlavor) -> Self {
        let dockerfile_stem = name.clone();
        Self {
            name,
            python_version,
            flavor,
            dockerfile_stem,
        }
    }

    /// Dockerfile file name this variant builds from.
    pub fn dockerfile_name(&self) -> String {
        format!("{}.dockerfile", self.dockerfile_stem)
    }

    /// Upstream base image, e.g. `python:3.10-slim`.
    pub fn base_image(&self) -> String {
        format!("python:{}{}", self.python_version, self.flavor.base_suffix())
    }

    /// Full registry reference for this variant under `repository`.
    pub fn image_ref(&self, repository: &str) -> String {
        format!("{repository}:{name}", name = self.name)
    }
}

/// The enumerated set of image variants, in publish order.
///
/// `latest` comes first and aliases the configured target: it keeps its
/// own tag but builds from the target's Dockerfile.
#[derive(Debug, Clone)]
pub struct BuildMatrix {
    variants: Vec<ImageVariant>,
}

impl BuildMatrix {
    /// Enumerate the matrix from config: every python version crossed
    /// with every flavor, plus the `latest` alias entry.
    pub fn from_config(config: &MatrixConfig) -> crate::Result<Self> {
        let mut variants = Vec::new();

        for version in &config.python_versions {
            for flavor_name in &config.flavors {
                let flavor = BaseFlavor::from_config_name(flavor_name)?;
                let name = format!("python{version}{suffix}", suffix = flavor.tag_suffix());
                if variants.iter().any(|v: &ImageVariant| v.name == name) {
                    return Err(crate::Error::DuplicateVariant { name });
                }
                variants.push(ImageVariant::new(name, version.clone(), flavor));
            }
        }

        // `latest` aliases an existing variant's Dockerfile.
        let target = variants
            .iter()
            .find(|v| v.name == config.latest)
            .cloned()
            .ok_or_else(|| crate::Error::AliasTargetMissing {
                target: config.latest.clone(),
            })?;

        let latest = ImageVariant {
            name: "latest".to_owned(),
            python_version: target.python_version.clone(),
            flavor: target.flavor,
            dockerfile_stem: target.dockerfile_stem.clone(),
        };
        variants.insert(0, latest);

        Ok(Self { variants })
    }

    pub fn variants(&self) -> &[ImageVariant] {
        &self.variants
    }

    /// Look up a variant by its published name.
    pub fn resolve(&self, name: &str) -> crate::Result<&ImageVariant> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| crate::Error::UnknownVariant {
                name: name.to_owned(),
                known: self.variants.iter().map(|v| v.name.clone()).collect(),
            })
    }

    /// Dockerfile names the matrix requires, deduplicated, in matrix order.
    pub fn dockerfile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for variant in &self.variants {
            let file = variant.dockerfile_name();
            if !names.contains(&file) {
                names.push(file);
            }
        }
        names
    }
}
