use std::fmt;

/// Build information shown by `howto -v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    version: String,
    commit: String,
    date: String,
}

impl Version {
    pub fn new(version: &str, commit: &str, date: &str) -> Self {
        Self {
            version: version.to_string(),
            commit: commit.to_string(),
            date: date.to_string(),
        }
    }

    /// Version of the running binary, stamped by `build.rs`.
    pub fn current() -> Self {
        Self::new(
            env!("CARGO_PKG_VERSION"),
            env!("HOWTO_COMMIT"),
            env!("HOWTO_BUILD_DATE"),
        )
    }
}

impl fmt::Display for Version {
    /// `<version> (<date>)`, or `<commit> (<date>)` for dev builds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.version == "dev" {
            &self.commit
        } else {
            &self.version
        };
        write!(f, "{name} ({})", self.date)
    }
}
