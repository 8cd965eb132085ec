use crate::params::vehicle::ParameterSet;
use crate::prelude::{CurveError, CurveResult};
use std::fs;
use std::path::{Path, PathBuf};

impl ParameterSet {
    /// Reads and parses a YAML parameter file, then validates it.
    ///
    /// A missing or unreadable file yields [`CurveError::ConfigNotFound`] carrying
    /// the attempted path.
    pub fn load<P: AsRef<Path>>(path: P) -> CurveResult<Self> {
        let path_ref = path.as_ref();
        let contents =
            fs::read_to_string(path_ref).map_err(|source| CurveError::ConfigNotFound {
                path: path_ref.to_path_buf(),
                source,
            })?;
        let params = parse_yaml(&contents, path_ref)?;
        params.validate()?;
        Ok(params)
    }

    /// Parses an in-memory YAML document without touching the filesystem.
    pub fn from_yaml_str(contents: &str) -> CurveResult<Self> {
        let params = parse_yaml(contents, Path::new("<inline>"))?;
        params.validate()?;
        Ok(params)
    }
}

fn parse_yaml(contents: &str, path: &Path) -> CurveResult<ParameterSet> {
    serde_yaml::from_str(contents).map_err(|err| CurveError::Parse {
        path: PathBuf::from(path),
        message: err.to_string(),
    })
}
