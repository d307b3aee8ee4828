use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::StripError;

//The set of texture files eligible for inclusion in the strip: the direct
//children of the source directory whose names end in a recognized extension.
pub struct CandidateSet {
    paths: Vec<PathBuf>,
}

impl CandidateSet {
    //suffix match is case sensitive. Texture folders only ever contain
    //lowercase names, and .jpeg/.gif etc are deliberately not included.
    const CANDIDATE_SUFFIXES: [&'static str; 2] = [".png", ".jpg"];

    pub fn enumerate_from_fs(src_dir: &Path) -> Result<Self, StripError> {
        use StripError::*;

        if !src_dir.exists() {
            return Err(SrcDirNotFound(src_dir.to_path_buf()));
        }
        if !src_dir.is_dir() {
            return Err(SrcDirNotADirectory(src_dir.to_path_buf()));
        }

        let mut paths = vec![];
        for dir_entry_res in WalkDir::new(src_dir).min_depth(1).max_depth(1) {
            let dir_entry =
                dir_entry_res.map_err(|e| Enumeration(src_dir.to_path_buf(), e))?;
            if Self::should_keep(&dir_entry) {
                paths.push(dir_entry.path().to_path_buf());
            }
        }

        //sort is required for deterministic outputs. Concatenation order and
        //the tie break on the smallest texture both follow this order.
        paths.sort();

        Ok(Self { paths })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn should_keep(dir_entry: &walkdir::DirEntry) -> bool {
        dir_entry.file_type().is_file()
            && match dir_entry.file_name().to_str() {
                Some(name) => Self::CANDIDATE_SUFFIXES
                    .iter()
                    .any(|suffix| name.ends_with(suffix)),
                None => false,
            }
    }
}
