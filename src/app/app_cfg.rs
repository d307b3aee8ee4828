use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub src_dir: PathBuf,

    //file name only. The strip image is always written into the parent
    //directory of src_dir.
    pub output_name: PathBuf,
}
