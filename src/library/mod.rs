mod errors;
mod file_set;
mod img_ops;
mod strip_builder;


//exports to app
pub use errors::StripError;
pub use strip_builder::build_strip;

pub(self) use file_set::CandidateSet;
pub(self) use img_ops::{row_images, RgbImgBuf};
