mod file_ops;

pub use file_ops::{reencode_as_jpeg, FileOpError, FileOpResult};
