pub mod dataset;
pub mod operations;
pub mod organize;
pub mod split;
pub mod stats;
pub mod validation;

pub use dataset::{collect_images, setup_directories, DatasetSplit};
pub use operations::{reencode_as_jpeg, FileOpError, FileOpResult};
pub use organize::{organize_source, OrganizeReport};
pub use split::{split_two_stage, SplitSets};
pub use stats::{
    build_class_mapping, compute_stats, write_class_mapping, write_stats, ClassMapping,
    DatasetStats,
};
pub use validation::{validate_image, ImageRejection};
