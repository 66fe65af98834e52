pub mod link_image_collector;
pub mod progress;
pub mod result_set;
