pub mod campaign;
pub mod careers;
pub mod dashboard;
pub mod donation;
pub mod donor_wall;
pub mod form;
pub mod gallery_photo;
pub mod gallery_video;
pub mod grocery;
