//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod campaign_repo;
pub mod dashboard_repo;
pub mod donation_repo;
pub mod donor_wall_repo;
pub mod form_repo;
pub mod form_submission_repo;
pub mod gallery_photo_repo;
pub mod gallery_video_repo;
pub mod grocery_donation_repo;
pub mod grocery_item_repo;
pub mod job_application_repo;
pub mod job_opening_repo;

pub use campaign_repo::CampaignRepo;
pub use dashboard_repo::DashboardRepo;
pub use donation_repo::DonationRepo;
pub use donor_wall_repo::DonorWallRepo;
pub use form_repo::FormRepo;
pub use form_submission_repo::FormSubmissionRepo;
pub use gallery_photo_repo::GalleryPhotoRepo;
pub use gallery_video_repo::GalleryVideoRepo;
pub use grocery_donation_repo::GroceryDonationRepo;
pub use grocery_item_repo::GroceryItemRepo;
pub use job_application_repo::JobApplicationRepo;
pub use job_opening_repo::JobOpeningRepo;
