pub mod application_modal;
pub mod application_review_modal;
pub mod confirmation_modal;
pub mod detail_field;
pub mod image_viewer_modal;
pub mod review_queue;
pub mod toast;
