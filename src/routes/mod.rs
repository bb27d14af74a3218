pub mod assessments;

pub mod auth;

pub mod careers;

pub mod documents;

pub mod schools;

pub mod students;

pub mod users;

pub use assessments::configure_assessment_routes;
pub use auth::configure_auth_routes;
pub use careers::configure_career_routes;
pub use documents::configure_document_routes;
pub use schools::configure_school_routes;
pub use students::configure_student_routes;
pub use users::configure_user_routes;
