pub mod assessments;
pub mod auth;
pub mod careers;
pub mod documents;
pub mod schools;
pub mod students;
pub mod users;

pub use assessments::AssessmentService;
pub use auth::AuthService;
pub use careers::CareerService;
pub use documents::DocumentService;
pub use schools::SchoolService;
pub use students::StudentService;
pub use users::UserService;
