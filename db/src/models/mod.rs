pub mod attendance_record;
pub mod class_session;
pub mod course;
pub mod course_enrollment;
pub mod profile;

pub use attendance_record::Entity as AttendanceRecord;
pub use class_session::Entity as ClassSession;
pub use course::Entity as Course;
pub use course_enrollment::Entity as CourseEnrollment;
pub use profile::Entity as Profile;
