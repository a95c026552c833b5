pub mod m202510010001_create_profiles;
pub mod m202510010002_create_courses;
pub mod m202510010003_create_course_enrollments;
pub mod m202510010004_create_class_sessions;
pub mod m202510010005_create_attendance_records;
