mod attendance_test;
mod check_in_test;
mod health_test;
mod lecturers_test;
mod profiles_test;
mod store_test;
mod students_test;
