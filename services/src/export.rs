//! Downloadable renderings of a [`LecturerOverview`].

use chrono::{DateTime, Utc};

use crate::lecturer::LecturerOverview;

pub const CSV_HEADER: [&str; 8] = [
    "Student ID",
    "Name",
    "Email",
    "Phone",
    "Course",
    "Attendance Rate",
    "Last Attendance",
    "Present Today",
];

pub fn report_file_name(at: DateTime<Utc>) -> String {
    format!("attendance_report_{}.txt", at.format("%Y-%m-%d"))
}

pub fn csv_file_name(at: DateTime<Utc>) -> String {
    format!("student_data_{}.csv", at.format("%Y-%m-%d"))
}

/// Plain-text attendance report: header, summary, one line per student.
pub fn attendance_report(overview: &LecturerOverview) -> String {
    let at = overview.generated_at;
    let total = overview.students.len();
    let present = overview.present_today;

    let mut out = String::new();
    out.push_str("ATTENDANCE REPORT\n");
    out.push_str("=================\n");
    out.push_str(&format!("Courses: {}\n", overview.course_titles().join(", ")));
    out.push_str(&format!("Date: {}\n", at.format("%Y-%m-%d")));
    out.push_str(&format!("Time: {}\n", at.format("%H:%M:%S")));
    out.push_str(&format!("Lecturer: {}\n", overview.lecturer.full_name));
    out.push('\n');
    out.push_str("SUMMARY:\n");
    out.push_str("--------\n");
    out.push_str(&format!("Total Students: {total}\n"));
    out.push_str(&format!("Present: {present}\n"));
    out.push_str(&format!("Absent: {}\n", total - present));
    out.push_str(&format!("Attendance Rate: {:.1}%\n", overview.today_rate));
    out.push('\n');
    out.push_str("DETAILED ATTENDANCE:\n");
    out.push_str("--------------------\n");

    for s in &overview.students {
        let status = if s.present_today { "Present" } else { "Absent" };
        let last = s
            .last_check_in
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "N/A".into());
        out.push_str(&format!(
            "{} | {:<20} | {:<10} | {:<12} | Attendance: {:.1}%\n",
            s.student_number, s.name, status, last, s.attendance_rate
        ));
    }

    out
}

/// Student roster as CSV. Every cell is quoted.
pub fn students_csv(overview: &LecturerOverview) -> String {
    let mut csv = csv_line(CSV_HEADER);

    for s in &overview.students {
        let last = s
            .last_check_in
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "N/A".into());
        let courses = s.courses.join("; ");
        let rate = format!("{:.1}%", s.attendance_rate);
        csv.push_str(&csv_line([
            s.student_number.as_str(),
            s.name.as_str(),
            s.email.as_str(),
            s.phone.as_deref().unwrap_or(""),
            courses.as_str(),
            rate.as_str(),
            last.as_str(),
            if s.present_today { "Yes" } else { "No" },
        ]));
    }

    csv
}

fn csv_line<'a>(cells: impl IntoIterator<Item = &'a str>) -> String {
    let mut line = cells.into_iter().map(esc).collect::<Vec<_>>().join(",");
    line.push('\n');
    line
}

fn esc(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
