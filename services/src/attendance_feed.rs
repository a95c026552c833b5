//! Newest-first page of backend check-ins for the live attendance viewer.

use std::collections::HashMap;

use db::models::{
    attendance_record::{self, Column as RecordCol, Entity as RecordEntity},
    profile,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use serde::Serialize;

use crate::error::ServiceResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedRow {
    pub id: i64,
    pub student_name: String,
    pub student_number: String,
    pub method: String,
    pub time: String,
    pub status: FeedStatus,
    /// Face match confidence, e.g. `"93.4%"`.
    pub confidence: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Verified,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStats {
    pub total_students: usize,
    /// Rows loaded so far, up to and including this page.
    pub present_students: usize,
    /// Whole percent.
    pub attendance_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedPage {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub rows: Vec<FeedRow>,
    pub stats: SessionStats,
}

pub struct AttendanceFeedService;

impl AttendanceFeedService {
    /// Loads page `page` (1-based; `0` is treated as `1`).
    pub async fn page(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        class_size: usize,
    ) -> ServiceResult<FeedPage> {
        let page = page.max(1);
        let per_page = per_page.max(1);

        let paginator = RecordEntity::find()
            .order_by_desc(RecordCol::CheckInTime)
            .order_by_desc(RecordCol::Id)
            .paginate(db, per_page);
        let total = paginator.num_items().await?;
        // Pages past the end, including ones whose offset overflows, are empty.
        let offset = (page - 1).checked_mul(per_page);
        let records = match offset {
            Some(offset) if offset < total => paginator.fetch_page(page - 1).await?,
            _ => Vec::new(),
        };

        let ids: Vec<i64> = records.iter().map(|r| r.student_id).collect();
        let students: HashMap<i64, profile::Model> = profile::Model::find_by_ids(db, ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let rows: Vec<FeedRow> = records
            .into_iter()
            .map(|r| feed_row(r, &students))
            .collect();

        let loaded = offset
            .map_or(total, |offset| offset.saturating_add(rows.len() as u64).min(total))
            as usize;
        let stats = SessionStats {
            total_students: class_size,
            present_students: loaded,
            attendance_rate: whole_percent(loaded, class_size),
        };

        Ok(FeedPage {
            page,
            per_page,
            total,
            rows,
            stats,
        })
    }
}

fn feed_row(r: attendance_record::Model, students: &HashMap<i64, profile::Model>) -> FeedRow {
    let student = students.get(&r.student_id);
    FeedRow {
        id: r.id,
        student_name: student
            .map(|p| p.full_name.clone())
            .unwrap_or_else(|| "Unknown".into()),
        student_number: student
            .and_then(|p| p.student_number.clone())
            .unwrap_or_else(|| r.student_id.to_string()),
        method: title_case(&r.verification_method),
        time: r.check_in_time.format("%H:%M:%S").to_string(),
        status: if r.is_verified {
            FeedStatus::Verified
        } else {
            FeedStatus::Pending
        },
        confidence: r.face_confidence.map(|c| format!("{c:.1}%")),
    }
}

/// `face_recognition` -> `Face Recognition`.
pub fn title_case(raw: &str) -> String {
    raw.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn whole_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}
