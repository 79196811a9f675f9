use crate::args;
use crate::core::types::{DashboardFilter, LanguageCode};
use crate::infra::db::types::UserRecord;
use crate::infra::locales;

pub const PAGE_SIZE: usize = 20;

#[derive(Debug)]
pub struct DashboardPage {
    pub text: String,
    pub has_prev: bool,
    pub has_next: bool,
    pub page: u32,
    pub total_pages: u32,
}

/// Renders one page of the all-users table. Counters in the header are
/// taken before filtering; rows without a date sort last.
pub fn format_page(
    users: &[UserRecord],
    filter: DashboardFilter,
    page: u32,
    lang: LanguageCode,
) -> DashboardPage {
    let total = users.len();
    let with_date = users.iter().filter(|u| u.end_time.is_some()).count();
    let without_date = total - with_date;

    let mut filtered: Vec<&UserRecord> = users
        .iter()
        .filter(|u| match filter {
            DashboardFilter::All => true,
            DashboardFilter::WithDate => u.end_time.is_some(),
            DashboardFilter::WithoutDate => u.end_time.is_none(),
        })
        .collect();
    filtered.sort_by_key(|u| {
        (
            u.end_time.is_none(),
            u.end_time.clone().unwrap_or_default(),
            u.user_id,
        )
    });

    let total_pages = filtered.len().div_ceil(PAGE_SIZE).max(1);
    let page = (page as usize).min(total_pages - 1);
    let start = page * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(filtered.len());
    let page_slice = &filtered[start.min(filtered.len())..end];
    let has_prev = page > 0;
    let has_next = page + 1 < total_pages;

    let filter_label = locales::get_text(lang.as_str(), filter.label_key(), None);
    let args = args!(
        total = total.to_string(),
        with_date = with_date.to_string(),
        without_date = without_date.to_string(),
        page = (page + 1).to_string(),
        pages = total_pages.to_string(),
        filter = filter_label
    );
    let header = locales::get_text(lang.as_str(), "dashboard-header", args.as_ref());

    let text = if page_slice.is_empty() {
        let empty = locales::get_text(lang.as_str(), "dashboard-empty", None);
        format!("{header}\n\n{empty}")
    } else {
        let mut lines = vec![
            "<pre>UID        END_TIME            APPROVED ACTIVE".to_string(),
            "----------------------------------------------".to_string(),
        ];
        for user in page_slice {
            let end_disp = user.end_time.as_deref().unwrap_or("—");
            let approved = if user.approved { "✅" } else { "❌" };
            let active = if user.active { "🟢" } else { "⚪" };
            lines.push(format!(
                "{:<10} {:<19} {:^8} {:^6}",
                user.user_id, end_disp, approved, active
            ));
        }
        lines.push("</pre>".to_string());
        format!("{header}\n{}", lines.join("\n"))
    };

    DashboardPage {
        text,
        has_prev,
        has_next,
        page: page as u32,
        total_pages: total_pages as u32,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app_dashboard.rs"]
mod tests;
