//! 项目排序与分页
//!
//! 项目列表先全部加载到内存，再按 [`PagingMode`] 排序、切页。
//! 如果以后把排序和分页下推到 SQL，查询结果也必须满足这里的约定：
//! - 按单一字段倒序，且排序稳定（相同值保持原有顺序，没有第二排序字段）
//! - 总页数向上取整，页码从 1 开始

use crate::models::err::AppError;
use crate::models::projects::{PagingMode, ProjectResult, ProjectView};

/// 列表接口的总页数：向下取整
///
/// 与 [`get_page`] 的向上取整不一致，结果数不是整页时会少算一页，
/// 这是列表接口一直以来对外的行为，保持不变。
pub fn list_total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count / page_size
}

/// 按排序方式重新排列项目
pub fn sort_by_mode(mut projects: Vec<ProjectView>, mode: PagingMode) -> Vec<ProjectView> {
    // sort_by 是稳定排序
    match mode {
        PagingMode::Latest => projects.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        PagingMode::Popular => projects.sort_by(|a, b| b.favorite.favorite_count.cmp(&a.favorite.favorite_count)),
    }
    projects
}

/// 取出第 `page_number` 页（从 1 开始），同时返回向上取整的总页数
///
/// 页码小于 1 或大于总页数时返回 [`AppError::PageOutOfRange`]；
/// 列表为空时总页数为 0，任何页码都会失败。
pub fn paginate<T>(items: Vec<T>, page_number: i64, page_size: usize) -> Result<(Vec<T>, usize), AppError> {
    let total_items = items.len();
    let total_pages = if page_size == 0 { 0 } else { total_items.div_ceil(page_size) };

    if page_number < 1 || page_number as u64 > total_pages as u64 {
        return Err(AppError::PageOutOfRange {
            page: page_number,
            total_pages,
        });
    }

    let start = (page_number as usize - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let page = items.into_iter().skip(start).take(end - start).collect();

    Ok((page, total_pages))
}

pub fn get_page(projects: Vec<ProjectView>, page_number: i64, page_size: usize) -> Result<ProjectResult, AppError> {
    let (projects, total_pages) = paginate(projects, page_number, page_size)?;
    Ok(ProjectResult { projects, total_pages })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::projects::{FavoriteView, OwnerView};
    use chrono::{Duration, TimeZone, Utc};

    fn view(project_id: i64, favorite_count: i64, minutes: i64) -> ProjectView {
        ProjectView {
            project_id,
            project_name: format!("project-{project_id}"),
            description: String::new(),
            is_public: true,
            owner: OwnerView {
                user_id: 1,
                username: "alice".to_string(),
            },
            project_hashtags: vec![],
            favorite: FavoriteView {
                favorite_count,
                is_liked: false,
            },
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes),
        }
    }

    fn ids(projects: &[ProjectView]) -> Vec<i64> {
        projects.iter().map(|p| p.project_id).collect()
    }

    #[test]
    fn test_twenty_five_items_in_pages_of_ten() {
        let items: Vec<u32> = (0..25).collect();

        let (page, total) = paginate(items.clone(), 3, 10).unwrap();
        assert_eq!(total, 3);
        assert_eq!(page, vec![20, 21, 22, 23, 24]);

        assert!(matches!(
            paginate(items.clone(), 4, 10),
            Err(AppError::PageOutOfRange { page: 4, total_pages: 3 })
        ));
        assert!(matches!(paginate(items.clone(), 0, 10), Err(AppError::PageOutOfRange { page: 0, .. })));
        assert!(matches!(paginate(items, -1, 10), Err(AppError::PageOutOfRange { .. })));
    }

    #[test]
    fn test_pages_concatenate_to_full_list() {
        let items: Vec<u32> = (0..37).collect();
        let (_, total) = paginate(items.clone(), 1, 10).unwrap();

        let mut joined = Vec::new();
        for page_number in 1..=total as i64 {
            let (page, _) = paginate(items.clone(), page_number, 10).unwrap();
            joined.extend(page);
        }
        assert_eq!(joined, items);
    }

    #[test]
    fn test_empty_list_rejects_every_page() {
        assert!(matches!(
            paginate(Vec::<u32>::new(), 1, 10),
            Err(AppError::PageOutOfRange { page: 1, total_pages: 0 })
        ));
    }

    #[test]
    fn test_list_total_pages_rounds_down() {
        assert_eq!(list_total_pages(25, 10), 2);
        assert_eq!(list_total_pages(20, 10), 2);
        assert_eq!(list_total_pages(9, 10), 0);
        assert_eq!(list_total_pages(5, 0), 0);
    }

    #[test]
    fn test_popular_sorts_by_favorite_count() {
        // 依次创建，收藏数分别为 3, 1, 2
        let projects = vec![view(1, 3, 0), view(2, 1, 1), view(3, 2, 2)];
        assert_eq!(ids(&sort_by_mode(projects, PagingMode::Popular)), vec![1, 3, 2]);
    }

    #[test]
    fn test_latest_sorts_by_creation_desc() {
        let projects = vec![view(1, 3, 0), view(2, 1, 1), view(3, 2, 2)];
        assert_eq!(ids(&sort_by_mode(projects, PagingMode::Latest)), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let projects = vec![view(1, 2, 5), view(2, 5, 0), view(3, 2, 5), view(4, 2, 1)];

        assert_eq!(ids(&sort_by_mode(projects.clone(), PagingMode::Popular)), vec![2, 1, 3, 4]);
        assert_eq!(ids(&sort_by_mode(projects, PagingMode::Latest)), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_get_page_wraps_result() {
        let projects: Vec<ProjectView> = (1..=12).map(|i| view(i, 0, i)).collect();
        let result = get_page(projects, 2, 10).unwrap();

        assert_eq!(result.total_pages, 2);
        assert_eq!(ids(&result.projects), vec![11, 12]);
    }
}
