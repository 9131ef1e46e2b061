use crm_api::domain::Activity;

use super::TypeFilter;

/// Activities whose description contains `search` (case-insensitive) and whose
/// type passes `type_filter`, newest first.
///
/// An activity without a description never matches, not even an empty search.
/// The sort is stable, so activities with equal timestamps keep fetch order.
pub fn visible_activities<'a>(
    activities: &'a [Activity],
    search: &str,
    type_filter: TypeFilter,
) -> Vec<&'a Activity> {
    let needle = search.to_lowercase();
    let mut visible: Vec<&Activity> = activities
        .iter()
        .filter(|a| matches_search(a, &needle) && type_filter.matches(a.activity_type))
        .collect();
    visible.sort_by(|a, b| b.date.cmp(&a.date));
    visible
}

fn matches_search(activity: &Activity, needle: &str) -> bool {
    activity
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_api::domain::{ActivityType, Lookup};
    use time::macros::datetime;
    use time::OffsetDateTime;

    fn activity(
        id: i64,
        activity_type: ActivityType,
        date: OffsetDateTime,
        description: Option<&str>,
    ) -> Activity {
        Activity {
            id,
            activity_type,
            date,
            description: description.map(str::to_string),
            contact: Lookup::Id(1),
            deal: None,
        }
    }

    fn ids(visible: &[&Activity]) -> Vec<i64> {
        visible.iter().map(|a| a.id).collect()
    }

    fn sample() -> Vec<Activity> {
        vec![
            activity(1, ActivityType::Call, datetime!(2024-01-01 09:00 UTC), Some("Intro call")),
            activity(2, ActivityType::Email, datetime!(2024-01-03 09:00 UTC), Some("Pricing EMAIL")),
            activity(3, ActivityType::Call, datetime!(2024-01-02 09:00 UTC), Some("Pricing call")),
            activity(4, ActivityType::Note, datetime!(2024-01-04 09:00 UTC), None),
        ]
    }

    #[test]
    fn empty_search_and_all_types_sorts_newest_first() {
        let activities = sample();
        let visible = visible_activities(&activities, "", TypeFilter::All);
        assert_eq!(ids(&visible), [2, 3, 1]);
    }

    #[test]
    fn activity_without_description_never_matches() {
        let activities = sample();
        let visible = visible_activities(&activities, "", TypeFilter::Only(ActivityType::Note));
        assert!(visible.is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let activities = sample();
        let visible = visible_activities(&activities, "pRiCiNg", TypeFilter::All);
        assert_eq!(ids(&visible), [2, 3]);
    }

    #[test]
    fn search_and_type_must_both_match() {
        let activities = sample();
        let visible =
            visible_activities(&activities, "pricing", TypeFilter::Only(ActivityType::Call));
        assert_eq!(ids(&visible), [3]);
    }

    #[test]
    fn equal_timestamps_keep_fetch_order() {
        let when = datetime!(2024-02-01 12:00 UTC);
        let activities = vec![
            activity(10, ActivityType::Task, when, Some("a")),
            activity(11, ActivityType::Task, when, Some("b")),
            activity(12, ActivityType::Task, when, Some("c")),
        ];
        let visible = visible_activities(&activities, "", TypeFilter::All);
        assert_eq!(ids(&visible), [10, 11, 12]);
    }

    #[test]
    fn timestamps_compare_across_offsets() {
        let activities = vec![
            activity(1, ActivityType::Call, datetime!(2024-01-01 10:00 +02:00), Some("x")),
            activity(2, ActivityType::Call, datetime!(2024-01-01 09:00 UTC), Some("x")),
        ];
        let visible = visible_activities(&activities, "x", TypeFilter::All);
        assert_eq!(ids(&visible), [2, 1]);
    }
}
