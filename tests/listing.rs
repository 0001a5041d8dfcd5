use chrono::{DateTime, Duration, TimeZone, Utc};
use salonhub_api::listing::{FieldValue, ListQuery, Listed, SortOrder, select};
use salonhub_api::response::PageInfo;

#[derive(Clone)]
struct Widget {
    name: String,
    price: i64,
    active: bool,
    created_at: DateTime<Utc>,
}

impl Listed for Widget {
    const SEARCH_FIELDS: &'static [&'static str] = &["name"];
    const DEFAULT_SORT: &'static str = "createdAt";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::from(&self.name)),
            "price" => Some(FieldValue::Int(self.price)),
            "isActive" => Some(FieldValue::Bool(self.active)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}

fn widgets(count: usize) -> Vec<Widget> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| Widget {
            name: format!("Widget {i:02}"),
            price: i as i64 * 100,
            active: i % 2 == 0,
            created_at: base + Duration::minutes(i as i64),
        })
        .collect()
}

#[test]
fn pages_are_full_except_the_last() {
    let items = widgets(25);

    let page1 = select(&items, &ListQuery::new(1, 10));
    assert_eq!(page1.data.len(), 10);
    assert_eq!(page1.info.total_count, 25);
    assert_eq!(page1.info.total_pages, 3);
    assert!(page1.info.has_next_page);
    assert!(!page1.info.has_previous_page);

    let page2 = select(&items, &ListQuery::new(2, 10));
    assert_eq!(page2.data.len(), 10);
    assert!(page2.info.has_next_page);
    assert!(page2.info.has_previous_page);

    let page3 = select(&items, &ListQuery::new(3, 10));
    assert_eq!(page3.data.len(), 5);
    assert!(!page3.info.has_next_page);
    assert!(page3.info.has_previous_page);
}

#[test]
fn page_and_limit_are_echoed_back() {
    let items = widgets(7);
    let page = select(&items, &ListQuery::new(2, 3));
    assert_eq!(page.info.page, 2);
    assert_eq!(page.info.limit, 3);
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let items = widgets(25);
    let page = select(&items, &ListQuery::new(9, 10));
    assert!(page.data.is_empty());
    assert_eq!(page.info.total_count, 25);
    assert!(!page.info.has_next_page);
}

#[test]
fn search_with_no_match_yields_empty_result() {
    let items = widgets(10);
    let page = select(
        &items,
        &ListQuery::new(1, 10).search(Some("no such widget".into())),
    );
    assert!(page.data.is_empty());
    assert_eq!(page.info.total_count, 0);
    assert_eq!(page.info.total_pages, 0);
    assert!(!page.info.has_next_page);
}

#[test]
fn search_is_case_insensitive_substring() {
    let items = widgets(10);
    let page = select(&items, &ListQuery::new(1, 10).search(Some("WIDGET 03".into())));
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "Widget 03");
}

#[test]
fn blank_search_imposes_no_constraint() {
    let items = widgets(5);
    let page = select(&items, &ListQuery::new(1, 10).search(Some("   ".into())));
    assert_eq!(page.info.total_count, 5);
}

#[test]
fn sort_by_named_field_in_both_directions() {
    let items = widgets(5);

    let asc = select(
        &items,
        &ListQuery::new(1, 10).sort(Some("price".into()), SortOrder::Asc),
    );
    assert_eq!(asc.data.first().map(|w| w.price), Some(0));
    assert_eq!(asc.data.last().map(|w| w.price), Some(400));

    let desc = select(
        &items,
        &ListQuery::new(1, 10).sort(Some("price".into()), SortOrder::Desc),
    );
    assert_eq!(desc.data.first().map(|w| w.price), Some(400));
}

#[test]
fn unknown_sort_field_falls_back_to_default() {
    let items = widgets(5);
    let page = select(
        &items,
        &ListQuery::new(1, 10).sort(Some("bogus".into()), SortOrder::Desc),
    );
    // Default sort is createdAt, so descending puts the newest first.
    assert_eq!(page.data.first().map(|w| w.name.clone()), Some("Widget 04".into()));
}

#[test]
fn categorical_filters_compose() {
    let items = widgets(10);
    let page = select(
        &items,
        &ListQuery::new(1, 10)
            .filter_bool("isActive", Some(true))
            .filter_eq("price", Some("400".into())),
    );
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].price, 400);
    assert!(page.data[0].active);
}

#[test]
fn absent_filters_impose_no_constraint() {
    let items = widgets(10);
    let page = select(
        &items,
        &ListQuery::new(1, 20)
            .filter_bool("isActive", None)
            .filter_eq("price", None),
    );
    assert_eq!(page.info.total_count, 10);
}

#[test]
fn paging_inputs_are_clamped() {
    let items = widgets(4);
    let page = select(&items, &ListQuery::new(0, 0));
    assert_eq!(page.info.page, 1);
    assert_eq!(page.info.limit, 1);
    assert_eq!(page.data.len(), 1);
}

#[test]
fn pagination_metadata_satisfies_the_ceiling_identity() {
    for total in 0..60 {
        for limit in 1..8 {
            for page in 1..12 {
                let info = PageInfo::new(page, limit, total);
                let expected_pages = (total + limit - 1) / limit;
                assert_eq!(info.total_pages, expected_pages);
                assert_eq!(info.has_next_page, page < expected_pages);
                assert_eq!(info.has_previous_page, page > 1);
            }
        }
    }
}
