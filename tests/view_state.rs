use salonhub_api::listing::SortOrder;
use salonhub_api::response::PageInfo;
use salonhub_api::view_state::ListState;

#[test]
fn toggling_a_header_cycles_direction_and_resets_the_page() {
    let mut state = ListState::new();
    state.page = 3;

    state.toggle_sort("name");
    assert_eq!(state.sort_by.as_deref(), Some("name"));
    assert_eq!(state.sort_order, SortOrder::Asc);
    assert_eq!(state.page, 1);

    state.page = 2;
    state.toggle_sort("name");
    assert_eq!(state.sort_order, SortOrder::Desc);
    assert_eq!(state.page, 1);

    // A different header starts ascending again.
    state.toggle_sort("price");
    assert_eq!(state.sort_by.as_deref(), Some("price"));
    assert_eq!(state.sort_order, SortOrder::Asc);
}

#[test]
fn search_and_filter_changes_reset_the_page() {
    let mut state = ListState::new();
    state.page = 4;
    state.submit_search("glow");
    assert_eq!(state.page, 1);
    assert_eq!(state.search, "glow");

    state.page = 4;
    state.set_filter("status", "active");
    assert_eq!(state.page, 1);

    state.page = 4;
    state.clear_filter("status");
    assert_eq!(state.page, 1);
    assert!(state.filters.is_empty());
}

#[test]
fn paging_is_gated_by_the_last_response() {
    let mut state = ListState::new();

    // No response applied yet: both controls are disabled.
    assert!(!state.next_page());
    assert!(!state.prev_page());
    assert_eq!(state.page, 1);

    state.apply(PageInfo::new(1, 10, 25));
    assert!(state.next_page());
    assert_eq!(state.page, 2);

    state.apply(PageInfo::new(2, 10, 25));
    assert!(state.next_page());
    assert_eq!(state.page, 3);

    state.apply(PageInfo::new(3, 10, 25));
    assert!(!state.next_page());
    assert_eq!(state.page, 3);

    assert!(state.prev_page());
    assert_eq!(state.page, 2);
}

#[test]
fn failed_queries_keep_state_for_a_manual_retry() {
    let mut state = ListState::new();
    state.submit_search("serum");
    state.set_filter("isActive", "true");

    state.mark_failed();
    assert!(state.failed);

    let query = state.retry();
    assert!(!state.failed);
    assert_eq!(query, "page=1&search=serum&isActive=true");
}

#[test]
fn query_string_reflects_the_whole_state() {
    let mut state = ListState::new();
    state.submit_search("gel polish");
    state.set_filter("status", "active");
    state.toggle_sort("name");

    assert_eq!(
        state.to_query_string(),
        "page=1&search=gel+polish&status=active&sortBy=name&sortOrder=asc"
    );
}
