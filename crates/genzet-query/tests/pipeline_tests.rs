use genzet_core::types::{Article, Author, Category};
use genzet_query::{build_result_page, filter, paginate, sort, QueryState, SortDirection, SortField};

fn category(id: &str, name: &str) -> Category {
    Category { id: id.into(), user_id: "owner".into(), name: name.into(), created_at: String::new(), updated_at: String::new() }
}

fn article(id: &str, title: &str, content: &str, cat: &Category, author: &str, day: u32) -> Article {
    Article {
        id: id.into(),
        user_id: format!("u-{}", author),
        category_id: cat.id.clone(),
        title: title.into(),
        content: content.into(),
        image_url: None,
        created_at: format!("2024-01-{:02}T08:00:00.000Z", day),
        updated_at: format!("2024-02-{:02}T08:00:00.000Z", 29 - day),
        category: Some(cat.clone()),
        user: Some(Author { id: format!("u-{}", author), username: author.into(), role: None }),
    }
}

fn fixture() -> Vec<Article> {
    let tech = category("c-tech", "Technology");
    let life = category("c-life", "Lifestyle");
    vec![
        article("a1", "Rust ownership", "<p>Borrowing <em>rules</em></p>", &tech, "alice", 1),
        article("a2", "Cooking pasta", "Boil water", &life, "bob", 2),
        article("a3", "async in practice", "Futures and <b>tokio</b>", &tech, "carol", 3),
        article("a4", "Morning routine", "Coffee first", &life, "alice", 4),
    ]
}

fn ids<T: genzet_query::Listable>(items: &[T]) -> Vec<String> { items.iter().map(|a| a.id().to_string()).collect() }

#[test]
fn twenty_five_items_page_three() {
    let tech = category("c", "Tech");
    let items: Vec<Article> = (1..=25).map(|i| article(&format!("a{}", i), &format!("t{}", i), "", &tech, "x", (i % 28) + 1)).collect();
    let query = QueryState { page: 3, ..QueryState::with_page_size(10) };

    let page = build_result_page(&items, &query);
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_matched, 25);
}

#[test]
fn unmatched_search_yields_empty_page() {
    let items = fixture();
    let mut query = QueryState::default();
    query.set_search_text("abc");

    let page = build_result_page(&items, &query);
    assert!(page.items.is_empty());
    assert_eq!(page.total_matched, 0);
    assert_eq!(page.total_pages, 0);
}

#[test]
fn search_is_case_insensitive() {
    let tech = category("c", "Tech");
    let items = vec![article("a", "Title", "", &tech, "x", 1), article("b", "title", "", &tech, "y", 2)];
    assert_eq!(filter(&items, "TITLE", None).len(), 2);
}

#[test]
fn search_covers_content_category_and_author() {
    let items = fixture();
    assert_eq!(ids(&filter(&items, "tokio", None)), vec!["a3"], "content");
    assert_eq!(ids(&filter(&items, "lifestyle", None)), vec!["a2", "a4"], "category name");
    assert_eq!(ids(&filter(&items, " ALICE ", None)), vec!["a1", "a4"], "author, trimmed");
    assert_eq!(filter(&items, "   ", None).len(), 4, "whitespace-only is no filter");
}

#[test]
fn search_ignores_markup() {
    let items = fixture();
    assert!(filter(&items, "<em>", None).is_empty());
    assert_eq!(ids(&filter(&items, "borrowing rules", None)), vec!["a1"]);
}

#[test]
fn category_filter_is_exact() {
    let items = fixture();
    assert_eq!(ids(&filter(&items, "", Some("c-tech"))), vec!["a1", "a3"]);
    assert_eq!(filter(&items, "", Some("")).len(), 4);
    assert!(filter(&items, "", Some("c-te")).is_empty());
}

#[test]
fn unknown_category_is_empty_not_error() {
    let items = fixture();
    let mut query = QueryState::default();
    query.set_category(Some("missing"));
    let page = build_result_page(&items, &query);
    assert!(page.items.is_empty());
    assert_eq!(page.total_matched, 0);
}

#[test]
fn sort_by_each_field() {
    let items = fixture();
    let mut refs: Vec<&Article> = items.iter().collect();

    sort(&mut refs, SortField::CreatedAt, SortDirection::Desc);
    assert_eq!(ids(&refs), vec!["a4", "a3", "a2", "a1"]);

    sort(&mut refs, SortField::UpdatedAt, SortDirection::Asc);
    assert_eq!(ids(&refs), vec!["a4", "a3", "a2", "a1"]);

    sort(&mut refs, SortField::Title, SortDirection::Asc);
    assert_eq!(ids(&refs), vec!["a3", "a2", "a4", "a1"], "lowercase compare puts 'async' first");

    sort(&mut refs, SortField::Category, SortDirection::Desc);
    assert!(refs[..2].iter().all(|a| a.category_id == "c-tech"));
}

#[test]
fn paginate_out_of_range_is_empty() {
    let v = vec![1, 2, 3];
    assert_eq!(paginate(&v, 1, 2), vec![1, 2]);
    assert_eq!(paginate(&v, 2, 2), vec![3]);
    assert!(paginate(&v, 3, 2).is_empty());
    assert_eq!(paginate(&v, 0, 0), vec![1], "page and size clamp to 1");
}

#[test]
fn categories_search_name_id_and_owner() {
    let cats = vec![category("c-1", "Web Development"), category("c-2", "Travel")];
    assert_eq!(ids(&filter(&cats, "web", None)), vec!["c-1"]);
    assert_eq!(ids(&filter(&cats, "C-2", None)), vec!["c-2"]);
    assert_eq!(filter(&cats, "owner", None).len(), 2);
}

#[test]
fn source_collection_is_untouched() {
    let items = fixture();
    let before = items.clone();
    let mut query = QueryState::default();
    query.set_sort(SortField::Title, SortDirection::Asc);
    let _ = build_result_page(&items, &query);
    assert_eq!(items, before);
}

#[test]
fn offsetless_timestamps_sort_by_date() {
    let tech = category("c", "Tech");
    let mut items = vec![
        article("old", "old", "", &tech, "x", 1),
        article("new", "new", "", &tech, "x", 1),
        article("mid", "mid", "", &tech, "x", 1),
    ];
    items[0].created_at = "2024-01-01T00:00:00".into();
    items[1].created_at = "2024-03-01".into();
    items[2].created_at = "2024-02-01T12:30:00.000Z".into();

    sort(&mut items, SortField::CreatedAt, SortDirection::Desc);
    assert_eq!(ids(&items), vec!["new", "mid", "old"]);
}
