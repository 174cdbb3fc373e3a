use genzet_core::text::{format_date, is_valid_image_url, strip_html, truncate};
use genzet_core::types::{Article, Category, Profile};
use genzet_query::ResultPage;
use genzet_views::ArticleDetail;

const PREVIEW_CHARS: usize = 100;

pub fn profile(profile: &Profile) {
    println!("{} ({})", profile.username, profile.role);
    if let Some(created) = profile.created_at.as_deref() {
        println!("member since {}", format_date(created));
    }
}

fn pager<T>(page: &ResultPage<T>, noun: &str) {
    match page.showing() {
        Some((start, end)) => println!(
            "\nShowing {} to {} of {} {} (page {}/{})",
            start, end, page.total_matched, noun, page.page, page.total_pages
        ),
        None => println!("No {} found", noun),
    }
}

pub fn admin_articles(page: &ResultPage<Article>, category_name: impl Fn(&str) -> String) {
    for a in &page.items {
        println!(
            "{:<38} {:<40} {:<20} {}",
            a.id,
            truncate(&a.title, 40),
            category_name(&a.category_id),
            format_date(&a.created_at)
        );
    }
    pager(page, "articles");
}

pub fn categories(page: &ResultPage<Category>) {
    for c in &page.items {
        println!("{:<38} {:<30} {}", c.id, c.name, format_date(&c.created_at));
    }
    pager(page, "categories");
}

pub fn reader_grid(page: &ResultPage<Article>) {
    for a in &page.items {
        println!("{}  [{}]", a.title, a.category_name().unwrap_or("Uncategorized"));
        println!("  {} · {}", format_date(&a.created_at), a.id);
        println!("  {}\n", truncate(&strip_html(&a.content), PREVIEW_CHARS));
    }
    pager(page, "articles");
}

pub fn detail(detail: &ArticleDetail) {
    match detail {
        ArticleDetail::Found { article, reading_minutes, related } => {
            println!("{}", article.title);
            println!(
                "{} · {} · {} min read",
                format_date(&article.created_at),
                article.author_name().unwrap_or("Unknown"),
                reading_minutes
            );
            if is_valid_image_url(article.image_url.as_deref()) {
                println!("image: {}", article.image_url.as_deref().unwrap_or_default());
            }
            println!("\n{}\n", strip_html(&article.content));
            if !related.is_empty() {
                println!("Other articles");
                for r in related {
                    println!("  {}  {}", r.id, r.title);
                }
            }
        }
        ArticleDetail::NotFound { message, back } => {
            println!("{}", message);
            println!("back to {}", back);
        }
    }
}
