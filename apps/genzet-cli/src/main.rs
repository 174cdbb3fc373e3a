use std::time::Instant;

use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use genzet_api::{FileSession, HttpBlogApi};
use genzet_core::config::Settings;
use genzet_core::traits::{BlogApi, SessionProvider};
use genzet_views::auth::{login, logout, register};
use genzet_views::{
    authorize, load_article_detail, AdminArticlesView, AdminCategoriesView, ArticleChanges, ArticleForm, CategoryForm,
    FormErrors, ListView, LoginForm, ReaderView, RegisterForm, Route, ViewError,
};

mod cli;
mod render;

use cli::{ArticleArgs, ArticleChangeArgs, Cli, Commands, ListArgs};

/// Turn a view outcome the terminal cannot follow into a readable error.
fn explain(err: ViewError) -> anyhow::Error {
    match err {
        ViewError::Redirect(Route::Login) => anyhow!("not signed in; run `genzet login`"),
        ViewError::Redirect(Route::Reader) => anyhow!("admin only; this session can use `genzet read`"),
        ViewError::Redirect(route) => anyhow!("this session belongs at {}", route),
        ViewError::Form(errors) => anyhow!("{}", errors),
        ViewError::Api(e) => e.into(),
    }
}

fn apply_list_args<T: genzet_query::Listable + Clone>(list: &mut ListView<T>, args: &ListArgs, settings: &Settings) {
    if let Some(size) = args.page_size {
        list.set_page_size(size);
    }
    if let Some(search) = args.search.as_deref() {
        let now = Instant::now();
        list.set_search_input(search, now);
        list.tick(now + settings.search_debounce());
    }
    list.set_category(args.category.as_deref());
    list.set_sort(args.sort, args.order);
    list.set_page(args.page);
}

fn article_form(args: ArticleArgs) -> ArticleForm {
    ArticleForm { title: args.title, content: args.content, category_id: args.category, image_url: args.image_url }
}

fn article_changes(args: ArticleChangeArgs) -> ArticleChanges {
    ArticleChanges { title: args.title, content: args.content, category_id: args.category, image_url: args.image_url }
}

async fn read<A: BlogApi, S: SessionProvider>(
    api: &A,
    session: &S,
    settings: &Settings,
    id: Option<String>,
    args: ListArgs,
) -> Result<(), ViewError> {
    if let Some(id) = id {
        authorize(api, session, None).await?;
        render::detail(&load_article_detail(api, &id, settings).await);
        return Ok(());
    }
    let mut view = ReaderView::load(api, session, settings).await?;
    let mut changed = false;
    if let Some(search) = args.search.as_deref() {
        let now = Instant::now();
        view.set_search_input(search, now);
        changed |= view.tick(now + settings.search_debounce());
    }
    changed |= view.set_category(args.category.as_deref());
    changed |= view.set_sort(args.sort, args.order);
    changed |= view.set_page(args.page);
    if changed {
        view.refresh().await?;
    }
    render::reader_grid(view.page());
    Ok(())
}

async fn run(command: Commands, settings: &Settings) -> Result<(), ViewError> {
    let api = HttpBlogApi::from_settings(settings)?;
    let session = FileSession::open(settings.session_path())?;
    tracing::debug!(base_url = api.base_url(), session = %session.path().display(), "client ready");

    match command {
        Commands::Login { username, password } => {
            let route = login(&api, &session, &LoginForm::new(&username, &password)).await?;
            println!("signed in as {}; next: {}", username, route);
        }
        Commands::Logout => {
            logout(&session)?;
            println!("signed out");
        }
        Commands::Register { username, password, role } => {
            register(&api, &RegisterForm { username, password, role }).await?;
            println!("account created; run `genzet login`");
        }
        Commands::Whoami => render::profile(&authorize(&api, &session, None).await?),
        Commands::Articles(args) => {
            let mut view = AdminArticlesView::load(&api, &session, settings).await?;
            apply_list_args(&mut *view, &args, settings);
            render::admin_articles(&view.page(), |id| view.category_name(id).to_string());
        }
        Commands::Categories(args) => {
            let mut view = AdminCategoriesView::load(&api, &session, settings).await?;
            apply_list_args(&mut *view, &args, settings);
            render::categories(&view.page());
        }
        Commands::Read { id, list } => read(&api, &session, settings, id, list).await?,
        Commands::ArticleCreate(args) => {
            let mut view = AdminArticlesView::load(&api, &session, settings).await?;
            view.create(&article_form(args)).await?;
            println!("article created");
        }
        Commands::ArticleUpdate { id, changes } => {
            let changes = article_changes(changes);
            if changes.is_empty() {
                return Err(ViewError::Form(FormErrors::with_root("nothing to update; pass at least one field")));
            }
            let mut view = AdminArticlesView::load(&api, &session, settings).await?;
            view.update_with(&id, changes).await?;
            println!("article {} updated", id);
        }
        Commands::ArticleDelete { id } => {
            let mut view = AdminArticlesView::load(&api, &session, settings).await?;
            view.delete(&id).await?;
            println!("article {} deleted", id);
        }
        Commands::CategoryCreate { name } => {
            let mut view = AdminCategoriesView::load(&api, &session, settings).await?;
            view.create(&CategoryForm::new(&name)).await?;
            println!("category {} created", name);
        }
        Commands::CategoryUpdate { id, name } => {
            let mut view = AdminCategoriesView::load(&api, &session, settings).await?;
            view.update(&id, &CategoryForm::new(&name)).await?;
            println!("category {} renamed to {}", id, name);
        }
        Commands::CategoryDelete { id } => {
            let mut view = AdminCategoriesView::load(&api, &session, settings).await?;
            view.delete(&id).await?;
            println!("category {} deleted", id);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    run(cli.command, &settings).await.map_err(explain)
}
