use clap::{Args, Parser, Subcommand};

use genzet_core::types::Role;
use genzet_query::{SortDirection, SortField};

#[derive(Parser)]
#[command(name = "genzet", about = "Blog administration and reading client", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Search, filter, sort and page options shared by the list commands.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive text to search for
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show this category id
    #[arg(short, long)]
    pub category: Option<String>,

    /// createdAt, updatedAt, title or category
    #[arg(long, default_value = "createdAt")]
    pub sort: SortField,

    /// asc or desc
    #[arg(long, default_value = "desc")]
    pub order: SortDirection,

    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Overrides the configured page size
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ArticleArgs {
    #[arg(short, long)]
    pub title: String,

    /// Article body; HTML is allowed
    #[arg(long)]
    pub content: String,

    /// Category id
    #[arg(short, long)]
    pub category: String,

    #[arg(long)]
    pub image_url: Option<String>,
}

/// Fields to change on `article-update`; omitted ones keep their stored values.
#[derive(Args, Debug)]
pub struct ArticleChangeArgs {
    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(long)]
    pub content: Option<String>,

    /// Category id
    #[arg(short, long)]
    pub category: Option<String>,

    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        /// Admin or User
        #[arg(short, long, default_value = "User")]
        role: Role,
    },

    /// Show the signed-in profile
    Whoami,

    /// Admin article table
    Articles(ListArgs),

    /// Admin category table
    Categories(ListArgs),

    /// Browse articles, or read one when an id is given
    Read {
        id: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },

    ArticleCreate(ArticleArgs),

    ArticleUpdate {
        id: String,
        #[command(flatten)]
        changes: ArticleChangeArgs,
    },

    ArticleDelete { id: String },

    CategoryCreate { name: String },

    CategoryUpdate { id: String, name: String },

    CategoryDelete { id: String },
}
