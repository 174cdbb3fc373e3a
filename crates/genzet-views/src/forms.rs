//! Form models with the validation rules and API error mapping of the
//! login, register, article and category screens.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use genzet_core::types::{Article, ArticlePayload, Category, CategoryPayload, Role};
use genzet_core::Error;
use regex::Regex;

static CATEGORY_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s\-_&]+$").expect("Invalid category name regex pattern"));

/// Field-level and form-level messages shown next to inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub fields: BTreeMap<&'static str, String>,
    pub root: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool { self.fields.is_empty() && self.root.is_none() }

    pub fn field(&self, name: &str) -> Option<&str> { self.fields.get(name).map(String::as_str) }

    /// First message wins, matching how inputs show a single error.
    pub fn set_field(&mut self, name: &'static str, message: impl Into<String>) {
        self.fields.entry(name).or_insert_with(|| message.into());
    }

    pub fn with_field(name: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.set_field(name, message);
        errors
    }

    pub fn with_root(message: impl Into<String>) -> Self {
        Self { root: Some(message.into()), ..Self::default() }
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.fields.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        if let Some(root) = &self.root { parts.push(root.clone()); }
        f.write_str(&parts.join("; "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormMode::Create => "create",
            FormMode::Update => "update",
        })
    }
}

fn check_length(errors: &mut FormErrors, field: &'static str, label: &str, value: &str, min: usize, max: usize, max_text: &str) {
    let len = value.chars().count();
    if len == 0 {
        errors.set_field(field, format!("{} is required", label));
    } else if len < min {
        errors.set_field(field, format!("{} must be at least {} characters", label, min));
    } else if len > max {
        errors.set_field(field, format!("{} must be less than {} characters", label, max_text));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: &str, password: &str) -> Self {
        Self { username: username.to_string(), password: password.to_string() }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        check_length(&mut errors, "username", "Username", &self.username, 3, 50, "50");
        check_length(&mut errors, "password", "Password", &self.password, 5, 100, "100");
        errors.into_result()
    }

    pub fn map_error(err: &Error) -> FormErrors {
        match err.status() {
            Some(401) => FormErrors::with_field("password", "Invalid username or password"),
            Some(400) => FormErrors::with_field("username", "Invalid username format"),
            _ => FormErrors::with_root("Login failed. Please try again."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        LoginForm::new(&self.username, &self.password).validate()
    }

    pub fn map_error(err: &Error) -> FormErrors {
        match err {
            Error::Conflict(_) => FormErrors::with_field("username", "Username already taken"),
            Error::BadRequest(msg) => FormErrors::with_root(msg.clone()),
            _ => FormErrors::with_root("Registration failed. Please try again."),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleForm {
    pub title: String,
    pub content: String,
    pub category_id: String,
    pub image_url: Option<String>,
}

impl ArticleForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        check_length(&mut errors, "title", "Title", &self.title, 5, 200, "200");
        check_length(&mut errors, "content", "Content", &self.content, 50, 10_000, "10,000");
        if self.category_id.is_empty() {
            errors.set_field("categoryId", "Please select a category");
        }
        errors.into_result()
    }

    pub fn payload(&self) -> ArticlePayload {
        ArticlePayload {
            title: self.title.clone(),
            content: self.content.clone(),
            category_id: self.category_id.clone(),
            image_url: self.image_url.clone().filter(|u| !u.trim().is_empty()),
        }
    }

    pub fn map_error(mode: FormMode, err: &Error) -> FormErrors {
        match err.status() {
            Some(400) => FormErrors::with_root("Invalid article data. Please check your input."),
            Some(404) => FormErrors::with_field("categoryId", "Selected category not found"),
            _ => FormErrors::with_root(format!("Failed to {} article. Please try again.", mode)),
        }
    }
}

/// Prefill for the edit screen.
impl From<&Article> for ArticleForm {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            category_id: article.category_id.clone(),
            image_url: article.image_url.clone(),
        }
    }
}

/// Fields given on an edit; `None` keeps what the form was prefilled with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
}

impl ArticleChanges {
    pub fn is_empty(&self) -> bool { *self == Self::default() }

    pub fn apply_to(self, mut form: ArticleForm) -> ArticleForm {
        if let Some(title) = self.title { form.title = title; }
        if let Some(content) = self.content { form.content = content; }
        if let Some(category_id) = self.category_id { form.category_id = category_id; }
        if let Some(image_url) = self.image_url { form.image_url = Some(image_url); }
        form
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
}

impl CategoryForm {
    pub fn new(name: &str) -> Self { Self { name: name.to_string() } }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        check_length(&mut errors, "name", "Category name", &self.name, 2, 50, "50");
        if !self.name.is_empty() && !CATEGORY_NAME_PATTERN.is_match(&self.name) {
            errors.set_field(
                "name",
                "Category name can only contain letters, numbers, spaces, hyphens, underscores, and ampersands",
            );
        }
        errors.into_result()
    }

    pub fn payload(&self) -> CategoryPayload { CategoryPayload { name: self.name.clone() } }

    pub fn map_error(mode: FormMode, err: &Error) -> FormErrors {
        match err.status() {
            Some(409) => FormErrors::with_field("name", "Category name already exists"),
            Some(400) => FormErrors::with_root("Invalid category data"),
            _ => FormErrors::with_root(format!("Failed to {} category. Please try again.", mode)),
        }
    }
}

impl From<&Category> for CategoryForm {
    fn from(category: &Category) -> Self { Self::new(&category.name) }
}
