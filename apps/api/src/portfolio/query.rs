//! Request parameter validation for the read endpoints.

use serde::Deserialize;

use crate::errors::AppError;

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;
pub const DEFAULT_TOP_SKILLS: i64 = 5;

/// Offset/limit window applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Applies defaults, then rejects `limit` outside [1, 100] and negative
    /// `offset`.
    pub fn from_params(limit: Option<i64>, offset: Option<i64>) -> Result<Self, AppError> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        let offset = offset.unwrap_or(0);

        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(AppError::UnprocessableEntity(format!(
                "limit must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"
            )));
        }
        if offset < 0 {
            return Err(AppError::UnprocessableEntity(format!(
                "offset must be greater than or equal to 0, got {offset}"
            )));
        }
        Ok(Page { limit, offset })
    }
}

/// Query string of `GET /projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectParams {
    pub skill: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Validated form of [`ProjectParams`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub skill: Option<String>,
    pub page: Page,
}

impl ProjectQuery {
    /// An empty `skill` value means no filter.
    pub fn from_params(params: ProjectParams) -> Result<Self, AppError> {
        let page = Page::from_params(params.limit, params.offset)?;
        let skill = params.skill.filter(|s| !s.is_empty());
        Ok(ProjectQuery { skill, page })
    }
}

/// Query string of `GET /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Extracts the search term; missing or empty is a validation error.
pub fn search_term(params: SearchParams) -> Result<String, AppError> {
    match params.q {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(AppError::Validation(
            "Query parameter 'q' is required".to_string(),
        )),
    }
}

/// Builds an `ILIKE` pattern matching `term` as a literal substring.
/// `%`, `_` and the escape character itself are escaped.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
