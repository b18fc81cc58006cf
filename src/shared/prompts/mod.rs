//! Prompt template management module.
//!
//! Templates for the AI copywriting helper live in `templates/prompts/`
//! and use Jinja2 syntax.
//!
//! # Usage
//!
//! ```ignore
//! use std::collections::HashMap;
//! use minijinja::Value;
//! use crate::shared::prompts::render_template;
//!
//! let mut ctx = HashMap::new();
//! ctx.insert("label", Value::from("Hero heading"));
//!
//! let prompt = render_template("field_prompt.jinja", &ctx)?;
//! ```

pub mod engine;

pub use engine::{render_template, TemplateError};
