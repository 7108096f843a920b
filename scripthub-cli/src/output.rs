//! Rendering catalog entities as text or JSON on stdout

use anyhow::Result;
use scripthub_core::{CatalogError, Category, OutputFormat, Script, User};
use serde::Serialize;
use serde_json::json;

/// Rating is stored in tenths of a star
fn format_rating(rating: i32) -> String {
    format!("{:.1}", f64::from(rating) / 10.0)
}

fn script_row(script: &Script) -> String {
    format!(
        "{:>4}  {:<28} {:<10} {:>7} views {:>7} downloads  {}★  {}",
        script.id,
        script.name,
        script.category,
        script.views,
        script.downloads,
        format_rating(script.rating),
        script.status
    )
}

fn script_detail(script: &Script) -> String {
    let mut flags = Vec::new();
    if script.is_popular {
        flags.push("popular");
    }
    if script.is_new {
        flags.push("new");
    }
    if script.is_featured {
        flags.push("featured");
    }

    let mut out = format!(
        "#{} {} [{}]\ncategory: {}  rating: {}  views: {}  downloads: {}\n",
        script.id,
        script.name,
        script.status,
        script.category,
        format_rating(script.rating),
        script.views,
        script.downloads
    );
    if !flags.is_empty() {
        out.push_str(&format!("flags: {}\n", flags.join(", ")));
    }
    if let Some(image) = &script.image {
        out.push_str(&format!("image: {}\n", image));
    }
    out.push_str(&format!("\n{}\n\n{}", script.description, script.code));
    out
}

fn category_row(category: &Category) -> String {
    format!(
        "{:>4}  {:<10} {:<20} {}",
        category.id,
        category.slug,
        category.name,
        category.description.as_deref().unwrap_or("-")
    )
}

fn user_row(user: &User) -> String {
    format!("#{} {}", user.id, user.username)
}

/// Writes command results in the selected format
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn json<T: Serialize + ?Sized>(&self, context: &str, value: &T) -> Result<()> {
        let rendered =
            serde_json::to_string_pretty(value).map_err(|e| CatalogError::json(context, e))?;
        println!("{}", rendered);
        Ok(())
    }

    pub fn scripts(&self, scripts: &[Script]) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json("script list", scripts),
            OutputFormat::Text if scripts.is_empty() => {
                println!("No scripts found");
                Ok(())
            }
            OutputFormat::Text => {
                for script in scripts {
                    println!("{}", script_row(script));
                }
                Ok(())
            }
        }
    }

    pub fn script(&self, script: &Script) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json("script", script),
            OutputFormat::Text => {
                println!("{}", script_detail(script));
                Ok(())
            }
        }
    }

    pub fn categories(&self, categories: &[Category]) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json("category list", categories),
            OutputFormat::Text if categories.is_empty() => {
                println!("No categories found");
                Ok(())
            }
            OutputFormat::Text => {
                for category in categories {
                    println!("{}", category_row(category));
                }
                Ok(())
            }
        }
    }

    /// A category together with the scripts filed under its slug
    pub fn category(&self, category: &Category, scripts: &[Script]) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(
                "category",
                &json!({ "category": category, "scripts": scripts }),
            ),
            OutputFormat::Text => {
                println!("{}", category_row(category));
                println!();
                self.scripts(scripts)
            }
        }
    }

    pub fn user(&self, user: &User) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json("user", user),
            OutputFormat::Text => {
                println!("{}", user_row(user));
                Ok(())
            }
        }
    }

    /// One-line status message; JSON mode wraps it as `{"message": ...}`
    pub fn message(&self, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json("message", &json!({ "message": message })),
            OutputFormat::Text => {
                println!("{}", message);
                Ok(())
            }
        }
    }
}
