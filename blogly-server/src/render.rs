//! HTML pages rendered from tera templates embedded at compile time

use tera::{Context, Tera};

/// Compiled page templates
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Compile every embedded template.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to parse or extends a missing parent.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("users/list.html", include_str!("../templates/users/list.html")),
            ("users/new.html", include_str!("../templates/users/new.html")),
            ("users/detail.html", include_str!("../templates/users/detail.html")),
            ("users/edit.html", include_str!("../templates/users/edit.html")),
            ("posts/list.html", include_str!("../templates/posts/list.html")),
            ("posts/new.html", include_str!("../templates/posts/new.html")),
            ("posts/detail.html", include_str!("../templates/posts/detail.html")),
            ("posts/edit.html", include_str!("../templates/posts/edit.html")),
        ])?;

        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(name, context)
    }
}
