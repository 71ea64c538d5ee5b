//! Server-side page templates.
//!
//! Templates are compiled into the binary and loaded into one shared
//! [`minijinja::Environment`] at startup. Auto-escaping is on for every
//! `.html` template, so row values and the echoed destination are safe to
//! render as-is.

use std::sync::Arc;

use minijinja::Environment;
use serde::Serialize;

/// Every template the server can render, by name.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("login.html", include_str!("../templates/login.html")),
    ("signup.html", include_str!("../templates/signup.html")),
    ("planner.html", include_str!("../templates/planner.html")),
    ("results.html", include_str!("../templates/results.html")),
    ("budget_setup.html", include_str!("../templates/budget_setup.html")),
    ("budget_expenses.html", include_str!("../templates/budget_expenses.html")),
];

/// Cheaply cloneable handle to the compiled templates.
#[derive(Clone)]
pub struct Templates {
    env: Arc<Environment<'static>>,
}

impl Templates {
    /// Compile all page templates. Fails on the first syntax error.
    pub fn load() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env: Arc::new(env) })
    }

    /// Render the template `name` with `ctx`.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
