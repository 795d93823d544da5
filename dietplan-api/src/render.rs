use dietplan_model::{ActivityLevel, Gender, PlanResult};
use minijinja::{context, Environment, UndefinedBehavior, Value};
use strum::IntoEnumIterator;

use crate::error::Result;

const INDEX_TEMPLATE: &str = "index.html";
const SUMMARY_TEMPLATE: &str = "summary.html";
const ERROR_TEMPLATE: &str = "error.html";

#[mockall::automock]
pub trait Renderer: Send + Sync {
    fn render_form(&self) -> Result<String>;
    fn render_summary(&self, plan: &PlanResult) -> Result<String>;
    fn render_error(&self, message: &str) -> Result<String>;
}

pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new(static_url: &str) -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
        env.add_template(SUMMARY_TEMPLATE, include_str!("../templates/summary.html"))?;
        env.add_template(ERROR_TEMPLATE, include_str!("../templates/error.html"))?;

        let prefix = static_url.trim_end_matches('/').to_owned();
        env.add_function("static_url", move |filename: String| {
            Value::from_safe_string(format!("{}/{}", prefix, filename.trim_start_matches('/')))
        });

        Ok(Self { env })
    }
}

impl Renderer for TemplateRenderer {
    fn render_form(&self) -> Result<String> {
        let genders: Vec<String> = Gender::iter().map(|g| g.to_string()).collect();
        let activity_levels: Vec<String> =
            ActivityLevel::iter().map(|l| l.to_string()).collect();

        Ok(self.env.get_template(INDEX_TEMPLATE)?.render(context! {
            genders => genders,
            activity_levels => activity_levels,
        })?)
    }

    fn render_summary(&self, plan: &PlanResult) -> Result<String> {
        Ok(self.env.get_template(SUMMARY_TEMPLATE)?.render(plan)?)
    }

    fn render_error(&self, message: &str) -> Result<String> {
        Ok(self
            .env
            .get_template(ERROR_TEMPLATE)?
            .render(context! { message => message })?)
    }
}
