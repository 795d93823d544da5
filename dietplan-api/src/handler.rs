use std::{collections::HashMap, str::FromStr};

use dietplan_model::{
    compute, ActivityLevel, Error as InputError, Gender, ProfileInput, Result as InputResult,
};
use log::debug;

use crate::{error::Result, render::Renderer};

pub fn render_form(renderer: &dyn Renderer) -> Result<String> {
    renderer.render_form()
}

/// Turns raw form fields into a rendered summary page.
pub fn handle_submission(
    fields: &HashMap<String, String>,
    renderer: &dyn Renderer,
) -> Result<String> {
    let profile = parse_profile(fields)?;
    let plan = compute(&profile)?;
    debug!("Computed {:?} for {:?}", plan, profile);

    renderer.render_summary(&plan)
}

fn parse_profile(fields: &HashMap<String, String>) -> InputResult<ProfileInput> {
    let age: i64 = parse_field(fields, "age", "a whole number")?;
    let weight: f64 = parse_field(fields, "weight", "a number")?;
    let height: f64 = parse_field(fields, "height", "a number")?;
    let gender = Gender::parse(field(fields, "gender")?)?;
    let activity_level = ActivityLevel::parse(field(fields, "activity_level")?)?;

    let age = u32::try_from(age)
        .map_err(|_| InputError::InvalidInput("age must be a positive whole number".to_owned()))?;

    Ok(ProfileInput::new(age, weight, height, gender, activity_level))
}

fn field<'a>(
    fields: &'a HashMap<String, String>,
    name: &str,
) -> InputResult<&'a str> {
    fields
        .get(name)
        .map(|value| value.trim())
        .ok_or_else(|| InputError::MalformedInput(format!("missing field \"{}\"", name)))
}

fn parse_field<T: FromStr>(
    fields: &HashMap<String, String>,
    name: &str,
    expected: &str,
) -> InputResult<T> {
    let value = field(fields, name)?;
    value.parse().map_err(|_| {
        InputError::MalformedInput(format!(
            "field \"{}\" must be {}, got \"{}\"",
            name, expected, value
        ))
    })
}
