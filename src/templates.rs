// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML templates, compiled once at startup.

use crate::time_utils::format_km;
use minijinja::Environment;

/// Name of the dashboard template.
pub const INDEX: &str = "index.html";

const INDEX_SOURCE: &str = include_str!("../templates/index.html");

/// Build the template environment with all templates and filters registered.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);
    env.add_filter("km", format_km);
    env.add_template(INDEX, INDEX_SOURCE)?;
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_km_filter() {
        let mut env = environment().unwrap();
        env.add_template("t", "{{ 4.988954 | km }}").unwrap();
        let out = env.get_template("t").unwrap().render(context! {}).unwrap();
        assert_eq!(out, "5.0");
    }

    #[test]
    fn test_index_renders_empty_state() {
        let env = environment().unwrap();
        let out = env
            .get_template(INDEX)
            .unwrap()
            .render(context! {
                total_distance_km => 0.0,
                goal_km => 365.0,
                progress_percent => 0.0,
                schedule => Vec::<()>::new(),
                runs => Vec::<()>::new(),
            })
            .unwrap();
        assert!(out.contains("no runs"));
        assert!(out.contains("no schedule"));
        assert!(out.contains("<b>0.0 km</b> of <b>365.0 km</b>"));
    }

    #[test]
    fn test_index_missing_variable_fails() {
        let env = environment().unwrap();
        let result = env.get_template(INDEX).unwrap().render(context! {});
        assert!(result.is_err());
    }
}
