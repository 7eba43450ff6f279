//! Interactive prompts
//!
//! Commands ask for missing parameters through [`Prompter`] so the collect
//! stage can run against scripted answers in tests. Prompts are strictly
//! sequential.

use anyhow::{anyhow, Result};
use dialoguer::{Confirm, Input, Password, Select};

/// Re-prompt message for blank required answers
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Source of answers to interactive questions
pub trait Prompter {
    /// Free-text answer; `required` rejects blank input and asks again
    fn input(&mut self, prompt: &str, default: Option<&str>, required: bool) -> Result<String>;

    /// Index into `items`
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Yes/no answer
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Hidden answer; blank allowed only when `allow_empty`
    fn password(&mut self, prompt: &str, allow_empty: bool) -> Result<String>;
}

fn cancelled(prompt: &str) -> anyhow::Error {
    anyhow!("Prompt cancelled: {}", prompt)
}

/// [`Prompter`] backed by dialoguer on the controlling terminal
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>, required: bool) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(!required);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        if required {
            input = input.validate_with(|value: &String| -> std::result::Result<(), &'static str> {
                if value.trim().is_empty() {
                    Err(REQUIRED_MESSAGE)
                } else {
                    Ok(())
                }
            });
        }

        let value = input.interact_text()?;
        Ok(value.trim().to_string())
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()?
            .ok_or_else(|| cancelled(prompt))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?
            .ok_or_else(|| cancelled(prompt))
    }

    fn password(&mut self, prompt: &str, allow_empty: bool) -> Result<String> {
        loop {
            let value = Password::new()
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()?;

            let value = value.trim().to_string();
            if !value.is_empty() || allow_empty {
                return Ok(value);
            }
            eprintln!("{}", REQUIRED_MESSAGE);
        }
    }
}
