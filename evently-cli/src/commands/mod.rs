pub mod add;
pub mod edit;
pub mod list;
pub mod ping;
pub mod remove;
pub mod session;
pub mod show;

use anyhow::Result;
use dialoguer::Input;

/// Prompt for one free-form field. Empty input is allowed; the initial
/// text re-offers whatever a preserved draft already holds.
pub(crate) fn prompt(label: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
