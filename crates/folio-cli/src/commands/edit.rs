use anyhow::{Context, Result, anyhow};
use folio_core::profile::ProfileField;
use std::str::FromStr;
use strum::IntoEnumIterator;

use super::{Environment, print_notices, save_and_close};

fn parse_field(name: &str) -> Result<ProfileField> {
    ProfileField::from_str(name).map_err(|_| {
        let known: Vec<String> = ProfileField::iter().map(|f| f.to_string()).collect();
        anyhow!("Unknown field '{}'. Known fields: {}", name, known.join(", "))
    })
}

pub async fn set_field(env: &Environment, field: &str, value: &str) -> Result<()> {
    let field = parse_field(field)?;
    let mut editor = env.open_editor().await;
    editor.set_field(field, value);
    save_and_close(editor).await
}

pub async fn add_skill(env: &Environment, name: &str) -> Result<()> {
    let mut editor = env.open_editor().await;
    let skills = editor.add_skill(name).skills.join(", ");
    println!("Skills: {}", skills);
    save_and_close(editor).await
}

pub async fn remove_skill(env: &Environment, name: &str) -> Result<()> {
    let mut editor = env.open_editor().await;
    let skills = editor.remove_skill(name).skills.join(", ");
    println!("Skills: {}", skills);
    save_and_close(editor).await
}

pub async fn reset(env: &Environment) -> Result<()> {
    let mut editor = env.open_editor().await;
    let result = editor.reset().await;
    print_notices(&editor.take_notices());
    editor.close();
    result.context("Failed to reset the portfolio")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("linkedinUrl").unwrap(), ProfileField::LinkedinUrl);
        let err = parse_field("twitter").unwrap_err().to_string();
        assert!(err.contains("profileImage"));
    }
}
