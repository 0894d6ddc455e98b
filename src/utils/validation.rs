use crate::utils::error::{InventoryError, Result};
use regex::Regex;
use std::sync::LazyLock;

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^SKU\d+$").expect("product code pattern is valid"));

pub const CANCEL_SENTINEL: &str = "x";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 輸入是否為取消指令（不分大小寫的 "x"）
pub fn is_cancel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(CANCEL_SENTINEL)
}

/// Uppercases the first letter of every word and lowercases the rest.
/// A "word" is a run of alphabetic characters.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_alphabetic = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if previous_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            out.push(ch);
            previous_alphabetic = false;
        }
    }
    out
}

/// Country and product names: letters and spaces only, title-cased.
pub fn parse_name(field_name: &str, input: &str) -> Result<String> {
    let name = title_case(input.trim());
    let letters_only = name.chars().filter(|c| *c != ' ').all(char::is_alphabetic);
    if name.is_empty() || !letters_only {
        return Err(InventoryError::ValidationError {
            field: field_name.to_string(),
            value: input.to_string(),
            reason: format!(
                "Invalid {}. Please enter only letters and spaces.",
                field_name
            ),
        });
    }
    Ok(name)
}

pub fn parse_code(input: &str) -> Result<String> {
    let code = input.trim().to_uppercase();
    if !CODE_PATTERN.is_match(&code) {
        return Err(InventoryError::ValidationError {
            field: "code".to_string(),
            value: input.to_string(),
            reason: "Invalid code format. Code must start with 'SKU' followed by numbers (e.g., SKU12345).".to_string(),
        });
    }
    Ok(code)
}

pub fn parse_non_negative(field_name: &str, input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let invalid = |reason: String| InventoryError::ValidationError {
        field: field_name.to_string(),
        value: input.to_string(),
        reason,
    };

    let not_an_integer = || invalid(format!("Error: Please enter a valid integer for {}.", field_name));

    // 負號另外處理，讓任意長度的負整數都回報「不可為負」；"-0" 仍是 0
    if let Some(digits) = trimmed.strip_prefix('-') {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_an_integer());
        }
        if digits.bytes().all(|b| b == b'0') {
            return Ok(0);
        }
        return Err(invalid(format!("Error: {} cannot be negative.", capitalize(field_name))));
    }

    trimmed.parse::<u64>().map_err(|_| not_an_integer())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(InventoryError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(InventoryError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InventoryError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
