use crate::core::console::Console;
use crate::domain::model::Shoe;
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{is_cancel, parse_code, parse_name, parse_non_negative};
use std::io::{BufRead, Write};

pub const CAPTURE_CANCELLED: &str = "Capture cancelled.";

/// Asks until `parse` accepts the answer. Validation failures are printed
/// and the same question is asked again; the cancel sentinel or end of
/// input prints `cancelled` and yields `None`.
pub fn prompt_until_valid<R, W, T, F>(
    console: &mut Console<R, W>,
    question: &str,
    cancelled: &str,
    parse: F,
) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T>,
{
    loop {
        let Some(answer) = console.prompt(question)? else {
            console.say(cancelled)?;
            return Ok(None);
        };

        if is_cancel(&answer) {
            console.say(cancelled)?;
            return Ok(None);
        }

        match parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(InventoryError::ValidationError { reason, value, .. }) => {
                tracing::debug!("Rejected input '{}'", value);
                console.say(reason)?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Walks the user through the five fields of a new shoe.
/// `None` means the capture was cancelled and nothing should change.
pub fn capture_shoe<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<Shoe>> {
    console.say("\nEnter 'x' at any time to cancel.\n")?;

    let Some(country) = prompt_until_valid(
        console,
        "Enter the country the shoe is from: ",
        CAPTURE_CANCELLED,
        |input| parse_name("country", input),
    )?
    else {
        return Ok(None);
    };

    let Some(code) = prompt_until_valid(
        console,
        "Enter the shoe code (e.g., SKU12345): ",
        CAPTURE_CANCELLED,
        parse_code,
    )?
    else {
        return Ok(None);
    };

    let Some(product) = prompt_until_valid(
        console,
        "Enter what brand shoe it is: ",
        CAPTURE_CANCELLED,
        |input| parse_name("product", input),
    )?
    else {
        return Ok(None);
    };

    let Some(cost) = prompt_until_valid(
        console,
        "Enter the price for one pair: ",
        CAPTURE_CANCELLED,
        |input| parse_non_negative("cost", input),
    )?
    else {
        return Ok(None);
    };

    let Some(quantity) = prompt_until_valid(
        console,
        "Enter the amount of pairs: ",
        CAPTURE_CANCELLED,
        |input| parse_non_negative("quantity", input),
    )?
    else {
        return Ok(None);
    };

    Ok(Some(Shoe::new(country, code, product, cost, quantity)))
}
