use crate::domain::model::{Shoe, INVENTORY_HEADER};

/// `1234567` → `R1,234,567.00`
pub fn format_currency(symbol: &str, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.00", symbol, grouped)
}

pub fn describe_shoe(shoe: &Shoe, symbol: &str) -> String {
    format!(
        "Country: {} | Code: {} | Product: {} | Cost: {} | Quantity: {}",
        shoe.country,
        shoe.code,
        shoe.product,
        format_currency(symbol, shoe.cost),
        shoe.quantity
    )
}

pub fn valuation_line(code: &str, value: u64, symbol: &str) -> String {
    format!("Total value for: {} = {}", code, format_currency(symbol, value))
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

const COLUMN_ALIGN: [Align; 5] = [Align::Left, Align::Left, Align::Left, Align::Left, Align::Right];

/// Every column is at least this much wider than its header text.
const HEADER_PADDING: usize = 2;

/// Grid table of every shoe, header row separated by `=`.
pub fn render_table(shoes: &[Shoe], symbol: &str) -> String {
    let rows: Vec<[String; 5]> = shoes
        .iter()
        .map(|shoe| {
            [
                shoe.country.clone(),
                shoe.code.clone(),
                shoe.product.clone(),
                format_currency(symbol, shoe.cost),
                shoe.quantity.to_string(),
            ]
        })
        .collect();

    let mut widths = INVENTORY_HEADER.map(|h| h.chars().count() + HEADER_PADDING);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = |fill: char| {
        let mut line = String::from("+");
        for width in widths {
            line.extend(std::iter::repeat(fill).take(width + 2));
            line.push('+');
        }
        line
    };
    let row_line = |cells: &[String; 5]| {
        let mut line = String::from("|");
        for ((cell, width), align) in cells.iter().zip(widths).zip(COLUMN_ALIGN) {
            let cell = match align {
                Align::Left => format!(" {:<width$} ", cell, width = width),
                Align::Right => format!(" {:>width$} ", cell, width = width),
            };
            line.push_str(&cell);
            line.push('|');
        }
        line
    };

    let mut lines = vec![border('-'), row_line(&INVENTORY_HEADER.map(String::from)), border('=')];
    for row in &rows {
        lines.push(row_line(row));
        lines.push(border('-'));
    }
    if rows.is_empty() {
        lines.pop();
        lines.push(border('-'));
    }
    lines.join("\n")
}
