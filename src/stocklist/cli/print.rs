use colored::Colorize;
use stocklist::error::{Result, StockError};
use stocklist::model::Product;
use unicode_width::UnicodeWidthStr;

const MIN_NAME_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 10;

pub(crate) fn print_menu() {
    println!();
    println!("{}", "stocklist".bold());
    println!("  1. List products");
    println!("  2. Add a product");
    println!("  3. Remove a product");
    println!("  4. Update a product");
    println!("  5. Find a product by name");
    println!("  6. List products below a price");
    println!("  7. List products below a quantity");
    println!("  8. Undo the last change");
    println!("  0. Quit");
}

pub(crate) fn print_products(products: &[&Product], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(products)?);
        return Ok(());
    }
    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    let name_width = products
        .iter()
        .map(|p| p.name.width())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    println!(
        "    {}{}{}",
        pad("Name", name_width + 2).bold(),
        pad("Price", PRICE_WIDTH).bold(),
        "Quantity".bold()
    );
    for product in products {
        println!(
            "    {}{}{}",
            pad(&product.name, name_width + 2),
            pad(&format!("{:.2}", product.price), PRICE_WIDTH),
            product.quantity
        );
    }
    Ok(())
}

pub(crate) fn print_product(product: &Product, json: bool) -> Result<()> {
    print_products(&[product], json)
}

pub(crate) fn print_count(count: usize) {
    let noun = if count == 1 { "product" } else { "products" };
    println!("{}", format!("{count} {noun} in stock.").dimmed());
}

pub(crate) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(crate) fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

pub(crate) fn print_error(err: &StockError) {
    println!("{}", err.to_string().red());
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
