use std::io::{self, BufRead, Write};

use clap::Parser;
use stocklist::api::StockApi;
use stocklist::error::{Result, StockError};
use stocklist::model::{demo_store, Store};
use stocklist::mutations::ProductUpdate;

mod args;
mod cli;

use args::Cli;
use cli::print::{
    print_count, print_error, print_info, print_menu, print_product, print_products,
    print_success,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StockApi,
    json: bool,
}

type Lines = dyn Iterator<Item = io::Result<String>>;

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let store = if cli.empty { Store::new() } else { demo_store() };
    let mut ctx = AppContext {
        api: StockApi::new(store),
        json: cli.json,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Choice")? else {
            break;
        };
        match choice.as_str() {
            "1" => handle_list(&ctx)?,
            "2" => handle_add(&mut ctx, &mut input)?,
            "3" => handle_remove(&mut ctx, &mut input)?,
            "4" => handle_update(&mut ctx, &mut input)?,
            "5" => handle_find(&ctx, &mut input)?,
            "6" => handle_below_price(&ctx, &mut input)?,
            "7" => handle_below_quantity(&ctx, &mut input)?,
            "8" => handle_undo(&mut ctx),
            "0" | "q" => break,
            "" => {}
            other => print_info(&format!("Unknown choice: {other}")),
        }
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let (products, count) = ctx.api.list();
    let refs: Vec<_> = products.iter().collect();
    print_products(&refs, ctx.json)?;
    print_count(count);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, input: &mut Lines) -> Result<()> {
    let Some(name) = prompt(input, "Name")? else {
        return Ok(());
    };
    let Some(price) = read_price(input, "Price")? else {
        return Ok(());
    };
    let Some(quantity) = read_quantity(input, "Quantity")? else {
        return Ok(());
    };

    match ctx.api.add(&name, price, quantity) {
        Ok(product) => print_success(&format!("Product added: {}", product.name)),
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, input: &mut Lines) -> Result<()> {
    let Some(name) = prompt(input, "Name")? else {
        return Ok(());
    };
    match ctx.api.remove(&name) {
        Ok(product) => print_success(&format!("Product removed: {}", product.name)),
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_update(ctx: &mut AppContext, input: &mut Lines) -> Result<()> {
    let Some(name) = prompt(input, "Name")? else {
        return Ok(());
    };

    // Blank answers keep the prior value.
    let Some(new_name) = prompt(input, "New name (blank to keep)")? else {
        return Ok(());
    };
    let Some(new_price) = prompt(input, "New price (blank to keep)")? else {
        return Ok(());
    };
    let Some(new_quantity) = prompt(input, "New quantity (blank to keep)")? else {
        return Ok(());
    };

    let mut update = ProductUpdate::default();
    if !new_name.is_empty() {
        update.name = Some(new_name);
    }
    if !new_price.is_empty() {
        match parse_price(&new_price) {
            Ok(price) => update.price = Some(price),
            Err(e) => {
                print_error(&e);
                return Ok(());
            }
        }
    }
    if !new_quantity.is_empty() {
        match parse_quantity(&new_quantity) {
            Ok(quantity) => update.quantity = Some(quantity),
            Err(e) => {
                print_error(&e);
                return Ok(());
            }
        }
    }

    match ctx.api.update(&name, &update) {
        Ok(product) => print_success(&format!("Product updated: {}", product.name)),
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_find(ctx: &AppContext, input: &mut Lines) -> Result<()> {
    let Some(name) = prompt(input, "Name")? else {
        return Ok(());
    };
    match ctx.api.find(&name) {
        Ok(product) => print_product(product, ctx.json)?,
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_below_price(ctx: &AppContext, input: &mut Lines) -> Result<()> {
    let Some(threshold) = read_price(input, "Price threshold")? else {
        return Ok(());
    };
    print_products(&ctx.api.below_price(threshold), ctx.json)
}

fn handle_below_quantity(ctx: &AppContext, input: &mut Lines) -> Result<()> {
    let Some(threshold) = read_quantity(input, "Quantity threshold")? else {
        return Ok(());
    };
    print_products(&ctx.api.below_quantity(threshold), ctx.json)
}

fn handle_undo(ctx: &mut AppContext) {
    if ctx.api.undo() {
        print_success("Reverted the last change.");
    } else {
        print_info("Nothing to undo.");
    }
}

/// Print a prompt and read one trimmed line. `None` means end of input.
fn prompt(input: &mut Lines, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn read_price(input: &mut Lines, label: &str) -> Result<Option<f64>> {
    let Some(raw) = prompt(input, label)? else {
        return Ok(None);
    };
    match parse_price(&raw) {
        Ok(price) => Ok(Some(price)),
        Err(e) => {
            print_error(&e);
            Ok(None)
        }
    }
}

fn read_quantity(input: &mut Lines, label: &str) -> Result<Option<u32>> {
    let Some(raw) = prompt(input, label)? else {
        return Ok(None);
    };
    match parse_quantity(&raw) {
        Ok(quantity) => Ok(Some(quantity)),
        Err(e) => {
            print_error(&e);
            Ok(None)
        }
    }
}

fn parse_price(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| StockError::InvalidValue(format!("price must be a number, got '{raw}'")))
}

fn parse_quantity(raw: &str) -> Result<u32> {
    let n: i64 = raw.parse().map_err(|_| {
        StockError::InvalidValue(format!("quantity must be an integer, got '{raw}'"))
    })?;
    u32::try_from(n).map_err(|_| {
        StockError::InvalidValue(format!("quantity must be a non-negative integer, got {n}"))
    })
}
