//! # Bazaar Terminal Shell
//!
//! The interactive menu loop over a [`bazaar_core::Session`].
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr, `RUST_LOG` respected)
//! 2. Parse command-line arguments
//! 3. Load the catalog CSV (bad rows are reported and skipped)
//! 4. Run the menu loop until the user exits
//!
//! Everything here is presentation: reading lines, dispatching to the
//! session, and formatting what comes back. All semantics live in
//! bazaar-core.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use bazaar_core::validation::{parse_price, parse_rating};
use bazaar_core::{CartLine, CoreError, Money, Product, Purchase, Session, SortKey};

/// In-memory product catalog with search, sorting, cart, and checkout.
#[derive(Debug, Parser)]
#[command(name = "bazaar", version, about)]
struct Cli {
    /// Path to the catalog CSV (header row, then name,category,price[,rating])
    #[arg(default_value = "products.csv")]
    catalog: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let records = load_catalog(&cli.catalog)?;
    let mut session = Session::new(records);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        // A zero-byte read means stdin closed; stop instead of spinning
        let Some(choice) = prompt(&mut input, "Enter your choice: ")? else {
            break;
        };

        match choice.trim() {
            "1" => do_search(&mut session, &mut input)?,
            "2" => list_products(session.products()),
            "3" => do_sort(&mut session, SortKey::PriceAsc),
            "4" => do_sort(&mut session, SortKey::PriceDesc),
            "5" => do_sort(&mut session, SortKey::RatingDesc),
            "6" => do_sort(&mut session, SortKey::CategoryAsc),
            "7" => do_add_to_cart(&mut session, &mut input)?,
            "8" => do_view_cart(&session),
            "9" => do_checkout(&mut session),
            "10" => do_view_history(&session),
            "11" => do_filter_by_category(&session, &mut input)?,
            "12" => do_advanced_filters(&session, &mut input)?,
            "13" => break,
            other => println!("Invalid choice: '{}'. Try again.", other),
        }
    }

    Ok(())
}

// =============================================================================
// Catalog Loading
// =============================================================================

/// Reads the catalog file, skipping the header row.
///
/// A row that fails to parse is reported and skipped; the rest of the
/// load continues.
fn load_catalog(path: &PathBuf) -> Result<Vec<Product>> {
    let file = File::open(path)
        .with_context(|| format!("cannot open catalog file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed reading catalog file")?;
        if index == 0 || line.trim().is_empty() {
            continue; // header row / blank line
        }

        match Product::parse_row(&line) {
            Ok(product) => records.push(product),
            Err(err) => warn!(row = index + 1, %err, "skipping malformed record"),
        }
    }

    Ok(records)
}

// =============================================================================
// Menu Actions
// =============================================================================

fn print_menu() {
    println!();
    println!("Bazaar Product Catalog");
    println!();
    println!("Choose an option:");
    println!("1.  Search product by name or category");
    println!("2.  View all products");
    println!("3.  Sort products by price (low to high)");
    println!("4.  Sort products by price (high to low)");
    println!("5.  Sort products by rating (high to low)");
    println!("6.  Sort products by category");
    println!("7.  Add product to cart");
    println!("8.  View cart");
    println!("9.  Checkout");
    println!("10. View purchase history");
    println!("11. Filter by category");
    println!("12. Advanced filters (price range, minimum rating)");
    println!("13. Exit");
}

fn do_search(session: &mut Session, input: &mut impl BufRead) -> Result<()> {
    let Some(query) = prompt(input, "Enter search term: ")? else {
        return Ok(());
    };

    let matches = session.search(&query);
    println!();
    println!("Search results for '{}':", query);
    if matches.is_empty() {
        println!("No results found.");
    } else {
        for product in &matches {
            println!("{}", format_product(product));
        }
    }

    let Some(answer) = prompt(input, "Do you want to view your search history? (yes/no): ")?
    else {
        return Ok(());
    };
    if matches!(answer.trim(), "yes" | "YES" | "y" | "Y") {
        println!();
        println!("Your Search History:");
        for term in session.search_log() {
            println!("- {}", term);
        }
    }

    Ok(())
}

fn list_products(products: &[Product]) {
    println!();
    println!("All Products:");
    for product in products {
        println!("{}", format_product(product));
    }
}

fn do_sort(session: &mut Session, key: SortKey) {
    session.sort_by(key);
    println!();
    println!("Products sorted by {}:", key.label());
    for product in session.products() {
        println!("{}", format_product(product));
    }
}

fn do_add_to_cart(session: &mut Session, input: &mut impl BufRead) -> Result<()> {
    let Some(name) = prompt(input, "Enter product name: ")? else {
        return Ok(());
    };
    match session.add_to_cart(&name) {
        Ok(line) => println!("Added {} (quantity now {}).", line.product.name, line.quantity),
        Err(CoreError::ProductNotFound(_)) => println!("Product not found."),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn do_view_cart(session: &Session) {
    match session.view_cart() {
        Ok(view) => {
            println!();
            println!("Your Cart:");
            print_line_table(&view.lines);
            println!("{:>62}", format!("Total: {}", view.total));
        }
        Err(err) => println!("{}", err),
    }
}

fn do_checkout(session: &mut Session) {
    match session.checkout() {
        Ok(purchase) => {
            println!();
            println!("Checkout complete.");
            print_receipt(&purchase);
        }
        Err(err) => println!("{}", err),
    }
}

fn do_filter_by_category(session: &Session, input: &mut impl BufRead) -> Result<()> {
    let categories = session.categories();
    if categories.is_empty() {
        println!("No categories available.");
        return Ok(());
    }

    println!();
    println!("Categories:");
    for category in &categories {
        println!("- {}", category);
    }

    let Some(answer) = prompt(input, "Choose category/categories (comma-separated): ")? else {
        return Ok(());
    };
    let selected: Vec<String> = answer
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if selected.is_empty() {
        println!("No categories selected.");
        return Ok(());
    }

    let matches = session.filter_by_categories(&selected);
    println!();
    println!("Filtered by Category:");
    if matches.is_empty() {
        println!("No results found.");
    } else {
        for product in &matches {
            println!("{}", format_product(product));
        }
    }
    Ok(())
}

fn do_advanced_filters(session: &Session, input: &mut impl BufRead) -> Result<()> {
    let Some(min) = prompt(input, "Minimum price (blank for none): ")? else {
        return Ok(());
    };
    let Some(max) = prompt(input, "Maximum price (blank for none): ")? else {
        return Ok(());
    };
    let Some(rating) = prompt(input, "Minimum rating (blank for 0): ")? else {
        return Ok(());
    };

    let min_price = if min.trim().is_empty() {
        Money::zero()
    } else {
        match parse_price(&min) {
            Ok(price) => price,
            Err(err) => {
                println!("{}", err);
                return Ok(());
            }
        }
    };
    let max_price = if max.trim().is_empty() {
        Money::from_cents(i64::MAX)
    } else {
        match parse_price(&max) {
            Ok(price) => price,
            Err(err) => {
                println!("{}", err);
                return Ok(());
            }
        }
    };
    let min_rating = if rating.trim().is_empty() {
        0.0
    } else {
        match parse_rating(&rating) {
            Ok(value) => value,
            Err(err) => {
                println!("{}", err);
                return Ok(());
            }
        }
    };

    let matches = session.filter_by_price_and_rating(min_price, max_price, min_rating);
    println!();
    println!("Filtered Results:");
    if matches.is_empty() {
        println!("No results found.");
    } else {
        for product in &matches {
            println!("{}", format_product(product));
        }
    }
    Ok(())
}

fn do_view_history(session: &Session) {
    let purchases = session.history();
    if purchases.is_empty() {
        println!("No purchases yet.");
        return;
    }

    println!();
    println!("Purchase History:");
    for purchase in purchases {
        print_receipt(purchase);
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn format_product(product: &Product) -> String {
    format!(
        "- {} | {} | {} | Rating: {}",
        product.name, product.category, product.price, product.rating
    )
}

/// Fixed-width cart table: name, category, price, quantity, subtotal.
fn print_line_table(lines: &[CartLine]) {
    println!(
        "{:<20} {:<12} {:>10} {:>5} {:>10}",
        "Name", "Category", "Price", "Qty", "Subtotal"
    );
    for line in lines {
        println!(
            "{:<20} {:<12} {:>10} {:>5} {:>10}",
            line.product.name,
            line.product.category,
            line.product.price.to_string(),
            line.quantity,
            line.subtotal().to_string()
        );
    }
}

fn print_receipt(purchase: &Purchase) {
    println!(
        "Receipt {} | {} | Total: {}",
        purchase.receipt_number,
        purchase.timestamp(),
        purchase.total
    );
    print_line_table(&purchase.items);
}

// =============================================================================
// Input
// =============================================================================

/// Prints a prompt and reads one line of input, without the trailing
/// line ending. Leading and interior whitespace is preserved; a search
/// query is taken exactly as typed.
///
/// Returns `None` when the input is exhausted (a zero-byte read), so
/// callers can wind down instead of spinning on a closed stdin.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush().context("failed flushing stdout")?;

    let mut buffer = String::new();
    let bytes = input
        .read_line(&mut buffer)
        .context("failed reading input")?;
    if bytes == 0 {
        return Ok(None);
    }

    while buffer.ends_with('\n') || buffer.ends_with('\r') {
        buffer.pop();
    }
    Ok(Some(buffer))
}
