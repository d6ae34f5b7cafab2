//! Handler for the `cart` command group.

use serde_json::json;
use tabled::{Table, Tabled};

use super::products::fetched_list;
use crate::adapter::inbound::cli::command::CartCommand;
use crate::adapter::inbound::cli::output;
use crate::domain::{CartRecord, CartSummary, Price, ProductId};
use crate::error::{Error, Result};
use crate::infrastructure::Storefront;

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Total")]
    total: String,
}

impl From<&CartRecord> for CartRow {
    fn from(line: &CartRecord) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            price: output::price(line.price),
            quantity: line.quantity,
            total: output::price(Price::new(line.line_total())),
        }
    }
}

/// Execute a `cart` subcommand.
pub async fn execute(storefront: &Storefront, command: &CartCommand) -> Result<()> {
    match command {
        CartCommand::List => list(storefront),
        CartCommand::Add(arg) => add(storefront, &arg.id).await,
        CartCommand::Increase(arg) => {
            let line = storefront.cart_service().increase(&ProductId::new(&arg.id))?;
            report_line("cart.increase", &arg.id, Some(&line));
            Ok(())
        }
        CartCommand::Decrease(arg) => {
            let line = storefront.cart_service().decrease(&ProductId::new(&arg.id))?;
            report_line("cart.decrease", &arg.id, line.as_ref());
            Ok(())
        }
        CartCommand::Remove(arg) => {
            let removed = storefront.cart_service().remove(&ProductId::new(&arg.id))?;
            if !removed {
                return Err(Error::cart_item_not_found(arg.id.as_str()));
            }
            report_line("cart.remove", &arg.id, None);
            Ok(())
        }
    }
}

async fn add(storefront: &Storefront, id: &str) -> Result<()> {
    let id = ProductId::new(id);
    let list = fetched_list(storefront).await?;
    let product = list
        .product(&id)
        .ok_or_else(|| Error::product_not_found(id.as_str()))?;

    let line = storefront.cart_service().add(product)?;
    report_line("cart.add", id.as_str(), Some(&line));
    Ok(())
}

fn report_line(command: &str, id: &str, line: Option<&CartRecord>) {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "id": id,
            "line": line,
        }));
        return;
    }

    match line {
        Some(line) => output::success(&format!("{} × {}", line.name, line.quantity)),
        None => output::success(&format!("Removed {id} from cart")),
    }
}

fn list(storefront: &Storefront) -> Result<()> {
    let items = storefront.cart_service().items()?;
    let summary = CartSummary::of(&items);

    if output::is_json() {
        output::json_output(json!({
            "command": "cart.list",
            "items": items,
            "summary": summary,
        }));
        return Ok(());
    }

    output::section("Cart");
    if items.is_empty() {
        output::note("(cart is empty)");
        return Ok(());
    }
    let rows: Vec<CartRow> = items.iter().map(CartRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    output::field("Items", summary.quantity);
    output::field(
        "Total",
        output::highlight(output::price(Price::new(summary.total))),
    );
    Ok(())
}
