//! Handlers for `products` and `show`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::ProductList;
use crate::domain::{Product, ProductId};
use crate::error::{Error, Result};
use crate::infrastructure::Storefront;

#[derive(Tabled)]
pub(crate) struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Fav")]
    favorite: &'static str,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: output::price(product.price),
            favorite: if product.is_favorite { "★" } else { "" },
        }
    }
}

/// Render a product list as a table.
pub(crate) fn print_table(products: &[Product]) {
    let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
    output::lines(&Table::new(rows).to_string());
}

/// Fetch the catalog into a fresh list.
pub(crate) async fn fetched_list(storefront: &Storefront) -> Result<ProductList> {
    let mut list = storefront.product_list();
    list.fetch_products().await?;
    Ok(list)
}

/// Execute `products`.
pub async fn execute_list(storefront: &Storefront, search: Option<&str>) -> Result<()> {
    let mut list = fetched_list(storefront).await?;
    if let Some(search) = search {
        list.filter_products(search);
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "products",
            "search": list.search_text(),
            "products": list.products(),
        }));
        return Ok(());
    }

    output::section("Products");
    if list.products().is_empty() {
        output::note("(no products)");
        return Ok(());
    }
    print_table(list.products());
    output::note(&format!(
        "{} of {} products",
        list.products().len(),
        list.all_products().len()
    ));
    Ok(())
}

/// Execute `show <id>`.
pub async fn execute_show(storefront: &Storefront, id: &str) -> Result<()> {
    let id = ProductId::new(id);
    let list = fetched_list(storefront).await?;
    let product = list
        .product(&id)
        .ok_or_else(|| Error::product_not_found(id.as_str()))?;
    let in_cart = storefront
        .cart_store()
        .cart_item(&id)?
        .map_or(0, |line| line.quantity);

    if output::is_json() {
        output::json_output(json!({
            "command": "show",
            "product": product,
            "in_cart": in_cart,
        }));
        return Ok(());
    }

    output::section(&product.name);
    output::field("ID", &product.id);
    output::field("Price", output::highlight(output::price(product.price)));
    if let Some(category) = &product.category {
        output::field("Category", category);
    }
    output::field("Favorite", if product.is_favorite { "yes" } else { "no" });
    output::field("In cart", in_cart);
    output::field("Image", output::muted(&product.image));
    output::section("Description");
    output::lines(&product.description);
    Ok(())
}
