//! Handlers for `favorite`, `unfavorite` and `favorites`.

use std::sync::Arc;

use serde_json::json;

use super::products::{fetched_list, print_table};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::notifier::ChannelNotifier;
use crate::domain::ProductId;
use crate::error::{Error, Result};
use crate::infrastructure::Storefront;
use crate::port::outbound::notifier::Event;

/// Execute `favorite <id>` or `unfavorite <id>`.
///
/// The change travels over the bus like a tap in the product grid; the
/// product list drains its channel and persists it.
pub async fn execute_set(storefront: &Storefront, id: &str, is_favorite: bool) -> Result<()> {
    let id = ProductId::new(id);
    let mut list = fetched_list(storefront).await?;
    if list.product(&id).is_none() {
        return Err(Error::product_not_found(id.as_str()));
    }

    let (notifier, mut events) = ChannelNotifier::new();
    let _subscription = storefront.bus().subscribe(Arc::new(notifier));
    storefront.bus().publish(Event::FavoritesChanged {
        product_id: id.clone(),
        is_favorite,
    });
    while let Ok(event) = events.try_recv() {
        list.apply(&event);
    }

    if output::is_json() {
        output::json_output(json!({
            "command": if is_favorite { "favorite" } else { "unfavorite" },
            "id": id,
            "is_favorite": is_favorite,
        }));
        return Ok(());
    }

    let name = list.product(&id).map_or(id.as_str(), |p| p.name.as_str());
    if is_favorite {
        output::success(&format!("Added {name} to favorites"));
    } else {
        output::success(&format!("Removed {name} from favorites"));
    }
    Ok(())
}

/// Execute `favorites`.
pub fn execute_list(storefront: &Storefront) -> Result<()> {
    let mut favorites = storefront.favorite_list();
    favorites.load();

    if output::is_json() {
        output::json_output(json!({
            "command": "favorites",
            "products": favorites.products(),
        }));
        return Ok(());
    }

    output::section("Favorites");
    if favorites.is_empty() {
        output::note("(no favorites)");
        return Ok(());
    }
    print_table(favorites.products());
    Ok(())
}
