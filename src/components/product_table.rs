//! Read-only product table.

#[cfg(test)]
#[path = "product_table_test.rs"]
mod product_table_test;

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::currency::format_usd;

pub const EMPTY_PRODUCTS_MESSAGE: &str = "No products found. Add some products to get started.";

fn stock_label(in_stock: bool) -> &'static str {
    if in_stock { "In Stock" } else { "Out of Stock" }
}

fn stock_badge_class(in_stock: bool) -> &'static str {
    if in_stock { "stock-badge stock-badge--in" } else { "stock-badge stock-badge--out" }
}

/// Products as last fetched. The Edit/Delete labels are placeholders; no
/// product mutation is wired.
#[component]
pub fn ProductTable(products: Vec<Product>) -> impl IntoView {
    if products.is_empty() {
        return view! { <p class="product-table__empty">{EMPTY_PRODUCTS_MESSAGE}</p> }.into_any();
    }

    let rows = products
        .into_iter()
        .enumerate()
        .map(|(index, product)| {
            view! {
                <tr class="product-table__row" class:product-table__row--odd=index % 2 == 1>
                    <td>{product.id}</td>
                    <td class="product-table__name">{product.name}</td>
                    <td>{format_usd(product.price)}</td>
                    <td>
                        <span class=stock_badge_class(product.in_stock)>{stock_label(product.in_stock)}</span>
                    </td>
                    <td class="product-table__actions">
                        <span class="product-table__edit">"Edit"</span>
                        <span class="product-table__delete">"Delete"</span>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="product-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Price"</th>
                    <th>"In Stock"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
