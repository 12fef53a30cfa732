//! Read-only product listing.

use leptos::prelude::*;

use crate::app::use_config;
use crate::components::product_table::ProductTable;
use crate::net::api::ApiClient;
use crate::state::collection::fetch_products;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = use_config();
    let products = LocalResource::new(move || {
        let api = ApiClient::new(&config);
        async move { fetch_products(&api).await }
    });

    view! {
        <div class="products-page">
            <section class="panel">
                <h2 class="panel__title">"Products"</h2>
                <Transition fallback=|| view! { <p>"Loading products..."</p> }>
                    {move || products.get().map(|items| view! { <ProductTable products=items/> })}
                </Transition>
            </section>
        </div>
    }
}
