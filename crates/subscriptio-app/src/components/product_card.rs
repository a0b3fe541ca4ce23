use leptos::prelude::*;
use subscriptio_data::models::SubscriptionProduct;

#[component]
pub fn ProductCard(product: SubscriptionProduct) -> impl IntoView {
    let href = product.href();
    let price = product.price_label();

    view! {
        <div class="product-card">
            {match product.image {
                Some(src) => view! {
                    <img class="product-image" src=src alt=product.name.clone()/>
                }.into_any(),
                None => view! {
                    <div class="product-image placeholder">
                        <span>"📦"</span>
                    </div>
                }.into_any(),
            }}
            <div class="product-info">
                <h3>{product.name}</h3>
                {product.description.map(|d| view! { <p class="description">{d}</p> })}
                {price.map(|p| view! { <p class="price">{p}</p> })}
                <a href=href class="btn">"View Details"</a>
            </div>
        </div>
    }
}

/// Cards for a list of products, or a short notice when there are none.
#[component]
pub fn ProductGrid(products: Vec<SubscriptionProduct>) -> impl IntoView {
    if products.is_empty() {
        return view! { <p class="empty">"No subscriptions available right now."</p> }.into_any();
    }

    view! {
        <div class="products">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product/> })
                .collect_view()}
        </div>
    }
    .into_any()
}
