//! Product catalog screen.

use leptos::*;

use catalog_products::{Catalog, FilterEngine};

use crate::view::{CatalogView, ProductCard, Results};

/// Root component: the catalog over the built-in seed set.
#[component]
pub fn App() -> impl IntoView {
    view! { <ProductCatalog catalog=Catalog::seed()/> }
}

/// Filter controls plus the grid of matching products.
///
/// The engine lives in a single signal; each DOM event calls exactly one
/// engine mutator, which recomputes the visible products before the signal
/// notifies the view.
#[component]
pub fn ProductCatalog(catalog: Catalog) -> impl IntoView {
    let engine = create_rw_signal(FilterEngine::new(catalog));
    let model = create_memo(move |_| engine.with(CatalogView::build));

    view! {
        <div class="catalog">
            <h1 class="catalog__title">"Product Catalog"</h1>

            <div class="catalog__filters">
                <div class="filter">
                    <label class="filter__label" for="category">"Category"</label>
                    <select
                        id="category"
                        class="filter__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            engine.update(|e| e.set_category(Some(value)));
                        }
                    >
                        {move || {
                            model.with(|m| {
                                m.category_options
                                    .iter()
                                    .map(|option| {
                                        view! {
                                            <option value=option.value.clone() prop:selected=option.selected>
                                                {option.label.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </select>
                </div>

                <div class="filter">
                    <span class="filter__label">"Brand"</span>
                    <div class="filter__options">
                        {move || {
                            model.with(|m| {
                                m.brand_toggles
                                    .iter()
                                    .map(|toggle| {
                                        let brand = toggle.brand.clone();
                                        view! {
                                            <label class="filter__option">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=toggle.checked
                                                    on:change=move |_| engine.update(|e| e.toggle_brand(&brand))
                                                />
                                                {toggle.brand.clone()}
                                            </label>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </div>
                </div>

                // Inputs stay mounted across updates so typing keeps focus.
                <div class="filter">
                    <span class="filter__label">"Price Range ($)"</span>
                    <input
                        type="number"
                        class="filter__input"
                        placeholder="Min"
                        prop:value=move || model.with(|m| m.min_price.clone())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            engine.update(|e| e.set_min_price(raw));
                        }
                    />
                    <input
                        type="number"
                        class="filter__input"
                        placeholder="Max"
                        prop:value=move || model.with(|m| m.max_price.clone())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            engine.update(|e| e.set_max_price(raw));
                        }
                    />
                </div>

                <div class="filter filter--actions">
                    <button class="filter__reset" on:click=move |_| engine.update(FilterEngine::reset)>
                        "Reset Filters"
                    </button>
                </div>
            </div>

            <div class="catalog__grid">
                {move || {
                    model.with(|m| match &m.results {
                        Results::Grid(cards) => cards
                            .iter()
                            .map(|card| view! { <ProductCardView card=card.clone()/> })
                            .collect_view(),
                        Results::Empty { message } => {
                            view! { <p class="catalog__empty">{*message}</p> }.into_view()
                        }
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn ProductCardView(card: ProductCard) -> impl IntoView {
    view! {
        <div class="card" data-product-id=card.id.to_string()>
            <h2 class="card__name">{card.name}</h2>
            <p class="card__meta">"Category: " {card.category}</p>
            <p class="card__meta">"Brand: " {card.brand}</p>
            <p class="card__price">{card.price_label}</p>
        </div>
    }
}
