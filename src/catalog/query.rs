//! Sort and filter pipeline over the loaded catalogue.
//!
//! A view is recomputed from scratch whenever a control changes. The view
//! holds indices into the store's product slice, so recomputation never
//! copies or mutates products.
//!
//! Sorting is driven by the control that triggered the recomputation: a
//! name-sort change orders by name, a price-sort change orders by price,
//! and a category change only filters. [`SortPolicy::Composed`] applies
//! every configured criterion instead.

use std::cmp::Ordering;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::error::CatalogError;
use super::models::Product;

/// Direction of a sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// The control is not set; no ordering is applied.
    #[default]
    Unset,
    /// Smallest or alphabetically first item first.
    Ascending,
    /// Largest or alphabetically last item first.
    Descending,
}

impl SortDirection {
    /// Returns a short label for display in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "-",
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Returns the next direction in the `Unset → asc → desc` cycle.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Unset => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Unset,
        }
    }

    /// Returns true unless the direction is [`SortDirection::Unset`].
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Descending => ordering.reverse(),
            Self::Unset | Self::Ascending => ordering,
        }
    }
}

impl FromStr for SortDirection {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "-" | "none" | "unset" => Ok(Self::Unset),
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(CatalogError::Configuration {
                message: format!("unknown sort direction '{other}' (expected asc, desc, or none)"),
            }),
        }
    }
}

/// Current control selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Name sort control.
    pub name_sort: SortDirection,
    /// Price sort control.
    pub price_sort: SortDirection,
    /// Selected category; `None` shows every category.
    pub category: Option<String>,
}

impl ViewState {
    /// Returns the selected category, treating an empty string as "all".
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|label| !label.is_empty())
    }

    /// Returns a human-readable category label for display in the UI.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.selected_category().unwrap_or("All")
    }
}

/// The control event that triggered a view recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChange {
    /// First run after the catalogue loads.
    Initial,
    /// The name sort control changed.
    NameSort,
    /// The price sort control changed.
    PriceSort,
    /// The category control changed.
    Category,
}

/// How sort criteria combine across control events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// Only the criterion of the triggering control is applied.
    #[default]
    TriggeredOnly,
    /// Every set criterion is applied: name first, then a stable price sort.
    Composed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveSorts {
    name: bool,
    price: bool,
}

impl ActiveSorts {
    const fn select(change: ViewChange, policy: SortPolicy) -> Self {
        match (policy, change) {
            (SortPolicy::Composed, _) | (_, ViewChange::Initial) => Self {
                name: true,
                price: true,
            },
            (SortPolicy::TriggeredOnly, ViewChange::NameSort) => Self {
                name: true,
                price: false,
            },
            (SortPolicy::TriggeredOnly, ViewChange::PriceSort) => Self {
                name: false,
                price: true,
            },
            (SortPolicy::TriggeredOnly, ViewChange::Category) => Self {
                name: false,
                price: false,
            },
        }
    }
}

/// An ordered, filtered projection of the catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductView {
    indices: Vec<usize>,
}

impl ProductView {
    /// Computes the view of `products` for `state`.
    ///
    /// Sorting uses stable sort semantics, so equal keys keep their prior
    /// relative order. Filtering runs after sorting.
    #[must_use]
    pub fn compute(
        products: &[Product],
        state: &ViewState,
        change: ViewChange,
        policy: SortPolicy,
    ) -> Self {
        let active = ActiveSorts::select(change, policy);
        let mut indices: Vec<usize> = (0..products.len()).collect();

        if active.name && state.name_sort.is_set() {
            indices.sort_by(|&left, &right| {
                compare_by(products, left, right, |a, b| locale_compare(&a.name, &b.name))
                    .map_or(Ordering::Equal, |ordering| state.name_sort.apply(ordering))
            });
        }

        if active.price && state.price_sort.is_set() {
            indices.sort_by(|&left, &right| {
                compare_by(products, left, right, |a, b| a.price.total_cmp(&b.price))
                    .map_or(Ordering::Equal, |ordering| state.price_sort.apply(ordering))
            });
        }

        if let Some(category) = state.selected_category() {
            indices.retain(|&index| {
                products
                    .get(index)
                    .is_some_and(|product| product.category == category)
            });
        }

        tracing::debug!(
            "computed view of {} products ({change:?}, {policy:?})",
            indices.len()
        );
        Self { indices }
    }

    /// Returns the store indices in view order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of products in the view.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true when no product matches the current controls.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolves the view against the product slice it was computed from.
    pub fn resolve<'a>(&'a self, products: &'a [Product]) -> impl Iterator<Item = &'a Product> {
        self.indices.iter().filter_map(|&index| products.get(index))
    }
}

/// Computes the ordered, filtered products for `state`.
///
/// # Examples
///
/// ```
/// use storefront::catalog::{
///     Product, ProductId, SortDirection, SortPolicy, StockStatus, ViewChange, ViewState,
///     compute_view,
/// };
///
/// let product = |id: &str, name: &str, price: f64| Product {
///     id: ProductId::new(id),
///     image: String::new(),
///     name: name.to_owned(),
///     price,
///     category: "Fruit".to_owned(),
///     stock_status: StockStatus::InStock,
/// };
/// let products = vec![product("1", "Banana", 50.0), product("2", "Apple", 100.0)];
/// let state = ViewState {
///     name_sort: SortDirection::Ascending,
///     ..ViewState::default()
/// };
///
/// let view = compute_view(&products, &state, ViewChange::NameSort, SortPolicy::default());
/// let names: Vec<&str> = view.iter().map(|product| product.name.as_str()).collect();
/// assert_eq!(names, ["Apple", "Banana"]);
/// ```
#[must_use]
pub fn compute_view<'a>(
    products: &'a [Product],
    state: &ViewState,
    change: ViewChange,
    policy: SortPolicy,
) -> Vec<&'a Product> {
    let view = ProductView::compute(products, state, change, policy);
    view.indices
        .iter()
        .filter_map(|&index| products.get(index))
        .collect()
}

fn compare_by<F>(products: &[Product], left: usize, right: usize, compare: F) -> Option<Ordering>
where
    F: FnOnce(&Product, &Product) -> Ordering,
{
    Some(compare(products.get(left)?, products.get(right)?))
}

/// Compares names the way a user expects a sorted list to read.
///
/// Names compare ignoring accents and case first, so `Émile` sorts beside
/// `Emile`. Among names equal on that key, unaccented sorts before accented
/// and lowercase before uppercase; any remaining tie falls back to code point
/// order.
#[must_use]
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    base_letters(left)
        .cmp(base_letters(right))
        .then_with(|| case_folded(left).cmp(case_folded(right)))
        .then_with(|| {
            left.chars()
                .map(char::is_uppercase)
                .cmp(right.chars().map(char::is_uppercase))
        })
        .then_with(|| left.cmp(right))
}

/// Lowercased characters with combining marks removed after decomposition.
fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|character| !is_combining_mark(*character))
        .flat_map(char::to_lowercase)
}

fn case_folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalog::test_support::{create_products, product};

    #[fixture]
    fn fruit() -> Vec<Product> {
        vec![
            product(1, "banana", 50.0, "Fruit"),
            product(2, "Cherry", 20.0, "Berries"),
            product(3, "apple", 100.0, "Fruit"),
            product(4, "Apple", 75.0, "Fruit"),
            product(5, "date", 20.0, "Dried"),
        ]
    }

    fn state(
        name_sort: SortDirection,
        price_sort: SortDirection,
        category: Option<&str>,
    ) -> ViewState {
        ViewState {
            name_sort,
            price_sort,
            category: category.map(ToOwned::to_owned),
        }
    }

    fn names_for(products: &[Product], view_state: &ViewState, change: ViewChange) -> Vec<String> {
        compute_view(products, view_state, change, SortPolicy::default())
            .iter()
            .map(|product| product.name.clone())
            .collect()
    }

    #[rstest]
    fn name_sort_ascending_is_case_insensitive(fruit: Vec<Product>) {
        let view_state = state(SortDirection::Ascending, SortDirection::Unset, None);

        let names = names_for(&fruit, &view_state, ViewChange::NameSort);

        assert_eq!(names, ["apple", "Apple", "banana", "Cherry", "date"]);
    }

    #[test]
    fn accented_names_sort_beside_their_base_letter() {
        let products = vec![
            product(1, "Zoe Lamp", 30.0, "Home"),
            product(2, "Émile Chair", 80.0, "Home"),
            product(3, "Apple", 10.0, "Home"),
        ];
        let view_state = state(SortDirection::Ascending, SortDirection::Unset, None);

        let names = names_for(&products, &view_state, ViewChange::NameSort);

        assert_eq!(names, ["Apple", "Émile Chair", "Zoe Lamp"]);
    }

    #[rstest]
    #[case::accent_ignored_before_later_letters("Émile", "Eric", Ordering::Less)]
    #[case::unaccented_first_on_ties("emile", "émile", Ordering::Less)]
    #[case::lowercase_first_on_ties("apple", "Apple", Ordering::Less)]
    #[case::identical("Crème", "Crème", Ordering::Equal)]
    fn locale_compare_orders_by_base_letters_then_tie_breaks(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(locale_compare(left, right), expected);
    }

    #[rstest]
    fn name_sort_descending_reverses_distinct_names(fruit: Vec<Product>) {
        let ascending = state(SortDirection::Ascending, SortDirection::Unset, None);
        let descending = state(SortDirection::Descending, SortDirection::Unset, None);

        let mut up = names_for(&fruit, &ascending, ViewChange::NameSort);
        let down = names_for(&fruit, &descending, ViewChange::NameSort);
        up.reverse();

        assert_eq!(up, down);
    }

    #[rstest]
    fn price_sort_is_stable_for_equal_prices(fruit: Vec<Product>) {
        let view_state = state(SortDirection::Unset, SortDirection::Ascending, None);

        let names = names_for(&fruit, &view_state, ViewChange::PriceSort);

        assert_eq!(names, ["Cherry", "date", "banana", "Apple", "apple"]);
    }

    #[rstest]
    fn price_sort_descending_orders_largest_first(fruit: Vec<Product>) {
        let view_state = state(SortDirection::Unset, SortDirection::Descending, None);

        let view = compute_view(
            &fruit,
            &view_state,
            ViewChange::PriceSort,
            SortPolicy::default(),
        );

        let prices: Vec<f64> = view.iter().map(|product| product.price).collect();
        assert_eq!(prices, [100.0, 75.0, 50.0, 20.0, 20.0]);
    }

    #[rstest]
    fn only_the_triggering_criterion_is_applied(fruit: Vec<Product>) {
        let view_state = state(SortDirection::Descending, SortDirection::Ascending, None);

        let by_name = names_for(&fruit, &view_state, ViewChange::NameSort);
        let by_price = names_for(&fruit, &view_state, ViewChange::PriceSort);

        assert_eq!(by_name, ["date", "Cherry", "banana", "Apple", "apple"]);
        assert_eq!(by_price, ["Cherry", "date", "banana", "Apple", "apple"]);
    }

    #[rstest]
    fn category_change_filters_without_sorting(fruit: Vec<Product>) {
        let view_state = state(SortDirection::Ascending, SortDirection::Unset, Some("Fruit"));

        let names = names_for(&fruit, &view_state, ViewChange::Category);

        assert_eq!(names, ["banana", "apple", "Apple"]);
    }

    #[rstest]
    fn sort_changes_keep_the_selected_category(fruit: Vec<Product>) {
        let view_state = state(SortDirection::Ascending, SortDirection::Unset, Some("Fruit"));

        let names = names_for(&fruit, &view_state, ViewChange::NameSort);

        assert_eq!(names, ["apple", "Apple", "banana"]);
    }

    #[rstest]
    #[case::none(None)]
    #[case::empty(Some(""))]
    fn missing_category_selection_keeps_everything(
        fruit: Vec<Product>,
        #[case] category: Option<&str>,
    ) {
        let view_state = state(SortDirection::Unset, SortDirection::Unset, category);

        let names = names_for(&fruit, &view_state, ViewChange::Category);

        assert_eq!(names.len(), fruit.len());
    }

    #[rstest]
    fn composed_policy_sorts_by_price_then_name(fruit: Vec<Product>) {
        let view_state = state(SortDirection::Ascending, SortDirection::Ascending, None);

        let view = compute_view(
            &fruit,
            &view_state,
            ViewChange::Category,
            SortPolicy::Composed,
        );

        let names: Vec<&str> = view.iter().map(|product| product.name.as_str()).collect();
        assert_eq!(names, ["Cherry", "date", "banana", "Apple", "apple"]);
    }

    #[rstest]
    fn initial_run_applies_configured_criteria(fruit: Vec<Product>) {
        let view_state = state(SortDirection::Descending, SortDirection::Unset, None);

        let names = names_for(&fruit, &view_state, ViewChange::Initial);

        assert_eq!(names, ["date", "Cherry", "banana", "Apple", "apple"]);
    }

    #[rstest]
    fn source_collection_is_not_mutated(fruit: Vec<Product>) {
        let original = fruit.clone();
        let view_state = state(SortDirection::Descending, SortDirection::Unset, None);

        let view = ProductView::compute(
            &fruit,
            &view_state,
            ViewChange::NameSort,
            SortPolicy::default(),
        );

        assert_eq!(view.indices(), [4, 1, 0, 3, 2]);
        assert_eq!(fruit, original);
    }

    #[test]
    fn filtering_retains_exactly_the_matching_subset_in_sorted_order() {
        let products = create_products(10);
        let view_state = state(SortDirection::Unset, SortDirection::Descending, Some("Games"));

        let view = compute_view(
            &products,
            &view_state,
            ViewChange::PriceSort,
            SortPolicy::default(),
        );

        let mut expected: Vec<&Product> = products
            .iter()
            .filter(|product| product.category == "Games")
            .collect();
        expected.reverse();
        assert_eq!(view, expected);
    }

    #[rstest]
    #[case::asc("asc", SortDirection::Ascending)]
    #[case::descending_word(" Descending ", SortDirection::Descending)]
    #[case::none("none", SortDirection::Unset)]
    #[case::empty("", SortDirection::Unset)]
    fn sort_directions_parse(#[case] raw: &str, #[case] expected: SortDirection) {
        assert_eq!(raw.parse::<SortDirection>(), Ok(expected));
    }

    #[test]
    fn unknown_sort_directions_are_configuration_errors() {
        let result = "sideways".parse::<SortDirection>();

        assert!(matches!(result, Err(CatalogError::Configuration { .. })));
    }

    #[test]
    fn sort_direction_cycles_through_all_states() {
        let cycled = SortDirection::Unset.cycle();
        assert_eq!(cycled, SortDirection::Ascending);
        assert_eq!(cycled.cycle(), SortDirection::Descending);
        assert_eq!(cycled.cycle().cycle(), SortDirection::Unset);
    }
}
