use storefront_catalog::{Price, Product};
use storefront_core::ProductId;
use storefront_shell::{Applied, Command, Session, UiEvent};
use storefront_view::SortOrder;

fn product(id: u64, price: f64, category: &str, title: &str) -> Product {
    Product::new(id, title, category, Price::new(price).unwrap())
}

fn fake_store_session() -> Session {
    let mut session = Session::new();
    session.resolve_catalog(Ok(vec![
        product(1, 109.95, "men's clothing", "Fjallraven - Foldsack No. 1 Backpack"),
        product(2, 22.3, "men's clothing", "Mens Casual Premium Slim Fit T-Shirts"),
        product(5, 695.0, "jewelery", "John Hardy Women's Legends Naga Bracelet"),
        product(8, 10.99, "jewelery", "Pierced Owl Rose Gold Plated Earrings"),
        product(9, 64.0, "electronics", "WD 2TB Elements Portable External Hard Drive"),
        product(18, 9.85, "women's clothing", "MBJ Women's Solid Short Sleeve Boat Neck V"),
    ]));
    session
}

fn run(session: &mut Session, script: &[&str]) -> Vec<Applied> {
    script
        .iter()
        .map(|line| match line.parse::<Command>().unwrap() {
            Command::Apply(event) => session.dispatch(event),
            other => panic!("script line {line:?} is not an event: {other:?}"),
        })
        .collect()
}

fn view_ids(session: &Session) -> Vec<u64> {
    session.view().iter().map(|p| p.id.get()).collect()
}

#[test]
fn browse_filter_and_fill_cart() {
    let mut session = fake_store_session();
    assert_eq!(view_ids(&session), vec![18, 8, 2, 9, 1, 5]);

    let applied = run(
        &mut session,
        &["search women's", "sort price-high-to-low", "max 700", "min 5"],
    );
    assert!(applied.iter().all(|a| *a == Applied::View));
    assert_eq!(view_ids(&session), vec![5, 18]);

    run(&mut session, &["category jewelery"]);
    assert_eq!(view_ids(&session), vec![5]);

    let applied = run(&mut session, &["add 5", "add 5", "add 18", "remove 5", "remove 99"]);
    assert_eq!(
        applied,
        vec![Applied::Cart, Applied::Cart, Applied::Cart, Applied::Cart, Applied::Ignored]
    );
    assert_eq!(session.total_item_count(), 2);

    let lines: Vec<(u64, u32)> = session
        .cart_lines()
        .iter()
        .map(|l| (l.product_id().get(), l.quantity()))
        .collect();
    assert_eq!(lines, vec![(5, 1), (18, 1)]);
}

#[test]
fn criteria_can_change_in_any_order() {
    let mut session = fake_store_session();
    session.dispatch(UiEvent::SetSort(SortOrder::Unsorted));
    assert_eq!(view_ids(&session), vec![1, 2, 5, 8, 9, 18]);

    run(&mut session, &["category all", "max none", "search", "sort asc"]);
    assert_eq!(view_ids(&session), vec![18, 8, 2, 9, 1, 5]);

    run(&mut session, &["min 1000"]);
    assert!(session.view().is_empty());
}

#[test]
fn cart_survives_filter_changes() {
    let mut session = fake_store_session();
    session.dispatch(UiEvent::AddToCart(ProductId(9)));
    run(&mut session, &["search nothing-matches"]);

    assert!(session.view().is_empty());
    assert_eq!(session.total_item_count(), 1);
    assert!(session.cart().contains(ProductId(9)));
}
