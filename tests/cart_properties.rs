use inventory_pos::cart::{Cart, CartError};
use inventory_pos::model::{Product, ProductId};
use proptest::prelude::*;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
enum CartOp {
    Add(usize),
    Update(usize, u32),
    Remove(usize),
}

fn catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Espresso Beans", Decimal::new(1299, 2), 4),
        Product::new(2, "Oat Milk", Decimal::new(399, 2), 1),
        Product::new(3, "Paper Cups", Decimal::new(10, 2), 12),
        Product::new(4, "Sold Out Syrup", Decimal::new(650, 2), 0),
    ]
}

fn op_strategy() -> impl Strategy<Value = Vec<CartOp>> {
    proptest::collection::vec(
        prop_oneof![
            (0..4usize).prop_map(CartOp::Add),
            (0..4usize, 0..15u32).prop_map(|(i, q)| CartOp::Update(i, q)),
            (0..4usize).prop_map(CartOp::Remove),
        ],
        0..40,
    )
}

proptest! {
    /// Quantities stay within [1, ceiling], product ids stay unique, and the
    /// total is always the exact sum of line subtotals.
    #[test]
    fn cart_invariants_hold(ops in op_strategy()) {
        let products = catalog();
        let mut cart = Cart::new();

        for op in ops {
            let before = cart.clone();
            let result = match op {
                CartOp::Add(i) => cart.add_item(&products[i]).map(|_| ()),
                CartOp::Update(i, q) => cart.update_quantity(products[i].id, q),
                CartOp::Remove(i) => {
                    cart.remove_item(products[i].id);
                    Ok(())
                }
            };
            if let Err(e) = result {
                // Rejected operations leave the cart untouched.
                prop_assert_eq!(&cart, &before);
                prop_assert!(e.is_validation(), "unexpected error {:?}", e);
            }

            let mut seen: Vec<ProductId> = Vec::new();
            let mut expected_total = Decimal::ZERO;
            for line in cart.lines() {
                prop_assert!(line.quantity >= 1);
                prop_assert!(line.quantity <= line.ceiling);
                prop_assert!(!seen.contains(&line.product_id));
                seen.push(line.product_id);
                expected_total += line.price_at_sale * Decimal::from(line.quantity);
            }
            prop_assert_eq!(cart.total(), expected_total);
            prop_assert!(cart.line(ProductId(4)).is_none());
        }
    }

    #[test]
    fn sale_request_matches_cart(ops in op_strategy(), name in "[ a-zA-Z]{0,12}") {
        let products = catalog();
        let mut cart = Cart::new();
        for op in ops {
            if let CartOp::Add(i) = op {
                let _ = cart.add_item(&products[i]);
            }
        }

        match cart.to_sale_request(Some(name.as_str())) {
            Ok(request) => {
                prop_assert_eq!(request.items.len(), cart.len());
                prop_assert_eq!(request.total(), cart.total());
                prop_assert_eq!(request.customer_name.is_none(), name.trim().is_empty());
            }
            Err(e) => {
                prop_assert_eq!(e, CartError::EmptyCart);
                prop_assert!(cart.is_empty());
            }
        }
    }
}
