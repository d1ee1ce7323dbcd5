//! The cart itself: a pure, synchronous reducer.
//!
//! [`Cart`] holds no channels and does no I/O; the engine in
//! [`actor`](crate::cart::actor) owns one and feeds it requests in order.

use crate::cart::CartError;
use crate::model::{display_amount, Product, ProductId, SaleItem, SaleRequest};
use rust_decimal::Decimal;
use serde::Serialize;

/// One product in the cart.
///
/// Price and stock ceiling are captured when the product is first added and
/// never re-read from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price_at_sale: Decimal,
    pub quantity: u32,
    /// Stock on hand at capture time; `quantity` never exceeds it.
    pub ceiling: u32,
}

impl CartLine {
    fn capture(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price_at_sale: product.price,
            quantity: 1,
            ceiling: product.stock_quantity,
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.price_at_sale * Decimal::from(self.quantity)
    }

    fn to_sale_item(&self) -> SaleItem {
        SaleItem {
            product_id: self.product_id,
            quantity: self.quantity,
            price_at_sale: self.price_at_sale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Empty,
    Populated,
}

/// Ordered cart lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`, creating the line on first add.
    ///
    /// Returns the line's new quantity.
    pub fn add_item(&mut self, product: &Product) -> Result<u32, CartError> {
        if let Some(line) = self.line_mut(product.id) {
            if line.quantity >= line.ceiling {
                return Err(CartError::InsufficientStock {
                    product_id: line.product_id,
                    requested: line.quantity + 1,
                    ceiling: line.ceiling,
                });
            }
            line.quantity += 1;
            return Ok(line.quantity);
        }

        if !product.is_in_stock() {
            return Err(CartError::OutOfStock {
                product_id: product.id,
                name: product.name.clone(),
            });
        }
        self.lines.push(CartLine::capture(product));
        Ok(1)
    }

    /// Sets a line's quantity.
    ///
    /// Quantities below one are ignored; use [`remove_item`](Cart::remove_item)
    /// to drop a line.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity < 1 {
            return Ok(());
        }
        let line = self
            .line_mut(product_id)
            .ok_or(CartError::NotInCart(product_id))?;
        if quantity > line.ceiling {
            return Err(CartError::InsufficientStock {
                product_id,
                requested: quantity,
                ceiling: line.ceiling,
            });
        }
        line.quantity = quantity;
        Ok(())
    }

    /// Drops the line for `product_id`, if any.
    pub fn remove_item(&mut self, product_id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product_id == product_id)?;
        Some(self.lines.remove(index))
    }

    /// Exact sum of line subtotals.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn display_total(&self) -> String {
        display_amount(self.total())
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn state(&self) -> CartState {
        if self.is_empty() {
            CartState::Empty
        } else {
            CartState::Populated
        }
    }

    /// Builds the checkout payload without modifying the cart.
    pub fn to_sale_request(&self, customer_name: Option<&str>) -> Result<SaleRequest, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }
        let items = self.lines.iter().map(CartLine::to_sale_item).collect();
        Ok(SaleRequest::new(items, customer_name))
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}
