use std::collections::HashMap;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{Aggregate, AggregateRoot, Entity, Event, ProductId};

/// One product's entry in the cart.
///
/// `quantity` is never zero: a line that would drop below one is removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.product.price.value() * f64::from(self.quantity)
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product.id
    }
}

/// Aggregate root: Cart.
///
/// Ordered map from product id to line: `lines` carries display order and
/// `index` maps each id to its position, so at most one line exists per id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    index: HashMap<ProductId, usize>,
    version: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`: appends a new line or increments the
    /// existing one in place.
    pub fn add_item(&mut self, product: Product) {
        self.run(&CartCommand::AddItem(product));
    }

    /// Remove one unit of `product_id`.
    ///
    /// Returns `false` when no line matched (a no-op, not an error).
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        !self.run(&CartCommand::RemoveItem(product_id)).is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of line subtotals.
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.index.get(&product_id).map(|&pos| &self.lines[pos])
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.index.contains_key(&product_id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn run(&mut self, command: &CartCommand) -> Vec<CartEvent> {
        let events = match self.execute(command) {
            Ok(events) => events,
            Err(never) => match never {},
        };
        if events.is_empty() {
            tracing::debug!(command = command.name(), "cart command was a no-op");
        }
        events
    }

    fn remove_at(&mut self, pos: usize) {
        let removed = self.lines.remove(pos);
        self.index.remove(removed.id());
        for (i, line) in self.lines.iter().enumerate().skip(pos) {
            self.index.insert(*line.id(), i);
        }
    }
}

impl AggregateRoot for Cart {
    fn version(&self) -> u64 {
        self.version
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(Product),
    RemoveItem(ProductId),
}

impl CartCommand {
    fn name(&self) -> &'static str {
        match self {
            CartCommand::AddItem(_) => "add_item",
            CartCommand::RemoveItem(_) => "remove_item",
        }
    }
}

/// Event: a new line was appended with quantity 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAdded {
    pub product: Product,
}

/// Event: an existing line's quantity went up by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityIncremented {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Event: an existing line's quantity went down by one (still at least 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityDecremented {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Event: a line with quantity 1 was removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRemoved {
    pub product_id: ProductId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartEvent {
    LineAdded(LineAdded),
    QuantityIncremented(QuantityIncremented),
    QuantityDecremented(QuantityDecremented),
    LineRemoved(LineRemoved),
}

impl CartEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            CartEvent::LineAdded(e) => e.product.id,
            CartEvent::QuantityIncremented(e) => e.product_id,
            CartEvent::QuantityDecremented(e) => e.product_id,
            CartEvent::LineRemoved(e) => e.product_id,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::LineAdded(_) => "cart.line.added",
            CartEvent::QuantityIncremented(_) => "cart.line.incremented",
            CartEvent::QuantityDecremented(_) => "cart.line.decremented",
            CartEvent::LineRemoved(_) => "cart.line.removed",
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::LineAdded(e) => match self.index.get(&e.product.id) {
                Some(&pos) => self.lines[pos].quantity += 1,
                None => {
                    self.index.insert(e.product.id, self.lines.len());
                    self.lines.push(CartLine::new(e.product.clone()));
                }
            },
            CartEvent::QuantityIncremented(QuantityIncremented {
                product_id,
                quantity,
            })
            | CartEvent::QuantityDecremented(QuantityDecremented {
                product_id,
                quantity,
            }) => {
                if let Some(&pos) = self.index.get(product_id) {
                    self.lines[pos].quantity = (*quantity).max(1);
                }
            }
            CartEvent::LineRemoved(e) => {
                if let Some(&pos) = self.index.get(&e.product_id) {
                    self.remove_at(pos);
                }
            }
        }

        tracing::debug!(
            event_type = event.event_type(),
            product_id = %event.product_id(),
            "cart event applied"
        );

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(product) => Ok(self.handle_add(product)),
            CartCommand::RemoveItem(product_id) => Ok(self.handle_remove(*product_id)),
        }
    }
}

impl Cart {
    fn handle_add(&self, product: &Product) -> Vec<CartEvent> {
        match self.line(product.id) {
            Some(line) => vec![CartEvent::QuantityIncremented(QuantityIncremented {
                product_id: product.id,
                quantity: line.quantity + 1,
            })],
            None => vec![CartEvent::LineAdded(LineAdded {
                product: product.clone(),
            })],
        }
    }

    fn handle_remove(&self, product_id: ProductId) -> Vec<CartEvent> {
        match self.line(product_id) {
            None => Vec::new(),
            Some(line) if line.quantity > 1 => {
                vec![CartEvent::QuantityDecremented(QuantityDecremented {
                    product_id,
                    quantity: line.quantity - 1,
                })]
            }
            Some(_) => vec![CartEvent::LineRemoved(LineRemoved { product_id })],
        }
    }
}
