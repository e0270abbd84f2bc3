pub type ProductId = u64;

/// A catalog listing as the store keeps it.
///
/// Never physically removed: deletion clears `active`.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub active: bool,
    pub stock_quantity: u32,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            price: 0.0,
            description: String::new(),
            category: String::new(),
            image_url: String::new(),
            active: true,
            stock_quantity: 0,
        }
    }
}
