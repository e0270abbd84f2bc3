use crate::actor_framework::{Entity, SoftDelete};
use crate::domain::{Product, ProductId};
use super::dtos::{ProductRequest, ProductResponse};

impl Entity for Product {
    type Id = ProductId;
    type Request = ProductRequest;
    type Response = ProductResponse;

    fn id(&self) -> Option<ProductId> { self.id }

    fn assign_id(&mut self, id: ProductId) { self.id = Some(id); }

    /// Builds an unsaved product. `active` keeps its default and the
    /// identifier is left for the store.
    fn from_request(request: ProductRequest) -> Self {
        let mut product = Product::default();
        product.apply_request(request);
        product
    }

    /// Overwrites every caller-owned field.
    ///
    /// # Fields Updated
    /// - `name`, `price`, `description`, `category`, `image_url`, `stock_quantity`
    ///
    /// `id` and `active` are never touched.
    fn apply_request(&mut self, request: ProductRequest) {
        self.name = request.name;
        self.price = request.price;
        self.description = request.description;
        self.category = request.category;
        self.image_url = request.image_url;
        self.stock_quantity = request.stock_quantity;
    }

    fn to_response(&self) -> ProductResponse {
        ProductResponse {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
            category: self.category.clone(),
            image_url: self.image_url.clone(),
            active: self.active,
            stock_quantity: self.stock_quantity,
        }
    }

    fn is_active(&self) -> bool { self.active }

    /// Case-insensitive substring match over name, description and category.
    fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        [&self.name, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&keyword))
    }
}

impl SoftDelete for Product {
    fn deactivate(&mut self) { self.active = false; }
}
