use uuid::Uuid;

use crate::models::{Product, ProductChanges};

/// Insertion-ordered product collection held in process memory.
///
/// Not synchronized; `AppState` wraps it in a lock.
#[derive(Debug, Default)]
pub struct ProductRepository {
    products: Vec<Product>,
}

impl ProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn create(&mut self, changes: ProductChanges, product_image: String) -> Product {
        let product = Product {
            id: self.next_id(),
            name: changes.name,
            details: changes.details,
            price: changes.price,
            product_image,
        };

        self.products.push(product.clone());
        product
    }

    /// Overwrites name, details and price; the image only when a new one
    /// was stored.
    pub fn update(
        &mut self,
        id: &str,
        changes: ProductChanges,
        product_image: Option<String>,
    ) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;

        product.name = changes.name;
        product.details = changes.details;
        product.price = changes.price;
        if let Some(image) = product_image {
            product.product_image = image;
        }

        Some(product.clone())
    }

    /// Removes the first product with `id` and returns what remains.
    pub fn delete(&mut self, id: &str) -> Option<&[Product]> {
        let index = self.products.iter().position(|p| p.id == id)?;
        self.products.remove(index);

        Some(&self.products)
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}
