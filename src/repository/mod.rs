mod product_repository;
mod seed;

pub use product_repository::ProductRepository;
pub use seed::seed_products;
