use std::fmt::Debug;

use log::*;

use super::{
    errors::MarketplaceError,
    repositories::{AdminRepository, ProductRepository},
    search_objects::ShopProducts,
};
use crate::{
    db::traits::{AdminManagement, AdminQueryFilter, ProductManagement, ProductQueryFilter},
    db_types::Admin,
};

pub const RECENT_SHOPS_LIMIT: i64 = 3;

/// `SearchApi` lets customers find shops by city and products by name and city.
///
/// Patterns are matched as case-insensitive substrings. A missing pattern matches everything.
pub struct SearchApi<B> {
    admins: AdminRepository<B>,
    products: ProductRepository<B>,
}

impl<B> Debug for SearchApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchApi")
    }
}

impl<B: Clone> SearchApi<B> {
    pub fn new(db: B) -> Self {
        Self { admins: AdminRepository::new(db.clone()), products: ProductRepository::new(db) }
    }
}

/// A city search only ever matches shops that have a city. A missing pattern is the empty pattern.
fn city_filter(city: Option<&str>) -> AdminQueryFilter {
    AdminQueryFilter::default().with_city_like(city.unwrap_or_default())
}

impl<B> SearchApi<B>
where B: AdminManagement + ProductManagement
{
    /// Shops whose city contains `city`. Full admin records are returned.
    pub async fn search_shops(&self, city: Option<&str>) -> Result<Vec<Admin>, MarketplaceError> {
        let shops = self.admins.find_many(city_filter(city)).await?;
        debug!("🔄️🔍️ {} shops found for city {city:?}", shops.len());
        Ok(shops)
    }

    pub async fn all_shops(&self) -> Result<Vec<Admin>, MarketplaceError> {
        self.admins.find_many(AdminQueryFilter::default()).await
    }

    /// The newest shops to join, newest first.
    pub async fn recent_shops(&self) -> Result<Vec<Admin>, MarketplaceError> {
        self.admins.find_many(AdminQueryFilter::default().newest_first().with_limit(RECENT_SHOPS_LIMIT)).await
    }

    /// Finds products whose name contains `product`, sold by shops whose city contains `city`.
    ///
    /// Results are grouped by shop, in shop creation order. Shops in a matching city that have no matching products
    /// are left out. Each shop's products are fetched with a separate query, one shop at a time.
    pub async fn search_products(
        &self,
        product: Option<&str>,
        city: Option<&str>,
    ) -> Result<Vec<ShopProducts>, MarketplaceError> {
        let shops = self.admins.find_many(city_filter(city)).await?;
        trace!("🔄️🔍️ Searching {} shops for products matching {product:?}", shops.len());
        let mut results = Vec::new();
        for shop in shops {
            let mut query = ProductQueryFilter::default().with_admin_id(shop.id);
            if let Some(product) = product {
                query = query.with_name_like(product);
            }
            let products = self.products.find_many(query).await?;
            if products.is_empty() {
                continue;
            }
            results.push(ShopProducts { shop_name: shop.shop_name, city: shop.city, admin_id: shop.id, products });
        }
        debug!("🔄️🔍️ {} shops have products matching {product:?} in {city:?}", results.len());
        Ok(results)
    }
}
