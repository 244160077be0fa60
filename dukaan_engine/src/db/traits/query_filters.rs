use crate::db_types::RecordId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerQueryFilter {
    pub(crate) ids: Vec<RecordId>,
    pub(crate) email: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) limit: Option<i64>,
}

impl CustomerQueryFilter {
    pub fn with_ids<I: IntoIterator<Item = RecordId>>(mut self, ids: I) -> Self {
        self.ids.extend(ids);
        self
    }

    /// Matches customers whose email and password are both exactly equal to the given values.
    pub fn with_credentials<S: Into<String>>(mut self, email: S, password: S) -> Self {
        self.email = Some(email.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.email.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminQueryFilter {
    pub(crate) ids: Vec<RecordId>,
    pub(crate) email: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) city_contains: Option<String>,
    pub(crate) newest_first: bool,
    pub(crate) limit: Option<i64>,
}

impl AdminQueryFilter {
    pub fn with_ids<I: IntoIterator<Item = RecordId>>(mut self, ids: I) -> Self {
        self.ids.extend(ids);
        self
    }

    /// Matches admins whose email and password are both exactly equal to the given values.
    pub fn with_credentials<S: Into<String>>(mut self, email: S, password: S) -> Self {
        self.email = Some(email.into());
        self.password = Some(password.into());
        self
    }

    /// Case-insensitive substring match on the shop's city.
    pub fn with_city_like<S: Into<String>>(mut self, pattern: S) -> Self {
        self.city_contains = Some(pattern.into());
        self
    }

    pub fn newest_first(mut self) -> Self {
        self.newest_first = true;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn city_pattern(&self) -> Option<&str> {
        self.city_contains.as_deref()
    }

    pub fn is_newest_first(&self) -> bool {
        self.newest_first
    }

    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.email.is_none() && self.password.is_none() && self.city_contains.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQueryFilter {
    pub(crate) admin_id: Option<RecordId>,
    pub(crate) name_contains: Option<String>,
}

impl ProductQueryFilter {
    pub fn with_admin_id(mut self, admin_id: RecordId) -> Self {
        self.admin_id = Some(admin_id);
        self
    }

    /// Case-insensitive substring match on the product name.
    pub fn with_name_like<S: Into<String>>(mut self, pattern: S) -> Self {
        self.name_contains = Some(pattern.into());
        self
    }

    pub fn admin_id(&self) -> Option<RecordId> {
        self.admin_id
    }

    pub fn name_pattern(&self) -> Option<&str> {
        self.name_contains.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.admin_id.is_none() && self.name_contains.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderQueryFilter {
    pub(crate) admin_id: Option<RecordId>,
    pub(crate) customer_id: Option<RecordId>,
    pub(crate) newest_first: bool,
    pub(crate) limit: Option<i64>,
}

impl OrderQueryFilter {
    pub fn with_admin_id(mut self, admin_id: RecordId) -> Self {
        self.admin_id = Some(admin_id);
        self
    }

    pub fn with_customer_id(mut self, customer_id: RecordId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn newest_first(mut self) -> Self {
        self.newest_first = true;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn admin_id(&self) -> Option<RecordId> {
        self.admin_id
    }

    pub fn customer_id(&self) -> Option<RecordId> {
        self.customer_id
    }

    pub fn is_newest_first(&self) -> bool {
        self.newest_first
    }

    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.admin_id.is_none() && self.customer_id.is_none()
    }
}
