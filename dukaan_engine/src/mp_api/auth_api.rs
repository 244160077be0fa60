use std::fmt::Debug;

use log::*;
use serde::{Deserialize, Serialize};

use super::{
    errors::MarketplaceError,
    repositories::{AdminRepository, CustomerRepository},
};
use crate::{
    db::traits::{AdminManagement, AdminQueryFilter, CustomerManagement, CustomerQueryFilter},
    db_types::{NewAdmin, NewCustomer, RecordId, UserType},
    helpers::de::opt_string_or_number,
};

/// The outcome of a login attempt.
///
/// Bad credentials are not an error: they are a normal [`LoginResult::Rejected`] outcome, distinct from a store
/// failure.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginResult {
    Authenticated { user_id: RecordId, role: UserType },
    Rejected { message: String },
}

/// Every field either kind of account may supply at signup. Fields that do not apply to the chosen user type are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: Option<String>,
    pub admin_name: Option<String>,
    pub shop_name: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Phone numbers are often sent as JSON numbers.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub mobile: Option<String>,
    pub photo: Option<String>,
}

impl SignupRequest {
    fn into_customer(self) -> NewCustomer {
        NewCustomer { name: self.name, city: self.city, email: self.email, password: self.password, mobile: self.mobile }
    }

    fn into_admin(self) -> NewAdmin {
        NewAdmin {
            admin_name: self.admin_name,
            shop_name: self.shop_name,
            city: self.city,
            email: self.email,
            password: self.password,
            mobile: self.mobile,
            photo: self.photo,
        }
    }
}

/// `AuthApi` handles signup and plaintext credential checks for customers and shop admins.
///
/// No session or token is issued. Clients keep the returned user id and role themselves.
pub struct AuthApi<B> {
    customers: CustomerRepository<B>,
    admins: AdminRepository<B>,
}

impl<B> Debug for AuthApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthApi")
    }
}

impl<B: Clone> AuthApi<B> {
    pub fn new(db: B) -> Self {
        Self { customers: CustomerRepository::new(db.clone()), admins: AdminRepository::new(db) }
    }
}

fn parse_user_type(user_type: Option<&str>) -> Result<UserType, MarketplaceError> {
    let user_type = user_type.unwrap_or_default();
    user_type.parse().map_err(|_| MarketplaceError::InvalidRole(user_type.to_string()))
}

impl<B> AuthApi<B>
where B: CustomerManagement + AdminManagement
{
    /// Looks for an account of the given type whose email and password both match exactly.
    ///
    /// If several accounts share the credentials, the oldest one wins. A missing email or password never matches.
    pub async fn login(
        &self,
        user_type: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<LoginResult, MarketplaceError> {
        let role = parse_user_type(user_type)?;
        let user_id = match (email, password) {
            (Some(email), Some(password)) => self.find_account(role, email, password).await?,
            _ => {
                debug!("🔄️ Login attempt for a {role} without both email and password");
                None
            },
        };
        let result = match user_id {
            Some(user_id) => {
                info!("🔄️ {role} #{user_id} logged in");
                LoginResult::Authenticated { user_id, role }
            },
            None => LoginResult::Rejected { message: format!("Invalid {role} credentials") },
        };
        Ok(result)
    }

    async fn find_account(
        &self,
        role: UserType,
        email: &str,
        password: &str,
    ) -> Result<Option<RecordId>, MarketplaceError> {
        let id = match role {
            UserType::Customer => {
                let query = CustomerQueryFilter::default().with_credentials(email, password).with_limit(1);
                self.customers.find_many(query).await?.first().map(|c| c.id)
            },
            UserType::Admin => {
                let query = AdminQueryFilter::default().with_credentials(email, password).with_limit(1);
                self.admins.find_many(query).await?.first().map(|a| a.id)
            },
        };
        Ok(id)
    }

    /// Creates a new account of the given type from whatever fields were supplied. No fields are required and
    /// duplicate emails are accepted.
    ///
    /// Returns the id of the new account.
    pub async fn signup(&self, user_type: Option<&str>, fields: SignupRequest) -> Result<RecordId, MarketplaceError> {
        let role = parse_user_type(user_type)?;
        let id = match role {
            UserType::Customer => self.customers.create(fields.into_customer()).await?.id,
            UserType::Admin => self.admins.create(fields.into_admin()).await?.id,
        };
        info!("🔄️ New {role} account #{id} registered");
        Ok(id)
    }
}
