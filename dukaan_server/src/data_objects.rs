use std::fmt::Display;

use dukaan_engine::{
    db_types::{Admin, Customer, RecordId, UserType},
    LoginResult,
    SignupRequest,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: Display>(message: S) -> Self {
        Self { message: message.to_string() }
    }
}

//----------------------------------------------   Auth  ----------------------------------------------------
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_type: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Both outcomes of a login attempt are sent with a 200 status. Clients check `success`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LoginResponse {
    Authenticated {
        success: bool,
        #[serde(rename = "userId")]
        user_id: RecordId,
        role: UserType,
    },
    Rejected(JsonResponse),
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        match result {
            LoginResult::Authenticated { user_id, role } => Self::Authenticated { success: true, user_id, role },
            LoginResult::Rejected { message } => Self::Rejected(JsonResponse::failure(message)),
        }
    }
}

/// The signup body: a `userType` plus whichever account fields apply to that type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub user_type: Option<String>,
    #[serde(flatten)]
    pub fields: SignupRequest,
}

//----------------------------------------------   Profiles  ----------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub photo: String,
}

impl From<Admin> for AdminProfile {
    fn from(admin: Admin) -> Self {
        Self {
            name: admin.admin_name,
            shop_name: admin.shop_name,
            email: admin.email,
            city: admin.city,
            mobile: admin.mobile,
            photo: admin.photo,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

impl From<Customer> for CustomerProfile {
    fn from(customer: Customer) -> Self {
        Self { name: customer.name, city: customer.city, email: customer.email, mobile: customer.mobile }
    }
}

//----------------------------------------------   Orders & search  ----------------------------------------------------
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopSearchParams {
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSearchParams {
    pub product: Option<String>,
    pub city: Option<String>,
}
