pub mod auth;
pub mod diagnosis;
pub mod doctor_forms;
pub mod doctors;
pub mod form_config;
pub mod health;
pub mod kyc;

use serde::Serialize;

/// `{"success": true, "data": ...}`
#[derive(Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
