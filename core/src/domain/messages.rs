//! Fixed caller-facing messages.
//!
//! Error messages never carry ids or input values; only the success
//! confirmations built by the helper functions below interpolate an id.

pub const MANAGER_STATUS_SUCCESS: &str = "Manager registered successfully";
pub const MANAGER_ALREADY_EXISTS: &str = "Manager already exists";
pub const MANAGER_NOT_FOUND: &str = "Manager not found";

pub const RESIDENT_STATUS_SUCCESS: &str = "Resident registered successfully";
pub const RESIDENT_NOT_FOUND: &str = "Resident not found";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const INVALID_PHONE: &str = "Invalid phone number";

pub const FACILITY_STATUS_SUCCESS: &str = "Facility registered successfully";
pub const FACILITY_NOT_FOUND: &str = "Facility not found";
pub const INVALID_FACILITY_NAME: &str = "Facility name must not be empty";
pub const FACILITY_ALREADY_AVAILABLE: &str = "Facility is already available";
pub const FACILITY_ALREADY_OCCUPIED: &str = "Facility is already occupied";

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const USERNAME_TAKEN: &str = "Username is already taken";
pub const BAD_CREDENTIALS: &str = "Incorrect username or password";

pub fn manager_updated(id: i32) -> String {
    format!("manager with id:{} is updated successfully.", id)
}

pub fn resident_updated(id: i32) -> String {
    format!("resident with id:{} is updated successfully.", id)
}

pub fn resident_deleted(id: i32) -> String {
    format!("resident with id:{} is deleted successfully.", id)
}

pub fn facility_updated(id: i32) -> String {
    format!("Facility with id:{} is updated successfully.", id)
}

pub fn facility_deleted(id: i32) -> String {
    format!("Facility with id:{} is deleted.", id)
}

pub fn facility_available(id: i32) -> String {
    format!("Facility with id:{} is available now.", id)
}

pub fn facility_occupied(id: i32) -> String {
    format!("Facility with id:{} is occupied now.", id)
}
