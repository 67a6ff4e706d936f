//! Key naming

pub(super) fn verification_code(phone: &str) -> String {
    format!("verification:{}", phone)
}

pub(super) fn user_profile(phone: &str) -> String {
    format!("user:profile:{}", phone)
}

pub(super) fn user_session(phone: &str) -> String {
    format!("user:session:{}", phone)
}

pub(super) fn receipt(id: &str) -> String {
    format!("receipt:{}", id)
}

pub(super) fn user_receipts(user_id: &str) -> String {
    format!("user:receipts:{}", user_id)
}
