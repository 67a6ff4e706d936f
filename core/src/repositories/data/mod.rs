//! Typed repository over the key-value store
//!
//! This is the only component that knows the key layout:
//!
//! | Record            | Key                       | Expiry          |
//! |-------------------|---------------------------|-----------------|
//! | Verification code | `verification:{phone}`    | code TTL        |
//! | User profile      | `user:profile:{phone}`    | none            |
//! | Session           | `user:session:{phone}`    | session TTL     |
//! | Receipt           | `receipt:{id}`            | none            |
//! | User receipt set  | `user:receipts:{user_id}` | none            |

mod config;
mod keys;
mod repository;


pub use config::DataRepositoryConfig;
pub use repository::DataRepository;
